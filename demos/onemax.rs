//! Evolves 32-bit strings toward all ones.
//!
//! Run with `RUST_LOG=debug cargo run --example onemax` to see per-generation
//! records from the engine.

use log::info;
use u_genalg::genetics::{Population, PopulationConfig, ValueRange};

const GENERATIONS: usize = 200;

fn onemax(values: &[i64]) -> f64 {
    values.iter().sum::<i64>() as f64
}

fn main() -> u_genalg::Result<()> {
    env_logger::init();

    let config = PopulationConfig::default()
        .with_size(100)
        .with_length(32)
        .with_value_range(ValueRange::new(0, 2)?)
        .with_mutation_rate(0.01)
        .with_seed(42);
    let mut rng = config.rng();
    let mut population = Population::new(&config, &mut rng)?;

    for _ in 0..GENERATIONS {
        population.eval(&onemax);
        if population.global_best().fitness() >= config.length as f64 {
            break;
        }
        population.update(&mut rng)?;
    }

    info!("stopped after {} generations", population.generation());
    println!(
        "best: {} (fitness {})",
        population.global_best(),
        population.global_best().fitness()
    );
    Ok(())
}
