//! Integer-chromosome genetic algorithm.
//!
//! Three cooperating types evolve fixed-length integer sequences toward a
//! caller-supplied fitness function (higher is better):
//!
//! - [`Gene`]: one integer in a half-open [`ValueRange`]
//! - [`Chromosome`]: an ordered gene sequence with a fitness score,
//!   supporting per-gene mutation and single-point crossover
//! - [`Population`]: a generation of chromosomes plus best-so-far
//!   bookkeeping, advanced by alternating [`Population::eval`] and
//!   [`Population::update`]
//!
//! # Supporting Types
//!
//! - [`FitnessFn`]: the scoring oracle, implemented for closures
//! - [`MatingPool`]: fitness-proportional (roulette) parent selection
//! - [`PopulationConfig`]: builder-style parameters for random populations
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod fitness;
mod gene;
mod population;
mod selection;

pub use chromosome::Chromosome;
pub use config::PopulationConfig;
pub use fitness::FitnessFn;
pub use gene::{Gene, ValueRange};
pub use population::Population;
pub use selection::{MatingPool, POOL_SCALE};
