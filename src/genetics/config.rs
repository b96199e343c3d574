//! Population configuration.
//!
//! [`PopulationConfig`] holds the parameters needed to build a random
//! [`Population`](super::Population).

use super::gene::ValueRange;
use crate::random::create_rng;
use rand::rngs::StdRng;

/// Configuration for a randomly initialized population.
///
/// # Defaults
///
/// ```
/// use u_genalg::genetics::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.size, 100);
/// assert_eq!(config.length, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genalg::genetics::{PopulationConfig, ValueRange};
///
/// let config = PopulationConfig::default()
///     .with_size(50)
///     .with_length(20)
///     .with_value_range(ValueRange::new(0, 2).unwrap())
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PopulationConfig {
    /// Number of chromosomes per generation.
    pub size: usize,

    /// Per-gene mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Genes per chromosome.
    pub length: usize,

    /// Range every gene is drawn from.
    pub value_range: ValueRange,

    /// Record a copy of each evaluation's best chromosome.
    pub keep_best_chromosomes: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            mutation_rate: 0.01,
            length: 10,
            value_range: ValueRange::new(0, 10).expect("0 < 10"),
            keep_best_chromosomes: true,
            seed: None,
        }
    }
}

impl PopulationConfig {
    /// Sets the population size.
    pub fn with_size(mut self, n: usize) -> Self {
        self.size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the chromosome length.
    pub fn with_length(mut self, n: usize) -> Self {
        self.length = n;
        self
    }

    /// Sets the gene value range.
    pub fn with_value_range(mut self, range: ValueRange) -> Self {
        self.value_range = range;
        self
    }

    /// Enables or disables the per-evaluation best history.
    pub fn with_keep_best_chromosomes(mut self, keep: bool) -> Self {
        self.keep_best_chromosomes = keep;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates a generator from [`seed`](Self::seed), or from a random seed
    /// when unset.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("size must be at least 1".into());
        }
        if self.length == 0 {
            return Err("length must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        Ok(())
    }
}
