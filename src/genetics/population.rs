//! Generational population management.
//!
//! A [`Population`] alternates between two calls driven by the caller:
//!
//! 1. [`eval`](Population::eval): score every chromosome, find the local
//!    best, update the global best and the best history.
//! 2. [`update`](Population::update): roulette selection over a
//!    [`MatingPool`], single-point crossover, per-gene mutation. The whole
//!    generation is replaced.
//!
//! There is no termination policy; the caller decides how many rounds to
//! run and inspects [`global_best`](Population::global_best) in between.

use super::chromosome::Chromosome;
use super::config::PopulationConfig;
use super::fitness::FitnessFn;
use super::selection::MatingPool;
use crate::error::{GeneticError, Result};
use log::{debug, trace};
use rand::Rng;

/// An evolving set of equal-length chromosomes with best-so-far bookkeeping.
///
/// # Usage
///
/// ```
/// use u_genalg::genetics::{Population, PopulationConfig, ValueRange};
///
/// let config = PopulationConfig::default()
///     .with_size(20)
///     .with_length(8)
///     .with_value_range(ValueRange::new(0, 2).unwrap())
///     .with_seed(42);
/// let mut rng = config.rng();
/// let mut population = Population::new(&config, &mut rng).unwrap();
///
/// let ones = |values: &[i64]| values.iter().sum::<i64>() as f64;
/// for _ in 0..10 {
///     population.eval(&ones);
///     population.update(&mut rng).unwrap();
/// }
/// population.eval(&ones);
/// assert!(population.global_best().fitness() >= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    mutation_rate: f64,
    chromosomes: Vec<Chromosome>,
    global_best: Chromosome,
    /// Index into `chromosomes`; `None` until evaluated and after `update`.
    local_best: Option<usize>,
    best_chromosomes: Vec<Chromosome>,
    keep_best_chromosomes: bool,
    generation: usize,
}

impl Population {
    /// Creates a population of random chromosomes described by `config`.
    ///
    /// Fails with [`GeneticError::InvalidConfig`] if
    /// [`PopulationConfig::validate`] rejects the configuration.
    pub fn new<R: Rng>(config: &PopulationConfig, rng: &mut R) -> Result<Self> {
        config.validate().map_err(GeneticError::InvalidConfig)?;

        let chromosomes = (0..config.size)
            .map(|_| Chromosome::random(config.length, config.value_range, rng))
            .collect::<Result<Vec<_>>>()?;

        Self::from_chromosomes(
            chromosomes,
            config.mutation_rate,
            config.keep_best_chromosomes,
        )
    }

    /// Creates a population from existing chromosomes.
    ///
    /// The population size is `chromosomes.len()`. The initial global best
    /// is a copy of the first chromosome, fitness included.
    ///
    /// Fails if `chromosomes` is empty, if their lengths differ, or if
    /// `mutation_rate` is outside `[0, 1]`.
    pub fn from_chromosomes(
        chromosomes: Vec<Chromosome>,
        mutation_rate: f64,
        keep_best_chromosomes: bool,
    ) -> Result<Self> {
        let first = chromosomes.first().ok_or(GeneticError::EmptyPopulation)?;
        let expected = first.len();
        if let Some(c) = chromosomes.iter().find(|c| c.len() != expected) {
            return Err(GeneticError::LengthMismatch {
                expected,
                actual: c.len(),
            });
        }
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(GeneticError::InvalidConfig(
                "mutation_rate must be in [0, 1]".into(),
            ));
        }

        Ok(Self {
            mutation_rate,
            global_best: first.clone(),
            chromosomes,
            local_best: None,
            best_chromosomes: Vec::new(),
            keep_best_chromosomes,
            generation: 0,
        })
    }

    /// Number of chromosomes per generation.
    pub fn size(&self) -> usize {
        self.chromosomes.len()
    }

    /// Per-gene mutation probability applied to every child.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// The current generation.
    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    /// Best chromosome seen over the population's lifetime.
    ///
    /// An owned copy, unaffected by later updates. Before the first
    /// [`eval`](Self::eval) this is a copy of the initial first chromosome.
    pub fn global_best(&self) -> &Chromosome {
        &self.global_best
    }

    /// Best chromosome of the most recent evaluation.
    ///
    /// Refers to a member of the current generation, so it is `None` before
    /// the first [`eval`](Self::eval) and again after every
    /// [`update`](Self::update).
    pub fn local_best(&self) -> Option<&Chromosome> {
        self.local_best.map(|idx| &self.chromosomes[idx])
    }

    /// Copies of each evaluation's local best, in call order.
    ///
    /// Stays empty when `keep_best_chromosomes` is disabled.
    pub fn best_chromosomes(&self) -> &[Chromosome] {
        &self.best_chromosomes
    }

    /// Whether evaluations append to [`best_chromosomes`](Self::best_chromosomes).
    pub fn keep_best_chromosomes(&self) -> bool {
        self.keep_best_chromosomes
    }

    /// Number of completed [`update`](Self::update) calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Scores every chromosome with `fitness_fn`.
    ///
    /// The local best is the first chromosome with the highest fitness
    /// (ties keep the lower index). If it beats the global best, the global
    /// best becomes a copy of it. With `keep_best_chromosomes`, a copy is
    /// also appended to the history.
    pub fn eval<F>(&mut self, fitness_fn: &F)
    where
        F: FitnessFn + ?Sized,
    {
        let mut best_idx = 0;
        let mut best_fitness = f64::NEG_INFINITY;
        for (idx, c) in self.chromosomes.iter_mut().enumerate() {
            c.apply_fitness_fn(|c| fitness_fn.score(&c.to_list()));
            if idx == 0 || c.fitness() > best_fitness {
                best_idx = idx;
                best_fitness = c.fitness();
            }
        }
        self.local_best = Some(best_idx);

        let local = &self.chromosomes[best_idx];
        if local.fitness() > self.global_best.fitness() {
            trace!(
                "global best improved: {} -> {}",
                self.global_best.fitness(),
                local.fitness()
            );
            self.global_best = local.clone();
        }
        if self.keep_best_chromosomes {
            self.best_chromosomes.push(local.clone());
        }

        debug!(
            "generation {} evaluated: local best {}, global best {}",
            self.generation,
            local.fitness(),
            self.global_best.fitness()
        );
    }

    /// Breeds the next generation and replaces the current one.
    ///
    /// Parents are drawn uniformly with replacement from a [`MatingPool`]
    /// built from the evaluated generation. Each child is the crossover of
    /// two parents followed by [`mutate`](Chromosome::mutate) with the
    /// population's mutation rate. Children start with fitness `0.0`.
    ///
    /// # Errors
    ///
    /// - [`GeneticError::NotEvaluated`] if [`eval`](Self::eval) has not run
    ///   since construction or since the previous update.
    /// - [`GeneticError::NonFiniteBestFitness`] if the local best fitness
    ///   is infinite or NaN.
    /// - [`GeneticError::NonPositiveBestFitness`] if the local best fitness
    ///   is zero or negative.
    ///
    /// On error the population is unchanged.
    pub fn update<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.local_best.is_none() {
            return Err(GeneticError::NotEvaluated);
        }
        let pool = MatingPool::build(&self.chromosomes)?;
        trace!(
            "mating pool: {} entries from {} chromosomes",
            pool.len(),
            self.size()
        );

        let next: Vec<Chromosome> = (0..self.size())
            .map(|_| {
                let p1 = &self.chromosomes[pool.draw(rng)];
                let p2 = &self.chromosomes[pool.draw(rng)];
                let mut child = p1.crossover(p2, rng);
                child.mutate(self.mutation_rate, rng);
                child
            })
            .collect();

        self.chromosomes = next;
        self.local_best = None;
        self.generation += 1;
        debug!("generation {} bred", self.generation);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
