//! Fitness-proportional parent selection.
//!
//! The [`MatingPool`] is a weighted multiset of chromosome indices. Each
//! chromosome enters the pool `floor(fitness / best_fitness * 100)` times,
//! so the best of the generation always contributes exactly 100 entries
//! and drawing uniformly from the pool is a roulette wheel over fitness.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel reproduction)

use super::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use rand::Rng;

/// Entries contributed by the best chromosome of a generation.
pub const POOL_SCALE: f64 = 100.0;

/// Weighted multiset of parent indices into one generation.
///
/// The pool stores indices, not chromosomes, and is built from a snapshot
/// of the generation's fitness values. It stays valid for drawing parents
/// while the next generation is written elsewhere.
#[derive(Debug, Clone)]
pub struct MatingPool {
    entries: Vec<usize>,
}

impl MatingPool {
    /// Builds the pool for `chromosomes`.
    ///
    /// The reference fitness is the first chromosome with the highest
    /// fitness, chosen the same way as
    /// [`Population::eval`](super::Population::eval) picks its local best.
    /// Chromosomes whose share floors to zero or below (including any with
    /// non-positive or NaN fitness) are left out.
    ///
    /// # Errors
    ///
    /// - [`GeneticError::EmptyPopulation`] if `chromosomes` is empty.
    /// - [`GeneticError::NonFiniteBestFitness`] if the best fitness is
    ///   infinite or NaN.
    /// - [`GeneticError::NonPositiveBestFitness`] if the best fitness is
    ///   zero or negative.
    ///
    /// # Complexity
    /// O(n · 100) time and space for n chromosomes
    pub fn build(chromosomes: &[Chromosome]) -> Result<Self> {
        let best_fitness = best_fitness(chromosomes).ok_or(GeneticError::EmptyPopulation)?;
        if !best_fitness.is_finite() {
            return Err(GeneticError::NonFiniteBestFitness(best_fitness));
        }
        if best_fitness <= 0.0 {
            return Err(GeneticError::NonPositiveBestFitness(best_fitness));
        }

        // Every share is at most POOL_SCALE since no fitness exceeds the best.
        let mut entries = Vec::new();
        for (idx, c) in chromosomes.iter().enumerate() {
            let copies = (c.fitness() / best_fitness * POOL_SCALE).floor();
            if copies >= 1.0 {
                entries.extend(std::iter::repeat(idx).take(copies as usize));
            }
        }

        Ok(Self { entries })
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a successfully built pool.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries held by chromosome `idx`.
    pub fn count(&self, idx: usize) -> usize {
        self.entries.iter().filter(|&&e| e == idx).count()
    }

    /// Draws one chromosome index uniformly from the pool.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> usize {
        self.entries[rng.random_range(0..self.entries.len())]
    }
}

/// Fitness of the first chromosome with the highest fitness.
///
/// Ties keep the lower index; a NaN in the lead is never displaced.
fn best_fitness(chromosomes: &[Chromosome]) -> Option<f64> {
    let (first, rest) = chromosomes.split_first()?;
    let mut best = first.fitness();
    for c in rest {
        if c.fitness() > best {
            best = c.fitness();
        }
    }
    Some(best)
}
