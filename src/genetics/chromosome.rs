//! Fixed-length integer chromosomes.
//!
//! A [`Chromosome`] is an ordered sequence of [`Gene`]s plus the fitness
//! assigned by the most recent evaluation. Gene position (the locus) is
//! significant: single-point crossover splices parents by position.
//!
//! # Operators
//!
//! - [`mutate`](Chromosome::mutate): independent per-gene resampling
//! - [`crossover`](Chromosome::crossover): single-point recombination with a
//!   cut point drawn from `[0, len]` inclusive
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::gene::{Gene, ValueRange};
use crate::error::{GeneticError, Result};
use rand::Rng;
use std::fmt;

/// A candidate solution: an ordered gene sequence with a fitness score.
///
/// `Clone` is a deep copy: the clone owns independent genes, so it is
/// unaffected by later mutation of the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<Gene>,
    fitness: f64,
}

impl Chromosome {
    /// Creates a chromosome of `length` random genes drawn from `value_range`.
    ///
    /// Fails with [`GeneticError::ZeroLength`] if `length == 0`.
    pub fn random<R: Rng>(length: usize, value_range: ValueRange, rng: &mut R) -> Result<Self> {
        if length == 0 {
            return Err(GeneticError::ZeroLength);
        }
        let genes = (0..length).map(|_| Gene::new(value_range, rng)).collect();
        Ok(Self {
            genes,
            fitness: 0.0,
        })
    }

    /// Creates a chromosome that takes ownership of `genes`.
    ///
    /// Fails with [`GeneticError::ZeroLength`] if `genes` is empty.
    pub fn from_genes(genes: Vec<Gene>) -> Result<Self> {
        if genes.is_empty() {
            return Err(GeneticError::ZeroLength);
        }
        Ok(Self {
            genes,
            fitness: 0.0,
        })
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if there are no genes.
    ///
    /// The public constructors reject empty gene sequences, so this is
    /// `false` for any chromosome built through them.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Genes in locus order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Fitness from the last evaluation, `0.0` if never evaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Snapshot of the gene values in locus order.
    pub fn to_list(&self) -> Vec<i64> {
        self.genes.iter().map(Gene::value).collect()
    }

    /// Scores this chromosome with `f` and stores the result as its fitness.
    pub fn apply_fitness_fn<F>(&mut self, f: F)
    where
        F: FnOnce(&Chromosome) -> f64,
    {
        self.fitness = f(self);
    }

    /// Resamples each gene independently with probability `rate`.
    ///
    /// A fresh `u ∈ [0, 1)` is drawn per gene; the gene is randomized when
    /// `u < rate`. `rate = 0.0` never changes anything, `rate = 1.0`
    /// resamples every gene.
    pub fn mutate<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        for gene in &mut self.genes {
            if rng.random_range(0.0..1.0) < rate {
                gene.randomize(rng);
            }
        }
    }

    /// Single-point crossover.
    ///
    /// Draws `mid_point` uniformly from `[0, len]` and builds a child whose
    /// genes at loci `< mid_point` come from `self` and the rest from
    /// `other`. The endpoints give a copy of `other` (cut at 0) or of
    /// `self` (cut at `len`). The child starts unevaluated; neither parent
    /// is modified.
    ///
    /// # Panics
    /// Panics if the parents have different lengths.
    pub fn crossover<R: Rng>(&self, other: &Chromosome, rng: &mut R) -> Chromosome {
        assert_eq!(
            self.len(),
            other.len(),
            "crossover parents must have equal length"
        );

        let mid_point = rng.random_range(0..=self.len());
        let mut genes = Vec::with_capacity(self.len());
        genes.extend_from_slice(&self.genes[..mid_point]);
        genes.extend_from_slice(&other.genes[mid_point..]);

        Chromosome {
            genes,
            fitness: 0.0,
        }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{gene}")?;
        }
        write!(f, "]")
    }
}
