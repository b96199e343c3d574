//! Minimal integer-chromosome genetic algorithm engine.
//!
//! Evolves a population of fixed-length integer chromosomes toward
//! maximizing an externally supplied fitness function:
//!
//! - **Selection**: fitness-proportional (roulette) via a mating pool
//!   scaled so the generation's best contributes 100 entries.
//! - **Crossover**: single-point, cut drawn from `[0, len]`.
//! - **Mutation**: independent per-gene resampling at a fixed rate.
//!
//! The caller drives the loop: construct a
//! [`Population`](genetics::Population), then alternate
//! [`eval`](genetics::Population::eval) and
//! [`update`](genetics::Population::update) for as long as it likes.
//!
//! # Randomness
//!
//! Every stochastic operation takes an explicit `&mut R where R: rand::Rng`.
//! Use [`random::create_rng`] for reproducible runs.
//!
//! # Logging
//!
//! Evaluation and breeding emit `debug`/`trace` records through the
//! [`log`] facade. No logger is installed by this crate.

pub mod error;
pub mod genetics;
pub mod random;

pub use error::{GeneticError, Result};
