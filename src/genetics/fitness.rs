//! The fitness oracle contract.
//!
//! The engine never owns a scoring function. Callers pass one to
//! [`Population::eval`](super::Population::eval) on every evaluation,
//! either as a closure or as a type implementing [`FitnessFn`].

/// Scores a decoded chromosome. Higher is better.
///
/// Implemented for every `Fn(&[i64]) -> f64`, so plain closures work:
///
/// ```
/// use u_genalg::genetics::FitnessFn;
///
/// let sum = |values: &[i64]| values.iter().sum::<i64>() as f64;
/// assert_eq!(sum.score(&[1, 2, 3]), 6.0);
/// ```
///
/// Repeated calls on the same values should rank consistently; the
/// roulette step in [`Population::update`](super::Population::update)
/// relies on fitness ratios between chromosomes.
pub trait FitnessFn {
    /// Returns the fitness of the gene values `values`.
    fn score(&self, values: &[i64]) -> f64;
}

impl<F> FitnessFn for F
where
    F: Fn(&[i64]) -> f64,
{
    fn score(&self, values: &[i64]) -> f64 {
        self(values)
    }
}
