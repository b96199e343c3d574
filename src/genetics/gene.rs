//! Bounded integer genes.
//!
//! A [`Gene`] is the smallest evolvable unit: a single integer constrained
//! to a half-open [`ValueRange`]. Both random sampling and explicit
//! construction use the same `[min, max)` bounds.

use crate::error::{GeneticError, Result};
use rand::Rng;
use std::fmt;

/// Half-open integer interval `[min, max)`.
///
/// Guaranteed non-empty: `min < max`.
///
/// # Examples
///
/// ```
/// use u_genalg::genetics::ValueRange;
///
/// let range = ValueRange::new(0, 10).unwrap();
/// assert!(range.contains(0));
/// assert!(!range.contains(10));
/// assert!(ValueRange::new(5, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Creates a range, rejecting `min >= max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min >= max {
            return Err(GeneticError::EmptyRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Exclusive upper bound.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Returns `true` if `value` lies in `[min, max)`.
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value < self.max
    }

    /// Draws a value uniformly from `[min, max)`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.min..self.max)
    }
}

impl TryFrom<(i64, i64)> for ValueRange {
    type Error = GeneticError;

    fn try_from((min, max): (i64, i64)) -> Result<Self> {
        Self::new(min, max)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

/// A single integer allele bounded by a [`ValueRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gene {
    value: i64,
    value_range: ValueRange,
}

impl Gene {
    /// Creates a gene with a value sampled uniformly from `value_range`.
    pub fn new<R: Rng>(value_range: ValueRange, rng: &mut R) -> Self {
        Self {
            value: value_range.sample(rng),
            value_range,
        }
    }

    /// Creates a gene with an explicit initial value.
    ///
    /// Fails with [`GeneticError::ValueOutOfRange`] unless
    /// `min <= value < max`.
    pub fn with_value(value_range: ValueRange, value: i64) -> Result<Self> {
        if !value_range.contains(value) {
            return Err(GeneticError::ValueOutOfRange {
                value,
                min: value_range.min(),
                max: value_range.max(),
            });
        }
        Ok(Self { value, value_range })
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Range this gene's value is drawn from.
    pub fn value_range(&self) -> ValueRange {
        self.value_range
    }

    /// Resamples the value uniformly from the gene's range.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.value = self.value_range.sample(rng);
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    // ---- ValueRange ----

    #[test]
    fn test_range_rejects_equal_bounds() {
        assert_eq!(
            ValueRange::new(5, 5),
            Err(GeneticError::EmptyRange { min: 5, max: 5 })
        );
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(ValueRange::new(10, 0).is_err());
    }

    #[test]
    fn test_range_try_from_tuple() {
        let range = ValueRange::try_from((-3, 4)).unwrap();
        assert_eq!(range.min(), -3);
        assert_eq!(range.max(), 4);
        assert!(ValueRange::try_from((1, 1)).is_err());
    }

    #[test]
    fn test_range_display() {
        let range = ValueRange::new(0, 10).unwrap();
        assert_eq!(range.to_string(), "[0, 10)");
    }

    #[test]
    fn test_range_sample_covers_all_values() {
        let range = ValueRange::new(0, 4).unwrap();
        let mut rng = create_rng(42);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[range.sample(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "expected every value, got {seen:?}");
    }

    // ---- Gene ----

    #[test]
    fn test_random_gene_in_range() {
        let range = ValueRange::new(-5, 5).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let gene = Gene::new(range, &mut rng);
            assert!(range.contains(gene.value()), "got {}", gene.value());
        }
    }

    #[test]
    fn test_randomize_stays_in_range() {
        let range = ValueRange::new(3, 7).unwrap();
        let mut rng = create_rng(123);
        let mut gene = Gene::new(range, &mut rng);
        for _ in 0..1000 {
            gene.randomize(&mut rng);
            assert!((3..7).contains(&gene.value()));
        }
    }

    #[test]
    fn test_single_value_range() {
        let range = ValueRange::new(9, 10).unwrap();
        let mut rng = create_rng(1);
        let mut gene = Gene::new(range, &mut rng);
        gene.randomize(&mut rng);
        assert_eq!(gene.value(), 9);
    }

    #[test]
    fn test_with_value_accepts_bounds() {
        let range = ValueRange::new(0, 10).unwrap();
        assert_eq!(Gene::with_value(range, 0).unwrap().value(), 0);
        assert_eq!(Gene::with_value(range, 9).unwrap().value(), 9);
    }

    #[test]
    fn test_with_value_rejects_max() {
        let range = ValueRange::new(0, 10).unwrap();
        assert_eq!(
            Gene::with_value(range, 10),
            Err(GeneticError::ValueOutOfRange {
                value: 10,
                min: 0,
                max: 10
            })
        );
    }

    #[test]
    fn test_with_value_rejects_below_min() {
        let range = ValueRange::new(0, 10).unwrap();
        assert!(Gene::with_value(range, -1).is_err());
    }

    #[test]
    fn test_display_prints_value() {
        let range = ValueRange::new(0, 100).unwrap();
        let gene = Gene::with_value(range, 42).unwrap();
        assert_eq!(gene.to_string(), "42");
    }
}
