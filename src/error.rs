//! Error types for the GA engine.
//!
//! Every variant is a caller-side contract breach: construction
//! preconditions, or an [`update`](crate::genetics::Population::update)
//! attempted from a state that cannot produce a mating pool.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    #[error("empty value range: min ({min}) must be less than max ({max})")]
    EmptyRange { min: i64, max: i64 },

    #[error("value {value} outside range [{min}, {max})")]
    ValueOutOfRange { value: i64, min: i64, max: i64 },

    #[error("chromosome length must be positive")]
    ZeroLength,

    #[error("population must contain at least one chromosome")]
    EmptyPopulation,

    #[error("chromosome length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid population config: {0}")]
    InvalidConfig(String),

    #[error("population has not been evaluated since the last update")]
    NotEvaluated,

    #[error("best fitness {0} is not positive; cannot build a mating pool")]
    NonPositiveBestFitness(f64),

    #[error("best fitness {0} is not finite; cannot build a mating pool")]
    NonFiniteBestFitness(f64),
}

pub type Result<T> = std::result::Result<T, GeneticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_message() {
        let err = GeneticError::EmptyRange { min: 5, max: 5 };
        assert!(err.to_string().contains("min (5)"));
    }

    #[test]
    fn test_value_out_of_range_message() {
        let err = GeneticError::ValueOutOfRange {
            value: 10,
            min: 0,
            max: 10,
        };
        assert_eq!(err.to_string(), "value 10 outside range [0, 10)");
    }

    #[test]
    fn test_non_positive_fitness_message() {
        let err = GeneticError::NonPositiveBestFitness(0.0);
        assert!(err.to_string().contains("not positive"));
    }

    #[test]
    fn test_non_finite_fitness_message() {
        let err = GeneticError::NonFiniteBestFitness(f64::INFINITY);
        assert_eq!(
            err.to_string(),
            "best fitness inf is not finite; cannot build a mating pool"
        );
    }
}
