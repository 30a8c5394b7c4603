//! Error types for batting statistics
//!
//! Provides a unified error type for all batting-stats crates.

use thiserror::Error;

/// Core error type for batting statistic operations
#[derive(Error, Debug)]
pub enum Error {
    /// Argument outside the domain of the computation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Summing counts exceeded the count type
    #[error("Overflow: {0}")]
    Overflow(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create the error for a ratio requested over fewer than one at-bat
    pub fn no_at_bats() -> Self {
        Self::InvalidArgument("at least one at-bat required".to_string())
    }

    /// Create an error for an overflowing count sum
    pub fn count_overflow(context: &str) -> Self {
        Self::Overflow(format!("{context} exceeds the count range"))
    }

    /// Check whether this is an `InvalidArgument` error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidArgument("denominator must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: denominator must be positive");

        let err = Error::InvalidInput("missing field `name`".to_string());
        assert_eq!(err.to_string(), "Invalid input: missing field `name`");

        let err = Error::Overflow("hits".to_string());
        assert_eq!(err.to_string(), "Overflow: hits");

        let err = Error::Computation("not representable".to_string());
        assert_eq!(err.to_string(), "Computation error: not representable");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::no_at_bats();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Invalid argument: at least one at-bat required");

        let err = Error::count_overflow("club at-bats");
        assert!(!err.is_invalid_argument());
        assert_eq!(err.to_string(), "Overflow: club at-bats exceeds the count range");
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("scorebook unavailable");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("scorebook unavailable"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_chaining() {
        fn inner() -> Result<f64> {
            Err(Error::no_at_bats())
        }

        fn outer() -> Result<f64> {
            let avg = inner()?;
            Ok(avg * 1000.0)
        }

        let err = outer().unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
