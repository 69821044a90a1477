//! Error types for interchart operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in interchart operations.
///
/// Interactive edge cases (no data area, no zoomable axis, zero-size drag)
/// are deliberately *not* errors: they degrade to no-ops so that exploratory
/// mouse movement never surfaces a failure. Only argument validation at
/// construction/configuration time fails fast.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid dimensions for a drawing area or draw-size bound.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: f64,
        /// Height value.
        height: f64,
    },

    /// An axis range where the lower bound is not below the upper bound.
    #[error("Invalid axis range: [{lower}, {upper}]")]
    InvalidRange {
        /// Lower bound.
        lower: f64,
        /// Upper bound.
        upper: f64,
    },

    /// A configuration argument outside its permitted domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0.0,
            height: 100.0,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_range_display() {
        let err = Error::InvalidRange {
            lower: 5.0,
            upper: 5.0,
        };
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::InvalidArgument("trigger distance must be positive".to_string());
        assert!(err.to_string().contains("trigger distance"));
    }
}
