//! Error types for aaline operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during rasterization.
///
/// Numeric degeneracy (zero-length segments, vertical runs) is not an
/// error; every finite input produces a defined output. Only non-finite
/// endpoint coordinates are rejected, before any sample is produced.
#[derive(Error, Debug)]
pub enum Error {
    /// An endpoint coordinate was NaN or infinite.
    #[error("non-finite coordinate {coordinate}: {value}")]
    NonFiniteCoordinate {
        /// Name of the offending coordinate (`x0`, `y0`, `x1` or `y1`).
        coordinate: &'static str,
        /// The offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NonFiniteCoordinate {
            coordinate: "x0",
            value: f64::INFINITY,
        };
        assert!(err.to_string().contains("non-finite coordinate x0"));
    }

    #[test]
    fn test_error_display_names_value() {
        let err = Error::NonFiniteCoordinate {
            coordinate: "y1",
            value: f64::NEG_INFINITY,
        };
        assert!(err.to_string().contains("y1"));
        assert!(err.to_string().contains("-inf"));
    }
}
