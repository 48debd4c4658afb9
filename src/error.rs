//! Error types for lattice-raster operations.
//!
//! The rasterizer and gcd are total; only parsing, configuration and
//! checked rasterization can fail.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lattice-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// A point string was not of the form `x,y`.
    #[error("invalid point '{0}': expected x,y with 32-bit integer coordinates")]
    InvalidPoint(String),

    /// Points could not be encoded in the requested output format.
    #[error("failed to encode points: {0}")]
    Encode(String),

    /// Checked rasterization refused a path longer than the limit.
    #[error("path of {points} points exceeds the limit of {limit}")]
    PathTooLong {
        /// Points the path would contain.
        points: u64,
        /// Configured maximum.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPoint("1;2".to_string());
        assert!(err.to_string().contains("1;2"));
    }

    #[test]
    fn test_path_too_long_display() {
        let err = Error::PathTooLong {
            points: 4_000_000,
            limit: 1_000,
        };
        assert!(err.to_string().contains("4000000"));
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_io_conversion() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
