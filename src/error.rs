//! Error types for the Headcount Dimensioning Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during staffing calculations.
//!
//! Non-positive volume or handle time is not an error: it means "no load"
//! and every calculation returns a zero requirement for it.

use thiserror::Error;

/// The main error type for the Headcount Dimensioning Engine.
///
/// # Example
///
/// ```
/// use staffing_engine::error::EngineError;
///
/// let error = EngineError::LengthMismatch {
///     volume_len: 96,
///     handle_time_len: 95,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Curve length mismatch: volume curve has 96 intervals, handle time curve has 95"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Shift type code was not found in the shift catalog.
    #[error("Shift type not found: {code}")]
    ShiftTypeNotFound {
        /// The shift type code that was not found.
        code: String,
    },

    /// A business parameter is outside its meaningful range
    /// (e.g. an unproductivity percentage of 100 or more).
    #[error("Invalid configuration for '{parameter}': {message}")]
    InvalidConfiguration {
        /// The parameter that was rejected.
        parameter: String,
        /// A description of why the value was rejected.
        message: String,
    },

    /// Volume and handle-time curves passed to a curve-level calculation
    /// have different lengths.
    #[error(
        "Curve length mismatch: volume curve has {volume_len} intervals, handle time curve has {handle_time_len}"
    )]
    LengthMismatch {
        /// Number of intervals in the volume curve.
        volume_len: usize,
        /// Number of intervals in the handle-time curve.
        handle_time_len: usize,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidConfiguration`].
    pub fn invalid_configuration(parameter: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
