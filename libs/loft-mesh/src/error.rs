//! # Loft Errors
//!
//! Error types for parameters that would stop an operation from terminating.
//!
//! Geometric degeneracy is never an error here: short inputs pass through,
//! empty offsets become [`Diagnostic`](crate::diagnostics::Diagnostic)s and
//! sliver triangles are dropped.

use loft_config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building a loft mesh.
#[derive(Debug, Error, PartialEq)]
pub enum LoftError {
    /// A caller-supplied numeric parameter is out of range
    #[error("Invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Pipeline configuration was rejected
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for loft operations.
pub type LoftResult<T> = Result<T, LoftError>;

impl LoftError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}

/// Returns `value` if it is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> LoftResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LoftError::invalid_parameter(name, value))
    }
}

/// Returns `value` if it is finite and not negative.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> LoftResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LoftError::invalid_parameter(name, value))
    }
}
