//! Error types for the ROI Estimation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation pipeline itself is total and never returns an error:
//! incomplete input is expressed as an undefined outcome, not a failure.
//! Errors only arise from loading or validating configuration.

use thiserror::Error;

/// The main error type for the ROI Estimation Engine.
///
/// # Example
///
/// ```
/// use roi_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// A policy constant was outside its valid range.
    #[error("Invalid policy constant '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
