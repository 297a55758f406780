//! Error types for the Workforce Cost Optimization Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during cost calculation and
//! scenario generation.

use thiserror::Error;

/// The main error type for the Workforce Cost Optimization Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use workforce_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// Job role id was not found in the catalog.
    #[error("Job role not found: {id}")]
    RoleNotFound {
        /// The job role id that was not found.
        id: String,
    },

    /// Location id was not found in the catalog.
    #[error("Location not found: {id}")]
    LocationNotFound {
        /// The location id that was not found.
        id: String,
    },

    /// No base salary entry exists for the given job role.
    #[error("No base salary entry for job role: {role}")]
    SalaryNotFound {
        /// The job role id with no salary entry.
        role: String,
    },

    /// Headcount was zero or negative.
    #[error("Invalid headcount {value}: must be a positive integer")]
    InvalidHeadcount {
        /// The rejected headcount value.
        value: i64,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
