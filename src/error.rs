//! Error types for the Total-Rewards Compensation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during package computation.

use thiserror::Error;

/// The main error type for the Total-Rewards Compensation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Input defects (`InvalidSlice`) and deployment defects (`InvalidPolicy`,
/// the config loading variants) are distinct variants so callers can route
/// them to field-level form errors and operator logs respectively.
///
/// # Example
///
/// ```
/// use rewards_engine::error::EngineError;
///
/// let error = EngineError::InvalidSlice {
///     field: "pension_pct".to_string(),
///     message: "percentage must be between 0 and 100".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid slice field 'pension_pct': percentage must be between 0 and 100"
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

    /// A compensation slice field violates its constraint.
    ///
    /// This is a user-input defect. The engine never substitutes a default
    /// for an invalid value, so the caller must surface this before any
    /// figure reaches a hiring manager.
    #[error("Invalid slice field '{field}': {message}")]
    InvalidSlice {
        /// The field that was invalid. Custom line items are addressed by
        /// index, e.g. `custom_line_items[2].amount`.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

    /// A policy configuration value is unusable.
    ///
    /// This indicates a deployment defect rather than bad user input,
    /// e.g. a non-positive statutory ceiling while a capped education-fund
    /// base is selected.
    #[error("Invalid policy parameter '{parameter}': {message}")]
    InvalidPolicy {
        /// The policy parameter that was invalid.
        parameter: String,
        /// A description of what made the parameter invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
