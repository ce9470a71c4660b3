//! Error types for the PTO Optimization Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during plan optimization.

use thiserror::Error;

/// The main error type for the PTO Optimization Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use pto_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     field: "pto_budget".to_string(),
///     message: "must be between 1 and 365".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid field 'pto_budget': must be between 1 and 365");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A request parameter failed upfront validation.
    ///
    /// Raised before any computation takes place.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The parameter that was invalid.
        field: String,
        /// A description of what made the parameter invalid.
        message: String,
    },

    /// The PTO budget exceeds the workdays remaining in the planning window.
    ///
    /// No combination of candidates can consume the requested budget, so the
    /// run is rejected instead of producing a partial plan.
    #[error("PTO budget of {requested} days exceeds the {available} workdays remaining in the year")]
    InfeasibleBudget {
        /// The PTO budget that was requested.
        requested: u32,
        /// The number of workdays still available in the planning window.
        available: u32,
    },

    /// Every selector pass finished without hitting the budget exactly.
    ///
    /// Sufficient workdays exist, so this indicates a candidate coverage gap
    /// rather than a true infeasibility. The caller receives this error
    /// instead of a plan that silently uses the wrong number of PTO days.
    #[error("Could not allocate exactly {target} PTO days (best allocation reached {allocated})")]
    ExactBudgetUnreachable {
        /// The exact PTO day count that was requested.
        target: u32,
        /// The PTO day count the selector managed to allocate.
        allocated: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
