//! Error types for the payroll registry.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every rejected payroll operation and for configuration loading.

use thiserror::Error;

/// The main error type for the payroll registry.
///
/// None of these errors are fatal to a session: the shell reports them and
/// returns to the menu with the registry unchanged.
///
/// # Example
///
/// ```
/// use payroll_registry::error::PayrollError;
///
/// let error = PayrollError::DuplicateWorkType {
///     name: "Welding".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Duplicate work type: work type 'Welding' already exists"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// A numeric or structural precondition was violated (empty name,
    /// out-of-range base pay or bonus percent, missing strategy).
    #[error("Invalid rate: {message}")]
    InvalidRate {
        /// Which precondition was violated.
        message: String,
    },

    /// A work type with the same name is already registered.
    #[error("Duplicate work type: work type '{name}' already exists")]
    DuplicateWorkType {
        /// The conflicting name.
        name: String,
    },

    /// An aggregate was requested from a registry with no entries.
    #[error("Work list is empty: {message}")]
    EmptyWorkList {
        /// The operation that could not be performed.
        message: String,
    },

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
}

impl PayrollError {
    /// Creates a [`PayrollError::InvalidRate`] with the given reason.
    pub fn invalid_rate(message: impl Into<String>) -> Self {
        Self::InvalidRate {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
