//! Error types for Roster
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::employee::{EmployeeId, Field};

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for Roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // Roster Errors (recoverable, reported to the operator)
    // -------------------------------------------------------------------------
    #[error("Employee with id: {0} already exist!")]
    DuplicateIdentifier(EmployeeId),

    #[error("No Employee with ID: {0}")]
    NotFound(EmployeeId),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: Field, value: String },

    #[error("Please enter a valid updatable field: name, dept, or salary (got {0:?})")]
    InvalidField(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RosterError {
    /// Whether this failure leaves the roster untouched and only needs reporting.
    ///
    /// I/O, malformed data and configuration failures return `false`.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::DuplicateIdentifier(_)
                | RosterError::NotFound(_)
                | RosterError::InvalidValue { .. }
                | RosterError::InvalidField(_)
        )
    }
}

impl From<bincode::Error> for RosterError {
    fn from(e: bincode::Error) -> Self {
        RosterError::Serialization(e.to_string())
    }
}
