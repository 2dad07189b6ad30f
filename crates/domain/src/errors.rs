//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude ranges
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Humidity outside 0-100%
    #[error("Invalid humidity: {0}% is out of range (must be 0-100)")]
    InvalidHumidity(i64),

    /// A numeric measurement was NaN or infinite
    #[error("Invalid measurement: {field} must be a finite number")]
    NonFiniteMeasurement { field: &'static str },

    /// A required text field was empty
    #[error("Missing value: {0}")]
    MissingValue(&'static str),
}

impl DomainError {
    /// Create a non-finite measurement error
    pub const fn non_finite(field: &'static str) -> Self {
        Self::NonFiniteMeasurement { field }
    }
}
