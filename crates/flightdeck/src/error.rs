//! Error types for flightdeck.
//!
//! This module defines all error types used throughout the flightdeck crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flightdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to open the flight database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// An airport code was not found in the dataset.
    #[error("airport {code} not found in dataset")]
    AirportNotFound {
        /// The IATA code that could not be resolved.
        code: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Input Errors ===
    /// User input was not a valid IATA airport code.
    #[error("invalid IATA code {input:?}: expected exactly three letters")]
    InvalidIataCode {
        /// The rejected input.
        input: String,
    },

    // === Aggregation Errors ===
    /// The route delay query did not return both directions.
    #[error(
        "no delay statistics available for route {origin} <-> {destination}: \
         expected 2 directional rows, got {rows}"
    )]
    RouteUnavailable {
        /// Requested origin airport code.
        origin: String,
        /// Requested destination airport code.
        destination: String,
        /// Number of directional rows actually returned.
        rows: usize,
    },

    // === Map Errors ===
    /// Failed to write the map artifact.
    #[error("failed to write map to {path}: {source}")]
    MapWrite {
        /// Path the map was being written to.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system or console operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for flightdeck operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an airport-not-found error.
    #[must_use]
    pub fn airport_not_found(code: impl Into<String>) -> Self {
        Self::AirportNotFound { code: code.into() }
    }

    /// Check if this error came from user input rather than the system.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidIataCode { .. })
    }
}
