//! Core domain records for flightdeck.
//!
//! This module defines the row types returned by the store along with the
//! `IataCode` newtype used to validate airport identifiers before they reach
//! a query.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum departure delay, in minutes, for a flight to count as delayed.
///
/// A `NULL` departure delay means the delay was never recorded and is
/// treated as zero, i.e. not delayed.
pub const DELAY_THRESHOLD_MINUTES: i64 = 20;

/// Length of a valid IATA airport code.
pub const IATA_LENGTH: usize = 3;

/// A validated three-letter IATA airport code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IataCode(String);

impl IataCode {
    /// Parse an IATA code from user input.
    ///
    /// Accepts exactly three ASCII-alphabetic characters in any case and
    /// normalizes to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIataCode`] for any other input.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.len() == IATA_LENGTH && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(Error::InvalidIataCode {
                input: input.to_string(),
            })
        }
    }

    /// The uppercase code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IataCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for IataCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A flight row as returned by the lookup queries.
///
/// The airline display name is already joined in; `departure_delay` keeps
/// `None` distinct from a recorded zero so the presentation layer can tell
/// "unrecorded" from "on time".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight identifier.
    pub id: i64,
    /// Origin airport IATA code.
    pub origin: String,
    /// Destination airport IATA code.
    pub destination: String,
    /// Airline display name.
    pub airline: String,
    /// Departure delay in minutes. `None` means unrecorded.
    pub departure_delay: Option<i64>,
}

impl Flight {
    /// Whether this flight counts as delayed.
    ///
    /// An unrecorded delay is treated as zero.
    #[must_use]
    pub fn is_delayed(&self) -> bool {
        self.departure_delay.unwrap_or(0) >= DELAY_THRESHOLD_MINUTES
    }
}

/// An airport with its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Three-letter IATA code.
    pub code: IataCode,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Delay statistics for one directed origin/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDelay {
    /// Origin airport IATA code.
    pub origin: String,
    /// Destination airport IATA code.
    pub destination: String,
    /// Percentage of flights on this directed pair delayed by at least
    /// [`DELAY_THRESHOLD_MINUTES`].
    pub percent_delayed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight_with_delay(delay: Option<i64>) -> Flight {
        Flight {
            id: 1,
            origin: "JFK".to_string(),
            destination: "LAX".to_string(),
            airline: "Test Air".to_string(),
            departure_delay: delay,
        }
    }

    #[test]
    fn test_iata_parse_valid() {
        let code = IataCode::parse("JFK").unwrap();
        assert_eq!(code.as_str(), "JFK");
    }

    #[test]
    fn test_iata_parse_lowercase_uppercased() {
        let code = IataCode::parse("lax").unwrap();
        assert_eq!(code.as_str(), "LAX");
    }

    #[test]
    fn test_iata_parse_trims_whitespace() {
        let code = IataCode::parse("  sfo\n").unwrap();
        assert_eq!(code.as_str(), "SFO");
    }

    #[test]
    fn test_iata_parse_too_short() {
        assert!(IataCode::parse("NY").is_err());
    }

    #[test]
    fn test_iata_parse_too_long() {
        assert!(IataCode::parse("JFKX").is_err());
    }

    #[test]
    fn test_iata_parse_digits_rejected() {
        assert!(IataCode::parse("12K").is_err());
    }

    #[test]
    fn test_iata_parse_empty_rejected() {
        assert!(IataCode::parse("").is_err());
    }

    #[test]
    fn test_iata_display() {
        let code = IataCode::parse("ord").unwrap();
        assert_eq!(code.to_string(), "ORD");
    }

    #[test]
    fn test_iata_from_str() {
        let code: IataCode = "bos".parse().unwrap();
        assert_eq!(code.as_str(), "BOS");
    }

    #[test]
    fn test_is_delayed_at_threshold() {
        assert!(flight_with_delay(Some(DELAY_THRESHOLD_MINUTES)).is_delayed());
    }

    #[test]
    fn test_is_delayed_below_threshold() {
        assert!(!flight_with_delay(Some(19)).is_delayed());
    }

    #[test]
    fn test_is_delayed_null_treated_as_zero() {
        assert!(!flight_with_delay(None).is_delayed());
    }

    #[test]
    fn test_is_delayed_negative_means_early() {
        assert!(!flight_with_delay(Some(-10)).is_delayed());
    }

    #[test]
    fn test_flight_serialization_round_trip() {
        let flight = flight_with_delay(Some(25));
        let json = serde_json::to_string(&flight).unwrap();
        let back: Flight = serde_json::from_str(&json).unwrap();
        assert_eq!(flight, back);
    }
}
