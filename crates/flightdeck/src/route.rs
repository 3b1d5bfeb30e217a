//! Route delay aggregation.
//!
//! Combines the per-direction delay percentages returned by the store into
//! the single figure shown for an unordered route.

use crate::error::{Error, Result};
use crate::flight::{IataCode, RouteDelay};

/// Average the two directional delay percentages for a route.
///
/// The store returns one row per flown direction. Both directions must be
/// present for the average to mean anything; a route flown in zero or one
/// direction is a reported failure, not a silent half-answer.
///
/// # Errors
///
/// Returns [`Error::RouteUnavailable`] unless exactly two directional rows
/// are given.
pub fn average_route_delay(
    origin: &IataCode,
    destination: &IataCode,
    rows: &[RouteDelay],
) -> Result<f64> {
    match rows {
        [first, second] => Ok((first.percent_delayed + second.percent_delayed) / 2.0),
        _ => Err(Error::RouteUnavailable {
            origin: origin.to_string(),
            destination: destination.to_string(),
            rows: rows.len(),
        }),
    }
}
