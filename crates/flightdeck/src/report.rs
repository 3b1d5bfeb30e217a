//! Presentation layer: human-readable result listings.

use std::io::Write;

use crate::flight::{Flight, IataCode};

/// Format one flight as a single summary line.
///
/// Delayed and on-time flights print differently: the delay suffix appears
/// only when a positive delay was recorded (an unrecorded delay coalesces
/// to zero and prints as on time).
#[must_use]
pub fn format_flight(flight: &Flight) -> String {
    let delay = flight.departure_delay.unwrap_or(0);
    if delay > 0 {
        format!(
            "{}. {} -> {} by {}, Delay: {} Minutes",
            flight.id, flight.origin, flight.destination, flight.airline, delay
        )
    } else {
        format!(
            "{}. {} -> {} by {}",
            flight.id, flight.origin, flight.destination, flight.airline
        )
    }
}

/// Print a result count followed by one line per flight.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_flights(out: &mut impl Write, flights: &[Flight]) -> std::io::Result<()> {
    writeln!(out, "Got {} results.", flights.len())?;
    for flight in flights {
        writeln!(out, "{}", format_flight(flight))?;
    }
    Ok(())
}

/// The summary line printed after the route map is generated.
#[must_use]
pub fn format_route_summary(origin: &IataCode, destination: &IataCode, percent: f64) -> String {
    format!("Origin: {origin} <-> Destination: {destination} ({percent}% delayed)")
}
