//! The query catalog: named SQL templates for flight lookups.
//!
//! Every query is parameterized with `:name` placeholders bound by the store;
//! no user input is ever spliced into SQL text. The delayed-flight queries
//! share the same filter: a recorded departure delay of at least 20 minutes,
//! ordered worst-first. A `NULL` delay never enters the comparison.

/// Flight detail by unique id, with the airline display name joined in.
pub const FLIGHT_BY_ID: &str = r"
SELECT f.id, f.origin_airport, f.destination_airport, a.airline, f.departure_delay
FROM flights AS f
JOIN airlines AS a ON f.airline = a.id
WHERE f.id = :id
";

/// Delayed flights on an exact calendar date, worst delay first.
pub const FLIGHTS_BY_DATE: &str = r"
SELECT f.id, f.origin_airport, f.destination_airport, a.airline, f.departure_delay
FROM flights AS f
JOIN airlines AS a ON f.airline = a.id
WHERE f.departure_delay IS NOT NULL
  AND f.departure_delay >= 20
  AND f.day = :day AND f.month = :month AND f.year = :year
ORDER BY f.departure_delay DESC
";

/// Delayed flights for airlines whose name matches a case-insensitive
/// substring pattern (the store wraps the search term in `%`).
pub const DELAYED_FLIGHTS_BY_AIRLINE: &str = r"
SELECT f.id, f.origin_airport, f.destination_airport, a.airline, f.departure_delay
FROM flights AS f
JOIN airlines AS a ON f.airline = a.id
WHERE f.departure_delay IS NOT NULL
  AND f.departure_delay >= 20
  AND lower(a.airline) LIKE lower(:airline)
ORDER BY f.departure_delay DESC
";

/// Delayed flights departing from an exact origin airport, worst delay first.
pub const DELAYED_FLIGHTS_BY_AIRPORT: &str = r"
SELECT f.id, f.origin_airport, f.destination_airport, a.airline, f.departure_delay
FROM flights AS f
JOIN airlines AS a ON f.airline = a.id
WHERE f.departure_delay IS NOT NULL
  AND f.departure_delay >= 20
  AND f.origin_airport = :origin
ORDER BY f.departure_delay DESC
";

/// Percentage of delayed flights per directed pair, for the requested
/// direction and its reverse. A direction with no flights produces no row.
pub const ROUTE_DELAY_PERCENTAGE: &str = r"
SELECT
    f.origin_airport,
    f.destination_airport,
    AVG(CASE WHEN COALESCE(f.departure_delay, 0) >= 20 THEN 100.0 ELSE 0.0 END)
        AS percent_delayed
FROM flights AS f
WHERE (f.origin_airport = :origin AND f.destination_airport = :destination)
   OR (f.origin_airport = :destination AND f.destination_airport = :origin)
GROUP BY f.origin_airport, f.destination_airport
";

/// Coordinates for both requested airports. Row order is whatever the
/// database returns; callers must match rows to codes, never by position.
pub const AIRPORT_COORDINATES: &str = r"
SELECT iata_code, latitude, longitude
FROM airports
WHERE iata_code IN (:origin, :destination)
";

#[cfg(test)]
mod tests {
    use super::*;

    const DELAYED_QUERIES: &[&str] = &[
        FLIGHTS_BY_DATE,
        DELAYED_FLIGHTS_BY_AIRLINE,
        DELAYED_FLIGHTS_BY_AIRPORT,
    ];

    #[test]
    fn test_delayed_queries_guard_null_before_threshold() {
        for query in DELAYED_QUERIES {
            assert!(query.contains("departure_delay IS NOT NULL"));
            assert!(query.contains("departure_delay >= 20"));
        }
    }

    #[test]
    fn test_delayed_queries_order_worst_first() {
        for query in DELAYED_QUERIES {
            assert!(query.contains("ORDER BY f.departure_delay DESC"));
        }
    }

    #[test]
    fn test_airline_match_is_case_insensitive() {
        assert!(DELAYED_FLIGHTS_BY_AIRLINE.contains("lower(a.airline) LIKE lower(:airline)"));
    }

    #[test]
    fn test_route_query_covers_both_directions() {
        assert!(ROUTE_DELAY_PERCENTAGE.contains(":origin AND f.destination_airport = :destination"));
        assert!(ROUTE_DELAY_PERCENTAGE.contains(":destination AND f.destination_airport = :origin"));
    }

    #[test]
    fn test_queries_are_parameterized() {
        for query in &[FLIGHT_BY_ID, ROUTE_DELAY_PERCENTAGE, AIRPORT_COORDINATES] {
            assert!(query.contains(':'), "query missing named parameter: {query}");
        }
    }
}
