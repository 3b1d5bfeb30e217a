//! Data access layer for the flight dataset.
//!
//! This module owns the single `SQLite` connection and executes the query
//! catalog against it. Lookup operations never surface failures to the
//! caller: a failed query is logged and degrades to an empty result, so
//! "query failed" and "no matching flights" look the same at the call site.
//! The coordinate lookup is the one exception, because the map feature
//! cannot do anything useful with a silently empty answer.

pub mod queries;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{named_params, Connection, ToSql};
use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::flight::{Airport, Flight, IataCode, RouteDelay};

/// Read-only access to the flight dataset.
///
/// Holds one connection for the life of the process; it is released when the
/// store is dropped.
#[derive(Debug)]
pub struct FlightStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl FlightStore {
    /// Open the flight dataset at the given path.
    ///
    /// The schema statements are idempotent, so opening an existing dataset
    /// leaves it untouched while a fresh file gets the expected tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema
    /// cannot be initialized.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        debug!("Opening flight dataset at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        Self::initialize_schema(&conn)?;

        info!("Flight dataset opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        Self::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<()> {
        for statement in schema::SCHEMA_STATEMENTS {
            conn.execute(statement, [])?;
        }
        Ok(())
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a flight by its unique id.
    ///
    /// Returns at most one row; empty when the id is unknown or the query
    /// failed (the failure is logged).
    #[must_use]
    pub fn flight_by_id(&self, id: i64) -> Vec<Flight> {
        self.run_flight_query(
            "flight_by_id",
            queries::FLIGHT_BY_ID,
            named_params! { ":id": id },
        )
    }

    /// Delayed flights on an exact calendar date, worst delay first.
    #[must_use]
    pub fn flights_by_date(&self, day: u32, month: u32, year: i32) -> Vec<Flight> {
        self.run_flight_query(
            "flights_by_date",
            queries::FLIGHTS_BY_DATE,
            named_params! { ":day": day, ":month": month, ":year": year },
        )
    }

    /// Delayed flights for airlines whose name contains the given term,
    /// case-insensitively.
    #[must_use]
    pub fn delayed_flights_by_airline(&self, airline: &str) -> Vec<Flight> {
        let pattern = format!("%{airline}%");
        self.run_flight_query(
            "delayed_flights_by_airline",
            queries::DELAYED_FLIGHTS_BY_AIRLINE,
            named_params! { ":airline": pattern },
        )
    }

    /// Delayed flights departing from the given origin airport.
    #[must_use]
    pub fn delayed_flights_by_airport(&self, origin: &IataCode) -> Vec<Flight> {
        self.run_flight_query(
            "delayed_flights_by_airport",
            queries::DELAYED_FLIGHTS_BY_AIRPORT,
            named_params! { ":origin": origin.as_str() },
        )
    }

    /// Per-direction delayed-flight percentages for a route.
    ///
    /// Returns one row per directed pair that has any flights in the
    /// dataset: two rows when both directions are flown, fewer otherwise.
    #[must_use]
    pub fn route_delay_percentages(
        &self,
        origin: &IataCode,
        destination: &IataCode,
    ) -> Vec<RouteDelay> {
        let result = self.query_route_delays(named_params! {
            ":origin": origin.as_str(),
            ":destination": destination.as_str(),
        });
        match result {
            Ok(rows) => rows,
            Err(e) => {
                error!(query = "route_delay_percentages", error = %e, "query failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Coordinates for the requested origin and destination airports.
    ///
    /// The database returns the two rows in unspecified order; they are
    /// matched back to the requested codes here so callers can rely on the
    /// tuple being `(origin, destination)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AirportNotFound`] if either code has no coordinate
    /// row, or a database error if the query fails.
    pub fn airport_coordinates(
        &self,
        origin: &IataCode,
        destination: &IataCode,
    ) -> Result<(Airport, Airport)> {
        let mut stmt = self.conn.prepare(queries::AIRPORT_COORDINATES)?;
        let airports = stmt
            .query_map(
                named_params! {
                    ":origin": origin.as_str(),
                    ":destination": destination.as_str(),
                },
                Self::row_to_airport,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let find = |code: &IataCode| -> Result<Airport> {
            airports
                .iter()
                .find(|a| a.code == *code)
                .cloned()
                .ok_or_else(|| Error::airport_not_found(code.as_str()))
        };

        Ok((find(origin)?, find(destination)?))
    }

    /// Execute a catalog query that yields flight rows, degrading any
    /// failure to an empty result.
    fn run_flight_query(
        &self,
        name: &'static str,
        sql: &str,
        params: &[(&str, &dyn ToSql)],
    ) -> Vec<Flight> {
        match self.query_flights(sql, params) {
            Ok(rows) => rows,
            Err(e) => {
                error!(query = name, error = %e, "query failed, returning no results");
                Vec::new()
            }
        }
    }

    fn query_flights(&self, sql: &str, params: &[(&str, &dyn ToSql)]) -> Result<Vec<Flight>> {
        let mut stmt = self.conn.prepare(sql)?;
        let flights = stmt
            .query_map(params, Self::row_to_flight)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(flights)
    }

    fn query_route_delays(&self, params: &[(&str, &dyn ToSql)]) -> Result<Vec<RouteDelay>> {
        let mut stmt = self.conn.prepare(queries::ROUTE_DELAY_PERCENTAGE)?;
        let rows = stmt
            .query_map(params, Self::row_to_route_delay)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Convert a catalog row to a [`Flight`].
    fn row_to_flight(row: &rusqlite::Row) -> rusqlite::Result<Flight> {
        Ok(Flight {
            id: row.get(0)?,
            origin: row.get(1)?,
            destination: row.get(2)?,
            airline: row.get(3)?,
            departure_delay: row.get(4)?,
        })
    }

    fn row_to_route_delay(row: &rusqlite::Row) -> rusqlite::Result<RouteDelay> {
        Ok(RouteDelay {
            origin: row.get(0)?,
            destination: row.get(1)?,
            percent_delayed: row.get(2)?,
        })
    }

    fn row_to_airport(row: &rusqlite::Row) -> rusqlite::Result<Airport> {
        let code: String = row.get(0)?;
        let code = IataCode::parse(&code).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(Airport {
            code,
            latitude: row.get(1)?,
            longitude: row.get(2)?,
        })
    }
}
