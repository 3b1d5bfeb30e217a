//! `SQLite` schema definitions for the flight dataset.
//!
//! The tool runs read-only against an externally produced dataset; these
//! statements exist so an in-memory store can be stood up for tests and so a
//! fresh database file has the expected shape.

/// SQL statement to create the flights table.
pub const CREATE_FLIGHTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS flights (
    id INTEGER PRIMARY KEY,
    origin_airport TEXT NOT NULL,
    destination_airport TEXT NOT NULL,
    airline INTEGER NOT NULL REFERENCES airlines(id),
    departure_delay INTEGER,
    day INTEGER NOT NULL,
    month INTEGER NOT NULL,
    year INTEGER NOT NULL
)
";

/// SQL statement to create the airlines table.
pub const CREATE_AIRLINES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS airlines (
    id INTEGER PRIMARY KEY,
    airline TEXT NOT NULL
)
";

/// SQL statement to create the airports table.
pub const CREATE_AIRPORTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS airports (
    iata_code TEXT PRIMARY KEY,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL
)
";

/// SQL statement to create an index on the calendar columns.
pub const CREATE_DATE_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_flights_date ON flights(year, month, day)
";

/// SQL statement to create an index on the origin airport for route lookups.
pub const CREATE_ORIGIN_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_flights_origin ON flights(origin_airport)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_AIRLINES_TABLE,
    CREATE_AIRPORTS_TABLE,
    CREATE_FLIGHTS_TABLE,
    CREATE_DATE_INDEX,
    CREATE_ORIGIN_INDEX,
];
