//! `flightdeck` - a flight-delay lookup tool over a local SQLite dataset
//!
//! This library provides read-only queries over a relational dataset of
//! flights, airlines, and airports, plus an interactive menu shell and a
//! route-map renderer for delay statistics.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod map;
pub mod report;
pub mod route;
pub mod shell;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use flight::{Airport, Flight, IataCode, RouteDelay, DELAY_THRESHOLD_MINUTES};
pub use logging::init_logging;
pub use shell::Shell;
pub use store::FlightStore;
