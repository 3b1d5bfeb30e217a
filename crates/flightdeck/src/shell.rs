//! Interactive menu shell.
//!
//! The shell presents a numbered menu, collects and validates input for the
//! chosen operation, dispatches to the store, and prints results. Invalid
//! input of any kind reprompts; nothing that happens inside an operation
//! ends the session. The loop terminates on the explicit exit choice or on
//! end of input.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::flight::IataCode;
use crate::map;
use crate::report;
use crate::route;
use crate::store::FlightStore;

/// Date format accepted by the flights-by-date prompt.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// The reprompt line printed after any rejected input.
const TRY_AGAIN: &str = "Try again...";

/// One entry in the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Look up a single flight by its id.
    FlightById,
    /// List delayed flights on a calendar date.
    FlightsByDate,
    /// List delayed flights for an airline.
    DelayedByAirline,
    /// List delayed flights departing from an airport.
    DelayedByAirport,
    /// Render the route delay map.
    RouteDelayMap,
    /// End the session.
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [Self; 6] = [
        Self::FlightById,
        Self::FlightsByDate,
        Self::DelayedByAirline,
        Self::DelayedByAirport,
        Self::RouteDelayMap,
        Self::Exit,
    ];

    /// The number shown in the menu for this choice.
    #[must_use]
    pub fn number(self) -> u32 {
        match self {
            Self::FlightById => 1,
            Self::FlightsByDate => 2,
            Self::DelayedByAirline => 3,
            Self::DelayedByAirport => 4,
            Self::RouteDelayMap => 5,
            Self::Exit => 6,
        }
    }

    /// The label shown in the menu for this choice.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FlightById => "Show flight by ID",
            Self::FlightsByDate => "Show flights by date",
            Self::DelayedByAirline => "Delayed flights by airline",
            Self::DelayedByAirport => "Delayed flights by origin airport",
            Self::RouteDelayMap => "Generate Visual Map for delayed flights",
            Self::Exit => "Exit",
        }
    }
}

impl TryFrom<u32> for MenuChoice {
    type Error = ();

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::FlightById),
            2 => Ok(Self::FlightsByDate),
            3 => Ok(Self::DelayedByAirline),
            4 => Ok(Self::DelayedByAirport),
            5 => Ok(Self::RouteDelayMap),
            6 => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// The interactive shell, generic over its I/O handles for testability.
#[derive(Debug)]
pub struct Shell<'a, R, W> {
    store: &'a FlightStore,
    map_output: PathBuf,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over the given store and I/O handles.
    pub fn new(store: &'a FlightStore, map_output: impl AsRef<Path>, input: R, output: W) -> Self {
        Self {
            store,
            map_output: map_output.as_ref().to_path_buf(),
            input,
            output,
        }
    }

    /// Run the menu loop until the exit choice or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to the output handle fails; every
    /// other failure is reported to the user and the loop continues.
    pub fn run(&mut self) -> std::io::Result<()> {
        loop {
            let Some(choice) = self.menu()? else {
                break;
            };
            debug!(?choice, "dispatching menu choice");
            match choice {
                MenuChoice::FlightById => self.flight_by_id()?,
                MenuChoice::FlightsByDate => self.flights_by_date()?,
                MenuChoice::DelayedByAirline => self.delayed_by_airline()?,
                MenuChoice::DelayedByAirport => self.delayed_by_airport()?,
                MenuChoice::RouteDelayMap => self.route_delay_map()?,
                MenuChoice::Exit => break,
            }
        }
        Ok(())
    }

    /// Print the menu and read a valid choice. `None` means end of input.
    fn menu(&mut self) -> std::io::Result<Option<MenuChoice>> {
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }

        self.prompt_until("Enter choice: ", |line| {
            line.parse::<u32>().ok().and_then(|n| MenuChoice::try_from(n).ok())
        })
    }

    fn flight_by_id(&mut self) -> std::io::Result<()> {
        let Some(id) = self.prompt_until("Enter flight ID: ", |line| line.parse::<i64>().ok())?
        else {
            return Ok(());
        };
        let results = self.store.flight_by_id(id);
        report::print_flights(&mut self.output, &results)
    }

    fn flights_by_date(&mut self) -> std::io::Result<()> {
        let Some(date) = self.prompt_until("Enter date in DD/MM/YYYY format: ", |line| {
            NaiveDate::parse_from_str(line, DATE_FORMAT).ok()
        })?
        else {
            return Ok(());
        };
        let results = self
            .store
            .flights_by_date(date.day(), date.month(), date.year());
        report::print_flights(&mut self.output, &results)
    }

    fn delayed_by_airline(&mut self) -> std::io::Result<()> {
        // Any text is a valid search term
        let Some(airline) =
            self.prompt_until("Enter airline name: ", |line| Some(line.to_string()))?
        else {
            return Ok(());
        };
        let results = self.store.delayed_flights_by_airline(&airline);
        report::print_flights(&mut self.output, &results)
    }

    fn delayed_by_airport(&mut self) -> std::io::Result<()> {
        let Some(origin) = self.prompt_iata("Enter origin airport IATA code: ")? else {
            return Ok(());
        };
        let results = self.store.delayed_flights_by_airport(&origin);
        report::print_flights(&mut self.output, &results)
    }

    fn route_delay_map(&mut self) -> std::io::Result<()> {
        let Some(origin) = self.prompt_iata("Enter origin airport IATA code: ")? else {
            return Ok(());
        };
        let Some(destination) = self.prompt_iata("Enter destination airport IATA code: ")? else {
            return Ok(());
        };

        let rows = self.store.route_delay_percentages(&origin, &destination);
        let percent = match route::average_route_delay(&origin, &destination, &rows) {
            Ok(percent) => percent,
            Err(e) => return writeln!(self.output, "{e}"),
        };

        let (origin_airport, destination_airport) =
            match self.store.airport_coordinates(&origin, &destination) {
                Ok(pair) => pair,
                Err(e) => return writeln!(self.output, "{e}"),
            };

        if let Err(e) = map::render_route_map(
            &self.map_output,
            &origin_airport,
            &destination_airport,
            percent,
        ) {
            return writeln!(self.output, "{e}");
        }

        writeln!(
            self.output,
            "{}",
            report::format_route_summary(&origin, &destination, percent)
        )
    }

    fn prompt_iata(&mut self, prompt: &str) -> std::io::Result<Option<IataCode>> {
        self.prompt_until(prompt, |line| IataCode::parse(line).ok())
    }

    /// Prompt repeatedly until `parse` accepts a line. `None` means end of
    /// input; there is no retry limit.
    fn prompt_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> std::io::Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(value) = parse(line.trim()) {
                return Ok(Some(value));
            }
            writeln!(self.output, "{TRY_AGAIN}")?;
        }
    }

    /// Read one line of input. `None` at end of input.
    fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}
