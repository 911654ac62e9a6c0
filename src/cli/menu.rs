//! Interactive op-amp database menu
//!
//! Options 1-6 map to enter, save, load, sort, display and exit. Anything
//! else reports "Invalid entry" and the menu is shown again. Store errors
//! are printed and the loop continues; only console I/O failures end it
//! with an error.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::errors::CliResult;
use super::io::Console;
use crate::database::{RecordStore, SortKey};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::storage::{OpAmp, PartName, StoreError};

const MAIN_MENU: &str = "\
Op-amp database menu
--------------------
1. Enter a new op-amp into the database
2. Save the database to disk
3. Load the database from disk
4. Sort the database
5. Display the database
6. Exit from the program
";

const SORT_MENU: &str = "\
Sorting options
---------------
1. To sort by name
2. To sort by slew rate
3. No sorting
";

const OPTION_PROMPT: &str = "Enter your option: ";
const INVALID_ENTRY: &str = "Invalid entry";
const FULL_MESSAGE: &str = "The database is full";

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu session over a record store and a database file
pub struct Menu<R, W> {
    console: Console<R, W>,
    store: RecordStore,
    path: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, path: impl Into<PathBuf>) -> Self {
        Self::with_store(input, output, path, RecordStore::new())
    }

    /// Starts a session over an existing store
    pub fn with_store(input: R, output: W, path: impl Into<PathBuf>, store: RecordStore) -> Self {
        Self {
            console: Console::new(input, output),
            store,
            path: path.into(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Ends the session, returning the store and the output sink
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.console.into_output())
    }

    /// Runs until the user exits or input ends
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            self.console.say("")?;
            self.console.say(MAIN_MENU)?;

            let choice = match self.console.prompt(OPTION_PROMPT)? {
                Some(choice) => choice,
                None => return self.exit(),
            };
            self.console.say("")?;

            let flow = match choice.as_str() {
                "1" => self.enter()?,
                "2" => self.save()?,
                "3" => self.load()?,
                "4" => self.sort()?,
                "5" => self.display()?,
                "6" => return self.exit(),
                other => {
                    log_event_with_fields(Event::InvalidMenuOption, &[("input", other)]);
                    self.console.say(INVALID_ENTRY)?;
                    self.console.say("")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return self.exit();
            }
        }
    }

    fn exit(&mut self) -> CliResult<()> {
        log_event(Event::Shutdown);
        self.console.say("Goodbye.")?;
        self.console.output().flush()?;
        Ok(())
    }

    fn enter(&mut self) -> CliResult<Flow> {
        // Checked before prompting so the user does not type a discarded record
        if self.store.is_full() {
            let capacity = self.store.capacity().to_string();
            log_event_with_fields(Event::StoreFull, &[("capacity", capacity.as_str())]);
            self.console.say(FULL_MESSAGE)?;
            return Ok(Flow::Continue);
        }

        self.console.say("Add new data")?;
        self.console.say("------------")?;

        let Some(name) = self.console.prompt("Enter op-amp name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(pins) = self.console.prompt("Enter number of pins: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(slew) = self.console.prompt("Enter slew rate (V/us): ")? else {
            return Ok(Flow::Exit);
        };
        self.console.say("")?;

        match Self::build_record(&name, &pins, &slew) {
            Ok(record) => match self.store.add(record) {
                Ok(()) => {}
                Err(e) => self.console.say(&e.to_string())?,
            },
            Err(e) => {
                let reason = e.to_string();
                Logger::log(
                    e.severity(),
                    Event::RecordRejected.as_str(),
                    &[("code", e.code()), ("reason", reason.as_str())],
                );
                self.console.say(&reason)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn build_record(name: &str, pins: &str, slew: &str) -> Result<OpAmp, StoreError> {
        let name = PartName::new(name)?;
        let pin_count: u32 = pins.parse().map_err(|_| {
            StoreError::invalid_record(format!(
                "number of pins '{}' is not a non-negative integer",
                pins
            ))
        })?;
        let slew_rate: f64 = slew.parse().map_err(|_| {
            StoreError::invalid_record(format!("slew rate '{}' is not a number", slew))
        })?;

        Ok(OpAmp::new(name, pin_count, slew_rate))
    }

    fn save(&mut self) -> CliResult<Flow> {
        match self.store.save(&self.path) {
            Ok(()) => {
                let message = format!(
                    "Saved {} records to {}",
                    self.store.len(),
                    self.path.display()
                );
                self.console.say(&message)?;
            }
            Err(e) => self.console.say(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn load(&mut self) -> CliResult<Flow> {
        match self.store.load(&self.path) {
            Ok(()) => {
                let message = format!(
                    "Loaded {} records from {}",
                    self.store.len(),
                    self.path.display()
                );
                self.console.say(&message)?;
            }
            Err(e) => self.console.say(&e.to_string())?,
        }
        Ok(Flow::Continue)
    }

    fn sort(&mut self) -> CliResult<Flow> {
        self.console.say("")?;
        self.console.say(SORT_MENU)?;

        let Some(choice) = self.console.prompt(OPTION_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        self.console.say("")?;

        let key = match choice.as_str() {
            "1" => SortKey::Name,
            "2" => SortKey::SlewRate,
            "3" => SortKey::None,
            other => {
                log_event_with_fields(Event::InvalidMenuOption, &[("input", other)]);
                self.console.say(INVALID_ENTRY)?;
                self.console.say("")?;
                return Ok(Flow::Continue);
            }
        };

        self.store.sort(key);
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> CliResult<Flow> {
        self.store.display(self.console.output())?;
        Ok(Flow::Continue)
    }
}
