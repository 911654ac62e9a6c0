//! Console rendering of the record list

use std::io::{self, Write};

use crate::storage::{OpAmp, NAME_MAX_LEN};

/// Message shown when there is nothing to list
pub const EMPTY_MESSAGE: &str = "The database is empty";

/// Writes a header and one row per record, or the empty message
pub fn write_records<W: Write>(out: &mut W, records: &[OpAmp]) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "{}", EMPTY_MESSAGE)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<width$}  {:>14}  {:>9}",
        "Name",
        "Number of pins",
        "Slew rate",
        width = NAME_MAX_LEN
    )?;

    for record in records {
        writeln!(
            out,
            "{:<width$}  {:>14}  {:>9}",
            record.name.as_str(),
            record.pin_count,
            record.slew_rate,
            width = NAME_MAX_LEN
        )?;
    }

    Ok(())
}
