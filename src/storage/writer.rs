//! Database file writer
//!
//! File layout:
//!
//! ```text
//! <length>
//!
//! <name>
//! <pin count>
//! <slew rate>
//!
//! ...
//! ```
//!
//! Every save truncates and rewrites the whole file. There is no backup and
//! no atomic rename: a crash mid-write leaves a partial file that a later
//! load will reject.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::errors::{StoreError, StoreResult};
use super::record::OpAmp;

/// Writes records to the database text file
pub struct StorageWriter;

impl StorageWriter {
    /// Saves `records` to `path`, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileOpenFailure` if the file cannot be created and
    /// `StoreError::Io` if a write fails afterwards.
    pub fn save(path: &Path, records: &[OpAmp]) -> StoreResult<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| StoreError::file_open(path, e))?;

        let mut writer = BufWriter::new(file);
        Self::write_records(&mut writer, records).map_err(|e| StoreError::io(path, e))?;
        writer.flush().map_err(|e| StoreError::io(path, e))?;

        Ok(())
    }

    /// Serialises records in the database text layout.
    ///
    /// Slew rates use the shortest representation that parses back to the
    /// same `f64`.
    pub fn write_records<W: Write>(writer: &mut W, records: &[OpAmp]) -> std::io::Result<()> {
        writeln!(writer, "{}", records.len())?;
        writeln!(writer)?;

        for record in records {
            writeln!(writer, "{}", record.name)?;
            writeln!(writer, "{}", record.pin_count)?;
            writeln!(writer, "{}", record.slew_rate)?;
            writeln!(writer)?;
        }

        Ok(())
    }
}
