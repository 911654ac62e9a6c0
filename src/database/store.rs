//! The fixed-capacity record store

use std::io::{self, Write};
use std::path::Path;

use super::display;
use super::sorter::{sort_records, SortKey};
use super::DATABASE_MAX;
use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::storage::{OpAmp, StorageReader, StorageWriter, StoreError, StoreResult};

/// Ordered collection of at most `DATABASE_MAX` op-amp records.
///
/// The backing `Vec` holds exactly the valid entries, so its length is the
/// store length and never exceeds the capacity.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<OpAmp>,
}

impl RecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(DATABASE_MAX),
        }
    }

    /// Maximum number of records the store holds
    pub fn capacity(&self) -> usize {
        DATABASE_MAX
    }

    /// Number of records in use
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= DATABASE_MAX
    }

    /// Records in their current order
    pub fn records(&self) -> &[OpAmp] {
        &self.records
    }

    /// Appends a record at the end of the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CapacityExceeded` when the store is full; the
    /// store is left untouched.
    pub fn add(&mut self, record: OpAmp) -> StoreResult<()> {
        if self.is_full() {
            let capacity = DATABASE_MAX.to_string();
            log_event_with_fields(Event::StoreFull, &[("capacity", capacity.as_str())]);
            return Err(StoreError::CapacityExceeded {
                capacity: DATABASE_MAX,
            });
        }

        self.records.push(record);

        let length = self.records.len().to_string();
        if let Some(added) = self.records.last() {
            log_event_with_fields(
                Event::RecordAdded,
                &[("length", length.as_str()), ("name", added.name.as_str())],
            );
        }

        Ok(())
    }

    /// Writes every record to `path`, overwriting the file.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        let path_text = path.display().to_string();
        let scope = ObservationScope::with_fields("SAVE", &[("path", path_text.as_str())]);

        match StorageWriter::save(path, &self.records) {
            Ok(()) => {
                let count = self.records.len().to_string();
                scope.complete_with_fields(&[("records", count.as_str())]);
                Ok(())
            }
            Err(e) => {
                scope.fail(&e.to_string());
                Err(e)
            }
        }
    }

    /// Replaces the store contents with the records in `path`.
    ///
    /// The file is parsed completely before anything is replaced. On any
    /// error the store keeps its previous contents.
    pub fn load(&mut self, path: &Path) -> StoreResult<()> {
        let path_text = path.display().to_string();
        let scope = ObservationScope::with_fields("LOAD", &[("path", path_text.as_str())]);

        match StorageReader::load(path, DATABASE_MAX) {
            Ok(records) => {
                self.records = records;
                let count = self.records.len().to_string();
                scope.complete_with_fields(&[("records", count.as_str())]);
                Ok(())
            }
            Err(e) => {
                scope.fail(&e.to_string());
                Err(e)
            }
        }
    }

    /// Reorders the records by `key`
    pub fn sort(&mut self, key: SortKey) {
        sort_records(&mut self.records, key);
        log_event_with_fields(Event::StoreSorted, &[("key", key.as_str())]);
    }

    /// Writes the records to `out`, or the empty message
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        display::write_records(out, &self.records)
    }
}
