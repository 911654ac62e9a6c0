//! In-memory op-amp database
//!
//! `RecordStore` owns up to `DATABASE_MAX` records and offers the five menu
//! operations: add, save, load, sort and display.
//!
//! # Invariants
//!
//! - The store never holds more than `DATABASE_MAX` records
//! - A refused add or a failed load leaves the store unchanged
//! - Sorting only reorders; it never adds or drops records

mod display;
mod sorter;
mod store;

pub use display::EMPTY_MESSAGE;
pub use sorter::{compare_by_name, compare_by_slew_rate, sort_records, SortKey};
pub use store::RecordStore;

/// Number of records the store can hold
pub const DATABASE_MAX: usize = 10;

/// File used when no other is configured
pub const DATABASE_FILENAME: &str = "database.txt";
