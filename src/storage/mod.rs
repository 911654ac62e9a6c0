//! Record types and the database text file
//!
//! The database file is a single plain-text file holding a record count
//! followed by each record's name, pin count and slew rate as
//! whitespace-separated tokens.
//!
//! # Design Principles
//!
//! - Save always truncates and rewrites the whole file
//! - Load is all-or-nothing: a bad file yields an error, never partial data
//! - A declared count above capacity is corruption, not an overflow

mod errors;
mod reader;
mod record;
mod writer;

pub use errors::{StoreError, StoreResult};
pub use reader::StorageReader;
pub use record::{OpAmp, PartName, NAME_MAX_LEN};
pub use writer::StorageWriter;
