//! Observability for the op-amp database
//!
//! Provides:
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle and store events
//! - Begin/complete scopes around file operations
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on store behavior
//! 3. No background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use opampdb::observability::{Logger, Event, ObservationScope};
//!
//! Logger::info("RECORD_ADDED", &[("name", "741")]);
//!
//! let scope = ObservationScope::with_fields("SAVE", &[("path", "database.txt")]);
//! // ... do work ...
//! scope.complete_with_fields(&[("records", "3")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

/// Log a typed event at INFO
///
/// Refusals (full store, rejected record, bad menu option) are part of
/// normal menu use and stay below the default WARN threshold.
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a typed event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::info(event.as_str(), fields);
}
