//! ObservationScope for automatic begin/complete logging
//!
//! - Logs BEGIN event on creation
//! - Logs COMPLETE or FAILED when finished explicitly
//! - Logs INCOMPLETE on drop if neither happened

use std::cell::Cell;

use super::logger::Logger;

/// A scope that brackets an operation with log events
///
/// ```ignore
/// let scope = ObservationScope::with_fields("SAVE", &[("path", "database.txt")]);
/// match StorageWriter::save(path, records) {
///     Ok(()) => scope.complete_with_fields(&[("records", "3")]),
///     Err(e) => scope.fail(&e.to_string()),
/// }
/// ```
pub struct ObservationScope<'a> {
    name: &'a str,
    completed: Cell<bool>,
    fields: Vec<(&'a str, String)>,
}

impl<'a> ObservationScope<'a> {
    /// Create a new observation scope
    ///
    /// Logs `{name}_BEGIN` immediately, at TRACE level.
    pub fn with_fields(name: &'a str, fields: &[(&'a str, &str)]) -> Self {
        let event = format!("{}_BEGIN", name);
        Logger::trace(&event, fields);

        Self {
            name,
            completed: Cell::new(false),
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    fn field_refs(&self) -> Vec<(&str, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }

    /// Mark the scope as successfully completed
    ///
    /// Logs `{name}_COMPLETE` at INFO level with the scope fields plus
    /// `extra_fields`.
    pub fn complete_with_fields(self, extra_fields: &[(&str, &str)]) {
        self.completed.set(true);
        let event = format!("{}_COMPLETE", self.name);

        let mut all_fields = self.field_refs();
        all_fields.extend(extra_fields.iter().copied());

        Logger::info(&event, &all_fields);
    }

    /// Mark the scope as failed with a reason
    ///
    /// Logs `{name}_FAILED` at ERROR level.
    pub fn fail(self, reason: &str) {
        self.completed.set(true);
        let event = format!("{}_FAILED", self.name);

        let mut all_fields = self.field_refs();
        all_fields.push(("reason", reason));

        Logger::error(&event, &all_fields);
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            let event = format!("{}_INCOMPLETE", self.name);
            Logger::warn(&event, &[("reason", "scope dropped without completion")]);
        }
    }
}
