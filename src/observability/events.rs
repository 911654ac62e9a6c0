//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Observable events in the op-amp database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup
    Startup,
    /// Configuration loaded
    ConfigLoaded,
    /// User chose exit or input ended
    Shutdown,

    // Store mutations
    /// Record appended
    RecordAdded,
    /// Add refused, store full
    StoreFull,
    /// Add refused, bad field
    RecordRejected,
    /// Records reordered
    StoreSorted,

    // Menu
    /// Unrecognised menu option
    InvalidMenuOption,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Startup => "OPAMPDB_STARTUP",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Shutdown => "OPAMPDB_SHUTDOWN",

            Event::RecordAdded => "RECORD_ADDED",
            Event::StoreFull => "STORE_FULL",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::StoreSorted => "STORE_SORTED",

            Event::InvalidMenuOption => "MENU_INVALID_OPTION",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_strings() {
        assert_eq!(Event::Startup.as_str(), "OPAMPDB_STARTUP");
        assert_eq!(Event::StoreFull.as_str(), "STORE_FULL");
        assert_eq!(Event::StoreSorted.to_string(), "STORE_SORTED");
    }
}
