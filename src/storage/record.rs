//! Op-amp record types
//!
//! A record holds the part name, the number of pins in the package and the
//! slew rate in volts per microsecond.

use std::fmt;

use super::errors::{StoreError, StoreResult};

/// Longest part name accepted, in characters
pub const NAME_MAX_LEN: usize = 19;

/// Bounded, owned part name (e.g. "741", "LM358").
///
/// Names are 1..=NAME_MAX_LEN characters with no whitespace, because the
/// database file separates fields by whitespace, and no control characters. Longer names are rejected,
/// never truncated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartName(String);

impl PartName {
    pub fn new(name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(StoreError::invalid_record("name must not be empty"));
        }

        // Checked first so later messages never echo terminal escapes
        if name.chars().any(char::is_control) {
            return Err(StoreError::invalid_record(
                "name must not contain control characters",
            ));
        }

        let len = name.chars().count();
        if len > NAME_MAX_LEN {
            return Err(StoreError::invalid_record(format!(
                "name '{}' is {} characters long (max: {})",
                name, len, NAME_MAX_LEN
            )));
        }

        if name.chars().any(char::is_whitespace) {
            return Err(StoreError::invalid_record(format!(
                "name '{}' must not contain whitespace",
                name
            )));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PartName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One operational amplifier entry
#[derive(Debug, Clone, PartialEq)]
pub struct OpAmp {
    /// Part name
    pub name: PartName,
    /// Number of pins in the package
    pub pin_count: u32,
    /// Slew rate in V/µs. Not validated; zero and negative values are kept.
    pub slew_rate: f64,
}

impl OpAmp {
    pub fn new(name: PartName, pin_count: u32, slew_rate: f64) -> Self {
        Self {
            name,
            pin_count,
            slew_rate,
        }
    }

    /// Builds a record from a raw name, validating it
    pub fn parse(name: &str, pin_count: u32, slew_rate: f64) -> StoreResult<Self> {
        Ok(Self::new(PartName::new(name)?, pin_count, slew_rate))
    }
}
