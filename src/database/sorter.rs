//! Record ordering
//!
//! Sorts are stable: records that compare equal keep their relative order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::storage::OpAmp;

/// Sort criterion offered by the sorting menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Full lexicographic order of the part name
    Name,
    /// Increasing slew rate
    SlewRate,
    /// Leave the order unchanged
    None,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::SlewRate => "slew-rate",
            SortKey::None => "none",
        }
    }

    /// Returns the comparator for this key, or `None` for the no-op key
    pub fn comparator(&self) -> Option<fn(&OpAmp, &OpAmp) -> Ordering> {
        match self {
            SortKey::Name => Some(compare_by_name),
            SortKey::SlewRate => Some(compare_by_slew_rate),
            SortKey::None => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "slew-rate" | "slew" => Ok(SortKey::SlewRate),
            "none" => Ok(SortKey::None),
            other => Err(format!(
                "unknown sort key '{}' (expected name, slew-rate or none)",
                other
            )),
        }
    }
}

/// Compares whole names, not just their first character
pub fn compare_by_name(a: &OpAmp, b: &OpAmp) -> Ordering {
    a.name.as_str().cmp(b.name.as_str())
}

/// Compares slew rates with a total order; NaN sorts after every number
pub fn compare_by_slew_rate(a: &OpAmp, b: &OpAmp) -> Ordering {
    a.slew_rate.total_cmp(&b.slew_rate)
}

/// Sorts records in place by `key`
pub fn sort_records(records: &mut [OpAmp], key: SortKey) {
    if let Some(compare) = key.comparator() {
        records.sort_by(compare);
    }
}
