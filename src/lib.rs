//! opampdb - A small fixed-capacity database of operational amplifiers
//!
//! Up to ten op-amp records (name, pin count, slew rate) held in memory,
//! saved to and loaded from a single plain-text file, sorted by name or
//! slew rate, and driven from a console menu.

pub mod cli;
pub mod database;
pub mod observability;
pub mod storage;
