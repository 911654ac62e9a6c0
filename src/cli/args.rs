//! CLI argument definitions using clap
//!
//! Commands:
//! - opampdb [menu]
//! - opampdb show [--sort <key>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::database::SortKey;
use crate::observability::Severity;

/// opampdb - A small database of operational amplifiers
#[derive(Parser, Debug)]
#[command(name = "opampdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file (overrides the configuration)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Lowest log severity written to stderr (trace, info, warn, error, fatal)
    #[arg(long, global = true)]
    pub log_level: Option<Severity>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive menu (default)
    Menu,

    /// Load the database file, print it and exit
    Show {
        /// Order to print in (name, slew-rate, none)
        #[arg(long, default_value = "none")]
        sort: SortKey,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
