//! CLI module for opampdb
//!
//! Provides:
//! - menu: interactive enter / save / load / sort / display loop
//! - show: one-shot load and print of the database file

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod menu;

pub use args::{Cli, Command};
pub use commands::{menu, resolve_config, run, run_command, show, show_to};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::Console;
pub use menu::Menu;
