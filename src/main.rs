//! opampdb CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. Errors are logged at
//! FATAL, printed to stderr, and the process exits non-zero. Store errors
//! inside the menu never reach this point.

use opampdb::cli;
use opampdb::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::fatal(
            "OPAMPDB_EXIT_FAILURE",
            &[("code", e.code_str()), ("message", e.message())],
        );
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
