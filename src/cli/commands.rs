//! CLI command implementations

use std::io::{self, Write};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::CliResult;
use super::menu::Menu;
use crate::database::{RecordStore, SortKey};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Run a parsed command line
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = resolve_config(&cli)?;
    Logger::set_min_severity(config.severity()?);
    log_event(Event::Startup);

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => menu(&config),
        Command::Show { sort } => show(&config, sort),
    }
}

/// Loads the config file if one was given, then applies flag overrides
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            let path_text = path.display().to_string();
            log_event_with_fields(Event::ConfigLoaded, &[("path", path_text.as_str())]);
            config
        }
        None => Config::default(),
    };

    Ok(config.with_overrides(cli.file.clone(), cli.log_level))
}

/// Interactive menu on stdin/stdout
pub fn menu(config: &Config) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Menu::new(stdin.lock(), stdout.lock(), config.database_file.clone());
    session.run()
}

/// Load the database file, sort it, and print it to stdout
pub fn show(config: &Config, sort: SortKey) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    show_to(config, sort, &mut stdout)
}

/// `show` against any writer
pub fn show_to<W: Write>(config: &Config, sort: SortKey, out: &mut W) -> CliResult<()> {
    let mut store = RecordStore::new();
    store.load(&config.database_file)?;
    store.sort(sort);
    store.display(out)?;
    out.flush()?;
    Ok(())
}
