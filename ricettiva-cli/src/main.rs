//! ricettiva CLI
//!
//! Imports hotel and apartment exports into the document store, seeds the
//! reference collections and inspects what is stored.

mod cli_types;
mod commands;
mod config;
mod error;
mod logging;
mod progress;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction, SeedAction};
pub(crate) use error::CliError;

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = config::Settings::load(cli.db)?;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Import(args) => commands::import::run_import(&settings, args, quiet),
        Commands::Seed { action } => match action {
            SeedAction::PropertyTypes { from } => {
                commands::seed::run_seed_property_types(&settings, from)
            }
            SeedAction::Cities { file } => commands::seed::run_seed_cities(&settings, &file, quiet),
        },
        Commands::Purge { collection, yes } => {
            commands::purge::run_purge(&settings, &collection, yes)
        }
        Commands::Stats => commands::stats::run_stats(&settings),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
