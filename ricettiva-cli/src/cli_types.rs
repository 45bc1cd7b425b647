//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ricettiva")]
#[command(about = "Import hotel and apartment exports into the document store", long_about = None)]
pub(crate) struct Cli {
    /// Database file (overrides RICETTIVA_DB and the config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// The export a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ImportKind {
    /// Hotel and apartment listings
    Properties,
    /// Room details, linked by booking id
    Rooms,
    /// Guest reviews
    Reviews,
    /// Reputation scores
    Reputation,
    /// Best-available-rate searches
    Bar,
    /// Full-price searches
    FullPrices,
}

#[derive(Args, Clone)]
pub(crate) struct ImportArgs {
    /// Kind of records in the file
    #[arg(value_enum)]
    pub kind: ImportKind,

    /// JSON file holding an array of records
    pub file: PathBuf,

    /// Run the whole import, then roll it back
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the first N transformed records before importing
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,

    /// Don't ask for confirmation after the preview
    #[arg(short, long)]
    pub yes: bool,

    /// Append rejected records to this JSON-lines file
    #[arg(long)]
    pub skipped: Option<PathBuf>,

    /// Abort when a booking id is stored as both hotel and apartment
    #[arg(long)]
    pub strict_booking_ids: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Import a JSON export
    Import(ImportArgs),

    /// Seed reference collections
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },

    /// Delete every document in a collection
    Purge {
        /// Collection name (e.g., Rooms, BAR_HTL)
        collection: String,

        /// Skip the typed confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show document counts per collection
    Stats,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum SeedAction {
    /// Seed the structure-type table
    PropertyTypes {
        /// YAML list of {code, name, category} (defaults to the reference dir, then built-ins)
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// Seed cities from a JSON export
    Cities {
        /// JSON file of {City|Città, Region|Regione} records
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and their sources
    Show,

    /// Print the config file path
    Path,
}
