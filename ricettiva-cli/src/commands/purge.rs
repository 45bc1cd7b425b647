use std::io::{self, BufRead};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use ricettiva_catalog::EntityKind;

use crate::CliError;
use crate::config::Settings;

use super::{ask, open_store};

/// Only an exact, upper-case `YES` confirms a purge.
fn confirmed(answer: &str) -> bool {
    answer == "YES"
}

fn confirm_purge(collection: &str, count: i64, input: &mut dyn BufRead) -> Result<bool, CliError> {
    log::warn!(
        "This will permanently delete {} document(s) from '{}'.",
        count,
        collection
    );
    let answer = ask("Type YES to continue: ", input)?;
    Ok(confirmed(&answer))
}

/// Delete every document in one collection.
pub(crate) fn run_purge(settings: &Settings, collection: &str, yes: bool) -> Result<(), CliError> {
    if !EntityKind::is_known_collection(collection) {
        log::warn!("'{}' is not one of the import collections", collection);
    }

    let conn = open_store(&settings.db.value)?;
    let count = ricettiva_db::count_documents(&conn, collection)
        .map_err(|e| CliError::database(format!("Failed to count '{}': {}", collection, e)))?;
    if count == 0 {
        log::info!("Collection '{}' is already empty.", collection);
        return Ok(());
    }

    if !yes && !confirm_purge(collection, count, &mut io::stdin().lock())? {
        log::info!("Purge cancelled.");
        return Ok(());
    }

    let deleted = ricettiva_db::purge_collection(&conn, collection)
        .map_err(|e| CliError::database(format!("Failed to purge '{}': {}", collection, e)))?;
    log::info!(
        "{} Deleted {} document(s) from {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        deleted,
        collection.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
