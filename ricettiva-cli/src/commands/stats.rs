use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::config::Settings;

/// Per-collection document counts. Also confirms the store opens.
pub(crate) fn run_stats(settings: &Settings) -> Result<(), CliError> {
    let db_path = &settings.db.value;
    if !db_path.exists() {
        log::warn!("No database found at {}", db_path.display());
        log::info!("Run 'ricettiva seed property-types' to create one.");
        return Ok(());
    }

    let conn = super::open_store(db_path)?;
    let stats = ricettiva_db::collection_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query stats: {}", e)))?;

    log::info!(
        "{}",
        "Document Store Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    for (collection, count) in &stats.collections {
        let line = format!("  {:<22} {:>8}", collection, count);
        if *count == 0 {
            log::info!("{}", line.if_supports_color(Stdout, |t| t.dimmed()));
        } else {
            log::info!("{}", line);
        }
    }
    crate::log_blank();
    log::info!("  {:<22} {:>8}", "Total", stats.total());

    Ok(())
}
