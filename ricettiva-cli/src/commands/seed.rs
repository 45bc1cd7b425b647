use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use ricettiva_import::{ImportReport, SkippedLog, load_records, seed_cities, seed_property_types};

use crate::CliError;
use crate::config::Settings;
use crate::progress::BarProgress;

use super::{open_store, reference_data};

/// Seed `Property_Types` from a YAML file, the reference dir, or the
/// built-in table, in that order.
pub(crate) fn run_seed_property_types(
    settings: &Settings,
    from: Option<PathBuf>,
) -> Result<(), CliError> {
    let table = match &from {
        Some(path) => ricettiva_catalog::load_property_types(path)?,
        None => reference_data(settings)?.property_types,
    };
    let source = match (&from, &settings.reference_dir) {
        (Some(path), _) => path.display().to_string(),
        (None, Some(dir)) => dir.value.display().to_string(),
        (None, None) => "built-in table".to_string(),
    };

    let conn = open_store(&settings.db.value)?;
    log::info!(
        "{}",
        format!("Seeding {} property type(s) from {}", table.len(), source)
            .if_supports_color(Stdout, |t| t.bold()),
    );
    let report = seed_property_types(&conn, &table)?;
    print_seed_summary("Property types", &report);
    Ok(())
}

/// Seed `Cities` from a JSON export.
pub(crate) fn run_seed_cities(settings: &Settings, file: &Path, quiet: bool) -> Result<(), CliError> {
    let records = load_records(file)?;
    let conn = open_store(&settings.db.value)?;
    let progress = BarProgress::new(quiet);
    let report = seed_cities(&conn, &records, Some(&progress))?;

    if !report.rejections.is_empty() {
        let mut skipped = SkippedLog::open(&settings.skipped.value)?;
        skipped.write_all(&report.rejections)?;
        skipped.flush()?;
        log::warn!(
            "{} city record(s) without a name, see {}",
            skipped.written(),
            skipped.path().display()
        );
    }
    print_seed_summary("Cities", &report);
    Ok(())
}

fn print_seed_summary(label: &str, report: &ImportReport) {
    log::info!(
        "  {} {}: {} new, {} already present",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        label.if_supports_color(Stdout, |t| t.bold()),
        report.stats.success,
        report.stats.duplicates,
    );
}
