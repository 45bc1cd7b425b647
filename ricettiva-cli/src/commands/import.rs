use std::io;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use ricettiva_core::RawRecord;
use ricettiva_import::{
    BarImporter, DocumentStore, FullPriceImporter, ImportOptions, ImportReport, Importer,
    PropertyImporter, ReputationImporter, ReviewImporter, RoomImporter, SkippedLog, load_records,
    plan_batch, run_import as run_batch,
};

use crate::CliError;
use crate::cli_types::{ImportArgs, ImportKind};
use crate::config::Settings;
use crate::progress::BarProgress;

use super::{ask, is_yes, open_store, reference_data};

/// Import one JSON export.
///
/// The run happens inside a transaction: `--dry-run` or a declined preview
/// leaves the store untouched.
pub(crate) fn run_import(
    settings: &Settings,
    args: ImportArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let records = load_records(&args.file)?;
    if records.is_empty() {
        log::warn!("No records in {}", args.file.display());
        return Ok(());
    }

    let conn = open_store(&settings.db.value)?;
    let reference = reference_data(settings)?;
    let options = ImportOptions {
        strict_booking_ids: args.strict_booking_ids,
        months: reference.months,
    };

    log::info!(
        "{}",
        format!(
            "Importing {} record(s) from {} into {}",
            records.len(),
            args.file.display(),
            settings.db.value.display()
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| CliError::database(format!("Failed to start transaction: {}", e)))?;
    let store: &dyn DocumentStore = &*tx;

    let report = match args.kind {
        ImportKind::Properties => {
            let importer = PropertyImporter::new(store, &options)?;
            import_with(store, &importer, &records, &args, quiet)?
        }
        ImportKind::Rooms => {
            let importer = RoomImporter::new(store, &options)?;
            import_with(store, &importer, &records, &args, quiet)?
        }
        ImportKind::Reviews => {
            let importer = ReviewImporter::new(store, &options)?;
            import_with(store, &importer, &records, &args, quiet)?
        }
        ImportKind::Reputation => {
            let importer = ReputationImporter::new(store, &options)?;
            import_with(store, &importer, &records, &args, quiet)?
        }
        ImportKind::Bar => {
            let importer = BarImporter::new(store, &options)?;
            import_with(store, &importer, &records, &args, quiet)?
        }
        ImportKind::FullPrices => {
            let importer = FullPriceImporter::new(store, &options)?;
            import_with(store, &importer, &records, &args, quiet)?
        }
    };

    let Some(report) = report else {
        log::info!("Import cancelled.");
        return Ok(());
    };

    if !report.rejections.is_empty() {
        let path = settings.skipped_path(args.skipped.clone());
        let mut skipped = SkippedLog::open(&path)?;
        skipped.write_all(&report.rejections)?;
        skipped.flush()?;
        log::info!(
            "  {} rejected record(s) appended to {}",
            skipped.written(),
            skipped.path().display()
        );
    }

    if args.dry_run {
        tx.rollback()
            .map_err(|e| CliError::database(format!("Failed to roll back: {}", e)))?;
    } else {
        tx.commit()
            .map_err(|e| CliError::database(format!("Failed to commit: {}", e)))?;
    }

    print_summary(&report, args.dry_run);
    Ok(())
}

/// Preview, confirm, then run. `None` when the user declines.
fn import_with<I: Importer>(
    store: &dyn DocumentStore,
    importer: &I,
    records: &[RawRecord],
    args: &ImportArgs,
    quiet: bool,
) -> Result<Option<ImportReport>, CliError> {
    if let Some(n) = args.preview {
        print_preview(importer, records, n)?;
        if !args.yes {
            let answer = ask("Proceed with the import? [y/N] ", &mut io::stdin().lock())?;
            if !is_yes(&answer) {
                return Ok(None);
            }
        }
    }

    let progress = BarProgress::new(quiet);
    Ok(Some(run_batch(store, importer, records, Some(&progress))?))
}

fn print_preview<I: Importer>(importer: &I, records: &[RawRecord], n: usize) -> Result<(), CliError> {
    let sample = &records[..n.min(records.len())];
    let outcome = plan_batch(importer, sample);

    log::info!(
        "{}",
        format!("Preview of the first {} record(s):", sample.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for planned in &outcome.accepted {
        let body = serde_json::to_string_pretty(&planned.record)
            .map_err(|e| CliError::other(format!("Cannot render preview: {}", e)))?;
        log::info!(
            "{} {}",
            "\u{2192}".if_supports_color(Stdout, |t| t.green()),
            planned.collection.if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("{}", body);
    }
    for rejection in &outcome.rejections {
        log::info!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            rejection,
        );
    }
    crate::log_blank();
    Ok(())
}

fn print_summary(report: &ImportReport, dry_run: bool) {
    let stats = &report.stats;
    crate::log_blank();
    let title = if dry_run {
        "Dry run complete (rolled back)"
    } else {
        "Import complete"
    };
    log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Records:     {:>8}", stats.total);
    log::info!(
        "  {} Inserted:  {:>8}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.success
    );
    log::info!("  Duplicates:  {:>8}", stats.duplicates);
    log::info!(
        "  {} Rejected:  {:>8}",
        "\u{2718}".if_supports_color(Stdout, |t| t.red()),
        stats.errors
    );
    if stats.unresolved > 0 {
        log::info!("    unresolved property references: {}", stats.unresolved);
    }
}
