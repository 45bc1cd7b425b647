//! The shared import pipeline: transform a batch, then persist it.
//!
//! Every driver is an [`Importer`]: a pure `plan` step from raw record to a
//! typed record and its target collection, with whatever lookups it needs
//! loaded up front. [`run_import`] does the rest (duplicate checks, inserts,
//! tallies and progress) the same way for every kind.

use ricettiva_catalog::{BookingCollision, EntityKind, Rejection};
use ricettiva_core::{MonthNames, RawRecord};
use ricettiva_db::OperationError;
use serde::Serialize;
use thiserror::Error;

use crate::progress::ImportProgress;
use crate::store::DocumentStore;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {message}")]
    Format { path: String, message: String },
    #[error("Booking id map: {0}")]
    BookingCollision(#[from] BookingCollision),
}

// ── Options and tallies ─────────────────────────────────────────────────────

/// Knobs shared by every driver.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Refuse to run when a booking id is stored in both property partitions.
    pub strict_booking_ids: bool,
    /// Month names for "month year" dates.
    pub months: MonthNames,
}

/// Statistics from a single import run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportStats {
    pub total: u64,
    pub success: u64,
    /// Every rejected record, unresolved references included.
    pub errors: u64,
    pub duplicates: u64,
    /// Rejections caused by a property reference that did not resolve.
    pub unresolved: u64,
}

/// Outcome of a run: tallies plus the rejected records, in input order.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub stats: ImportStats,
    pub rejections: Vec<Rejection>,
}

// ── Batch transform ─────────────────────────────────────────────────────────

/// Records split into accepted and rejected, both in input order.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub accepted: Vec<T>,
    pub rejections: Vec<Rejection>,
}

/// Apply `f` to every record. One bad record never stops the batch.
pub fn transform_batch<T, F>(records: &[RawRecord], mut f: F) -> BatchOutcome<T>
where
    F: FnMut(&RawRecord) -> Result<T, Rejection>,
{
    let mut outcome = BatchOutcome {
        accepted: Vec::with_capacity(records.len()),
        rejections: Vec::new(),
    };
    for raw in records {
        match f(raw) {
            Ok(t) => outcome.accepted.push(t),
            Err(rejection) => {
                log::debug!("{}", rejection);
                outcome.rejections.push(rejection);
            }
        }
    }
    outcome
}

// ── Importers ───────────────────────────────────────────────────────────────

/// Identity used to detect a record that is already stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateKey {
    /// A property, by booking id across both partitions.
    BookingId(i64),
    /// A city, by its Italian name.
    CityName(String),
}

/// A transformed record and where it goes.
#[derive(Debug, Clone)]
pub struct Planned<T> {
    pub collection: &'static str,
    pub record: T,
    pub duplicate_key: Option<DuplicateKey>,
}

impl<T> Planned<T> {
    pub fn new(collection: &'static str, record: T) -> Self {
        Self {
            collection,
            record,
            duplicate_key: None,
        }
    }

    pub fn with_duplicate_key(mut self, key: DuplicateKey) -> Self {
        self.duplicate_key = Some(key);
        self
    }
}

/// One kind of source record.
pub trait Importer {
    type Record: Serialize;

    fn entity(&self) -> EntityKind;

    /// Turn one raw record into a typed record, or reject it.
    fn plan(&self, raw: &RawRecord) -> Result<Planned<Self::Record>, Rejection>;
}

/// Plan every record without touching the store.
pub fn plan_batch<I: Importer + ?Sized>(
    importer: &I,
    records: &[RawRecord],
) -> BatchOutcome<Planned<I::Record>> {
    transform_batch(records, |raw| importer.plan(raw))
}

fn is_duplicate(store: &dyn DocumentStore, key: &DuplicateKey) -> Result<bool, ImportError> {
    Ok(match key {
        DuplicateKey::BookingId(id) => store.booking_id_exists(*id)?,
        DuplicateKey::CityName(name) => store.city_id(name)?.is_some(),
    })
}

/// Plan, de-duplicate and insert a batch.
///
/// Store faults abort the run; everything else is tallied.
pub fn run_import<I: Importer + ?Sized>(
    store: &dyn DocumentStore,
    importer: &I,
    records: &[RawRecord],
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportReport, ImportError> {
    let entity = importer.entity();
    if let Some(p) = progress {
        p.on_phase(&format!("Importing {} {} records", records.len(), entity));
    }

    let outcome = plan_batch(importer, records);
    let mut stats = ImportStats {
        total: records.len() as u64,
        errors: outcome.rejections.len() as u64,
        unresolved: outcome.rejections.iter().filter(|r| r.is_unresolved()).count() as u64,
        ..Default::default()
    };

    let total = outcome.accepted.len();
    for (i, planned) in outcome.accepted.into_iter().enumerate() {
        if let Some(key) = &planned.duplicate_key {
            if is_duplicate(store, key)? {
                log::info!("Duplicate {} {:?} skipped", entity, key);
                stats.duplicates += 1;
                if let Some(p) = progress {
                    p.on_record(i + 1, total);
                }
                continue;
            }
        }

        let document = serde_json::to_value(&planned.record)?;
        let id = store.insert(planned.collection, &document)?;
        log::debug!("Inserted {} {} into {}", entity, id, planned.collection);
        stats.success += 1;

        if let Some(p) = progress {
            p.on_record(i + 1, total);
        }
    }

    log::info!(
        "Import summary ({}): success {}, errors {}, duplicates {}, unresolved {}",
        entity,
        stats.success,
        stats.errors,
        stats.duplicates,
        stats.unresolved
    );
    if let Some(p) = progress {
        p.on_complete(&format!(
            "Import finished. Success: {}, Errors: {}, Duplicates: {}",
            stats.success, stats.errors, stats.duplicates
        ));
    }

    Ok(ImportReport {
        stats,
        rejections: outcome.rejections,
    })
}
