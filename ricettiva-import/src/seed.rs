//! Reference collections: `Property_Types` and `Cities`.

use std::collections::HashSet;

use ricettiva_catalog::{
    City, EntityKind, FieldError, FieldProblem, FieldReader, PropertyCategory, PropertyTypeTable,
    RejectReason, Rejection,
};
use ricettiva_core::{RawRecord, translate_city};

use crate::batch::{
    DuplicateKey, ImportError, ImportReport, ImportStats, Importer, Planned, run_import,
};
use crate::progress::ImportProgress;
use crate::store::DocumentStore;

/// Insert the structure-type table. Codes already seeded count as duplicates.
pub fn seed_property_types(
    store: &dyn DocumentStore,
    table: &PropertyTypeTable,
) -> Result<ImportReport, ImportError> {
    let collection = EntityKind::PropertyType.collection(PropertyCategory::default());
    let existing: HashSet<i64> = if store.count(collection)? > 0 {
        store.property_types()?.entries().iter().map(|e| e.code).collect()
    } else {
        HashSet::new()
    };

    let mut stats = ImportStats {
        total: table.len() as u64,
        ..Default::default()
    };
    for entry in table.entries() {
        if existing.contains(&entry.code) {
            log::info!("Property type {} ({}) already seeded", entry.name, entry.code);
            stats.duplicates += 1;
            continue;
        }
        let id = store.insert(collection, &serde_json::to_value(entry)?)?;
        log::debug!("Inserted property type {} ({}) as {}", entry.name, entry.code, id);
        stats.success += 1;
    }

    log::info!(
        "Seeded {} property types ({} already present)",
        stats.success,
        stats.duplicates
    );
    Ok(ImportReport {
        stats,
        rejections: Vec::new(),
    })
}

/// Cities from a `{City|Città, Region|Regione}` list, stored under their
/// Italian names.
pub struct CityImporter;

impl Importer for CityImporter {
    type Record = City;

    fn entity(&self) -> EntityKind {
        EntityKind::City
    }

    fn plan(&self, raw: &RawRecord) -> Result<Planned<City>, Rejection> {
        let r = FieldReader::new(raw);
        let Some(name) = r.opt_text("City").or_else(|| r.opt_text("Città")) else {
            let errors = vec![FieldError {
                field: "City",
                problem: FieldProblem::Missing,
            }];
            return Err(Rejection::new(EntityKind::City, RejectReason::Invalid(errors), raw));
        };

        let name = translate_city(&name).to_string();
        let city = City {
            region: r.opt_text("Region").or_else(|| r.opt_text("Regione")),
            name: name.clone(),
        };
        Ok(
            Planned::new(EntityKind::City.collection(PropertyCategory::default()), city)
                .with_duplicate_key(DuplicateKey::CityName(name)),
        )
    }
}

/// Seed the `Cities` collection. Names already stored count as duplicates.
pub fn seed_cities(
    store: &dyn DocumentStore,
    records: &[RawRecord],
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportReport, ImportError> {
    run_import(store, &CityImporter, records, progress)
}
