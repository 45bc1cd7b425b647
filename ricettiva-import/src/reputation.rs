//! Reputation scores → `Reputation_KPI_Table`.

use ricettiva_catalog::{
    BookingIdMap, EntityKind, FieldReader, PropertyCategory, Rejection, ReputationKpi,
};
use ricettiva_core::{MonthNames, RawRecord};

use crate::batch::{ImportError, ImportOptions, ImportReport, Importer, Planned, run_import};
use crate::lookup::{load_booking_map, resolve_property};
use crate::progress::ImportProgress;
use crate::store::DocumentStore;

pub struct ReputationImporter {
    bookings: BookingIdMap,
    months: MonthNames,
}

impl ReputationImporter {
    pub fn new(store: &dyn DocumentStore, options: &ImportOptions) -> Result<Self, ImportError> {
        Ok(Self {
            bookings: load_booking_map(store, options.strict_booking_ids)?,
            months: options.months.clone(),
        })
    }
}

impl Importer for ReputationImporter {
    type Record = ReputationKpi;

    fn entity(&self) -> EntityKind {
        EntityKind::ReputationKpi
    }

    fn plan(&self, raw: &RawRecord) -> Result<Planned<ReputationKpi>, Rejection> {
        let entity = EntityKind::ReputationKpi;
        let property_id = resolve_property(&self.bookings, raw, "PropertyId", entity)?;

        let mut r = FieldReader::new(raw).with_months(&self.months);
        // The full timestamp is optional in the feed; the search day is not.
        let full_date = r.opt_date("FullDataRicerca").or_else(|| r.opt_date("DataRicerca"));
        let kpi = ReputationKpi {
            wifi_score: r.opt_text("WiFi"),
            quality_price_score: r.opt_float("QualitàPrezzo"),
            position_score: r.opt_float("Posizione"),
            clean_score: r.opt_float("Pulizia"),
            comfort_score: r.opt_float("Comfort"),
            service_score: r.opt_float("Servizi"),
            staff_score: r.opt_float("Staff"),
            reviews: r.opt_int("Recensioni"),
            score: r.opt_float("Score"),
            valuation: r.opt_text("Valutazione"),
            full_date_search: r.require("FullDataRicerca", full_date),
            date_search: r.date("DataRicerca"),
            property_id,
        };
        let kpi = r.finish_as(entity, kpi)?;
        Ok(Planned::new(entity.collection(PropertyCategory::default()), kpi))
    }
}

/// Import reputation KPIs, linking each to its property by booking id.
pub fn import_reputation(
    store: &dyn DocumentStore,
    records: &[RawRecord],
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportReport, ImportError> {
    let importer = ReputationImporter::new(store, options)?;
    run_import(store, &importer, records, progress)
}
