//! Best-Available-Rate snapshots → `BAR_HTL` / `BAR_APT`.

use ricettiva_catalog::{
    BarEntry, BookingIdMap, EntityKind, FieldReader, PropertyTypeTable, RejectReason, Rejection,
};
use ricettiva_core::{AccommodationLevel, MonthNames, RawRecord};

use crate::batch::{ImportError, ImportOptions, ImportReport, Importer, Planned, run_import};
use crate::lookup::load_booking_map;
use crate::progress::ImportProgress;
use crate::store::DocumentStore;

pub struct BarImporter {
    types: PropertyTypeTable,
    bookings: BookingIdMap,
    months: MonthNames,
}

impl BarImporter {
    pub fn new(store: &dyn DocumentStore, options: &ImportOptions) -> Result<Self, ImportError> {
        Ok(Self {
            types: store.property_types()?,
            bookings: load_booking_map(store, options.strict_booking_ids)?,
            months: options.months.clone(),
        })
    }
}

impl Importer for BarImporter {
    type Record = BarEntry;

    fn entity(&self) -> EntityKind {
        EntityKind::Bar
    }

    fn plan(&self, raw: &RawRecord) -> Result<Planned<BarEntry>, Rejection> {
        let mut r = FieldReader::new(raw).with_months(&self.months);
        if !r.has("Città") || !r.has("Nome") {
            return Err(Rejection::new(EntityKind::Bar, RejectReason::Incomplete, raw));
        }

        // The property link is best effort: BAR rows are kept without one.
        let property_id = r.value("id").and_then(|v| self.bookings.resolve_value(v)).cloned();
        if property_id.is_none() {
            log::debug!("BAR entry without a stored property: {:?}", raw.get("id"));
        }

        let full_date = r.opt_date("FullDateSearch").or_else(|| r.opt_date("DataRicerca"));
        let entry = BarEntry {
            property_type: r.text("Tipologia"),
            stars: r.int("Stelle"),
            check_in: r.date("CheckIn"),
            check_out: r.date("CheckOut"),
            destination: r.text("Destinazione"),
            demand_pressure: r.opt_int("TIN"),
            search_rank: r.int("SearchRank"),
            search_page: r.int("SearchPage"),
            cancellation_policy: r.text("CancellationPolicy"),
            treatment: r.text("Trattamento"),
            accommodation_type: r.text("AccomodationType"),
            accommodation_level: AccommodationLevel::classify_value(raw.get("AccomodationType")),
            occupation: r.int("Occupazione"),
            price_total: r.float_lenient("TariffaTOT"),
            price_night: r.float_lenient("TariffaGG"),
            is_offer: r.flag("IsAnOffer"),
            offer_discount_value: r.opt_float_lenient("OfferDiscountValue"),
            offer_discount_percent: r.opt_float_lenient("OfferDiscountPercent"),
            offer_title: r.opt_text("OfferTitle"),
            offer_desc: r.opt_text("OfferDescription"),
            esg_rating: r.opt_text("ESG_Rating"),
            esg_score: r.opt_text("ESG_Score"),
            rooms_bar_left: r.opt_int("RoomsBARLeft"),
            date_search: r.date("DataRicerca"),
            full_date_search: r.require("FullDateSearch", full_date),
            property_id,
        };
        let entry = r.finish_as(EntityKind::Bar, entry)?;

        let category = self.types.classify_value(raw.get("Tipologia"));
        Ok(Planned::new(EntityKind::Bar.collection(category), entry))
    }
}

/// Import BAR snapshots into the partition of each row's structure type.
pub fn import_bar(
    store: &dyn DocumentStore,
    records: &[RawRecord],
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportReport, ImportError> {
    let importer = BarImporter::new(store, options)?;
    run_import(store, &importer, records, progress)
}
