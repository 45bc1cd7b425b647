//! Full price-list snapshots → `FullPrices_HTL` / `FullPrices_APT`.

use ricettiva_catalog::{
    BookingIdMap, EntityKind, FieldReader, FullPriceEntry, PropertyTypeTable, Rejection,
};
use ricettiva_core::{AccommodationLevel, MonthNames, RawRecord, extract_listed};

use crate::batch::{ImportError, ImportOptions, ImportReport, Importer, Planned, run_import};
use crate::lookup::{load_booking_map, resolve_property};
use crate::progress::ImportProgress;
use crate::store::DocumentStore;

pub struct FullPriceImporter {
    types: PropertyTypeTable,
    bookings: BookingIdMap,
    months: MonthNames,
}

impl FullPriceImporter {
    pub fn new(store: &dyn DocumentStore, options: &ImportOptions) -> Result<Self, ImportError> {
        Ok(Self {
            types: store.property_types()?,
            bookings: load_booking_map(store, options.strict_booking_ids)?,
            months: options.months.clone(),
        })
    }
}

impl Importer for FullPriceImporter {
    type Record = FullPriceEntry;

    fn entity(&self) -> EntityKind {
        EntityKind::FullPrice
    }

    fn plan(&self, raw: &RawRecord) -> Result<Planned<FullPriceEntry>, Rejection> {
        let entity = EntityKind::FullPrice;
        let mut r = FieldReader::new(raw).with_months(&self.months);
        // Optional link, but a reference that does not resolve is rejected.
        let property_id = if r.has("PropertyId") {
            Some(resolve_property(&self.bookings, raw, "PropertyId", entity)?)
        } else {
            None
        };

        let accommodation_type = r.opt_text("AccomodationType");
        let accommodation_level = match &accommodation_type {
            Some(t) => Some(AccommodationLevel::classify(t)),
            None => r.opt_text("AccomodationLevel").and_then(|l| l.parse().ok()),
        };
        let occupancy = r.opt_text("Occupancy").map(|o| extract_listed(&o));

        let entry = FullPriceEntry {
            unique_id: r.int("uniqueId"),
            property_type: r.text("Type"),
            stars: r.int("Stars"),
            destination: r.text("Destination"),
            check_in: r.date("CheckIn"),
            check_out: r.date("CheckOut"),
            demand_pressure: r.opt_text("DemandPressure"),
            search_rank: r.opt_int("SearchRank"),
            search_page: r.opt_int("SearchPage"),
            accommodation_type,
            cancellation_policy: r.opt_text("CancellationPolicy"),
            treatment: r.opt_text("Treatment"),
            accommodation_level,
            occupancy_adult: occupancy.map(|o| o.adults),
            occupancy_kid: occupancy.map(|o| o.children),
            price_total: r.opt_float_lenient("PriceTot"),
            price_night: r.opt_float_lenient("PriceNight"),
            minimum_stay: r.opt_int("MinimumStay"),
            rooms_left: r.opt_int("RoomLeft"),
            is_offer: r.opt_flag("IsOffer"),
            offer_discount_value: r.opt_float_lenient("OfferDiscountValue"),
            offer_discount_percent: r.opt_float_lenient("OfferDiscountPercent"),
            offer_title: r.opt_text("OfferTitle"),
            offer_desc: r.opt_text("OfferDesc"),
            main_type: r.opt_text("MainType"),
            sub_type: r.opt_text("subType"),
            esg_rating: r.opt_text("ESG_Rating"),
            esg_score: r.opt_text("ESG_Score"),
            date_search: r.opt_date("DateSearch"),
            property_id,
        };
        let entry = r.finish_as(entity, entry)?;

        let category = self.types.classify_value(raw.get("Type"));
        Ok(Planned::new(entity.collection(category), entry))
    }
}

/// Import full price-list snapshots into the partition of each row's type.
pub fn import_full_prices(
    store: &dyn DocumentStore,
    records: &[RawRecord],
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportReport, ImportError> {
    let importer = FullPriceImporter::new(store, options)?;
    run_import(store, &importer, records, progress)
}
