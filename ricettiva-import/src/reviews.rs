//! Guest reviews → `Reviews`.

use ricettiva_catalog::{
    BookingIdMap, EntityKind, FieldReader, PropertyCategory, RejectReason, Rejection, Review,
};
use ricettiva_core::{MonthNames, RawRecord};

use crate::batch::{ImportError, ImportOptions, ImportReport, Importer, Planned, run_import};
use crate::lookup::{CityIndex, load_booking_map, resolve_property};
use crate::progress::ImportProgress;
use crate::store::DocumentStore;

pub struct ReviewImporter {
    bookings: BookingIdMap,
    cities: CityIndex,
    months: MonthNames,
}

impl ReviewImporter {
    pub fn new(store: &dyn DocumentStore, options: &ImportOptions) -> Result<Self, ImportError> {
        Ok(Self {
            bookings: load_booking_map(store, options.strict_booking_ids)?,
            cities: CityIndex::load(store)?,
            months: options.months.clone(),
        })
    }
}

impl Importer for ReviewImporter {
    type Record = Review;

    fn entity(&self) -> EntityKind {
        EntityKind::Review
    }

    fn plan(&self, raw: &RawRecord) -> Result<Planned<Review>, Rejection> {
        let property_id =
            resolve_property(&self.bookings, raw, "PropertyId", EntityKind::Review)?;

        let mut r = FieldReader::new(raw).with_months(&self.months);
        let destination = r.text("Destination");
        let mut city_id = None;
        if r.has("Destination") {
            let (city, id) = self.cities.resolve(&destination);
            let Some(id) = id else {
                return Err(Rejection::new(
                    EntityKind::Review,
                    RejectReason::UnknownCity(city.to_string()),
                    raw,
                ));
            };
            city_id = Some(id.clone());
        }

        let review = Review {
            name: r.text("Name"),
            property_type: r.text("Type"),
            stars: r.int("Stars"),
            reviewer_name: r.text("Nome"),
            nationality: r.text("Nazionalità"),
            room_type: r.text("Tipologia Camera"),
            length_of_stay: r.int("Durata Soggiorno"),
            staying_date: r.date("Data"),
            client_type: r.text("Tipologia Cliente"),
            vote: r.float("Voto"),
            title: r.text("Titolo Recensione"),
            positive: r.opt_text("Commento Positivo"),
            negative: r.opt_text("Commento Negativo"),
            property_id,
            // a missing Destination is already recorded
            city_id: city_id.unwrap_or_default(),
            destination,
        };
        let review = r.finish_as(EntityKind::Review, review)?;
        Ok(Planned::new(
            EntityKind::Review.collection(PropertyCategory::default()),
            review,
        ))
    }
}

/// Import reviews, linking each to its property and destination city.
pub fn import_reviews(
    store: &dyn DocumentStore,
    records: &[RawRecord],
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportReport, ImportError> {
    let importer = ReviewImporter::new(store, options)?;
    run_import(store, &importer, records, progress)
}
