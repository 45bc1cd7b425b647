//! Hotel and apartment listings → `Properties_HTL` / `Properties_APT`.

use ricettiva_catalog::{
    EntityKind, FieldReader, Property, PropertyTypeTable, RejectReason, Rejection,
};
use ricettiva_core::{MonthNames, RawRecord};

use crate::batch::{
    DuplicateKey, ImportError, ImportOptions, ImportReport, Importer, Planned, run_import,
};
use crate::lookup::CityIndex;
use crate::progress::ImportProgress;
use crate::store::DocumentStore;

pub struct PropertyImporter {
    types: PropertyTypeTable,
    cities: CityIndex,
    months: MonthNames,
}

impl PropertyImporter {
    pub fn new(store: &dyn DocumentStore, options: &ImportOptions) -> Result<Self, ImportError> {
        Ok(Self {
            types: store.property_types()?,
            cities: CityIndex::load(store)?,
            months: options.months.clone(),
        })
    }
}

impl Importer for PropertyImporter {
    type Record = Property;

    fn entity(&self) -> EntityKind {
        EntityKind::Property
    }

    fn plan(&self, raw: &RawRecord) -> Result<Planned<Property>, Rejection> {
        let mut r = FieldReader::new(raw).with_months(&self.months);
        if !r.has("Città") || !r.has("Nome") {
            return Err(Rejection::new(EntityKind::Property, RejectReason::Incomplete, raw));
        }

        let city_raw = r.text("Città");
        let (city, city_id) = self.cities.resolve(&city_raw);
        let Some(city_id) = city_id.cloned() else {
            log::warn!("City '{}' (translated: '{}') not found", city_raw, city);
            return Err(Rejection::new(
                EntityKind::Property,
                RejectReason::UnknownCity(city.to_string()),
                raw,
            ));
        };

        let property = Property {
            name: r.text("Nome"),
            booking_id: r.int("id"),
            type_structure: r.text("Tipologia"),
            stars: r.int("Stelle"),
            city: city.to_string(),
            address: r.text("Indirizzo"),
            distance_centre: r.float_lenient("DistanzaCentro"),
            url: r.text("url"),
            latitude: r.float("LAT"),
            longitude: r.float("LNG"),
            cir_cin: r.text("Cir"),
            zone: r.opt_text("Zona"),
            rooms_num: r.opt_int("numCamere"),
            seasonality: r.opt_text("stagionalita"),
            total_accom_types: r.opt_int("totTipiAlloggi"),
            beds_num: r.opt_int("numLetti"),
            city_id,
        };
        let property = r.finish_as(EntityKind::Property, property)?;

        let category = self.types.classify_value(raw.get("Tipologia"));
        let booking_id = property.booking_id;
        Ok(Planned::new(EntityKind::Property.collection(category), property)
            .with_duplicate_key(DuplicateKey::BookingId(booking_id)))
    }
}

/// Import property listings. Records already stored (by booking id) are
/// counted as duplicates.
pub fn import_properties(
    store: &dyn DocumentStore,
    records: &[RawRecord],
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportReport, ImportError> {
    let importer = PropertyImporter::new(store, options)?;
    run_import(store, &importer, records, progress)
}
