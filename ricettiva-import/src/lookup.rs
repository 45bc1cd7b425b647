//! Cross-record lookups loaded once per run.

use std::collections::HashMap;

use ricettiva_catalog::{
    BookingIdMap, DocumentId, EntityKind, FieldError, FieldProblem, FieldReader,
    PropertyCategory, RejectReason, Rejection,
};
use ricettiva_core::{RawRecord, parse_int, translate_city};

use crate::batch::ImportError;
use crate::store::DocumentStore;

/// Build the booking id map from both property partitions.
pub fn load_booking_map(
    store: &dyn DocumentStore,
    strict: bool,
) -> Result<BookingIdMap, ImportError> {
    let hotels = store.booking_refs(PropertyCategory::Htl)?;
    let apartments = store.booking_refs(PropertyCategory::Apt)?;
    let map = if strict {
        BookingIdMap::build_strict(hotels, apartments)?
    } else {
        BookingIdMap::build(hotels, apartments)
    };
    log::debug!(
        "Booking id map: {} entries, {} collisions",
        map.len(),
        map.collisions()
    );
    Ok(map)
}

/// Resolve the booking id under `key` to a stored property.
pub fn resolve_property(
    map: &BookingIdMap,
    raw: &RawRecord,
    key: &'static str,
    entity: EntityKind,
) -> Result<DocumentId, Rejection> {
    let Some(value) = FieldReader::new(raw).value(key) else {
        return Err(Rejection::new(entity, RejectReason::MissingPropertyRef, raw));
    };
    let Some(booking_id) = parse_int(value) else {
        let problem = FieldProblem::Unparseable(value.to_string());
        let errors = vec![FieldError { field: key, problem }];
        return Err(Rejection::new(entity, RejectReason::Invalid(errors), raw));
    };
    match map.resolve(booking_id) {
        Some(id) => Ok(id.clone()),
        None => Err(Rejection::new(
            entity,
            RejectReason::UnresolvedProperty(booking_id),
            raw,
        )),
    }
}

/// City name → stored city id.
#[derive(Debug, Clone, Default)]
pub struct CityIndex {
    ids: HashMap<String, DocumentId>,
}

impl CityIndex {
    pub fn load(store: &dyn DocumentStore) -> Result<Self, ImportError> {
        let mut ids = HashMap::new();
        for (name, id) in store.cities()? {
            // first stored wins, like a find-one lookup
            ids.entry(name).or_insert(id);
        }
        Ok(Self { ids })
    }

    pub fn get(&self, name: &str) -> Option<&DocumentId> {
        self.ids.get(name)
    }

    /// Translate an English city name, then look it up.
    ///
    /// Returns the translated name either way so callers can store or
    /// report it.
    pub fn resolve<'a>(&self, name: &'a str) -> (&'a str, Option<&DocumentId>) {
        let translated = translate_city(name.trim());
        (translated, self.get(translated))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
