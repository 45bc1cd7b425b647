//! The persistence seam the import drivers write through.

use ricettiva_catalog::{BookingRef, DocumentId, EntityKind, PropertyCategory, PropertyTypeTable};
use ricettiva_db::{OperationError, operations, queries};
use rusqlite::Connection;
use serde_json::Value;

/// What the drivers need from a document store.
pub trait DocumentStore {
    /// Insert a document, returning its assigned id.
    fn insert(&self, collection: &str, document: &Value) -> Result<DocumentId, OperationError>;

    fn count(&self, collection: &str) -> Result<i64, OperationError>;

    /// Whether either property partition already holds this booking id.
    fn booking_id_exists(&self, booking_id: i64) -> Result<bool, OperationError>;

    /// Booking ids stored in one property partition, in insertion order.
    fn booking_refs(&self, category: PropertyCategory) -> Result<Vec<BookingRef>, OperationError>;

    fn city_id(&self, name: &str) -> Result<Option<DocumentId>, OperationError>;

    /// Every stored city as (name, id), in insertion order.
    fn cities(&self) -> Result<Vec<(String, DocumentId)>, OperationError>;

    /// Seeded structure types, or the built-in table when none are seeded.
    fn property_types(&self) -> Result<PropertyTypeTable, OperationError>;
}

fn property_collection(category: PropertyCategory) -> &'static str {
    EntityKind::Property.collection(category)
}

impl DocumentStore for Connection {
    fn insert(&self, collection: &str, document: &Value) -> Result<DocumentId, OperationError> {
        operations::insert_document(self, collection, document)
    }

    fn count(&self, collection: &str) -> Result<i64, OperationError> {
        operations::count_documents(self, collection)
    }

    fn booking_id_exists(&self, booking_id: i64) -> Result<bool, OperationError> {
        for category in [PropertyCategory::Htl, PropertyCategory::Apt] {
            let collection = property_collection(category);
            if operations::find_by_booking_id(self, collection, booking_id)?.is_some() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn booking_refs(&self, category: PropertyCategory) -> Result<Vec<BookingRef>, OperationError> {
        operations::booking_refs(self, property_collection(category))
    }

    fn city_id(&self, name: &str) -> Result<Option<DocumentId>, OperationError> {
        operations::find_city_id(self, name)
    }

    fn cities(&self) -> Result<Vec<(String, DocumentId)>, OperationError> {
        let collection = EntityKind::City.collection(PropertyCategory::default());
        let docs = queries::list_documents(self, collection)?;
        Ok(docs
            .into_iter()
            .filter_map(|(id, body)| {
                let name = body.get("City")?.as_str()?.to_string();
                Some((name, id))
            })
            .collect())
    }

    fn property_types(&self) -> Result<PropertyTypeTable, OperationError> {
        queries::load_property_types(self)
    }
}
