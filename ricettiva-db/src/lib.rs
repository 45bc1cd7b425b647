//! SQLite-backed document store for the import jobs.
//!
//! Every collection lives in one `documents` table as JSON bodies, keyed by
//! store-assigned ids. Properties also index their booking id so duplicate
//! checks and foreign-key resolution stay cheap.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, booking_refs, count_documents, find_by_booking_id, find_city_id,
    insert_document, insert_record, new_document_id, purge_collection,
};
pub use queries::{
    CollectionStats, collection_stats, get_document, list_documents, load_property_types,
};
pub use schema::{open_database, open_memory};
