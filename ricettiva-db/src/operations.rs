//! Write and lookup operations on the `documents` table.

use std::sync::atomic::{AtomicU32, Ordering};

use ricettiva_catalog::{BookingRef, DocumentId};
use rusqlite::{Connection, params};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document body is not a JSON object (collection '{collection}')")]
    NotAnObject { collection: String },
}

// ── Document ids ────────────────────────────────────────────────────────────

static ID_COUNTER: AtomicU32 = AtomicU32::new(0);

/// A fresh 24-hex-character id: seconds, process id, then a counter.
///
/// Ids sort by creation second and never repeat within a process.
pub fn new_document_id() -> DocumentId {
    let secs = chrono::Utc::now().timestamp() as u32;
    let count = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    DocumentId(format!("{:08x}{:08x}{:08x}", secs, std::process::id(), count))
}

// ── Inserts ─────────────────────────────────────────────────────────────────

/// Insert a JSON document into a collection. Returns the assigned id.
///
/// A top-level integer `booking_id` is indexed alongside the body.
pub fn insert_document(
    conn: &Connection,
    collection: &str,
    body: &Value,
) -> Result<DocumentId, OperationError> {
    let Some(fields) = body.as_object() else {
        return Err(OperationError::NotAnObject {
            collection: collection.to_string(),
        });
    };
    let booking_id = fields.get("booking_id").and_then(Value::as_i64);
    let id = new_document_id();

    conn.execute(
        "INSERT INTO documents (id, collection, booking_id, body) VALUES (?1, ?2, ?3, ?4)",
        params![id.as_str(), collection, booking_id, body.to_string()],
    )?;
    Ok(id)
}

/// Serialize a typed record and insert it.
pub fn insert_record<T: Serialize>(
    conn: &Connection,
    collection: &str,
    record: &T,
) -> Result<DocumentId, OperationError> {
    let body = serde_json::to_value(record)?;
    insert_document(conn, collection, &body)
}

// ── Lookups ─────────────────────────────────────────────────────────────────

/// Find the document in `collection` holding this booking id.
pub fn find_by_booking_id(
    conn: &Connection,
    collection: &str,
    booking_id: i64,
) -> Result<Option<DocumentId>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id FROM documents WHERE collection = ?1 AND booking_id = ?2
         ORDER BY rowid LIMIT 1",
    )?;
    let result = stmt.query_row(params![collection, booking_id], |row| row.get::<_, String>(0));
    match result {
        Ok(id) => Ok(Some(DocumentId(id))),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Every (booking id, document id) pair in a collection, in insertion order.
pub fn booking_refs(conn: &Connection, collection: &str) -> Result<Vec<BookingRef>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT booking_id, id FROM documents
         WHERE collection = ?1 AND booking_id IS NOT NULL
         ORDER BY rowid",
    )?;
    let rows = stmt.query_map(params![collection], |row| {
        Ok(BookingRef::new(row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a city by its (Italian) name in the `Cities` collection.
pub fn find_city_id(conn: &Connection, name: &str) -> Result<Option<DocumentId>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id FROM documents
         WHERE collection = 'Cities' AND json_extract(body, '$.City') = ?1
         ORDER BY rowid LIMIT 1",
    )?;
    let result = stmt.query_row(params![name], |row| row.get::<_, String>(0));
    match result {
        Ok(id) => Ok(Some(DocumentId(id))),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn count_documents(conn: &Connection, collection: &str) -> Result<i64, OperationError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM documents WHERE collection = ?1",
        params![collection],
        |row| row.get(0),
    )?;
    Ok(count)
}

// ── Deletes ─────────────────────────────────────────────────────────────────

/// Delete every document in a collection. Returns the number removed.
pub fn purge_collection(conn: &Connection, collection: &str) -> Result<usize, OperationError> {
    let removed = conn.execute(
        "DELETE FROM documents WHERE collection = ?1",
        params![collection],
    )?;
    log::info!("Purged {} documents from {}", removed, collection);
    Ok(removed)
}
