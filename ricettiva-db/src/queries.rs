//! Read queries over the document store.

use std::collections::HashMap;

use ricettiva_catalog::{
    DocumentId, EntityKind, PropertyCategory, PropertyTypeEntry, PropertyTypeTable,
};
use rusqlite::{Connection, params};
use serde_json::Value;

use crate::operations::OperationError;

fn parse_body(body: String) -> Result<Value, OperationError> {
    serde_json::from_str(&body).map_err(Into::into)
}

/// Fetch one document body by id.
pub fn get_document(conn: &Connection, id: &DocumentId) -> Result<Option<Value>, OperationError> {
    let mut stmt = conn.prepare("SELECT body FROM documents WHERE id = ?1")?;
    let result = stmt.query_row(params![id.as_str()], |row| row.get::<_, String>(0));
    match result {
        Ok(body) => parse_body(body).map(Some),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All documents of a collection, in insertion order.
pub fn list_documents(
    conn: &Connection,
    collection: &str,
) -> Result<Vec<(DocumentId, Value)>, OperationError> {
    let mut stmt =
        conn.prepare("SELECT id, body FROM documents WHERE collection = ?1 ORDER BY rowid")?;
    let rows = stmt.query_map(params![collection], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for row in rows {
        let (id, body) = row?;
        out.push((DocumentId(id), parse_body(body)?));
    }
    Ok(out)
}

/// The structure-type table as seeded in `Property_Types`.
///
/// An unseeded store yields the built-in table.
pub fn load_property_types(conn: &Connection) -> Result<PropertyTypeTable, OperationError> {
    let collection = EntityKind::PropertyType.collection(PropertyCategory::default());
    let docs = list_documents(conn, collection)?;
    if docs.is_empty() {
        log::debug!("{} is empty, using built-in structure types", collection);
        return Ok(PropertyTypeTable::builtin());
    }

    let entries = docs
        .into_iter()
        .map(|(_, body)| serde_json::from_value::<PropertyTypeEntry>(body))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PropertyTypeTable::new(entries))
}

// ── Stats ───────────────────────────────────────────────────────────────────

/// Document counts per collection.
pub fn collection_stats(conn: &Connection) -> Result<CollectionStats, OperationError> {
    let mut stmt =
        conn.prepare("SELECT collection, COUNT(*) FROM documents GROUP BY collection")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))?;
    let mut found: HashMap<String, i64> = rows.collect::<Result<_, _>>()?;

    let mut collections: Vec<(String, i64)> = EntityKind::all_collections()
        .iter()
        .map(|name| (name.to_string(), found.remove(*name).unwrap_or(0)))
        .collect();

    // Collections written by something other than the import jobs.
    let mut extra: Vec<(String, i64)> = found.into_iter().collect();
    extra.sort();
    collections.extend(extra);

    Ok(CollectionStats { collections })
}

/// Summary statistics for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStats {
    /// Known collections first (zero when empty), then any others by name.
    pub collections: Vec<(String, i64)>,
}

impl CollectionStats {
    pub fn total(&self) -> i64 {
        self.collections.iter().map(|(_, n)| n).sum()
    }

    pub fn count(&self, collection: &str) -> i64 {
        self.collections
            .iter()
            .find(|(name, _)| name == collection)
            .map_or(0, |(_, n)| *n)
    }
}
