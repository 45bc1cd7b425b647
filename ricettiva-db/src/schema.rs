//! The `documents` table and its version bookkeeping.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Store schema v{found} is newer than this build (v{supported})")]
    TooNew { supported: i32, found: i32 },
}

/// Schema version written by this build.
pub const CURRENT_VERSION: i32 = 1;

/// Create the tables and indexes that are missing and stamp the version.
///
/// Running it twice leaves a single version row.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    if get_schema_version(conn)? < CURRENT_VERSION {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION],
        )?;
    }
    Ok(())
}

/// Open the store file at `path`, creating the schema on first use.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    match get_schema_version(&conn)? {
        0 => create_schema(&conn)?,
        found if found > CURRENT_VERSION => {
            return Err(SchemaError::TooNew {
                supported: CURRENT_VERSION,
                found,
            });
        }
        _ => {}
    }

    log::debug!("Opened document store {} (schema v{})", path.display(), CURRENT_VERSION);
    Ok(conn)
}

/// A throwaway store in memory, for tests and dry runs.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Highest recorded schema version; 0 for a blank file.
pub fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let has_table = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'")?
        .exists([])?;
    if !has_table {
        return Ok(0);
    }
    let version = conn.query_row(
        "SELECT IFNULL(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- One row per stored document. booking_id is lifted out of property
-- bodies so duplicate checks and reference lookups can use the index.
CREATE TABLE IF NOT EXISTS documents (
    id TEXT PRIMARY KEY,
    collection TEXT NOT NULL,
    booking_id INTEGER,
    body TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_documents_collection_booking
    ON documents(collection, booking_id);
"#;
