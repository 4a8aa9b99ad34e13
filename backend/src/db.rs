use crate::error::ApiError;
use rusqlite::Connection;

/// SQLite database file, created next to the binary on first run.
pub const DB_PATH: &str = "qrify.sqlite";

/// Opens the history database. Every service opens its own connection; the
/// store never caches reads or writes.
pub fn open() -> Result<Connection, ApiError> {
    Connection::open(DB_PATH).map_err(|e| ApiError::Storage(e.to_string()))
}

/// Creates the history schema if missing. Called once at startup, before
/// the server starts accepting requests.
pub fn init_schema(conn: &Connection) -> Result<(), ApiError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS payloads (
            id TEXT PRIMARY KEY,
            owner_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            content TEXT NOT NULL,
            title TEXT,
            fields TEXT,
            customization TEXT,
            created_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_payloads_owner
            ON payloads (owner_id, created_at);",
    )
    .map_err(|e| ApiError::Storage(e.to_string()))
}
