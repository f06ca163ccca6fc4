//! SQLite export backend (feature `sqlite`).
//!
//! Writes the event log into one `events` table of a database file.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::EventWriter;
use crate::{Event, EventResult};

/// Writes the event log to an SQLite database.
pub struct SqliteEventWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteEventWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn create(path: &Path) -> EventResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 timestamp REAL    NOT NULL,
                 event     TEXT    NOT NULL,
                 drone_id  INTEGER,
                 detail    TEXT
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl EventWriter for SqliteEventWriter {
    fn write_events(&mut self, events: &[Event]) -> EventResult<()> {
        if events.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events (timestamp, event, drone_id, detail) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for event in events {
                stmt.execute(rusqlite::params![
                    event.timestamp_secs,
                    event.kind.as_str(),
                    event.drone.map(|d| d.0 as i64),
                    event.detail.as_deref(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> EventResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
