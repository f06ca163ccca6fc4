//! `vp-events` — the append-only domain event log and its export backends.
//!
//! The engine records every domain event (mission start/finish, clearance,
//! pad occupied/vacated, collision, unauthorized landing) into an in-memory
//! [`EventLog`] owned by that engine instance.  There is no process-wide
//! state — no shared buffer, no timestamped global filename — so any number
//! of instances can run in parallel threads without coordination.
//!
//! Export goes through the [`EventWriter`] trait:
//!
//! | Feature  | Backend | Output                                            |
//! |----------|---------|---------------------------------------------------|
//! | *(none)* | CSV     | one `events.csv`-style file, header row first     |
//! | `sqlite` | SQLite  | one `events` table in a database file             |
//!
//! The episode layer flushes a log to its writer exactly once, at episode
//! end; `finish` is idempotent so a double flush is harmless.

pub mod csv;
pub mod error;
pub mod event;
pub mod log;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::CsvEventWriter;
pub use error::{EventError, EventResult};
pub use event::{Event, EventKind};
pub use log::EventLog;
pub use writer::EventWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteEventWriter;
