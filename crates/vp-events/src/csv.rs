//! CSV export backend.
//!
//! Writes one file with a header row followed by one row per event:
//!
//! ```csv
//! timestamp,event,drone_id,detail
//! 0.0,mission_started,0,
//! 12.4,fato_occupied,0,FATO_0
//! ```
//!
//! `drone_id` and `detail` are empty for events that carry neither.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{Event, EventResult};

/// Writes the event log to a single CSV file.
pub struct CsvEventWriter {
    writer: Writer<File>,
    finished: bool,
}

impl CsvEventWriter {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> EventResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["timestamp", "event", "drone_id", "detail"])?;
        Ok(Self { writer, finished: false })
    }
}

impl EventWriter for CsvEventWriter {
    fn write_events(&mut self, events: &[Event]) -> EventResult<()> {
        for event in events {
            self.writer.write_record(&[
                event.timestamp_secs.to_string(),
                event.kind.as_str().to_string(),
                event.drone.map(|d| d.0.to_string()).unwrap_or_default(),
                event.detail.clone().unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> EventResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
