//! Append-only event history.
//!
//! The history owns every entry the control loop produces. Entries are only
//! ever appended; nothing is removed or reordered within a run.

use super::event::EventLog;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ordered history of event log entries, oldest first.
///
/// # Example
///
/// ```rust
/// use greenhouse::core::{EventLog, History, Readings, SimTime};
///
/// let readings = Readings { temperature: 25.0, humidity: 65.0, soil_moisture: 50.0 };
///
/// let mut history = History::new();
/// history.append(EventLog::new(1, SimTime::from_tick(0), readings, Vec::new()));
/// history.append(EventLog::new(1, SimTime::from_tick(1), readings, Vec::new()));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.all()[1].time.to_string(), "0:10");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<EventLog>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry at the end.
    pub fn append(&mut self, entry: EventLog) {
        self.entries.push(entry);
    }

    /// All entries in the order they were appended.
    pub fn all(&self) -> &[EventLog] {
        &self.entries
    }

    /// Number of entries recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently appended entry.
    pub fn latest(&self) -> Option<&EventLog> {
        self.entries.last()
    }

    /// Entries recorded during the given 1-based cycle.
    pub fn cycle(&self, cycle: u32) -> impl Iterator<Item = &EventLog> {
        self.entries.iter().filter(move |entry| entry.cycle == cycle)
    }

    /// Wall-clock time between the first and last entry.
    ///
    /// Returns `None` for an empty history.
    pub fn span(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.recorded_at
            .signed_duration_since(first.recorded_at)
            .to_std()
            .ok()
    }
}
