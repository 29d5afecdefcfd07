//! Event log entries and the simulated clock that timestamps them.

use super::sensor::Readings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Simulated minutes covered by one tick.
pub const MINUTES_PER_TICK: u16 = 10;

/// Ticks in one simulated hour.
pub const TICKS_PER_HOUR: u16 = 60 / MINUTES_PER_TICK;

/// Ticks in one cycle (a full simulated day).
pub const TICKS_PER_CYCLE: u16 = 24 * TICKS_PER_HOUR;

/// Time of day inside the simulation, derived from a tick index.
///
/// Displays as `H:MM`: the hour is not padded, the minutes always are.
///
/// ```rust
/// use greenhouse::core::SimTime;
///
/// assert_eq!(SimTime::from_tick(0).to_string(), "0:00");
/// assert_eq!(SimTime::from_tick(13).to_string(), "2:10");
/// assert_eq!(SimTime::from_tick(143).to_string(), "23:50");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct SimTime {
    tick: u16,
}

impl SimTime {
    /// Timestamp for a tick index. Indices past the end of the day wrap around.
    pub fn from_tick(tick: u16) -> Self {
        Self {
            tick: tick % TICKS_PER_CYCLE,
        }
    }

    /// Tick index within the day, `0..TICKS_PER_CYCLE`.
    pub fn tick(&self) -> u16 {
        self.tick
    }

    /// Hour of day, `0..24`.
    pub fn hour(&self) -> u16 {
        self.tick / TICKS_PER_HOUR
    }

    /// Minute within the hour, a multiple of ten.
    pub fn minute(&self) -> u16 {
        (self.tick % TICKS_PER_HOUR) * MINUTES_PER_TICK
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

/// Immutable record of one tick: what was measured and what was done about it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    /// 1-based cycle the entry belongs to
    pub cycle: u32,
    /// Simulated time of day
    pub time: SimTime,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    /// Descriptions of the actuators that fired, in activation order
    pub actions: Vec<String>,
    /// Wall-clock instant the entry was recorded
    pub recorded_at: DateTime<Utc>,
}

impl EventLog {
    /// Record one tick, stamped with the current wall-clock time.
    pub fn new(cycle: u32, time: SimTime, readings: Readings, actions: Vec<String>) -> Self {
        Self {
            cycle,
            time,
            temperature: readings.temperature,
            humidity: readings.humidity,
            soil_moisture: readings.soil_moisture,
            actions,
            recorded_at: Utc::now(),
        }
    }

    /// The three readings taken during this tick.
    pub fn readings(&self) -> Readings {
        Readings {
            temperature: self.temperature,
            humidity: self.humidity,
            soil_moisture: self.soil_moisture,
        }
    }

    /// Whether any actuator fired during this tick.
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }
}

/// Renders the console line for the entry.
impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Temp: {}°C, Humidity: {}%, Soil Moisture: {}%, Actions: ",
            self.time, self.temperature, self.humidity, self.soil_moisture
        )?;
        if self.actions.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&self.actions.join("; "))
        }
    }
}
