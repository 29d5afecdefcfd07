//! Core greenhouse types and logic.
//!
//! This module contains the pure pieces of the control loop:
//! - Sensors and actuators as closed sets of variants
//! - Threshold settings and soil presets
//! - The decision policy
//! - Event log entries and the append-only history
//! - Loop states and user decisions
//!
//! Nothing in here sleeps, prompts, or logs. Those concerns live in
//! [`crate::controller`] and [`crate::console`].

mod actuator;
mod event;
mod history;
pub mod policy;
mod sensor;
mod settings;
mod state;

pub use actuator::{Actuator, ActuatorArray, ActuatorKind};
pub use event::{EventLog, SimTime, MINUTES_PER_TICK, TICKS_PER_CYCLE, TICKS_PER_HOUR};
pub use history::History;
pub use policy::PUMP_MOISTURE_THRESHOLD;
pub use sensor::{Readings, Sensor, SensorArray, SensorKind};
pub use settings::{Settings, SoilType};
pub use state::{Decision, LoopState};
