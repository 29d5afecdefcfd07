//! The imperative shell around the pure core.
//!
//! The controller drives sensors, the policy and actuators through repeated
//! 24-hour cycles and keeps the history. Wall-clock pacing is delegated to a
//! [`Pacer`] so tests can run whole cycles without sleeping.

pub mod error;
mod machine;
mod pacing;

pub use error::ControlError;
pub use machine::{Controller, CycleSummary, Outcome, StateChange, DEFAULT_TICK_DELAY};
pub use pacing::{NoPause, Pacer, RecordingPacer, ThreadPacer};
