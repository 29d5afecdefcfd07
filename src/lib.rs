//! Greenhouse: a simulated climate-control loop
//!
//! A greenhouse is watched by three simulated sensors (temperature, humidity,
//! soil moisture). Every tick the readings are compared to threshold settings
//! and the matching actuators (fan, sprinkler, pump) are activated. Each tick
//! is logged, and a cycle covers one simulated day of 144 ten-minute ticks.
//!
//! # Layout
//!
//! - [`core`]: pure data model and decision policy
//! - [`controller`]: the state machine that runs cycles and keeps the history
//! - [`config`]: TOML configuration
//! - [`console`]: prompts and rendering for the interactive binary
//!
//! # Example
//!
//! ```rust
//! use greenhouse::controller::{Controller, NoPause};
//! use greenhouse::core::{Decision, SoilType};
//!
//! let mut controller = Controller::new(SoilType::Clay.preset(), NoPause).with_seed(3);
//! controller.start().unwrap();
//!
//! for entry in controller.history().all().iter().take(3) {
//!     println!("{entry}");
//! }
//!
//! controller.decide(Decision::Exit).unwrap();
//! ```

pub mod config;
pub mod console;
pub mod controller;
pub mod core;

// Re-export commonly used types
pub use crate::controller::{Controller, Outcome};
pub use crate::core::{Decision, EventLog, History, LoopState, Settings, SoilType};
