//! Text console boundary: prompts, the plant catalog and rendering.
//!
//! Everything here is generic over `BufRead`/`Write` so the binary can use
//! stdin/stdout while tests use in-memory buffers.

pub mod catalog;
pub mod error;
mod prompt;
pub mod render;

pub use catalog::Plant;
pub use error::InputError;
pub use prompt::{parse_decision, parse_range, parse_soil, Console};
