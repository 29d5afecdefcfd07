//! Control loop error types.

use crate::core::LoopState;
use thiserror::Error;

/// Errors raised when the controller is driven out of order.
///
/// The loop itself cannot fail; these only report a call that the current
/// lifecycle state does not allow. The state is left unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    #[error("Cannot move from '{from}' to '{to}'")]
    IllegalTransition { from: LoopState, to: LoopState },

    #[error("Settings cannot be changed in state '{state}'")]
    SettingsLocked { state: LoopState },
}
