//! Control loop states and the decisions that move between them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of the control loop in its lifecycle.
///
/// ```text
/// Idle ──start──▶ RunningCycle ──144 ticks──▶ AwaitingUserDecision ──exit──▶ Terminated
///                      ▲                          │        ▲
///                      └────────continue──────────┘        └─view history─┘
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LoopState {
    Idle,
    RunningCycle,
    AwaitingUserDecision,
    Terminated,
}

impl LoopState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::RunningCycle => "RunningCycle",
            Self::AwaitingUserDecision => "AwaitingUserDecision",
            Self::Terminated => "Terminated",
        }
    }

    /// Terminated is the only final state.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// Check whether the lifecycle allows moving from `self` to `next` (pure).
    ///
    /// ```rust
    /// use greenhouse::core::LoopState;
    ///
    /// assert!(LoopState::Idle.can_transition_to(LoopState::RunningCycle));
    /// assert!(!LoopState::Idle.can_transition_to(LoopState::Terminated));
    /// assert!(!LoopState::Terminated.can_transition_to(LoopState::RunningCycle));
    /// ```
    pub fn can_transition_to(&self, next: LoopState) -> bool {
        use LoopState::*;
        matches!(
            (self, next),
            (Idle, RunningCycle)
                | (RunningCycle, AwaitingUserDecision)
                | (AwaitingUserDecision, RunningCycle)
                | (AwaitingUserDecision, AwaitingUserDecision)
                | (AwaitingUserDecision, Terminated)
        )
    }
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Choice offered to the user once a cycle has completed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Decision {
    /// Run another 24-hour cycle
    Continue,
    /// Show the full history and ask again
    ViewHistory,
    /// Stop the program
    Exit,
}

impl Decision {
    /// All decisions, in menu order.
    pub const ALL: [Decision; 3] = [Self::Continue, Self::ViewHistory, Self::Exit];

    /// Look up a decision by its 1-based menu position.
    pub fn from_menu(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// State the loop moves to when this decision is applied.
    pub fn target(&self) -> LoopState {
        match self {
            Self::Continue => LoopState::RunningCycle,
            Self::ViewHistory => LoopState::AwaitingUserDecision,
            Self::Exit => LoopState::Terminated,
        }
    }

    /// Menu text for this decision.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Continue => "Continue for another 24 hours",
            Self::ViewHistory => "View history of events",
            Self::Exit => "Exit program",
        }
    }
}
