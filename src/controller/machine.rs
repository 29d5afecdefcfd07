//! The greenhouse controller: a state machine that runs the control loop.

use crate::controller::error::ControlError;
use crate::controller::pacing::Pacer;
use crate::core::{
    policy, ActuatorArray, ActuatorKind, Decision, EventLog, History, LoopState, SensorArray,
    Settings, SimTime, TICKS_PER_CYCLE,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, info_span, trace, warn};
use uuid::Uuid;

/// Pause requested after each tick unless configured otherwise.
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(100);

/// Record of one accepted lifecycle change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    pub from: LoopState,
    pub to: LoopState,
    pub timestamp: DateTime<Utc>,
}

/// What happened during one completed cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSummary {
    /// 1-based cycle number
    pub cycle: u32,
    pub ticks: u16,
    pub fan: usize,
    pub sprinkler: usize,
    pub pump: usize,
}

impl CycleSummary {
    fn new(cycle: u32) -> Self {
        Self {
            cycle,
            ticks: 0,
            fan: 0,
            sprinkler: 0,
            pump: 0,
        }
    }

    /// Number of ticks in which the given actuator fired.
    pub fn activations(&self, kind: ActuatorKind) -> usize {
        match kind {
            ActuatorKind::Fan => self.fan,
            ActuatorKind::Sprinkler => self.sprinkler,
            ActuatorKind::Pump => self.pump,
        }
    }

    fn count(&mut self, kind: ActuatorKind) {
        match kind {
            ActuatorKind::Fan => self.fan += 1,
            ActuatorKind::Sprinkler => self.sprinkler += 1,
            ActuatorKind::Pump => self.pump += 1,
        }
    }
}

/// Result of applying a user decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Another cycle ran to completion
    CycleCompleted(CycleSummary),
    /// The caller should display the history; the loop is still waiting
    HistoryRequested,
    /// The loop has stopped
    Terminated,
}

/// Runs the greenhouse control loop.
///
/// The controller owns its sensors, actuators and history for its whole
/// lifetime. It is driven from the outside: `start` runs the first cycle and
/// each `decide` applies the user's choice once a cycle has finished.
///
/// # Example
///
/// ```rust
/// use greenhouse::controller::{Controller, NoPause, Outcome};
/// use greenhouse::core::{Decision, LoopState, SoilType};
///
/// let mut controller = Controller::new(SoilType::Loamy.preset(), NoPause).with_seed(42);
///
/// let summary = controller.start().unwrap();
/// assert_eq!(summary.ticks, 144);
/// assert_eq!(controller.state(), LoopState::AwaitingUserDecision);
///
/// controller.decide(Decision::Continue).unwrap();
/// assert_eq!(controller.history().len(), 288);
///
/// assert_eq!(controller.decide(Decision::Exit).unwrap(), Outcome::Terminated);
/// assert!(controller.state().is_final());
/// ```
pub struct Controller<P: Pacer> {
    id: Uuid,
    state: LoopState,
    settings: Settings,
    sensors: SensorArray,
    actuators: ActuatorArray,
    history: History,
    transitions: Vec<StateChange>,
    cycles_completed: u32,
    rng: StdRng,
    pacer: P,
    tick_delay: Duration,
}

impl<P: Pacer> Controller<P> {
    /// Create an idle controller with fresh devices and an empty history.
    pub fn new(settings: Settings, pacer: P) -> Self {
        let id = Uuid::new_v4();
        info!(run = %id, "Controller created");
        warn_if_inverted(&settings);

        Self {
            id,
            state: LoopState::Idle,
            settings,
            sensors: SensorArray::new(),
            actuators: ActuatorArray::new(),
            history: History::new(),
            transitions: Vec::new(),
            cycles_completed: 0,
            rng: StdRng::from_entropy(),
            pacer,
            tick_delay: DEFAULT_TICK_DELAY,
        }
    }

    /// Seed the sensor random source so readings are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Change the pause requested after each tick.
    pub fn with_tick_delay(mut self, tick_delay: Duration) -> Self {
        self.tick_delay = tick_delay;
        self
    }

    /// Run id attached to every log line of this controller.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current lifecycle state (pure).
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Thresholds used by the policy.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The owned sensors, with their last values.
    pub fn sensors(&self) -> &SensorArray {
        &self.sensors
    }

    /// The owned actuators.
    pub fn actuators(&self) -> &ActuatorArray {
        &self.actuators
    }

    /// Every entry logged so far (pure).
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Every accepted state change, oldest first.
    pub fn transitions(&self) -> &[StateChange] {
        &self.transitions
    }

    /// Number of cycles that ran to completion.
    pub fn cycles_completed(&self) -> u32 {
        self.cycles_completed
    }

    /// The pacing collaborator.
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Pause requested after each tick.
    pub fn tick_delay(&self) -> Duration {
        self.tick_delay
    }

    /// Replace the thresholds. Only allowed while no cycle is running and the
    /// loop has not terminated.
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), ControlError> {
        if !matches!(
            self.state,
            LoopState::Idle | LoopState::AwaitingUserDecision
        ) {
            return Err(ControlError::SettingsLocked { state: self.state });
        }

        debug!(run = %self.id, ?settings, "Settings updated");
        warn_if_inverted(&settings);
        self.settings = settings;
        Ok(())
    }

    /// Run the first cycle. Only valid from `Idle`.
    pub fn start(&mut self) -> Result<CycleSummary, ControlError> {
        if self.state != LoopState::Idle {
            return Err(ControlError::IllegalTransition {
                from: self.state,
                to: LoopState::RunningCycle,
            });
        }

        self.transition(LoopState::RunningCycle)?;
        Ok(self.run_cycle())
    }

    /// Apply the user's choice after a completed cycle.
    pub fn decide(&mut self, decision: Decision) -> Result<Outcome, ControlError> {
        if self.state != LoopState::AwaitingUserDecision {
            return Err(ControlError::IllegalTransition {
                from: self.state,
                to: decision.target(),
            });
        }

        self.transition(decision.target())?;
        let outcome = match decision {
            Decision::Continue => Outcome::CycleCompleted(self.run_cycle()),
            Decision::ViewHistory => Outcome::HistoryRequested,
            Decision::Exit => {
                info!(
                    run = %self.id,
                    cycles = self.cycles_completed,
                    entries = self.history.len(),
                    "Controller terminated"
                );
                Outcome::Terminated
            }
        };
        Ok(outcome)
    }

    fn transition(&mut self, next: LoopState) -> Result<(), ControlError> {
        if !self.state.can_transition_to(next) {
            return Err(ControlError::IllegalTransition {
                from: self.state,
                to: next,
            });
        }

        debug!(run = %self.id, from = %self.state, to = %next, "State transition");
        self.transitions.push(StateChange {
            from: self.state,
            to: next,
            timestamp: Utc::now(),
        });
        self.state = next;
        Ok(())
    }

    /// Run all ticks of one simulated day, then wait for a decision.
    fn run_cycle(&mut self) -> CycleSummary {
        let cycle = self.cycles_completed + 1;
        let span = info_span!("cycle", run = %self.id, cycle);
        let _guard = span.enter();
        info!(settings = ?self.settings, "Cycle started");

        let mut summary = CycleSummary::new(cycle);
        for tick in 0..TICKS_PER_CYCLE {
            let fired = self.tick(cycle, tick);
            for kind in fired {
                summary.count(kind);
            }
            summary.ticks += 1;
            self.pacer.pause(self.tick_delay);
        }

        self.cycles_completed = cycle;
        info!(
            fan = summary.fan,
            sprinkler = summary.sprinkler,
            pump = summary.pump,
            "Cycle finished"
        );

        // RunningCycle -> AwaitingUserDecision is always allowed
        self.state = LoopState::AwaitingUserDecision;
        self.transitions.push(StateChange {
            from: LoopState::RunningCycle,
            to: LoopState::AwaitingUserDecision,
            timestamp: Utc::now(),
        });

        summary
    }

    /// Read, decide, act and log for a single tick.
    fn tick(&mut self, cycle: u32, tick: u16) -> Vec<ActuatorKind> {
        let readings = self.sensors.sample(&mut self.rng);
        let fired = policy::evaluate(&readings, &self.settings);
        let actions: Vec<String> = fired
            .iter()
            .map(|kind| self.actuators.activate(*kind))
            .collect();

        let entry = EventLog::new(cycle, SimTime::from_tick(tick), readings, actions);
        trace!(time = %entry.time, ?readings, actions = ?entry.actions, "Tick");
        self.history.append(entry);

        fired
    }
}

fn warn_if_inverted(settings: &Settings) {
    if settings.is_inverted() {
        warn!(
            ?settings,
            "Threshold range has min above max; the affected actuator will fire on every tick"
        );
    }
}
