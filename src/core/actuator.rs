//! Corrective actuators.
//!
//! Activation has no modeled external effect: each actuator simply reports
//! what it did, and the control loop collects those descriptions per tick.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ActuatorKind {
    Fan,
    Sprinkler,
    Pump,
}

impl ActuatorKind {
    /// All kinds, in policy evaluation order.
    pub const ALL: [ActuatorKind; 3] = [Self::Fan, Self::Sprinkler, Self::Pump];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fan => "Fan",
            Self::Sprinkler => "Sprinkler",
            Self::Pump => "Pump",
        }
    }

    /// Phrase reported when this kind of actuator is activated.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fan => "Fan activated",
            Self::Sprinkler => "Sprinkler activated",
            Self::Pump => "Pump activated for irrigation",
        }
    }
}

/// A named actuator owned by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actuator {
    kind: ActuatorKind,
    name: String,
}

impl Actuator {
    /// Create an actuator named after its kind.
    pub fn new(kind: ActuatorKind) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
        }
    }

    /// Which actuator this is.
    pub fn kind(&self) -> ActuatorKind {
        self.kind
    }

    /// Name shown in the hardware check.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Activate the actuator and describe the action taken.
    ///
    /// ```rust
    /// use greenhouse::core::{Actuator, ActuatorKind};
    ///
    /// let pump = Actuator::new(ActuatorKind::Pump);
    /// assert_eq!(pump.activate(), "Pump activated for irrigation");
    /// ```
    pub fn activate(&self) -> String {
        self.kind.description().to_string()
    }
}

/// The fixed set of actuators, one per kind.
#[derive(Clone, Debug)]
pub struct ActuatorArray {
    actuators: [Actuator; 3],
}

impl Default for ActuatorArray {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorArray {
    /// Create one actuator per kind.
    pub fn new() -> Self {
        Self {
            actuators: ActuatorKind::ALL.map(Actuator::new),
        }
    }

    /// Activate the actuator of the given kind.
    pub fn activate(&self, kind: ActuatorKind) -> String {
        self.get(kind).activate()
    }

    /// Get the actuator of the given kind.
    pub fn get(&self, kind: ActuatorKind) -> &Actuator {
        // `actuators` is laid out in `ActuatorKind::ALL` order
        &self.actuators[kind as usize]
    }

    /// Actuators in policy order.
    pub fn iter(&self) -> impl Iterator<Item = &Actuator> {
        self.actuators.iter()
    }
}
