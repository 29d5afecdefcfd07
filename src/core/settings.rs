//! Threshold settings and the soil-type presets they start from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold configuration read by the control loop.
///
/// No ordering is enforced between the bounds. An inverted range such as
/// `min_temp > max_temp` is kept as given and simply changes how often the
/// policy fires.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub min_temp: i32,
    pub max_temp: i32,
    pub min_humidity: i32,
    pub max_humidity: i32,
}

impl Settings {
    /// Create settings from explicit bounds, as given.
    pub fn new(min_temp: i32, max_temp: i32, min_humidity: i32, max_humidity: i32) -> Self {
        Self {
            min_temp,
            max_temp,
            min_humidity,
            max_humidity,
        }
    }

    /// True when either range has its minimum above its maximum.
    pub fn is_inverted(&self) -> bool {
        self.min_temp > self.max_temp || self.min_humidity > self.max_humidity
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Temperature Range: {}-{}°C", self.min_temp, self.max_temp)?;
        write!(f, "Humidity Range: {}-{}%", self.min_humidity, self.max_humidity)
    }
}

/// Soil types the greenhouse can be set up with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SoilType {
    Loamy,
    Sandy,
    Clay,
    Silt,
}

impl SoilType {
    /// All soil types, in menu order.
    pub const ALL: [SoilType; 4] = [Self::Loamy, Self::Sandy, Self::Clay, Self::Silt];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loamy => "Loamy",
            Self::Sandy => "Sandy",
            Self::Clay => "Clay",
            Self::Silt => "Silt",
        }
    }

    /// Threshold preset for this soil.
    ///
    /// ```rust
    /// use greenhouse::core::{Settings, SoilType};
    ///
    /// assert_eq!(SoilType::Loamy.preset(), Settings::new(18, 30, 60, 70));
    /// assert_eq!(SoilType::Silt.preset(), Settings::new(15, 24, 60, 70));
    /// ```
    pub fn preset(&self) -> Settings {
        match self {
            Self::Loamy => Settings::new(18, 30, 60, 70),
            Self::Sandy => Settings::new(10, 25, 40, 60),
            Self::Clay => Settings::new(15, 25, 60, 80),
            Self::Silt => Settings::new(15, 24, 60, 70),
        }
    }

    /// Look up a soil by its 1-based menu position.
    pub fn from_menu(choice: usize) -> Option<Self> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
