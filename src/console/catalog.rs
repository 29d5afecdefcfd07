//! Static plant recommendations per soil type.

use crate::core::{Settings, SoilType};
use serde::Serialize;

/// A plant and the climate it grows best in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Plant {
    pub name: &'static str,
    pub min_temp: i32,
    pub max_temp: i32,
    pub min_humidity: i32,
    pub max_humidity: i32,
}

impl Plant {
    const fn new(
        name: &'static str,
        min_temp: i32,
        max_temp: i32,
        min_humidity: i32,
        max_humidity: i32,
    ) -> Self {
        Self {
            name,
            min_temp,
            max_temp,
            min_humidity,
            max_humidity,
        }
    }

    /// Thresholds that keep this plant in its preferred climate.
    pub fn settings(&self) -> Settings {
        Settings::new(
            self.min_temp,
            self.max_temp,
            self.min_humidity,
            self.max_humidity,
        )
    }
}

const LOAMY: &[Plant] = &[
    Plant::new("Tomato", 18, 30, 60, 70),
    Plant::new("Bell Pepper", 18, 30, 60, 70),
    Plant::new("Basil", 18, 30, 60, 70),
];

const SANDY: &[Plant] = &[
    Plant::new("Onion", 10, 25, 40, 60),
    Plant::new("Carrot", 10, 25, 40, 60),
];

const CLAY: &[Plant] = &[
    Plant::new("Potato", 15, 25, 60, 80),
    Plant::new("Spinach", 10, 24, 60, 80),
];

const SILT: &[Plant] = &[
    Plant::new("Lettuce", 15, 24, 60, 70),
    Plant::new("Cucumber", 18, 30, 65, 75),
];

/// Plants that suit the given soil.
pub fn recommend(soil: SoilType) -> &'static [Plant] {
    match soil {
        SoilType::Loamy => LOAMY,
        SoilType::Sandy => SANDY,
        SoilType::Clay => CLAY,
        SoilType::Silt => SILT,
    }
}
