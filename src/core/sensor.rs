//! Simulated greenhouse sensors.
//!
//! Each sensor produces a whole-number reading sampled uniformly from a
//! half-open range that belongs to its kind. The ranges are a property of the simulated
//! hardware, not of the configuration.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The kinds of sensor installed in the greenhouse.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SensorKind {
    Temperature,
    Humidity,
    SoilMoisture,
}

impl SensorKind {
    /// All kinds, in the order the control loop reads them.
    pub const ALL: [SensorKind; 3] = [Self::Temperature, Self::Humidity, Self::SoilMoisture];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::SoilMoisture => "Soil Moisture",
        }
    }

    /// Whole-number bounds the simulated sensor samples from, end excluded.
    pub fn bounds(&self) -> Range<i32> {
        match self {
            Self::Temperature => 20..35,
            Self::Humidity => 40..70,
            Self::SoilMoisture => 30..70,
        }
    }

    /// `bounds` as a range of readings.
    ///
    /// ```rust
    /// use greenhouse::core::SensorKind;
    ///
    /// assert_eq!(SensorKind::Temperature.range(), 20.0..35.0);
    /// assert_eq!(SensorKind::Humidity.range(), 40.0..70.0);
    /// assert_eq!(SensorKind::SoilMoisture.range(), 30.0..70.0);
    /// ```
    pub fn range(&self) -> Range<f64> {
        let bounds = self.bounds();
        f64::from(bounds.start)..f64::from(bounds.end)
    }
}

/// A single simulated sensor and the last value it produced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sensor {
    kind: SensorKind,
    last_value: f64,
}

impl Sensor {
    /// Create a sensor that has not been read yet (its value is `0.0`).
    pub fn new(kind: SensorKind) -> Self {
        Self {
            kind,
            last_value: 0.0,
        }
    }

    /// Which quantity this sensor measures.
    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Sample a fresh whole-number value from the sensor's range and remember it.
    ///
    /// ```rust
    /// use greenhouse::core::{Sensor, SensorKind};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let mut sensor = Sensor::new(SensorKind::Humidity);
    ///
    /// let value = sensor.read(&mut rng);
    /// assert!(SensorKind::Humidity.range().contains(&value));
    /// assert_eq!(value.fract(), 0.0);
    /// assert_eq!(sensor.current_value(), value);
    /// ```
    pub fn read<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        self.last_value = f64::from(rng.gen_range(self.kind.bounds()));
        self.last_value
    }

    /// The value produced by the most recent `read`.
    pub fn current_value(&self) -> f64 {
        self.last_value
    }
}

/// One reading from every sensor, taken in the same tick.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Readings {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
}

/// The fixed set of sensors, one per kind.
#[derive(Clone, Debug)]
pub struct SensorArray {
    temperature: Sensor,
    humidity: Sensor,
    soil_moisture: Sensor,
}

impl Default for SensorArray {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorArray {
    /// Create one unread sensor per kind.
    pub fn new() -> Self {
        Self {
            temperature: Sensor::new(SensorKind::Temperature),
            humidity: Sensor::new(SensorKind::Humidity),
            soil_moisture: Sensor::new(SensorKind::SoilMoisture),
        }
    }

    /// Read every sensor once, in `SensorKind::ALL` order.
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Readings {
        Readings {
            temperature: self.temperature.read(rng),
            humidity: self.humidity.read(rng),
            soil_moisture: self.soil_moisture.read(rng),
        }
    }

    /// Sensors in read order.
    pub fn iter(&self) -> impl Iterator<Item = &Sensor> {
        [&self.temperature, &self.humidity, &self.soil_moisture].into_iter()
    }
}
