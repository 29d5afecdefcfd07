//! Threshold decision policy.
//!
//! The policy is a pure function of one tick's readings and the settings. Each
//! rule is evaluated independently, so several actuators may fire together.

use super::actuator::ActuatorKind;
use super::sensor::Readings;
use super::settings::Settings;

/// Soil moisture below this level triggers the pump. Not configurable.
pub const PUMP_MOISTURE_THRESHOLD: f64 = 30.0;

/// Check whether one actuator should fire for these readings.
///
/// All comparisons are strict: a reading equal to a bound does not fire.
pub fn should_activate(kind: ActuatorKind, readings: &Readings, settings: &Settings) -> bool {
    match kind {
        ActuatorKind::Fan => outside(readings.temperature, settings.min_temp, settings.max_temp),
        ActuatorKind::Sprinkler => {
            outside(readings.humidity, settings.min_humidity, settings.max_humidity)
        }
        ActuatorKind::Pump => readings.soil_moisture < PUMP_MOISTURE_THRESHOLD,
    }
}

/// Select the actuators to activate, in Fan, Sprinkler, Pump order.
///
/// ```rust
/// use greenhouse::core::{policy, ActuatorKind, Readings, Settings};
///
/// let settings = Settings::new(18, 30, 60, 70);
/// let readings = Readings { temperature: 32.0, humidity: 65.0, soil_moisture: 25.0 };
///
/// assert_eq!(
///     policy::evaluate(&readings, &settings),
///     vec![ActuatorKind::Fan, ActuatorKind::Pump]
/// );
/// ```
pub fn evaluate(readings: &Readings, settings: &Settings) -> Vec<ActuatorKind> {
    ActuatorKind::ALL
        .into_iter()
        .filter(|kind| should_activate(*kind, readings, settings))
        .collect()
}

fn outside(value: f64, min: i32, max: i32) -> bool {
    value < f64::from(min) || value > f64::from(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loamy() -> Settings {
        Settings::new(18, 30, 60, 70)
    }

    fn readings(temperature: f64, humidity: f64, soil_moisture: f64) -> Readings {
        Readings {
            temperature,
            humidity,
            soil_moisture,
        }
    }

    #[test]
    fn fan_fires_on_upper_bound_and_pump_on_dry_soil() {
        let actions = evaluate(&readings(32.0, 65.0, 25.0), &loamy());
        assert_eq!(actions, vec![ActuatorKind::Fan, ActuatorKind::Pump]);
    }

    #[test]
    fn nothing_fires_inside_all_ranges() {
        assert!(evaluate(&readings(25.0, 65.0, 50.0), &loamy()).is_empty());
    }

    #[test]
    fn bounds_are_strict() {
        let settings = loamy();
        assert!(evaluate(&readings(30.0, 70.0, 30.0), &settings).is_empty());
        assert!(evaluate(&readings(18.0, 60.0, 30.0), &settings).is_empty());
    }

    #[test]
    fn low_values_fire_too() {
        let actions = evaluate(&readings(17.9, 59.9, 50.0), &loamy());
        assert_eq!(actions, vec![ActuatorKind::Fan, ActuatorKind::Sprinkler]);
    }

    #[test]
    fn all_rules_fire_in_order() {
        let actions = evaluate(&readings(40.0, 90.0, 10.0), &loamy());
        assert_eq!(actions, ActuatorKind::ALL.to_vec());
    }

    #[test]
    fn pump_threshold_ignores_settings() {
        let wide = Settings::new(-100, 100, -100, 100);
        assert!(should_activate(
            ActuatorKind::Pump,
            &readings(25.0, 50.0, 29.99),
            &wide
        ));
        assert!(!should_activate(
            ActuatorKind::Pump,
            &readings(25.0, 50.0, 30.0),
            &wide
        ));
    }

    #[test]
    fn inverted_range_always_fires() {
        let inverted = Settings::new(30, 18, 60, 70);
        for temperature in [10.0, 18.0, 25.0, 30.0, 40.0] {
            assert!(should_activate(
                ActuatorKind::Fan,
                &readings(temperature, 65.0, 50.0),
                &inverted
            ));
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let r = readings(31.0, 41.0, 29.0);
        let settings = loamy();
        assert_eq!(evaluate(&r, &settings), evaluate(&r, &settings));
    }
}
