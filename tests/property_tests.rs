//! Property-based tests for the greenhouse core and controller.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use greenhouse::controller::{Controller, NoPause};
use greenhouse::core::{
    policy, ActuatorKind, Decision, Readings, Sensor, SensorKind, Settings, SimTime,
    PUMP_MOISTURE_THRESHOLD, TICKS_PER_CYCLE,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

prop_compose! {
    fn arbitrary_settings()(
        min_temp in -10..40i32,
        max_temp in -10..40i32,
        min_humidity in 0..100i32,
        max_humidity in 0..100i32,
    ) -> Settings {
        Settings::new(min_temp, max_temp, min_humidity, max_humidity)
    }
}

prop_compose! {
    fn arbitrary_readings()(
        temperature in 0.0..50.0f64,
        humidity in 0.0..100.0f64,
        soil_moisture in 0.0..100.0f64,
    ) -> Readings {
        Readings { temperature, humidity, soil_moisture }
    }
}

prop_compose! {
    fn arbitrary_sensor_kind()(variant in 0..3usize) -> SensorKind {
        SensorKind::ALL[variant]
    }
}

proptest! {
    #[test]
    fn sensor_readings_stay_in_range(kind in arbitrary_sensor_kind(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sensor = Sensor::new(kind);
        for _ in 0..50 {
            let value = sensor.read(&mut rng);
            prop_assert!(kind.range().contains(&value));
            prop_assert_eq!(value.fract(), 0.0);
            prop_assert_eq!(sensor.current_value(), value);
        }
    }

    #[test]
    fn timestamps_are_well_formed(tick in 0..TICKS_PER_CYCLE) {
        let time = SimTime::from_tick(tick);
        let text = time.to_string();
        let (hour, minute) = text.split_once(':').unwrap();

        let hour: u16 = hour.parse().unwrap();
        prop_assert!(hour < 24);
        prop_assert_eq!(minute.len(), 2);
        prop_assert!(["00", "10", "20", "30", "40", "50"].contains(&minute));
        prop_assert_eq!(hour, tick / 6);
    }

    #[test]
    fn policy_is_deterministic(readings in arbitrary_readings(), settings in arbitrary_settings()) {
        let first = policy::evaluate(&readings, &settings);
        let second = policy::evaluate(&readings, &settings);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn policy_matches_rules(readings in arbitrary_readings(), settings in arbitrary_settings()) {
        let fired = policy::evaluate(&readings, &settings);

        let fan = readings.temperature < f64::from(settings.min_temp)
            || readings.temperature > f64::from(settings.max_temp);
        let sprinkler = readings.humidity < f64::from(settings.min_humidity)
            || readings.humidity > f64::from(settings.max_humidity);
        let pump = readings.soil_moisture < PUMP_MOISTURE_THRESHOLD;

        let mut expected = Vec::new();
        if fan { expected.push(ActuatorKind::Fan); }
        if sprinkler { expected.push(ActuatorKind::Sprinkler); }
        if pump { expected.push(ActuatorKind::Pump); }

        prop_assert_eq!(fired, expected);
    }

    #[test]
    fn policy_preserves_actuator_order(readings in arbitrary_readings(), settings in arbitrary_settings()) {
        let fired = policy::evaluate(&readings, &settings);
        let positions: Vec<usize> = fired
            .iter()
            .map(|kind| ActuatorKind::ALL.iter().position(|k| k == kind).unwrap())
            .collect();

        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn history_grows_by_one_cycle_per_continue(
        settings in arbitrary_settings(),
        seed in any::<u64>(),
        extra_cycles in 0..4usize,
    ) {
        let mut controller = Controller::new(settings, NoPause).with_seed(seed);
        controller.start().unwrap();
        prop_assert_eq!(controller.history().len(), 144);

        for cycle in 0..extra_cycles {
            let before: Vec<_> = controller.history().all().to_vec();
            controller.decide(Decision::ViewHistory).unwrap();
            controller.decide(Decision::Continue).unwrap();

            let after = controller.history().all();
            prop_assert_eq!(after.len(), 144 * (cycle + 2));
            // earlier entries are never modified
            prop_assert_eq!(&after[..before.len()], &before[..]);
        }
    }
}
