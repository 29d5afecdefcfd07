//! End-to-end runs of the control loop without real-time pacing.

use greenhouse::controller::{ControlError, Controller, NoPause, Outcome, RecordingPacer};
use greenhouse::core::{Decision, LoopState, Settings, SoilType, TICKS_PER_CYCLE};
use std::time::Duration;

#[test]
fn first_cycle_covers_a_whole_day() {
    let mut controller = Controller::new(SoilType::Loamy.preset(), NoPause).with_seed(2024);
    controller.start().unwrap();

    let times: Vec<String> = controller
        .history()
        .all()
        .iter()
        .map(|entry| entry.time.to_string())
        .collect();

    assert_eq!(times.len(), usize::from(TICKS_PER_CYCLE));
    assert_eq!(times[0], "0:00");
    assert_eq!(times[1], "0:10");
    assert_eq!(times[6], "1:00");
    assert_eq!(times[143], "23:50");
}

#[test]
fn history_length_is_a_multiple_of_cycles() {
    let mut controller = Controller::new(SoilType::Clay.preset(), NoPause).with_seed(5);
    controller.start().unwrap();

    for n in 2..=4u32 {
        match controller.decide(Decision::Continue).unwrap() {
            Outcome::CycleCompleted(summary) => assert_eq!(summary.cycle, n),
            other => panic!("Expected CycleCompleted, got {other:?}"),
        }
        assert_eq!(controller.history().len(), 144 * n as usize);
    }
    assert_eq!(controller.cycles_completed(), 4);
    assert_eq!(controller.history().latest().map(|e| e.cycle), Some(4));
}

#[test]
fn readings_in_history_respect_sensor_ranges() {
    let mut controller = Controller::new(SoilType::Sandy.preset(), NoPause).with_seed(77);
    controller.start().unwrap();

    for entry in controller.history().all() {
        assert!((20.0..35.0).contains(&entry.temperature));
        assert!((40.0..70.0).contains(&entry.humidity));
        assert!((30.0..70.0).contains(&entry.soil_moisture));
    }
}

#[test]
fn soil_moisture_sensor_never_triggers_the_pump() {
    // The simulated moisture range starts at the pump threshold, so it never fires
    let mut controller = Controller::new(SoilType::Silt.preset(), NoPause).with_seed(8);
    controller.start().unwrap();

    assert!(controller
        .history()
        .all()
        .iter()
        .all(|entry| !entry.actions.iter().any(|a| a == "Pump activated for irrigation")));
}

#[test]
fn inverted_temperature_range_fires_fan_every_tick() {
    let inverted = Settings::new(35, 20, 0, 100);
    let mut controller = Controller::new(inverted, NoPause).with_seed(13);
    let summary = controller.start().unwrap();

    assert_eq!(summary.fan, 144);
    assert_eq!(summary.sprinkler, 0);
    assert!(controller
        .history()
        .all()
        .iter()
        .all(|entry| entry.actions == vec!["Fan activated".to_string()]));
}

#[test]
fn full_session_walks_every_state() {
    let mut pacer = RecordingPacer::new();
    {
        let mut controller = Controller::new(SoilType::Loamy.preset(), &mut pacer)
            .with_seed(1)
            .with_tick_delay(Duration::from_millis(100));

        assert_eq!(controller.state(), LoopState::Idle);
        controller.start().unwrap();
        assert_eq!(
            controller.decide(Decision::ViewHistory).unwrap(),
            Outcome::HistoryRequested
        );
        assert!(matches!(
            controller.decide(Decision::Continue).unwrap(),
            Outcome::CycleCompleted(_)
        ));
        assert_eq!(
            controller.decide(Decision::Exit).unwrap(),
            Outcome::Terminated
        );

        assert_eq!(
            controller.start(),
            Err(ControlError::IllegalTransition {
                from: LoopState::Terminated,
                to: LoopState::RunningCycle,
            })
        );
    }

    assert_eq!(pacer.pauses().len(), 288);
    assert_eq!(pacer.total(), Duration::from_millis(100) * 288);
}
