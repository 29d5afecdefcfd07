//! Custom Thresholds
//!
//! This example replaces the soil preset before the first cycle and shows
//! that settings are locked while a cycle runs and editable between cycles.
//!
//! Key concepts:
//! - `update_settings` in the Idle and AwaitingUserDecision states
//! - Inverted ranges are kept as given (the Fan fires on every tick)
//! - Comparing activation counts across cycles
//!
//! Run with: cargo run --example custom_thresholds

use greenhouse::controller::{Controller, NoPause, Outcome};
use greenhouse::core::{ActuatorKind, Decision, Settings, SoilType};

fn main() {
    println!("=== Greenhouse: Custom Thresholds ===\n");

    let mut controller = Controller::new(SoilType::Sandy.preset(), NoPause).with_seed(3);

    // Temperature range deliberately inverted
    let inverted = Settings::new(30, 18, 40, 60);
    controller.update_settings(inverted).unwrap();
    println!("Day 1 settings:\n{}\n", controller.settings());

    let day_one = controller.start().unwrap();
    println!(
        "Day 1: Fan {} / {} ticks",
        day_one.activations(ActuatorKind::Fan),
        day_one.ticks
    );

    let widened = Settings::new(15, 35, 35, 75);
    controller.update_settings(widened).unwrap();
    println!("\nDay 2 settings:\n{}\n", controller.settings());

    if let Outcome::CycleCompleted(day_two) = controller.decide(Decision::Continue).unwrap() {
        for kind in ActuatorKind::ALL {
            println!(
                "{:<10} day 1: {:>3}  day 2: {:>3}",
                kind.name(),
                day_one.activations(kind),
                day_two.activations(kind)
            );
        }
    }

    println!("\nHistory holds {} entries", controller.history().len());
    controller.decide(Decision::Exit).unwrap();
}
