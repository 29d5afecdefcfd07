//! Single Day
//!
//! This example runs one simulated day with Loamy soil and prints the log.
//!
//! Key concepts:
//! - Seeded sensors for a reproducible run
//! - `NoPause` pacing so the day completes instantly
//! - Reading the history and cycle summary after the cycle
//!
//! Run with: cargo run --example single_day

use greenhouse::controller::{Controller, NoPause, Outcome};
use greenhouse::core::{ActuatorKind, Decision, SoilType};

fn main() {
    println!("=== Greenhouse: Single Day ===\n");

    let soil = SoilType::Loamy;
    let mut controller = Controller::new(soil.preset(), NoPause).with_seed(42);

    println!("Soil: {soil}");
    println!("{}\n", controller.settings());

    let summary = controller.start().unwrap();
    for entry in controller.history().all() {
        println!("{entry}");
    }

    println!("\nCycle {} finished after {} ticks", summary.cycle, summary.ticks);
    for kind in ActuatorKind::ALL {
        println!("  {:<10} {}", kind.name(), summary.activations(kind));
    }

    let quiet = controller
        .history()
        .all()
        .iter()
        .filter(|entry| !entry.has_actions())
        .count();
    println!("  Quiet ticks {quiet}");

    match controller.decide(Decision::Exit).unwrap() {
        Outcome::Terminated => println!("\nController state: {}", controller.state()),
        other => println!("\nUnexpected outcome: {other:?}"),
    }
}
