//! Console rendering of startup screens, cycle results and history.

use crate::console::catalog::Plant;
use crate::controller::CycleSummary;
use crate::core::{ActuatorArray, ActuatorKind, History, SensorArray, Settings};
use std::io::{self, Write};

/// Print the plants suited to the chosen soil.
pub fn recommendations<W: Write>(out: &mut W, plants: &[Plant]) -> io::Result<()> {
    writeln!(out, "\nRecommended plants based on soil type:")?;
    for plant in plants {
        writeln!(
            out,
            "{}: Temp {}-{}°C, Humidity {}-{}%",
            plant.name, plant.min_temp, plant.max_temp, plant.min_humidity, plant.max_humidity
        )?;
    }
    Ok(())
}

/// List every sensor and actuator as operational.
pub fn hardware_status<W: Write>(
    out: &mut W,
    sensors: &SensorArray,
    actuators: &ActuatorArray,
) -> io::Result<()> {
    writeln!(out, "\nHardware status check:")?;
    for sensor in sensors.iter() {
        writeln!(out, "{} sensor operational.", sensor.kind().name())?;
    }
    for actuator in actuators.iter() {
        writeln!(out, "{} actuator operational.", actuator.name())?;
    }
    Ok(())
}

/// Print the thresholds the first cycle will use.
pub fn settings<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    writeln!(out, "\nActive Settings:\n{settings}")
}

/// One line with the cycle number and activation counts.
pub fn cycle_summary<W: Write>(out: &mut W, summary: &CycleSummary) -> io::Result<()> {
    write!(
        out,
        "\nCycle {} complete ({} readings).",
        summary.cycle, summary.ticks
    )?;
    for kind in ActuatorKind::ALL {
        write!(out, " {}: {}", kind.name(), summary.activations(kind))?;
    }
    writeln!(out)
}

/// Print every entry, oldest first.
pub fn history<W: Write>(out: &mut W, history: &History) -> io::Result<()> {
    writeln!(out, "\n--- Daily Event Log ---")?;
    let mut current_cycle = None;
    for entry in history.all() {
        if current_cycle != Some(entry.cycle) {
            writeln!(out, "-- Day {} --", entry.cycle)?;
            current_cycle = Some(entry.cycle);
        }
        writeln!(out, "{entry}")?;
    }
    Ok(())
}
