use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use greenhouse::config::Config;
use greenhouse::console::{catalog, render, Console, InputError};
use greenhouse::controller::{Controller, Outcome, ThreadPacer};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::new().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = config.logger.level.as_str();

            format!("{app_name}={level}").into()
        }))
        .init();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    session(&config, &mut console)
}

/// Run one interactive session. Running out of input ends it cleanly.
fn session<R: BufRead, W: Write>(config: &Config, console: &mut Console<R, W>) -> Result<()> {
    match run(config, console) {
        Err(err) if matches!(err.downcast_ref::<InputError>(), Some(InputError::Closed)) => {
            info!("Input closed, exiting");
            Ok(())
        }
        other => other,
    }
}

fn run<R: BufRead, W: Write>(config: &Config, console: &mut Console<R, W>) -> Result<()> {
    let user = console.ask("Enter your name: ")?;
    let greenhouse = console.ask("Enter greenhouse name: ")?;
    let soil = match config.simulation.soil {
        Some(soil) => soil,
        None => console.choose_soil()?,
    };
    info!(%user, %greenhouse, %soil, "Greenhouse configured");

    render::recommendations(console.output(), catalog::recommend(soil))?;

    let mut controller =
        Controller::new(soil.preset(), ThreadPacer).with_tick_delay(config.tick_delay());
    if let Some(seed) = config.simulation.seed {
        controller = controller.with_seed(seed);
    }

    render::hardware_status(console.output(), controller.sensors(), controller.actuators())?;

    // Thresholds can only be changed here, before the first cycle
    let settings = console.modify_settings(*controller.settings())?;
    controller.update_settings(settings)?;
    render::settings(console.output(), controller.settings())?;

    writeln!(
        console.output(),
        "\nRunning 24-hour cycle for {greenhouse}, {user}..."
    )?;
    let summary = controller.start()?;
    render::cycle_summary(console.output(), &summary)?;

    loop {
        let decision = console.choose_decision()?;
        match controller.decide(decision)? {
            Outcome::CycleCompleted(summary) => {
                render::cycle_summary(console.output(), &summary)?;
            }
            Outcome::HistoryRequested => {
                render::history(console.output(), controller.history())?;
            }
            Outcome::Terminated => break,
        }
    }

    writeln!(console.output(), "Goodbye, {user}.")?;
    Ok(())
}
