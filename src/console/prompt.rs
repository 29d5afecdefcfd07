//! Interactive prompts with rejection and re-prompt on bad input.

use crate::console::error::InputError;
use crate::core::{Decision, Settings, SoilType};
use std::io::{BufRead, Write};

/// Parse a post-cycle menu answer (`1`, `2` or `3`).
pub fn parse_decision(input: &str) -> Result<Decision, InputError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(Decision::from_menu)
        .ok_or_else(|| InputError::InvalidDecision(input.trim().to_string()))
}

/// Parse a soil menu answer (`1` to `4`).
pub fn parse_soil(input: &str) -> Result<SoilType, InputError> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(SoilType::from_menu)
        .ok_or_else(|| InputError::InvalidSoilType(input.trim().to_string()))
}

/// Parse two whitespace-separated integers as `(min, max)`.
///
/// The pair is not reordered or validated: `30 18` is accepted as given.
pub fn parse_range(input: &str) -> Result<(i32, i32), InputError> {
    let invalid = || InputError::InvalidRange(input.trim().to_string());
    let mut parts = input.split_whitespace();
    let min: i32 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    let max: i32 = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok((min, max))
}

/// Line-oriented conversation over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for rendering between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Take back the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show `prompt` and read one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer. Recoverable errors are shown to
    /// the user; anything else is returned.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, InputError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(%answer, "Rejected input");
                    writeln!(self.output, "{err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Ask for the soil type until a valid menu number is given.
    pub fn choose_soil(&mut self) -> Result<SoilType, InputError> {
        let mut menu = String::from("\nSelect soil type:\n");
        for (index, soil) in SoilType::ALL.iter().enumerate() {
            menu.push_str(&format!("{}. {}\n", index + 1, soil));
        }
        menu.push_str(&format!("Choose (1-{}): ", SoilType::ALL.len()));

        self.ask_until(&menu, parse_soil)
    }

    /// Ask a yes/no question. Only `y` or `Y` count as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, InputError> {
        let answer = self.ask(prompt)?;
        Ok(matches!(answer.chars().next(), Some('y' | 'Y')))
    }

    /// Show the current thresholds and offer to replace them once.
    pub fn modify_settings(&mut self, current: Settings) -> Result<Settings, InputError> {
        writeln!(self.output, "\nCurrent Settings:\n{current}")?;
        if !self.confirm("\nModify settings? (y/n): ")? {
            return Ok(current);
        }

        let (min_temp, max_temp) =
            self.ask_until("\nEnter new min/max temperature (°C): ", parse_range)?;
        let (min_humidity, max_humidity) =
            self.ask_until("Enter new min/max humidity (%): ", parse_range)?;
        writeln!(self.output, "Settings updated.")?;

        Ok(Settings::new(min_temp, max_temp, min_humidity, max_humidity))
    }

    /// Ask what to do after a completed cycle.
    pub fn choose_decision(&mut self) -> Result<Decision, InputError> {
        let mut menu = String::from("\nEnd of 24-hour cycle. Please choose an option:\n");
        for (index, decision) in Decision::ALL.iter().enumerate() {
            menu.push_str(&format!("{}. {}\n", index + 1, decision.label()));
        }
        menu.push_str("Enter your choice (1-3): ");

        self.ask_until(&menu, parse_decision)
    }
}
