use std::str::FromStr;

use crate::{constants::MAX_WAIT_TICKS, errors::SimulationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Thrust,
    DeployPrechute,
    DeployParachute,
    Wait(u32),
    Quit,
}

impl FromStr for Command {
    type Err = SimulationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Command::Wait(1));
        };
        let argument = words.next();
        if words.next().is_some() {
            return Err(SimulationError::UnknownCommand(input.trim().to_string()));
        }

        let command = match (verb.to_ascii_lowercase().as_str(), argument) {
            ("t" | "thrust", None) => Command::Thrust,
            ("p" | "prechute", None) => Command::DeployPrechute,
            ("c" | "parachute", None) => Command::DeployParachute,
            ("q" | "quit", None) => Command::Quit,
            ("w" | "wait", None) => Command::Wait(1),
            ("w" | "wait", Some(ticks)) => match ticks.parse::<u32>() {
                Ok(ticks) if (1..=MAX_WAIT_TICKS).contains(&ticks) => Command::Wait(ticks),
                _ => return Err(SimulationError::UnknownCommand(input.trim().to_string())),
            },
            _ => return Err(SimulationError::UnknownCommand(input.trim().to_string())),
        };
        Ok(command)
    }
}

/// Fuel comes in as free text; only a whole, non-negative number starts a round.
pub fn parse_fuel(input: &str) -> Result<u32, SimulationError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| SimulationError::InvalidFuel(input.trim().to_string()))
}
