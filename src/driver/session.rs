use crate::{
    config::SimulationConfig,
    control::{
        landing::{assess_landing, LandingOutcome},
        rocket::{Deployment, Rocket},
    },
    errors::SimulationError,
    telemetry_system::telemetry::{Readout, Telemetry},
};

use super::command::{parse_fuel, Command};

/// The result of one player command.
#[derive(Debug, Default, PartialEq)]
pub struct Turn {
    pub deployment: Option<Deployment>,
    pub ticks: u32,
    pub readout: Option<Readout>,
    pub outcome: Option<LandingOutcome>,
}

/// One game, from fuel entry to touchdown.
pub struct Round {
    pub rocket: Rocket,
    telemetry: Telemetry,
    crash_velocity: f64,
    last_readout: Readout,
    outcome: Option<LandingOutcome>,
    abandoned: bool,
}

impl Round {
    /// Parses the fuel entry and runs the opening tick.
    pub fn start(fuel_input: &str, config: &SimulationConfig) -> Result<Self, SimulationError> {
        let fuel = parse_fuel(fuel_input).inspect_err(|_| {
            tracing::warn!(input = fuel_input.trim(), "rejected fuel amount");
        })?;
        tracing::info!(fuel, "round started");

        let rocket = Rocket::new(fuel, config);
        let mut round = Round {
            last_readout: Readout::from_rocket(&rocket),
            rocket,
            telemetry: Telemetry::new(),
            crash_velocity: config.landing.crash_velocity,
            outcome: None,
            abandoned: false,
        };
        round.tick()?;
        Ok(round)
    }

    pub fn execute(&mut self, command: Command) -> Result<Turn, SimulationError> {
        if self.is_over() {
            return Err(SimulationError::RoundOver);
        }

        let mut turn = Turn::default();
        let ticks = match command {
            Command::Quit => {
                tracing::info!(ticks = self.telemetry.get_ticks(), "round abandoned");
                self.abandoned = true;
                return Ok(turn);
            }
            Command::Thrust => {
                self.rocket.apply_thrust();
                1
            }
            Command::DeployPrechute => {
                turn.deployment = Some(self.rocket.deploy_prechute());
                1
            }
            Command::DeployParachute => {
                turn.deployment = Some(self.rocket.deploy_parachute());
                1
            }
            Command::Wait(ticks) => ticks,
        };

        for _ in 0..ticks {
            turn.readout = Some(self.tick()?);
            turn.ticks += 1;
            if self.outcome.is_some() {
                break;
            }
        }
        turn.outcome = self.outcome;
        Ok(turn)
    }

    pub fn tick(&mut self) -> Result<Readout, SimulationError> {
        if self.is_over() {
            return Err(SimulationError::RoundOver);
        }

        self.rocket.update();
        self.last_readout = self.telemetry.collect_data(&self.rocket);
        self.outcome = assess_landing(&self.rocket, self.crash_velocity);

        if let Some(outcome) = self.outcome {
            tracing::info!(
                ?outcome,
                velocity = self.rocket.get_velocity(),
                ticks = self.telemetry.get_ticks(),
                "round over"
            );
        }
        Ok(self.last_readout)
    }

    /// Landed, or the player walked away.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some() || self.abandoned
    }

    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }

    pub fn get_outcome(&self) -> Option<LandingOutcome> {
        self.outcome
    }

    pub fn get_last_readout(&self) -> Readout {
        self.last_readout
    }

    pub fn get_telemetry(&self) -> &Telemetry {
        &self.telemetry
    }
}
