use std::fmt;

use crate::control::rocket::{Rocket, RocketState};

/// What the player sees after each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub altitude: f64,
    pub velocity: f64,
    pub fuel: u32,
    pub prechute_health: u32,
    pub parachute_health: u32,
    pub state: RocketState,
}

impl Readout {
    pub fn from_rocket(rocket: &Rocket) -> Self {
        Readout {
            altitude: rocket.get_altitude(),
            velocity: rocket.get_velocity(),
            fuel: rocket.get_fuel(),
            prechute_health: rocket.prechute.get_health(),
            parachute_health: rocket.parachute.get_health(),
            state: rocket.get_state(),
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Status: {}", self.state)?;
        writeln!(f, "Altitude: {:.2} m", self.altitude)?;
        writeln!(f, "Velocity: {:.2} m/s", self.velocity)?;
        writeln!(f, "Fuel: {}", self.fuel)?;
        writeln!(f, "Prechute Health: {}%", self.prechute_health)?;
        write!(f, "Parachute Health: {}%", self.parachute_health)
    }
}

/// Peak figures for the end-of-round summary. Nothing per tick is kept.
#[derive(Debug, Default)]
pub struct Telemetry {
    ticks: u64,
    max_altitude: f64,
    max_descent_rate: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(&mut self, rocket: &Rocket) -> Readout {
        self.ticks += 1;
        let readout = Readout::from_rocket(rocket);

        if readout.altitude > self.max_altitude {
            self.max_altitude = readout.altitude;
        }
        if -readout.velocity > self.max_descent_rate {
            self.max_descent_rate = -readout.velocity;
        }
        readout
    }

    pub fn get_ticks(&self) -> u64 {
        self.ticks
    }

    pub fn get_max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn get_max_descent_rate(&self) -> f64 {
        self.max_descent_rate
    }

    pub fn summary(&self) -> String {
        format!(
            "Ticks flown: {}\nMax Altitude: {}\nMax Descent Rate: {:.2} m/s",
            self.ticks,
            Self::format_altitude(self.max_altitude),
            self.max_descent_rate
        )
    }
}
