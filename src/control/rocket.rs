use std::fmt;

use crate::{config::SimulationConfig, constants::GROUND_THRESHOLD};

use super::{
    environment::{CelestialBody, Environment},
    parachute::Parachute,
    propulsion::PropulsionSystem,
};

pub struct Rocket {
    pub environment: Environment,
    pub propulsion: PropulsionSystem,
    pub parachute: Parachute,
    pub prechute: Parachute,
    altitude: f64,
    velocity: f64,
    descent_ceiling: f64,
    started: bool,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum RocketState {
    Idle,
    Ascending,
    Descending,
    Grounded,
}

impl fmt::Display for RocketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RocketState::Idle => "On the pad",
            RocketState::Ascending => "Ascending",
            RocketState::Descending => "Descending",
            RocketState::Grounded => "On the ground",
        };
        write!(f, "{label}")
    }
}

/// What happened to a deploy request.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Deployment {
    Opened,
    AlreadyDeployed,
    /// Not falling fast enough for the chute to catch air.
    TooSlow,
}

#[derive(Clone, Copy)]
enum Chute {
    Main,
    Pre,
}

impl Chute {
    fn name(self) -> &'static str {
        match self {
            Chute::Main => "parachute",
            Chute::Pre => "prechute",
        }
    }
}

impl Rocket {
    pub fn new(fuel: u32, config: &SimulationConfig) -> Self {
        let environment = Environment::new(CelestialBody::from_config(&config.body));
        let surface_gravity = environment.current_body.surface_gravity();

        Rocket {
            propulsion: PropulsionSystem::new(fuel, config.thrust_power),
            parachute: Parachute::new(&config.parachute, surface_gravity),
            prechute: Parachute::new(&config.prechute, surface_gravity),
            environment,
            altitude: 0.0,
            velocity: 0.0,
            descent_ceiling: config.descent_ceiling,
            started: false,
        }
    }

    /// Lights the engine and burns the whole tank before returning.
    pub fn apply_thrust(&mut self) {
        self.started = true;
        let fuel = self.propulsion.get_fuel();
        while let Some(delta_v) = self.propulsion.burn_unit() {
            self.velocity += delta_v;
        }
        tracing::info!(fuel, velocity = self.velocity, "thrust applied");
    }

    pub fn update(&mut self) {
        if !self.started {
            return;
        }

        let gravity = self.environment.update(self.altitude);
        self.velocity -= gravity;

        if self.parachute.is_deployed() {
            self.brake(Chute::Main);
        } else if self.prechute.is_deployed() {
            self.brake(Chute::Pre);
        }

        self.altitude += self.velocity;
        if self.altitude < GROUND_THRESHOLD {
            self.altitude = 0.0;
        }

        tracing::debug!(
            altitude = self.altitude,
            velocity = self.velocity,
            gravity,
            "tick"
        );
    }

    pub fn deploy_parachute(&mut self) -> Deployment {
        self.deploy(Chute::Main)
    }

    pub fn deploy_prechute(&mut self) -> Deployment {
        self.deploy(Chute::Pre)
    }

    fn chute_mut(&mut self, chute: Chute) -> &mut Parachute {
        match chute {
            Chute::Main => &mut self.parachute,
            Chute::Pre => &mut self.prechute,
        }
    }

    fn brake(&mut self, chute: Chute) {
        let ceiling = self.descent_ceiling;
        let parachute = self.chute_mut(chute);
        let factor = parachute.get_slow_down_factor();
        parachute.damage();
        self.velocity = (self.velocity + factor).min(ceiling);
    }

    fn deploy(&mut self, chute: Chute) -> Deployment {
        let velocity = self.velocity;
        let parachute = self.chute_mut(chute);

        if parachute.is_deployed() {
            return Deployment::AlreadyDeployed;
        }
        if !parachute.can_deploy_at(velocity) {
            tracing::debug!(chute = chute.name(), velocity, "deploy ignored, falling too slowly");
            return Deployment::TooSlow;
        }

        parachute.open();
        let boost = parachute.get_slow_down_initial();
        self.velocity += boost;
        tracing::info!(chute = chute.name(), velocity = self.velocity, "chute opened");
        Deployment::Opened
    }

    pub fn get_altitude(&self) -> f64 {
        self.altitude
    }

    pub fn get_velocity(&self) -> f64 {
        self.velocity
    }

    pub fn get_fuel(&self) -> u32 {
        self.propulsion.get_fuel()
    }

    pub fn get_gravity(&self) -> f64 {
        self.environment.gravity
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn get_state(&self) -> RocketState {
        if !self.started {
            RocketState::Idle
        } else if self.altitude <= 0.0 && self.velocity <= 0.0 {
            RocketState::Grounded
        } else if self.velocity > 0.0 {
            RocketState::Ascending
        } else {
            RocketState::Descending
        }
    }
}
