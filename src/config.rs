use std::{
    env::{self, VarError},
    fs,
    path::Path,
};

use serde::Deserialize;

use crate::constants::{
    CHUTE_DEGRADED_BELOW, CHUTE_INITIAL_HEALTH, CHUTE_MIN_VELOCITY, CONFIG_PATH_ENV,
    CRASH_VELOCITY, DESCENT_CEILING, EARTH_MASS, EARTH_RADIUS, GRAVITATIONAL_CONSTANT,
    PARACHUTE_SLOW_DOWN_FACTOR, PARACHUTE_SLOW_DOWN_INITIAL, PRECHUTE_SLOW_DOWN_INITIAL,
    THRUST_POWER,
};
use crate::errors::SimulationError;

/// Every physics tunable of the simulation. `Default` reproduces the stock game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub thrust_power: f64,
    pub descent_ceiling: f64,
    pub body: BodyConfig,
    pub parachute: ChuteConfig,
    pub prechute: ChuteConfig,
    pub landing: LandingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub gravitational_constant: f64,
}

/// A `[parachute]` or `[prechute]` table. Leaving out `slow_down_factor`
/// makes the chute push with the negated surface gravity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChuteConfig {
    pub slow_down_factor: Option<f64>,
    pub slow_down_initial: f64,
    #[serde(default = "default_min_velocity")]
    pub min_velocity: f64,
    #[serde(default = "default_initial_health")]
    pub initial_health: u32,
    #[serde(default = "default_degraded_below")]
    pub degraded_below: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub crash_velocity: f64,
}

fn default_min_velocity() -> f64 {
    CHUTE_MIN_VELOCITY
}

fn default_initial_health() -> u32 {
    CHUTE_INITIAL_HEALTH
}

fn default_degraded_below() -> u32 {
    CHUTE_DEGRADED_BELOW
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            thrust_power: THRUST_POWER,
            descent_ceiling: DESCENT_CEILING,
            body: BodyConfig::default(),
            parachute: ChuteConfig::main(),
            prechute: ChuteConfig::pre(),
            landing: LandingConfig::default(),
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        BodyConfig {
            name: "Earth".to_string(),
            mass: EARTH_MASS,
            radius: EARTH_RADIUS,
            gravitational_constant: GRAVITATIONAL_CONSTANT,
        }
    }
}

impl Default for LandingConfig {
    fn default() -> Self {
        LandingConfig {
            crash_velocity: CRASH_VELOCITY,
        }
    }
}

impl ChuteConfig {
    pub fn main() -> Self {
        ChuteConfig {
            slow_down_factor: Some(PARACHUTE_SLOW_DOWN_FACTOR),
            slow_down_initial: PARACHUTE_SLOW_DOWN_INITIAL,
            min_velocity: CHUTE_MIN_VELOCITY,
            initial_health: CHUTE_INITIAL_HEALTH,
            degraded_below: CHUTE_DEGRADED_BELOW,
        }
    }

    pub fn pre() -> Self {
        ChuteConfig {
            slow_down_factor: None,
            slow_down_initial: PRECHUTE_SLOW_DOWN_INITIAL,
            ..ChuteConfig::main()
        }
    }

    fn validate(&self, table: &str) -> Result<(), SimulationError> {
        if self.degraded_below > self.initial_health {
            return Err(SimulationError::InvalidConfig(format!(
                "[{table}] degraded_below ({}) exceeds initial_health ({})",
                self.degraded_below, self.initial_health
            )));
        }
        let finite = self.slow_down_factor.map_or(true, f64::is_finite)
            && self.slow_down_initial.is_finite()
            && self.min_velocity.is_finite();
        if !finite {
            return Err(SimulationError::InvalidConfig(format!(
                "[{table}] values must be finite numbers"
            )));
        }
        Ok(())
    }
}

impl SimulationConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SimulationError> {
        let config: SimulationConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimulationError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reads the file named by `ROCKET_SIM_CONFIG`, or falls back to defaults.
    pub fn from_env() -> Result<Self, SimulationError> {
        Self::from_env_value(env::var(CONFIG_PATH_ENV))
    }

    fn from_env_value(value: Result<String, VarError>) -> Result<Self, SimulationError> {
        match value {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!(%path, "loading simulation config");
                Self::from_file(path.trim())
            }
            Ok(_) | Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => {
                tracing::warn!(path = ?raw, "config path is not valid unicode");
                Err(SimulationError::InvalidConfig(format!(
                    "{CONFIG_PATH_ENV} is not valid unicode: {raw:?}"
                )))
            }
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let body = &self.body;
        for (key, value) in [
            ("mass", body.mass),
            ("radius", body.radius),
            ("gravitational_constant", body.gravitational_constant),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::InvalidConfig(format!(
                    "[body] {key} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.thrust_power.is_finite() && self.thrust_power >= 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "thrust_power must be zero or positive, got {}",
                self.thrust_power
            )));
        }
        if !self.descent_ceiling.is_finite() || !self.landing.crash_velocity.is_finite() {
            return Err(SimulationError::InvalidConfig(
                "descent_ceiling and crash_velocity must be finite numbers".to_string(),
            ));
        }
        self.parachute.validate("parachute")?;
        self.prechute.validate("prechute")
    }
}
