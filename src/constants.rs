// Physical Constants
pub const EARTH_RADIUS: f64 = 6.371e6; // meters
pub const EARTH_MASS: f64 = 5.972e24; // kg
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11; // N⋅m²/kg²

// Rocket Constants
pub const THRUST_POWER: f64 = 20.0; // velocity gained per unit of fuel

// Parachute Constants
pub const PARACHUTE_SLOW_DOWN_FACTOR: f64 = 15.0;
pub const PARACHUTE_SLOW_DOWN_INITIAL: f64 = 75.0;
pub const PRECHUTE_SLOW_DOWN_INITIAL: f64 = 25.0;
pub const CHUTE_MIN_VELOCITY: f64 = -100.0;
pub const CHUTE_INITIAL_HEALTH: u32 = 100;
pub const CHUTE_DEGRADED_BELOW: u32 = 20;

// Descent Constants
pub const DESCENT_CEILING: f64 = -4.0; // velocity cap while a chute is out
pub const GROUND_THRESHOLD: f64 = 1.0; // altitudes below this snap to 0
pub const CRASH_VELOCITY: f64 = -5.0;

// Driver Parameters
pub const CONFIG_PATH_ENV: &str = "ROCKET_SIM_CONFIG";
pub const MAX_WAIT_TICKS: u32 = 1_000; // longest single `wait`
