pub mod config;
pub mod constants;
pub mod control;
pub mod driver;
pub mod errors;
pub mod telemetry_system;

pub use config::SimulationConfig;
pub use constants::*;
pub use control::environment::{CelestialBody, Environment};
pub use control::landing::{assess_landing, LandingOutcome};
pub use control::parachute::{ChuteState, Parachute};
pub use control::propulsion::PropulsionSystem;
pub use control::rocket::{Deployment, Rocket, RocketState};

// Re-export the terminal driver pieces
pub use driver::command::{parse_fuel, Command};
pub use driver::session::{Round, Turn};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::telemetry::{Readout, Telemetry};
