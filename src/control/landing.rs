use std::fmt;

use super::rocket::Rocket;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum LandingOutcome {
    SafeLanding,
    CrashLanding,
}

impl fmt::Display for LandingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandingOutcome::SafeLanding => write!(f, "Safe Landing! Congratulations!"),
            LandingOutcome::CrashLanding => write!(f, "Crash Landing! Game Over."),
        }
    }
}

/// Touchdown only counts once the tank is empty; a fueled rocket on the pad
/// is still waiting to launch.
pub fn assess_landing(rocket: &Rocket, crash_velocity: f64) -> Option<LandingOutcome> {
    if rocket.get_altitude() > 0.0 || rocket.get_fuel() != 0 {
        return None;
    }

    if rocket.get_velocity() < crash_velocity {
        Some(LandingOutcome::CrashLanding)
    } else {
        Some(LandingOutcome::SafeLanding)
    }
}
