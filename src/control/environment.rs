use crate::config::BodyConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub gravitational_constant: f64,
}

impl CelestialBody {
    pub fn new(name: String, mass: f64, radius: f64, gravitational_constant: f64) -> Self {
        CelestialBody {
            name,
            mass,
            radius,
            gravitational_constant,
        }
    }

    pub fn from_config(config: &BodyConfig) -> Self {
        CelestialBody::new(
            config.name.clone(),
            config.mass,
            config.radius,
            config.gravitational_constant,
        )
    }

    pub fn surface_gravity(&self) -> f64 {
        self.gravity_at_altitude(0.0)
    }

    // Inverse-square law, measured from the body's center.
    pub fn gravity_at_altitude(&self, altitude: f64) -> f64 {
        let distance = self.radius + altitude;
        self.gravitational_constant * self.mass / distance.powi(2)
    }
}

pub struct Environment {
    pub gravity: f64,
    pub current_body: CelestialBody,
}

impl Environment {
    pub fn new(body: CelestialBody) -> Self {
        Environment {
            gravity: body.surface_gravity(),
            current_body: body,
        }
    }

    pub fn update(&mut self, altitude: f64) -> f64 {
        self.gravity = self.current_body.gravity_at_altitude(altitude);
        self.gravity
    }
}
