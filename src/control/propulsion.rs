pub struct PropulsionSystem {
    fuel: u32,
    thrust_power: f64,
}

impl PropulsionSystem {
    pub fn new(fuel: u32, thrust_power: f64) -> Self {
        PropulsionSystem { fuel, thrust_power }
    }

    /// Spends one unit of fuel and returns the velocity it adds.
    pub fn burn_unit(&mut self) -> Option<f64> {
        if self.is_out_of_fuel() {
            return None;
        }
        self.fuel -= 1;
        Some(self.thrust_power)
    }

    pub fn get_fuel(&self) -> u32 {
        self.fuel
    }

    pub fn get_thrust_power(&self) -> f64 {
        self.thrust_power
    }

    pub fn is_out_of_fuel(&self) -> bool {
        self.fuel == 0
    }
}
