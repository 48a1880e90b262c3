use crate::config::ChuteConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChuteState {
    Idle,
    Deployed,
    /// Still out, but too torn to slow anything down.
    Degraded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parachute {
    state: ChuteState,
    health: u32,
    slow_down_factor: f64,
    slow_down_initial: f64,
    min_velocity: f64,
    degraded_below: u32,
}

impl Parachute {
    /// `surface_gravity` stands in for a missing `slow_down_factor`, negated.
    pub fn new(config: &ChuteConfig, surface_gravity: f64) -> Self {
        Parachute {
            state: ChuteState::Idle,
            health: config.initial_health,
            slow_down_factor: config.slow_down_factor.unwrap_or(-surface_gravity),
            slow_down_initial: config.slow_down_initial,
            min_velocity: config.min_velocity,
            degraded_below: config.degraded_below,
        }
    }

    /// Opens an idle chute. Returns false if it was already out.
    pub fn open(&mut self) -> bool {
        if self.state != ChuteState::Idle {
            return false;
        }
        self.state = ChuteState::Deployed;
        true
    }

    pub fn damage(&mut self) {
        self.health = self.health.saturating_sub(1);
        if self.health < self.degraded_below {
            self.slow_down_factor = 0.0;
            if self.state == ChuteState::Deployed {
                self.state = ChuteState::Degraded;
                tracing::info!(health = self.health, "parachute degraded");
            }
        }
    }

    pub fn can_deploy_at(&self, velocity: f64) -> bool {
        velocity <= self.min_velocity
    }

    pub fn is_deployed(&self) -> bool {
        self.state != ChuteState::Idle
    }

    pub fn get_state(&self) -> ChuteState {
        self.state
    }

    pub fn get_health(&self) -> u32 {
        self.health
    }

    pub fn get_slow_down_factor(&self) -> f64 {
        self.slow_down_factor
    }

    pub fn get_slow_down_initial(&self) -> f64 {
        self.slow_down_initial
    }

    pub fn get_min_velocity(&self) -> f64 {
        self.min_velocity
    }
}
