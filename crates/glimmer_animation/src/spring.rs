//! Spring physics animation
//!
//! RK4-integrated damped harmonic oscillator driving the transition
//! choreography: placeholder emergence, bubble tap feedback, editing bounce.
//! Configs can be built from raw stiffness/damping or from the
//! response/damping-fraction parameterization the presets use.

use std::f32::consts::PI;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration from raw physics parameters
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Build from response (seconds per undamped period) and damping fraction.
    ///
    /// A damping fraction of 1.0 is critically damped; below 1.0 the spring
    /// overshoots. Unit mass.
    pub fn with_response(response: f32, damping_fraction: f32) -> Self {
        let response = response.max(1e-3);
        let omega = 2.0 * PI / response;
        let stiffness = omega * omega;
        let damping = damping_fraction.max(0.0) * 2.0 * omega;
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Placeholder emergence stretch (quick, slightly bouncy)
    pub fn emergence() -> Self {
        Self::with_response(0.28, 0.6)
    }

    /// Relaxation back to rest after a stretch
    pub fn settle() -> Self {
        Self::with_response(0.35, 0.5)
    }

    /// Press-down acknowledge on tappable decorations
    pub fn tap() -> Self {
        Self::with_response(0.15, 0.5)
    }

    /// Release after a tap
    pub fn release() -> Self {
        Self::with_response(0.25, 0.6)
    }

    /// Bubble presentation scale/opacity transition
    pub fn presentation() -> Self {
        Self::with_response(0.4, 0.7)
    }

    /// Two-beat vertical bounce at the end of an editing session
    pub fn bounce() -> Self {
        Self::new(200.0, 10.0, 1.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::settle()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget mid-flight; current velocity carries over
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Swap the spring feel mid-flight; position and velocity carry over.
    ///
    /// Transition choreography retargets with a different config per beat
    /// (emergence stretch, then a softer settle).
    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    /// Jump to a value with no motion
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.target = value;
    }

    /// Check if the spring has settled at its target.
    ///
    /// Spring values here are scale factors near 1.0 or pixel offsets in the
    /// tens, so a 0.01 position epsilon is imperceptible for both.
    pub fn is_settled(&self) -> bool {
        const EPSILON: f32 = 0.01;
        const VELOCITY_EPSILON: f32 = 0.1;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}
