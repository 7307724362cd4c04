//! Time-varying gravity field
//!
//! The field is a pure function of elapsed simulation time: each axis
//! oscillates sinusoidally with its own amplitude and angular rate, so the
//! dominant pull sweeps around the box as the simulation runs.

use glam::Vec3;

use crate::constants::{
    GRAVITY_AMPLITUDE_X, GRAVITY_AMPLITUDE_Y, GRAVITY_AMPLITUDE_Z, GRAVITY_RATE_X, GRAVITY_RATE_Y,
    GRAVITY_RATE_Z,
};

/// Three-axis sinusoidal gravity field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    /// Peak acceleration per axis
    pub amplitude: Vec3,
    /// Angular rate per axis (rad/s)
    pub angular_rate: Vec3,
}

impl Default for GravityField {
    fn default() -> Self {
        Self {
            amplitude: Vec3::new(
                GRAVITY_AMPLITUDE_X,
                GRAVITY_AMPLITUDE_Y,
                GRAVITY_AMPLITUDE_Z,
            ),
            angular_rate: Vec3::new(GRAVITY_RATE_X, GRAVITY_RATE_Y, GRAVITY_RATE_Z),
        }
    }
}

impl GravityField {
    /// Sample the field at `t` seconds after simulation start
    ///
    /// Stateless and defined for all real `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        Vec3::new(
            self.amplitude.x * (self.angular_rate.x * t).sin(),
            self.amplitude.y * (self.angular_rate.y * t).sin(),
            self.amplitude.z * (self.angular_rate.z * t).sin(),
        )
    }
}
