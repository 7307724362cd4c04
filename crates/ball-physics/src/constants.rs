//! Physical constants for the bouncing-ball simulation
//!
//! The vertical field amplitude is standard gravitational acceleration in
//! centimeters per second squared; the lateral fields are stylized and much
//! weaker. Each axis oscillates at its own angular rate.

use std::f32::consts::PI;

/// Lateral gravity amplitude along x (cm/s²)
pub const GRAVITY_AMPLITUDE_X: f32 = 500.0;

/// Lateral gravity amplitude along y (cm/s²)
pub const GRAVITY_AMPLITUDE_Y: f32 = 500.0;

/// Vertical gravity amplitude along z, standard gravity in cm/s² scale
pub const GRAVITY_AMPLITUDE_Z: f32 = 9810.0;

/// Angular rate of the x field (rad/s), period 10 s
pub const GRAVITY_RATE_X: f32 = PI / 5.0;

/// Angular rate of the y field (rad/s), period 6 s
pub const GRAVITY_RATE_Y: f32 = PI / 3.0;

/// Angular rate of the z field (rad/s), period 14 s
pub const GRAVITY_RATE_Z: f32 = PI / 7.0;

/// Scale applied to the sampled gravity vector when integrating velocity
pub const GRAVITY_SCALE: f32 = 0.01;

/// Shared sphere radius
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Fraction of normal speed retained after any collision
pub const DEFAULT_RESTITUTION: f32 = 0.9;

/// Box extent per axis
pub const DEFAULT_BOX_EXTENT: f32 = 100.0;

/// Number of simulated bodies
pub const DEFAULT_BODY_COUNT: usize = 5;

/// Half-width of the uniform initial velocity range
pub const DEFAULT_INITIAL_SPEED: f32 = 2.0;
