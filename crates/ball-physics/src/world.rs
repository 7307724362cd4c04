//! World state: bodies, box bounds, and seeded construction

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body::{Body, BodySnapshot};
use crate::constants::{
    DEFAULT_BODY_COUNT, DEFAULT_BOX_EXTENT, DEFAULT_INITIAL_SPEED, DEFAULT_RADIUS,
    DEFAULT_RESTITUTION,
};
use crate::error::{Result, WorldError};

/// Axis-aligned box confining the bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Lower corner
    pub min: Vec3,
    /// Upper corner
    pub max: Vec3,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::splat(DEFAULT_BOX_EXTENT),
        }
    }
}

impl Bounds {
    /// Create a box from its corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box size per axis
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }

    /// Total box volume
    pub fn volume(&self) -> f32 {
        let extent = self.extent();
        extent.x * extent.y * extent.z
    }
}

/// Construction parameters for a world
///
/// There is no runtime reconfiguration: a config is consumed once by
/// [`World::new`]. The defaults reproduce the reference scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    /// Number of simulated bodies
    pub body_count: usize,
    /// Shared sphere radius
    pub radius: f32,
    /// Fraction of normal speed retained after any collision, in (0, 1]
    pub restitution: f32,
    /// Confining box
    pub bounds: Bounds,
    /// Half-width of the uniform initial velocity range
    pub initial_speed: f32,
    /// Seed for initial position/velocity sampling
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            radius: DEFAULT_RADIUS,
            restitution: DEFAULT_RESTITUTION,
            bounds: Bounds::default(),
            initial_speed: DEFAULT_INITIAL_SPEED,
            seed: 0,
        }
    }
}

/// Aggregate simulation state
///
/// Pure data: the stepper in `ball-simulation` owns the only mutating code
/// path. Body order is stable and defines pairwise iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    /// Simulated bodies; count is fixed at construction
    pub bodies: Vec<Body>,
    /// Shared sphere radius
    pub radius: f32,
    /// Fraction of normal speed retained after any collision
    pub restitution: f32,
    /// Confining box
    pub bounds: Bounds,
}

impl World {
    /// Build a world from `config`, failing fast on unusable parameters
    ///
    /// Positions are sampled uniformly inside the radius-inset box and
    /// velocities uniformly in `[-initial_speed, initial_speed]` per axis.
    /// The same seed and config always produce the same body set.
    pub fn new(config: &WorldConfig) -> Result<Self> {
        if config.body_count == 0 {
            return Err(WorldError::EmptyWorld);
        }
        if !config.radius.is_finite() || config.radius <= 0.0 {
            return Err(WorldError::InvalidRadius(config.radius));
        }
        if !config.restitution.is_finite()
            || config.restitution <= 0.0
            || config.restitution > 1.0
        {
            return Err(WorldError::InvalidRestitution(config.restitution));
        }
        if !config.initial_speed.is_finite() || config.initial_speed < 0.0 {
            return Err(WorldError::InvalidInitialSpeed(config.initial_speed));
        }

        // Written so that NaN extents also fail the comparison.
        let extent = config.bounds.extent();
        if !(extent.min_element() > 0.0) {
            return Err(WorldError::InvalidBounds {
                min: config.bounds.min.to_array(),
                max: config.bounds.max.to_array(),
            });
        }
        for (axis, extent) in [('x', extent.x), ('y', extent.y), ('z', extent.z)] {
            if extent <= 2.0 * config.radius {
                return Err(WorldError::RadiusExceedsBounds {
                    radius: config.radius,
                    axis,
                    extent,
                });
            }
        }

        // If the spheres outvolume the box, no placement can avoid
        // permanent overlap.
        let sphere_volume = 4.0 / 3.0 * std::f32::consts::PI * config.radius.powi(3);
        if sphere_volume * config.body_count as f32 > config.bounds.volume() {
            return Err(WorldError::Overcrowded {
                count: config.body_count,
                radius: config.radius,
            });
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let low = config.bounds.min + Vec3::splat(config.radius);
        let high = config.bounds.max - Vec3::splat(config.radius);
        let bodies = (0..config.body_count)
            .map(|_| {
                let position = Vec3::new(
                    rng.random_range(low.x..high.x),
                    rng.random_range(low.y..high.y),
                    rng.random_range(low.z..high.z),
                );
                let velocity = if config.initial_speed > 0.0 {
                    Vec3::new(
                        rng.random_range(-config.initial_speed..config.initial_speed),
                        rng.random_range(-config.initial_speed..config.initial_speed),
                        rng.random_range(-config.initial_speed..config.initial_speed),
                    )
                } else {
                    Vec3::ZERO
                };
                Body::new(position, velocity)
            })
            .collect();

        Ok(Self {
            bodies,
            radius: config.radius,
            restitution: config.restitution,
            bounds: config.bounds,
        })
    }

    /// Number of simulated bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Copy out per-body state for the external renderer
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }
}
