//! Body state for the bouncing-ball simulation

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A single simulated sphere
///
/// Radius and restitution are shared across all bodies and live on
/// [`crate::World`]; a body carries only its kinematic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center position in world coordinates
    pub position: Vec3,
    /// Velocity in units per tick
    pub velocity: Vec3,
}

impl Body {
    /// Create a body from its kinematic state
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Copy out a renderer-facing snapshot of this body
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position.to_array(),
            velocity: self.velocity.to_array(),
        }
    }
}

/// Renderer-compatible body state
///
/// Plain arrays so a frame of snapshots can be handed to a renderer as raw
/// bytes. A snapshot is a pure copy and never aliases live state.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct BodySnapshot {
    /// Position in 3D space
    pub position: [f32; 3],
    /// Velocity vector, available for motion blur
    pub velocity: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_copies_state() {
        let body = Body::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-0.5, 0.0, 0.5));
        let snapshot = body.snapshot();

        assert_eq!(snapshot.position, [1.0, 2.0, 3.0]);
        assert_eq!(snapshot.velocity, [-0.5, 0.0, 0.5]);
    }

    #[test]
    fn snapshot_casts_to_bytes() {
        let snapshots = [
            BodySnapshot {
                position: [1.0, 2.0, 3.0],
                velocity: [0.0; 3],
            },
            BodySnapshot {
                position: [4.0, 5.0, 6.0],
                velocity: [0.0; 3],
            },
        ];

        let bytes: &[u8] = bytemuck::cast_slice(&snapshots);
        assert_eq!(bytes.len(), 2 * 6 * std::mem::size_of::<f32>());
    }
}
