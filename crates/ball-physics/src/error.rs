//! Error types for world construction

use thiserror::Error;

/// Result alias for fallible world operations.
pub type Result<T> = std::result::Result<T, WorldError>;

/// Errors detected when building a world.
///
/// All of these are configuration faults: they are reported once at
/// construction and never retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
    /// No bodies requested.
    #[error("body count must be at least 1")]
    EmptyWorld,

    /// Radius is not a positive finite number.
    #[error("invalid radius: {0} (must be positive and finite)")]
    InvalidRadius(f32),

    /// Restitution outside the half-open unit interval.
    #[error("invalid restitution: {0} (must be in (0, 1])")]
    InvalidRestitution(f32),

    /// Initial speed is not a non-negative finite number.
    #[error("invalid initial speed: {0} (must be non-negative and finite)")]
    InvalidInitialSpeed(f32),

    /// Box with non-positive extent on some axis.
    #[error("invalid bounds: min {min:?} is not below max {max:?} on every axis")]
    InvalidBounds {
        /// Lower corner of the rejected box.
        min: [f32; 3],
        /// Upper corner of the rejected box.
        max: [f32; 3],
    },

    /// The box leaves no interior for a sphere of the configured radius.
    #[error("radius {radius} does not fit the {axis} axis (extent {extent})")]
    RadiusExceedsBounds {
        /// The configured sphere radius.
        radius: f32,
        /// Axis on which the sphere cannot fit.
        axis: char,
        /// Box extent along that axis.
        extent: f32,
    },

    /// Combined sphere volume exceeds the box volume.
    #[error("{count} spheres of radius {radius} cannot fit the box without permanent overlap")]
    Overcrowded {
        /// Requested body count.
        count: usize,
        /// The configured sphere radius.
        radius: f32,
    },
}
