//! # Ball Simulation Engine
//!
//! Fixed-slice stepper advancing the ball world: gravity integration, wall
//! reflection, and pairwise impulse resolution.

pub mod clock;
pub mod simulation;

pub use clock::*;
pub use simulation::*;
