//! # Ball Physics
//!
//! World state and field math for the bouncing-ball simulation: spherical
//! bodies, the confining box, and the time-varying gravity field.

pub mod body;
pub mod constants;
pub mod error;
pub mod gravity;
pub mod world;

pub use body::*;
pub use constants::*;
pub use error::*;
pub use gravity::*;
pub use world::*;
