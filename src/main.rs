//! Bouncing-ball simulation driver
//!
//! Headless stand-in for a render loop: builds the reference world, steps
//! it at a fixed frame cadence while real elapsed time drives the gravity
//! field, and logs sampled positions.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use ball_physics::{World, WorldConfig};
use ball_simulation::{MonotonicClock, Simulation};

/// Frames sampled before the driver stops
const FRAME_COUNT: u32 = 200;

/// Nominal wall-clock period between samples
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Frames between info-level progress lines
const PROGRESS_INTERVAL: u32 = 50;

fn main() -> ExitCode {
    env_logger::init();

    let config = WorldConfig::default();
    let world = match World::new(&config) {
        Ok(world) => world,
        Err(err) => {
            log::error!("world construction failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Initialized {} bodies (radius {}, restitution {}, seed {})",
        world.body_count(),
        config.radius,
        config.restitution,
        config.seed
    );
    for (i, body) in world.bodies.iter().enumerate() {
        log::info!("  [{}] position={:.2}, velocity={:.2}", i, body.position, body.velocity);
    }

    let mut simulation = Simulation::new(world, MonotonicClock::new());

    for frame in 0..FRAME_COUNT {
        thread::sleep(FRAME_INTERVAL);
        simulation.step();

        for (i, body) in simulation.snapshot().iter().enumerate() {
            log::debug!(
                "frame {} body {} position={:?}",
                frame,
                i,
                body.position
            );
        }
        if (frame + 1) % PROGRESS_INTERVAL == 0 {
            log::info!("frame {}/{} simulated", frame + 1, FRAME_COUNT);
        }
    }

    ExitCode::SUCCESS
}
