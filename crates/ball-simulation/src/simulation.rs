//! Stepper advancing the world by one time slice
//!
//! Stage order per step: sample elapsed time, integrate gravity into
//! velocity, integrate position, reflect off walls, then resolve pairwise
//! impacts in ascending index order. Pairwise resolution is velocity-only:
//! overlapping bodies are never separated positionally, so a pair can stay
//! geometrically overlapped across steps. All pairs are checked, which is
//! O(N²) but fine at small body counts.

use ball_physics::{BodySnapshot, GravityField, World, GRAVITY_SCALE};
use glam::Vec3;

use crate::clock::SimClock;

/// Owns the world and advances it one slice at a time
///
/// The stepper is stateless beyond its fields; it repeats the same
/// transition every call and never terminates on its own. The driver
/// decides when to stop stepping.
pub struct Simulation<C: SimClock> {
    world: World,
    gravity: GravityField,
    clock: C,
}

impl<C: SimClock> Simulation<C> {
    /// Wrap a world with the default gravity field
    pub fn new(world: World, clock: C) -> Self {
        Self::with_gravity(world, GravityField::default(), clock)
    }

    /// Wrap a world with an explicit gravity field
    pub fn with_gravity(world: World, gravity: GravityField, clock: C) -> Self {
        Self {
            world,
            gravity,
            clock,
        }
    }

    /// Advance the world by one slice
    ///
    /// Semi-implicit Euler: the gravity contribution lands in velocity
    /// before positions move, so this slice's field already shapes this
    /// slice's motion.
    pub fn step(&mut self) {
        let t = self.clock.elapsed();
        let gravity = self.gravity.at(t) * GRAVITY_SCALE;

        for body in &mut self.world.bodies {
            body.velocity += gravity;
            body.position += body.velocity;
        }

        self.reflect_off_walls();
        self.resolve_impacts();
    }

    /// Per-axis wall reflection and clamp
    ///
    /// Axes are independent: a body crossing a corner reflects off two or
    /// three walls in the same step. The clamp also absorbs marginal
    /// floating-point drift, which is tolerated rather than reported.
    fn reflect_off_walls(&mut self) {
        let restitution = self.world.restitution;
        let low = self.world.bounds.min + Vec3::splat(self.world.radius);
        let high = self.world.bounds.max - Vec3::splat(self.world.radius);

        for body in &mut self.world.bodies {
            for axis in 0..3 {
                if body.position[axis] < low[axis] {
                    body.velocity[axis] = -body.velocity[axis] * restitution;
                    body.position[axis] = low[axis];
                } else if body.position[axis] > high[axis] {
                    body.velocity[axis] = -body.velocity[axis] * restitution;
                    body.position[axis] = high[axis];
                }
            }
        }
    }

    /// Impulse exchange for every overlapping pair, ascending index order
    ///
    /// Pairs are resolved in index order, not time-of-impact order. Both
    /// bodies have equal mass, so each bears half of the exchange.
    fn resolve_impacts(&mut self) {
        let restitution = self.world.restitution;
        let touch_distance = 2.0 * self.world.radius;
        let bodies = &mut self.world.bodies;

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let offset = bodies[i].position - bodies[j].position;
                let distance = offset.length();
                if distance >= touch_distance {
                    continue;
                }
                // Coincident centers leave the contact normal undefined;
                // skip the pair this step instead of dividing by zero.
                if distance <= 0.0 || !distance.is_finite() {
                    log::warn!("bodies {i} and {j} share a center, skipping impulse");
                    continue;
                }

                let normal = offset / distance;
                let relative_velocity = bodies[i].velocity - bodies[j].velocity;
                let velocity_along_normal = relative_velocity.dot(normal);
                if velocity_along_normal > 0.0 {
                    // Already separating; applying an impulse here would
                    // pull the pair back together.
                    continue;
                }

                let impulse = (1.0 + restitution) * velocity_along_normal / 2.0;
                bodies[i].velocity -= impulse * normal;
                bodies[j].velocity += impulse * normal;
            }
        }
    }

    /// Read access to the simulated world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The injected time source
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Copy out per-body state for the external renderer
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.world.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use approx::assert_relative_eq;
    use ball_physics::{Body, Bounds};

    const TOLERANCE: f32 = 1e-5;

    /// Box-centered world with explicit bodies, away from every wall
    fn world_with(bodies: Vec<Body>, restitution: f32) -> World {
        World {
            bodies,
            radius: 1.0,
            restitution,
            bounds: Bounds::default(),
        }
    }

    /// A simulation whose clock reads zero, where the field vanishes
    fn quiescent(world: World) -> Simulation<ManualClock> {
        Simulation::new(world, ManualClock::new())
    }

    #[test]
    fn gravity_integrates_into_velocity_then_position() {
        let body = Body::new(Vec3::splat(50.0), Vec3::ZERO);
        let mut sim = quiescent(world_with(vec![body], 0.9));
        sim.clock().set(0.1);

        let expected = GravityField::default().at(0.1) * GRAVITY_SCALE;
        sim.step();

        let body = &sim.world().bodies[0];
        for axis in 0..3 {
            assert_relative_eq!(body.velocity[axis], expected[axis], epsilon = TOLERANCE);
            assert_relative_eq!(
                body.position[axis],
                50.0 + expected[axis],
                epsilon = TOLERANCE
            );
        }
    }

    #[test]
    fn lower_wall_reflects_and_clamps() {
        let body = Body::new(Vec3::new(0.9, 50.0, 50.0), Vec3::new(-0.5, 0.0, 0.0));
        let mut sim = quiescent(world_with(vec![body], 0.9));
        sim.step();

        let body = &sim.world().bodies[0];
        assert_eq!(body.position.x, 1.0);
        assert_relative_eq!(body.velocity.x, 0.45, epsilon = TOLERANCE);
    }

    #[test]
    fn upper_wall_reflects_and_clamps() {
        let body = Body::new(Vec3::new(98.9, 50.0, 50.0), Vec3::new(0.5, 0.0, 0.0));
        let mut sim = quiescent(world_with(vec![body], 0.9));
        sim.step();

        let body = &sim.world().bodies[0];
        assert_eq!(body.position.x, 99.0);
        assert_relative_eq!(body.velocity.x, -0.45, epsilon = TOLERANCE);
    }

    #[test]
    fn corner_reflects_all_three_axes() {
        let body = Body::new(Vec3::splat(1.1), Vec3::splat(-0.5));
        let mut sim = quiescent(world_with(vec![body], 0.9));
        sim.step();

        let body = &sim.world().bodies[0];
        for axis in 0..3 {
            assert_eq!(body.position[axis], 1.0);
            assert_relative_eq!(body.velocity[axis], 0.45, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn separating_pair_is_left_alone() {
        // Overlapping after integration (distance 1.2 < 2) but drifting
        // apart, so the pairwise stage must not touch the velocities.
        let a = Body::new(Vec3::new(50.0, 50.0, 50.0), Vec3::new(-0.1, 0.0, 0.0));
        let b = Body::new(Vec3::new(51.0, 50.0, 50.0), Vec3::new(0.1, 0.0, 0.0));
        let mut sim = quiescent(world_with(vec![a, b], 0.9));
        sim.step();

        assert_eq!(sim.world().bodies[0].velocity, Vec3::new(-0.1, 0.0, 0.0));
        assert_eq!(sim.world().bodies[1].velocity, Vec3::new(0.1, 0.0, 0.0));
    }

    #[test]
    fn head_on_impact_exchanges_half_impulses() {
        // After integration the pair sits at distance 1.5, closing at a
        // combined 4.0 along the axis. With restitution 0.9 the exchanged
        // half-impulse is (1 + 0.9) * -4.0 / 2 = -3.8, leaving the pair
        // separating at 4.0 * 0.9 = 3.6.
        let a = Body::new(Vec3::new(48.0, 50.0, 50.0), Vec3::new(2.0, 0.0, 0.0));
        let b = Body::new(Vec3::new(53.5, 50.0, 50.0), Vec3::new(-2.0, 0.0, 0.0));
        let mut sim = quiescent(world_with(vec![a, b], 0.9));
        sim.step();

        let bodies = &sim.world().bodies;
        assert_relative_eq!(bodies[0].velocity.x, -1.8, epsilon = TOLERANCE);
        assert_relative_eq!(bodies[1].velocity.x, 1.8, epsilon = TOLERANCE);

        let separation_speed = (bodies[1].velocity - bodies[0].velocity).x;
        assert_relative_eq!(separation_speed, 3.6, epsilon = TOLERANCE);
    }

    #[test]
    fn elastic_impact_preserves_normal_speed() {
        let a = Body::new(Vec3::new(48.0, 50.0, 50.0), Vec3::new(2.0, 0.0, 0.0));
        let b = Body::new(Vec3::new(53.5, 50.0, 50.0), Vec3::new(-2.0, 0.0, 0.0));
        let mut sim = quiescent(world_with(vec![a, b], 1.0));
        sim.step();

        let bodies = &sim.world().bodies;
        assert_relative_eq!(bodies[0].velocity.x, -2.0, epsilon = TOLERANCE);
        assert_relative_eq!(bodies[1].velocity.x, 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn inelastic_impact_dissipates_normal_speed() {
        let a = Body::new(Vec3::new(48.0, 50.0, 50.0), Vec3::new(2.0, 0.0, 0.0));
        let b = Body::new(Vec3::new(53.5, 50.0, 50.0), Vec3::new(-2.0, 0.0, 0.0));
        let mut sim = quiescent(world_with(vec![a, b], 0.5));
        sim.step();

        let bodies = &sim.world().bodies;
        let separation_speed = (bodies[1].velocity - bodies[0].velocity).x;
        assert_relative_eq!(separation_speed, 4.0 * 0.5, epsilon = TOLERANCE);
        assert!(separation_speed < 4.0);
    }

    #[test]
    fn coincident_centers_are_skipped() {
        let a = Body::new(Vec3::splat(50.0), Vec3::ZERO);
        let b = Body::new(Vec3::splat(50.0), Vec3::ZERO);
        let mut sim = quiescent(world_with(vec![a, b], 0.9));
        sim.step();

        for body in &sim.world().bodies {
            assert_eq!(body.velocity, Vec3::ZERO);
            assert!(body.position.is_finite());
        }
    }

    #[test]
    fn impacts_resolve_in_ascending_index_order() {
        // Three bodies in a row, all mutually overlapping. The (0,1) pair
        // resolves before (0,2) and (1,2), so the middle body's velocity
        // entering the (1,2) check already includes the first exchange.
        let a = Body::new(Vec3::new(49.4, 50.0, 50.0), Vec3::new(0.3, 0.0, 0.0));
        let b = Body::new(Vec3::new(50.0, 50.0, 50.0), Vec3::ZERO);
        let c = Body::new(Vec3::new(50.6, 50.0, 50.0), Vec3::new(-0.3, 0.0, 0.0));
        let mut sim = quiescent(world_with(vec![a, b, c], 1.0));
        sim.step();

        // The symmetric chain ends with the outer bodies rebounding and
        // the middle one at rest, with momentum along x still zero.
        let bodies = &sim.world().bodies;
        assert!(bodies[0].velocity.x < 0.0);
        assert_relative_eq!(bodies[1].velocity.x, 0.0, epsilon = 1e-4);
        assert!(bodies[2].velocity.x > 0.0);

        let total: f32 = bodies.iter().map(|b| b.velocity.x).sum();
        assert_relative_eq!(total, 0.0, epsilon = TOLERANCE);
    }
}
