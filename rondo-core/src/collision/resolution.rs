//! Elastic collision resolution for circular bodies.
//!
//! Computes post-collision velocities with the standard two-body elastic
//! impulse along the line of centers:
//!
//! ```text
//! v1' = v1 - (2 m2 / (m1 + m2)) * [(v1 - v2)·(p1 - p2) / |p1 - p2|²] * (p1 - p2)
//! v2' = v2 - (2 m1 / (m1 + m2)) * [(v2 - v1)·(p2 - p1) / |p2 - p1|²] * (p2 - p1)
//! ```
//!
//! No rotation, no friction, restitution 1.0: momentum and kinetic energy
//! are both conserved exactly.
//!
//! Position correction is asymmetric: only the body currently under
//! examination moves. Its partner is corrected when it becomes the subject
//! of its own detection pass. The bisection-based tunneling avoidance
//! depends on this asymmetry; do not symmetrize it without re-deriving the
//! model.

use crate::types::{constants, Body, EngineError, Point2, Vec2};

/// Post-collision velocities for a resolved pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    pub velocity_a: Vec2,
    pub velocity_b: Vec2,
}

/// Collision resolver for the circle-body world.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Elastic impulse exchange between bodies `a` and `b`.
    ///
    /// Fails with [`EngineError::DegenerateGeometry`] when the centers
    /// coincide or the total mass is zero; both would divide by zero and
    /// leak NaN into body state. Callers may treat the error as "skip the
    /// pair this step".
    pub fn elastic_impulse(a: &Body, b: &Body) -> Result<Impulse, EngineError> {
        let delta = a.position - b.position;
        let dist_sq = delta.length_squared();
        let total_mass = a.mass + b.mass;

        if dist_sq < constants::EPSILON || total_mass < constants::EPSILON {
            return Err(EngineError::DegenerateGeometry);
        }

        let relative = a.velocity - b.velocity;
        let along_centers = relative.dot(&delta) / dist_sq;

        let velocity_a = a.velocity - delta * (2.0 * b.mass / total_mass) * along_centers;
        let velocity_b = b.velocity + delta * (2.0 * a.mass / total_mass) * along_centers;

        Ok(Impulse {
            velocity_a,
            velocity_b,
        })
    }

    /// Corrected position for the examined body given its translation
    /// factor.
    ///
    /// Non-negative factor: advance along the *pre-collision* velocity by
    /// that fraction, stopping at near-contact. Negative factor (the
    /// cannot-brake sentinel): advance along the *post-collision* velocity
    /// by the factor's magnitude, moving out along the new trajectory.
    pub fn corrected_position(body: &Body, factor: f64, post_velocity: Vec2) -> Point2 {
        if factor >= 0.0 {
            body.position + body.velocity * factor
        } else {
            body.position + post_velocity * (-factor)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: f64, y: f64, radius: f64, velocity: Vec2) -> Body {
        let mut b = Body::new(Point2::new(x, y), 0);
        b.set_radius(radius);
        b.velocity = velocity;
        b
    }

    fn total_momentum(a: &Body, b: &Body, va: Vec2, vb: Vec2) -> Vec2 {
        va * a.mass + vb * b.mass
    }

    fn total_energy(a: &Body, b: &Body, va: Vec2, vb: Vec2) -> f64 {
        0.5 * a.mass * va.length_squared() + 0.5 * b.mass * vb.length_squared()
    }

    #[test]
    fn test_equal_mass_head_on_exchange() {
        let a = body(0.0, 0.0, 10.0, Vec2::new(1.0, 0.0));
        let b = body(30.0, 0.0, 10.0, Vec2::new(-1.0, 0.0));

        let impulse = CollisionResolver::elastic_impulse(&a, &b).unwrap();

        // Equal masses swap velocities exactly
        assert!((impulse.velocity_a.x + 1.0).abs() < constants::EPSILON);
        assert!(impulse.velocity_a.y.abs() < constants::EPSILON);
        assert!((impulse.velocity_b.x - 1.0).abs() < constants::EPSILON);
        assert!(impulse.velocity_b.y.abs() < constants::EPSILON);
    }

    #[test]
    fn test_momentum_conserved() {
        let a = body(0.0, 0.0, 10.0, Vec2::new(3.0, 1.0));
        let b = body(18.0, 4.0, 20.0, Vec2::new(-2.0, 0.5));

        let impulse = CollisionResolver::elastic_impulse(&a, &b).unwrap();

        let before = total_momentum(&a, &b, a.velocity, b.velocity);
        let after = total_momentum(&a, &b, impulse.velocity_a, impulse.velocity_b);
        assert!(
            (before - after).length() < 1e-9,
            "momentum drifted: {:?} -> {:?}",
            before,
            after
        );
    }

    #[test]
    fn test_energy_conserved() {
        let a = body(0.0, 0.0, 10.0, Vec2::new(3.0, 1.0));
        let b = body(18.0, 4.0, 20.0, Vec2::new(-2.0, 0.5));

        let impulse = CollisionResolver::elastic_impulse(&a, &b).unwrap();

        let before = total_energy(&a, &b, a.velocity, b.velocity);
        let after = total_energy(&a, &b, impulse.velocity_a, impulse.velocity_b);
        assert!(
            (before - after).abs() < 1e-9,
            "energy drifted: {} -> {}",
            before,
            after
        );
    }

    #[test]
    fn test_oblique_collision_conserves_both() {
        // Off-axis masses and velocities: the generic case
        let a = body(0.0, 0.0, 15.0, Vec2::new(2.0, -1.0));
        let b = body(20.0, 12.0, 10.0, Vec2::new(-0.5, 0.25));

        let impulse = CollisionResolver::elastic_impulse(&a, &b).unwrap();

        let p_before = total_momentum(&a, &b, a.velocity, b.velocity);
        let p_after = total_momentum(&a, &b, impulse.velocity_a, impulse.velocity_b);
        assert!((p_before - p_after).length() < 1e-9);

        let e_before = total_energy(&a, &b, a.velocity, b.velocity);
        let e_after = total_energy(&a, &b, impulse.velocity_a, impulse.velocity_b);
        assert!((e_before - e_after).abs() < 1e-9);
    }

    #[test]
    fn test_tangential_motion_unchanged() {
        // Velocity perpendicular to the line of centers transfers nothing
        let a = body(0.0, 0.0, 10.0, Vec2::new(0.0, 5.0));
        let b = body(20.0, 0.0, 10.0, Vec2::new(0.0, -5.0));

        let impulse = CollisionResolver::elastic_impulse(&a, &b).unwrap();
        assert_eq!(impulse.velocity_a, a.velocity);
        assert_eq!(impulse.velocity_b, b.velocity);
    }

    #[test]
    fn test_coincident_centers_degenerate() {
        let a = body(5.0, 5.0, 10.0, Vec2::new(1.0, 0.0));
        let b = body(5.0, 5.0, 10.0, Vec2::new(-1.0, 0.0));

        assert_eq!(
            CollisionResolver::elastic_impulse(&a, &b),
            Err(EngineError::DegenerateGeometry)
        );
    }

    #[test]
    fn test_zero_total_mass_degenerate() {
        // Two unsized bodies (radius 0 => mass 0): the mass division guard
        let a = body(0.0, 0.0, 0.0, Vec2::new(1.0, 0.0));
        let b = body(10.0, 0.0, 0.0, Vec2::new(-1.0, 0.0));

        assert_eq!(
            CollisionResolver::elastic_impulse(&a, &b),
            Err(EngineError::DegenerateGeometry)
        );
    }

    #[test]
    fn test_resolved_velocities_always_finite() {
        let a = body(0.0, 0.0, 1.0, Vec2::new(1e6, -1e6));
        let b = body(1e-3, 0.0, 100.0, Vec2::new(-1e6, 1e6));

        let impulse = CollisionResolver::elastic_impulse(&a, &b).unwrap();
        assert!(impulse.velocity_a.x.is_finite() && impulse.velocity_a.y.is_finite());
        assert!(impulse.velocity_b.x.is_finite() && impulse.velocity_b.y.is_finite());
    }

    #[test]
    fn test_corrected_position_braking() {
        let a = body(0.0, 0.0, 5.0, Vec2::new(10.0, 0.0));
        let corrected = CollisionResolver::corrected_position(&a, 0.25, Vec2::new(-10.0, 0.0));
        // Non-negative factor moves along the pre-collision velocity
        assert_eq!(corrected, Point2::new(2.5, 0.0));
    }

    #[test]
    fn test_corrected_position_sentinel_uses_post_velocity() {
        let a = body(0.0, 0.0, 5.0, Vec2::new(10.0, 0.0));
        let post = Vec2::new(-4.0, 0.0);
        let corrected = CollisionResolver::corrected_position(&a, -0.5, post);
        // Negative factor moves along the post-collision velocity by |factor|
        assert_eq!(corrected, Point2::new(-2.0, 0.0));
    }
}
