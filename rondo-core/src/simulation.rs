//! The per-frame stepper.
//!
//! One call to [`step`] is one simulated frame: a single pass over all
//! bodies in index order. For each body the detector scans the other
//! (non-filtered) bodies for predicted overlap; on a hit the resolver
//! computes new velocities for the pair and a position correction applied to
//! the examined body only, otherwise the boundary handler integrates and
//! reflects.
//!
//! The pass reads and mutates the same body sequence in place: a body
//! updated early in the scan affects positions read later in the same pass.
//! This interleaving is part of the model's behavior; resolving against a
//! snapshot of the previous step would change outcomes.
//!
//! Complexity is O(n²) pairwise with a fixed handful of bisection iterations
//! per candidate pair. Everything is synchronous and bounded; a step always
//! runs to completion.

use crate::boundary;
use crate::collision::{CollisionDetector, CollisionResolver};
use crate::world::World;

/// Advance `world` by exactly one frame, mutating it in place.
///
/// An empty world is a no-op. A pair whose resolution is degenerate
/// (coincident centers, zero total mass) is left untouched for this step;
/// NaN never enters body state.
pub fn step(world: &mut World) {
    for index in 0..world.bodies.len() {
        match CollisionDetector::detect(&world.bodies, index, world.friendly_fire) {
            Some(contact) => {
                let examined = &world.bodies[index];
                let other = &world.bodies[contact.other];
                if let Ok(impulse) = CollisionResolver::elastic_impulse(examined, other) {
                    let corrected = CollisionResolver::corrected_position(
                        examined,
                        contact.factor,
                        impulse.velocity_a,
                    );
                    world.bodies[index].position = corrected;
                    world.bodies[index].velocity = impulse.velocity_a;
                    world.bodies[contact.other].velocity = impulse.velocity_b;
                }
                // Degenerate pair: skip for this step, resolved when the
                // bodies separate or are edited.
            }
            None => {
                boundary::integrate_and_reflect(&mut world.bodies[index], world.width, world.height)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
