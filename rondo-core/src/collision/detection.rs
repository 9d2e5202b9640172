//! Swept pairwise collision detection.
//!
//! For each body the detector integrates one full step ahead and scans every
//! other body for predicted overlap, honoring the friendly-fire group filter.
//! For each overlapping neighbor it runs a bisection search for the minimum
//! translation factor, and reports the neighbor with the smallest factor
//! (the earliest collision along the path).

use crate::types::{constants, Body, Point2};

/// A detected collision for one body: the neighbor's index and the minimum
/// translation factor found by bisection.
///
/// `factor` is in `[-1, 1]`. Non-negative: the fraction of this step's
/// velocity that brings the body to near-contact without penetrating.
/// Negative: penetration is unavoidable by braking; the magnitude is the
/// fraction of the *post-collision* velocity to move out along instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub other: usize,
    pub factor: f64,
}

/// Collision detector for the circle-body world.
pub struct CollisionDetector;

impl CollisionDetector {
    /// Overlap test with slack: a disc of `radius` centered at `center`
    /// overlaps `other` when the gap between their rims is below
    /// [`constants::CONTACT_SLACK`]. Near-touching counts as colliding.
    pub fn overlaps(center: Point2, radius: f64, other: &Body) -> bool {
        center.distance(other.position) - (radius + other.radius) < constants::CONTACT_SLACK
    }

    /// Bisection search for the minimum translation factor of `body` against
    /// `other`.
    ///
    /// Starts at factor 0.5 with step 0.25 and halves the step until it
    /// drops below [`constants::BISECTION_MIN_STEP`]: if the probe position
    /// `position + factor * velocity` still overlaps, back off; otherwise
    /// advance. Terminates in a fixed number of iterations regardless of
    /// overlap depth. If the converged factor still overlaps, returns
    /// `factor - 1` as the cannot-brake sentinel.
    pub fn translation_factor(body: &Body, other: &Body) -> f64 {
        let mut factor = 0.5;
        let mut step = 0.25;

        while step > constants::BISECTION_MIN_STEP {
            let probe = body.position + body.velocity * factor;
            if Self::overlaps(probe, body.radius, other) {
                factor -= step;
            } else {
                factor += step;
            }
            step *= 0.5;
        }

        let probe = body.position + body.velocity * factor;
        if Self::overlaps(probe, body.radius, other) {
            factor - 1.0
        } else {
            factor
        }
    }

    /// Scan all neighbors of `bodies[index]` for predicted overlap at the
    /// end-of-step position and return the collision with the smallest
    /// translation factor, ties broken by ascending neighbor index.
    ///
    /// When `friendly_fire` is enabled, pairs sharing a group bit are
    /// skipped entirely; they may freely overlap.
    pub fn detect(bodies: &[Body], index: usize, friendly_fire: bool) -> Option<Contact> {
        let body = &bodies[index];
        let predicted = body.position + body.velocity;

        let mut earliest: Option<Contact> = None;
        for (other_index, other) in bodies.iter().enumerate() {
            if other_index == index {
                continue;
            }
            if friendly_fire && body.shares_group(other) {
                continue;
            }
            if !Self::overlaps(predicted, body.radius, other) {
                continue;
            }

            let factor = Self::translation_factor(body, other);
            let is_earlier = match earliest {
                Some(contact) => factor < contact.factor,
                None => true,
            };
            if is_earlier {
                earliest = Some(Contact {
                    other: other_index,
                    factor,
                });
            }
        }
        earliest
    }
}

// =============================================================================
// Tests
// =============================================================================
