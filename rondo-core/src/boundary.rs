//! Reflecting boundary handling.
//!
//! Applied only to bodies with no detected collision in the current step:
//! integrate one full step, then check the four boundary planes (`x = 0`,
//! `x = width`, `y = 0`, `y = height`) independently. A crossing edge
//! reflects that axis's velocity component and mirrors the position back
//! inside by twice the penetration depth. The checks are independent, so a
//! body hitting a corner reflects on both axes in the same step.

use crate::types::Body;

/// Integrate `body` one step forward and reflect it off any wall its edge
/// crosses.
pub fn integrate_and_reflect(body: &mut Body, width: f64, height: f64) {
    let mut position = body.position + body.velocity;

    // Left wall (x = 0)
    if position.x - body.radius < 0.0 {
        let depth = body.radius - position.x;
        body.velocity.x = -body.velocity.x;
        position.x += 2.0 * depth;
    }
    // Right wall (x = width)
    if position.x + body.radius > width {
        let depth = position.x + body.radius - width;
        body.velocity.x = -body.velocity.x;
        position.x -= 2.0 * depth;
    }
    // Bottom wall (y = 0)
    if position.y - body.radius < 0.0 {
        let depth = body.radius - position.y;
        body.velocity.y = -body.velocity.y;
        position.y += 2.0 * depth;
    }
    // Top wall (y = height)
    if position.y + body.radius > height {
        let depth = position.y + body.radius - height;
        body.velocity.y = -body.velocity.y;
        position.y -= 2.0 * depth;
    }

    body.position = position;
}

// =============================================================================
// Tests
// =============================================================================
