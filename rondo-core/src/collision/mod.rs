//! Collision detection and resolution between circular bodies.
//!
//! This module handles:
//! - **Detection**: swept pairwise overlap tests plus a bisection search for
//!   the minimum translation factor along a body's one-step path
//! - **Resolution**: 2D elastic impulse exchange and position correction
//!
//! ## Swept Bisection
//!
//! Instead of only testing the end-of-step position (which tunnels at high
//! speeds), the detector searches along the full one-step displacement for
//! the largest fraction of the velocity the body can apply without
//! penetrating its neighbor:
//!
//! ```text
//! t=0                      t=1
//!  ●──────────┬────────────●
//!  start      │ factor≈0.45
//!             │
//!         ( neighbor )
//! ```
//!
//! The search is a fixed-iteration bisection, deterministic and cheap, not an
//! exact time-of-impact computation. A negative factor is a sentinel meaning
//! the body cannot avoid penetration by braking and must move out along its
//! post-collision direction instead.

pub mod detection;
pub mod resolution;

pub use detection::*;
pub use resolution::*;
