//! Core types for the circle-body simulation.
//!
//! Units are plain world units (the default plane is 900 x 600):
//! - Position: world units
//! - Velocity: world units per simulation step
//! - Mass: derived from radius as `(radius / 10)²`
//!
//! `Vec2` and `Point2` are structurally identical but semantically distinct:
//! a `Vec2` is a displacement (velocity, drag offset), a `Point2` is a
//! location. The operator set enforces the distinction: `Point2 + Vec2` is a
//! `Point2`, `Point2 - Point2` is a `Vec2`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Vec2 - 2D Displacement
// =============================================================================

/// A 2D displacement vector used for velocities and relative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared magnitude (avoids sqrt for comparisons)
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (Euclidean length) of the vector
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Component-wise absolute value
    pub fn abs(&self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Returns a unit vector in the same direction, or zero if length is zero.
    ///
    /// The zero-vector result for degenerate input is a fixed contract:
    /// callers never receive NaN from normalizing a zero vector.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len < constants::EPSILON {
            Self::ZERO
        } else {
            *self / len
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

// Operator overloads for Vec2
impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::ZERO
    }
}

// =============================================================================
// Point2 - 2D Position
// =============================================================================

/// A 2D location in the world plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point (always >= 0)
    pub fn distance(&self, other: Point2) -> f64 {
        (*self - other).length()
    }
}

impl Add<Vec2> for Point2 {
    type Output = Point2;
    fn add(self, offset: Vec2) -> Point2 {
        Point2 {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}

impl AddAssign<Vec2> for Point2 {
    fn add_assign(&mut self, offset: Vec2) {
        self.x += offset.x;
        self.y += offset.y;
    }
}

impl Sub for Point2 {
    type Output = Vec2;
    fn sub(self, other: Point2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Default for Point2 {
    fn default() -> Self {
        Self::ORIGIN
    }
}

// =============================================================================
// Body
// =============================================================================

/// A rigid, non-rotating circular body.
///
/// Lifecycle: created with a center and `radius = 0` (a valid transient state
/// while the UI is still sizing it), then its radius and derived mass are
/// fixed by a second interaction. The group mask is assigned at creation and
/// never changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Point2,
    pub velocity: Vec2,
    pub mass: f64,
    pub radius: f64,
    /// Bitmask tag; bodies sharing a set bit are mutually transparent when
    /// the friendly-fire filter is enabled.
    pub group: u32,
}

impl Body {
    /// A fresh unsized body at `position` with zero velocity.
    pub fn new(position: Point2, group: u32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: 0.0,
            radius: 0.0,
            group,
        }
    }

    /// Mass derived from radius: `(radius / 10)²`
    pub fn mass_for_radius(radius: f64) -> f64 {
        let scaled = radius / constants::MASS_RADIUS_DIVISOR;
        scaled * scaled
    }

    /// Fix the radius and recompute the derived mass.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.mass = Self::mass_for_radius(radius);
    }

    /// Whether `point` lies strictly inside this body's disc.
    pub fn contains(&self, point: Point2) -> bool {
        self.position.distance(point) < self.radius
    }

    /// Whether this body and `other` share a group bit ("same team").
    pub fn shares_group(&self, other: &Body) -> bool {
        self.group & other.group != 0
    }

    /// Translational kinetic energy: ½ m |v|²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Linear momentum: m v
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error type for engine operations.
///
/// All variants are local and recoverable; callers validate and retry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    /// A body id that is not a valid current index. Indices shift down after
    /// a delete, so stale ids must be re-resolved before reuse.
    InvalidIndex(usize),
    /// A computation that would divide by zero: coincident body centers,
    /// zero total mass, or a non-positive time scale.
    DegenerateGeometry,
    /// Non-positive world width or height.
    InvalidBounds { width: f64, height: f64 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidIndex(id) => write!(f, "no body at index {}", id),
            EngineError::DegenerateGeometry => write!(f, "degenerate geometry"),
            EngineError::InvalidBounds { width, height } => {
                write!(f, "invalid world bounds: {} x {}", width, height)
            }
        }
    }
}

impl std::error::Error for EngineError {}

// =============================================================================
// Constants
// =============================================================================

/// Fixed numeric constants of the simulation.
pub mod constants {
    /// Slack added to the pairwise overlap test: near-touching counts as
    /// colliding, which avoids tunneling and jitter at the contact boundary.
    pub const CONTACT_SLACK: f64 = 0.5;

    /// Bisection terminates once the half-step falls to this size
    /// (~6 iterations from the initial step of 0.25).
    pub const BISECTION_MIN_STEP: f64 = 0.01;

    /// Converts a UI drag distance into a per-step velocity.
    pub const DRAG_TIME_SCALE: f64 = 30.0;

    /// Radius-to-mass scaling: mass = (radius / 10)²
    pub const MASS_RADIUS_DIVISOR: f64 = 10.0;

    /// Small value for floating-point comparisons and division guards
    pub const EPSILON: f64 = 1e-10;

    /// Default world plane width
    pub const DEFAULT_WIDTH: f64 = 900.0;

    /// Default world plane height
    pub const DEFAULT_HEIGHT: f64 = 600.0;
}

// =============================================================================
// Tests
// =============================================================================
