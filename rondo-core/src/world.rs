//! The world aggregate: an ordered, index-addressable collection of bodies
//! inside a reflecting rectangular boundary.
//!
//! Body ids are plain indices into the sequence and are *not* stable
//! identities: deleting the body at index `i` shifts every later body down by
//! one. Callers holding an id across a delete must re-resolve it; a stale id
//! either fails with [`EngineError::InvalidIndex`] or silently addresses the
//! wrong body. This shifting-index model is kept deliberately for
//! reproducibility with the original sandbox.

use crate::simulation;
use crate::types::{constants, Body, EngineError, Point2, Vec2};

/// The simulation world: bodies, reflecting bounds, and the friendly-fire
/// filter flag. The single shared mutable structure every engine component
/// operates on.
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) bodies: Vec<Body>,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) friendly_fire: bool,
}

impl World {
    /// Create an empty world with the given bounds.
    pub fn new(width: f64, height: f64) -> Result<Self, EngineError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(EngineError::InvalidBounds { width, height });
        }
        Ok(Self {
            bodies: Vec::new(),
            width,
            height,
            friendly_fire: false,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn friendly_fire(&self) -> bool {
        self.friendly_fire
    }

    /// Resize the reflecting boundary.
    pub fn set_bounds(&mut self, width: f64, height: f64) -> Result<(), EngineError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(EngineError::InvalidBounds { width, height });
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Toggle the group-based collision filter.
    pub fn set_friendly_fire(&mut self, enabled: bool) {
        self.friendly_fire = enabled;
    }

    /// Append an unsized body (radius 0, zero velocity) at `center`.
    ///
    /// Returns the new body's index. The body is in its transient
    /// creation state until [`World::set_radius`] fixes its size.
    pub fn add_body(&mut self, center: Point2, group: u32) -> usize {
        self.bodies.push(Body::new(center, group));
        self.bodies.len() - 1
    }

    /// Append a fully-formed body in one call (scenario loading, tests).
    ///
    /// Mass is recomputed from the radius so the `mass = (radius/10)²`
    /// invariant holds regardless of how the body entered the world.
    pub fn insert_body(
        &mut self,
        center: Point2,
        radius: f64,
        velocity: Vec2,
        group: u32,
    ) -> usize {
        let mut body = Body::new(center, group);
        body.set_radius(radius);
        body.velocity = velocity;
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Size body `id` so its rim passes through `through`; recomputes mass.
    pub fn set_radius(&mut self, id: usize, through: Point2) -> Result<(), EngineError> {
        let body = self.body_mut(id)?;
        let radius = body.position.distance(through);
        body.set_radius(radius);
        Ok(())
    }

    /// Set body `id`'s velocity from a drag gesture: the offset from the
    /// body's center to `through`, divided by `time_scale`.
    pub fn set_velocity(
        &mut self,
        id: usize,
        through: Point2,
        time_scale: f64,
    ) -> Result<(), EngineError> {
        if time_scale <= constants::EPSILON {
            return Err(EngineError::DegenerateGeometry);
        }
        let body = self.body_mut(id)?;
        body.velocity = (through - body.position) / time_scale;
        Ok(())
    }

    /// Remove body `id`, shifting every later index down by one.
    pub fn delete_body(&mut self, id: usize) -> Result<(), EngineError> {
        if id >= self.bodies.len() {
            return Err(EngineError::InvalidIndex(id));
        }
        self.bodies.remove(id);
        Ok(())
    }

    /// Remove all bodies.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Index of the *first* body (ascending index order) whose disc strictly
    /// contains `point`, or `None`.
    ///
    /// First-match-wins, not nearest-center: with overlapping bodies the
    /// lower index is returned even when a later body's center is closer.
    /// Preserved intentionally for reproducible selection.
    pub fn find_body_at(&self, point: Point2) -> Option<usize> {
        self.bodies.iter().position(|body| body.contains(point))
    }

    /// Read-only view of the ordered body list, for rendering.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Borrow body `id`, failing on a stale or out-of-range index.
    pub fn body(&self, id: usize) -> Result<&Body, EngineError> {
        self.bodies.get(id).ok_or(EngineError::InvalidIndex(id))
    }

    pub(crate) fn body_mut(&mut self, id: usize) -> Result<&mut Body, EngineError> {
        self.bodies.get_mut(id).ok_or(EngineError::InvalidIndex(id))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance the simulation by exactly one frame, mutating the world in
    /// place. See [`crate::simulation::step`].
    pub fn step(&mut self) {
        simulation::step(self);
    }
}

impl Default for World {
    fn default() -> Self {
        Self {
            bodies: Vec::new(),
            width: constants::DEFAULT_WIDTH,
            height: constants::DEFAULT_HEIGHT,
            friendly_fire: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
