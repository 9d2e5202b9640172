//! Python bindings for the rondo-core sandbox physics engine.
//!
//! Provides a simple Python API:
//!
//! ```python
//! from rondo_physics import World
//!
//! world = World(900.0, 600.0)
//! a = world.insert_body(200.0, 300.0, 20.0, 3.0, 0.0)
//! b = world.insert_body(700.0, 300.0, 20.0, -3.0, 0.0)
//!
//! for _ in range(100):
//!     world.step()
//!     x, y = world.body_position(a)
//!     print(f"Body a at ({x}, {y})")
//! ```

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use rondo_core::types::{
    constants, EngineError, Point2 as CorePoint2, Vec2 as CoreVec2,
};
use rondo_core::world::World as CoreWorld;

fn engine_err(err: EngineError) -> PyErr {
    match err {
        EngineError::InvalidIndex(_) => PyIndexError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// 2D vector for velocities and offsets.
#[pyclass]
#[derive(Clone, Copy)]
pub struct Vec2 {
    #[pyo3(get, set)]
    pub x: f64,
    #[pyo3(get, set)]
    pub y: f64,
}

#[pymethods]
impl Vec2 {
    #[new]
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn __repr__(&self) -> String {
        format!("Vec2({:.4}, {:.4})", self.x, self.y)
    }

    fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    fn to_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<CoreVec2> for Vec2 {
    fn from(v: CoreVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2> for CoreVec2 {
    fn from(v: Vec2) -> Self {
        CoreVec2::new(v.x, v.y)
    }
}

/// Main sandbox world class.
///
/// Handles body editing, per-frame stepping, and state inspection. Body ids
/// are plain indices and shift down after a delete; re-resolve held ids.
#[pyclass]
pub struct World {
    inner: CoreWorld,
}

#[pymethods]
impl World {
    /// Create an empty world with the given bounds.
    #[new]
    #[pyo3(signature = (width=constants::DEFAULT_WIDTH, height=constants::DEFAULT_HEIGHT))]
    fn new(width: f64, height: f64) -> PyResult<Self> {
        let inner = CoreWorld::new(width, height).map_err(engine_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn width(&self) -> f64 {
        self.inner.width()
    }

    #[getter]
    fn height(&self) -> f64 {
        self.inner.height()
    }

    #[getter]
    fn friendly_fire(&self) -> bool {
        self.inner.friendly_fire()
    }

    /// Resize the reflecting boundary.
    fn set_bounds(&mut self, width: f64, height: f64) -> PyResult<()> {
        self.inner.set_bounds(width, height).map_err(engine_err)
    }

    /// Enable or disable the group-based collision filter.
    fn set_friendly_fire(&mut self, enabled: bool) {
        self.inner.set_friendly_fire(enabled);
    }

    /// Place a new unsized body. Returns the body index.
    ///
    /// Follow up with `set_radius` to give it a size (and therefore mass).
    #[pyo3(signature = (x, y, group=0))]
    fn add_body(&mut self, x: f64, y: f64, group: u32) -> usize {
        self.inner.add_body(CorePoint2::new(x, y), group)
    }

    /// Add a fully-formed body in one call. Returns the body index.
    #[pyo3(signature = (x, y, radius, vx=0.0, vy=0.0, group=0))]
    fn insert_body(&mut self, x: f64, y: f64, radius: f64, vx: f64, vy: f64, group: u32) -> usize {
        self.inner.insert_body(
            CorePoint2::new(x, y),
            radius,
            CoreVec2::new(vx, vy),
            group,
        )
    }

    /// Size a body so its rim passes through the given point.
    fn set_radius(&mut self, id: usize, x: f64, y: f64) -> PyResult<()> {
        self.inner
            .set_radius(id, CorePoint2::new(x, y))
            .map_err(engine_err)
    }

    /// Set a body's velocity from a drag: (target - center) / time_scale.
    #[pyo3(signature = (id, x, y, time_scale=constants::DRAG_TIME_SCALE))]
    fn set_velocity(&mut self, id: usize, x: f64, y: f64, time_scale: f64) -> PyResult<()> {
        self.inner
            .set_velocity(id, CorePoint2::new(x, y), time_scale)
            .map_err(engine_err)
    }

    /// Remove a body. Later indices shift down by one.
    fn delete_body(&mut self, id: usize) -> PyResult<()> {
        self.inner.delete_body(id).map_err(engine_err)
    }

    /// Remove all bodies.
    fn clear(&mut self) {
        self.inner.clear();
    }

    /// Index of the first body strictly containing the point, or None.
    fn find_body_at(&self, x: f64, y: f64) -> Option<usize> {
        self.inner.find_body_at(CorePoint2::new(x, y))
    }

    /// Number of bodies in the world.
    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn body_position(&self, id: usize) -> PyResult<(f64, f64)> {
        let body = self.inner.body(id).map_err(engine_err)?;
        Ok((body.position.x, body.position.y))
    }

    fn body_velocity(&self, id: usize) -> PyResult<Vec2> {
        let body = self.inner.body(id).map_err(engine_err)?;
        Ok(body.velocity.into())
    }

    fn body_radius(&self, id: usize) -> PyResult<f64> {
        Ok(self.inner.body(id).map_err(engine_err)?.radius)
    }

    fn body_mass(&self, id: usize) -> PyResult<f64> {
        Ok(self.inner.body(id).map_err(engine_err)?.mass)
    }

    fn body_group(&self, id: usize) -> PyResult<u32> {
        Ok(self.inner.body(id).map_err(engine_err)?.group)
    }

    /// Advance the simulation by exactly one frame.
    fn step(&mut self) {
        self.inner.step();
    }

    /// Run multiple frames at once (more efficient).
    fn step_n(&mut self, steps: usize) {
        for _ in 0..steps {
            self.inner.step();
        }
    }

    /// Get all bodies as a list of dicts for easy inspection.
    fn bodies(&self, py: Python<'_>) -> PyResult<Py<pyo3::types::PyList>> {
        let list = pyo3::types::PyList::empty(py);
        for body in self.inner.bodies() {
            let dict = pyo3::types::PyDict::new(py);
            dict.set_item("x", body.position.x)?;
            dict.set_item("y", body.position.y)?;
            dict.set_item("vx", body.velocity.x)?;
            dict.set_item("vy", body.velocity.y)?;
            dict.set_item("radius", body.radius)?;
            dict.set_item("mass", body.mass)?;
            dict.set_item("group", body.group)?;
            list.append(dict)?;
        }
        Ok(list.unbind())
    }

    /// Get current world state as dict for easy inspection.
    fn state_dict(&self, py: Python<'_>) -> PyResult<Py<pyo3::types::PyDict>> {
        let dict = pyo3::types::PyDict::new(py);
        dict.set_item("width", self.inner.width())?;
        dict.set_item("height", self.inner.height())?;
        dict.set_item("friendly_fire", self.inner.friendly_fire())?;
        dict.set_item("body_count", self.inner.len())?;
        let energy: f64 = self
            .inner
            .bodies()
            .iter()
            .map(|b| b.kinetic_energy())
            .sum();
        dict.set_item("kinetic_energy", energy)?;
        Ok(dict.unbind())
    }
}

/// Python module definition.
#[pymodule]
fn rondo_physics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Vec2>()?;
    m.add_class::<World>()?;
    Ok(())
}
