//! # Rondo Core
//!
//! A 2D sandbox physics engine for circular rigid bodies in a reflecting
//! rectangular box.
//!
//! ## Architecture
//!
//! - `types`: Core data structures (Vec2, Point2, Body) and engine errors
//! - `world`: The body collection, bounds, and editing operations
//! - `collision`: Swept bisection detection and elastic impulse resolution
//! - `boundary`: Integration with wall reflection for non-colliding bodies
//! - `simulation`: The per-frame stepper tying detection, resolution, and
//!   boundary handling together
//! - `scenario`: YAML-based initial-state loader
//! - `gestures`: Press/release state machine for interactive frontends

pub mod boundary;
pub mod collision;
pub mod gestures;
pub mod scenario;
pub mod simulation;
pub mod types;
pub mod world;
