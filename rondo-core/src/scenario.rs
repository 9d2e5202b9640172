//! Scenario configuration loader.
//!
//! Loads initial world setups from YAML files: bounds, the friendly-fire
//! flag, and a list of fully-formed bodies. Runtime world state is never
//! written back; scenarios only describe starting conditions.
//!
//! ## Directory Structure
//!
//! ```text
//! scenarios/
//! ├── two_body.yaml
//! ├── teams.yaml
//! └── ...
//! ```
//!
//! ## YAML format
//!
//! ```yaml
//! width: 900.0
//! height: 600.0
//! friendly_fire: true
//! bodies:
//!   - position: [100.0, 300.0]
//!     velocity: [3.0, 0.0]
//!     radius: 20.0
//!     group: 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{EngineError, Point2, Vec2};
use crate::world::World;

/// Error type for scenario loading operations.
#[derive(Debug)]
pub enum ScenarioError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
    NotFound(String),
    Engine(EngineError),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::IoError(e) => write!(f, "IO error: {}", e),
            ScenarioError::ParseError(e) => write!(f, "YAML parse error: {}", e),
            ScenarioError::NotFound(name) => write!(f, "Scenario not found: {}", name),
            ScenarioError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(err: std::io::Error) -> Self {
        ScenarioError::IoError(err)
    }
}

impl From<serde_yaml::Error> for ScenarioError {
    fn from(err: serde_yaml::Error) -> Self {
        ScenarioError::ParseError(err)
    }
}

impl From<EngineError> for ScenarioError {
    fn from(err: EngineError) -> Self {
        ScenarioError::Engine(err)
    }
}

/// Initial state for a single body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySetup {
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
    pub radius: f64,
    #[serde(default)]
    pub group: u32,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub friendly_fire: bool,
    #[serde(default)]
    pub bodies: Vec<BodySetup>,
}

impl ScenarioConfig {
    /// Build a runtime world from this configuration.
    ///
    /// Mass is recomputed from each body's radius on insert, so the
    /// `mass = (radius/10)²` invariant holds for loaded bodies too.
    pub fn build(&self) -> Result<World, ScenarioError> {
        let mut world = World::new(self.width, self.height)?;
        world.set_friendly_fire(self.friendly_fire);
        for setup in &self.bodies {
            world.insert_body(
                Point2::new(setup.position[0], setup.position[1]),
                setup.radius,
                Vec2::new(setup.velocity[0], setup.velocity[1]),
                setup.group,
            );
        }
        Ok(world)
    }
}

/// Scenario loader with a configurable base directory.
pub struct ScenarioLoader {
    base_path: PathBuf,
}

impl ScenarioLoader {
    /// Create a new loader reading from the given directory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a scenario configuration by name (without .yaml extension).
    pub fn load_config(&self, name: &str) -> Result<ScenarioConfig, ScenarioError> {
        let path = self.base_path.join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(ScenarioError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let config: ScenarioConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load a scenario and build the runtime world in one call.
    pub fn load(&self, name: &str) -> Result<World, ScenarioError> {
        self.load_config(name)?.build()
    }

    /// List all available scenarios, sorted by name.
    pub fn list(&self) -> Result<Vec<String>, ScenarioError> {
        if !self.base_path.exists() {
            return Ok(vec![]);
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            if name.ends_with(".yaml") {
                names.push(name.trim_end_matches(".yaml").to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
