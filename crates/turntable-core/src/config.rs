//! Scene configuration, loaded from JSON.
//!
//! ```json
//! {
//!   "time_scale": 1.0,
//!   "objects": [
//!     { "name": "cube", "rotator": { "speed": 45.0, "axis": [0.0, 1.0, 0.0] } }
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use crate::components::Rotator;
use crate::constants::{MAX_TIME_SCALE, MIN_ROTATION_LENGTH_SQUARED, MIN_TIME_SCALE};
use crate::types::Transform;

/// Initial contents of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_time_scale")]
    pub time_scale: f32,
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
}

fn default_time_scale() -> f32 {
    1.0
}

/// One object to spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    pub name: String,
    #[serde(default)]
    pub transform: Transform,
    /// Objects without a rotator stay put.
    #[serde(default)]
    pub rotator: Option<Rotator>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            time_scale: default_time_scale(),
            objects: Vec::new(),
        }
    }
}

impl ObjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            rotator: None,
        }
    }

    pub fn with_rotator(mut self, rotator: Rotator) -> Self {
        self.rotator = Some(rotator);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Reject rotators and transforms holding NaN or infinity, and
    /// rotations too close to zero length to normalize.
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(rotator) = &self.rotator {
            if !rotator.is_finite() {
                bail!("object `{}`: rotator speed and axis must be finite", self.name);
            }
        }
        let t = &self.transform;
        if !(t.translation.is_finite() && t.rotation.is_finite() && t.scale.is_finite()) {
            bail!("object `{}`: transform must be finite", self.name);
        }
        if t.rotation.length_squared() < MIN_ROTATION_LENGTH_SQUARED {
            bail!("object `{}`: rotation {} cannot be normalized", self.name, t.rotation);
        }
        Ok(())
    }

    /// Scale the rotation to unit length. Call after `validate`.
    pub fn normalize(&mut self) {
        self.transform.rotation = self.transform.rotation.normalize();
    }
}

impl SceneConfig {
    /// A scene holding one default rotator, used when no file is given.
    pub fn single_default() -> Self {
        Self {
            objects: vec![ObjectConfig::new("rotator").with_rotator(Rotator::default())],
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut config: SceneConfig =
            serde_json::from_str(json).context("malformed scene config")?;
        config.validate()?;
        for object in &mut config.objects {
            object.normalize();
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("loading scene config {}", path.display()))?;
        log::info!(
            "loaded {} objects from {}",
            config.objects.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(MIN_TIME_SCALE..=MAX_TIME_SCALE).contains(&self.time_scale) {
            bail!(
                "time_scale {} outside [{}, {}]",
                self.time_scale,
                MIN_TIME_SCALE,
                MAX_TIME_SCALE
            );
        }
        for object in &self.objects {
            object.validate()?;
        }
        Ok(())
    }
}
