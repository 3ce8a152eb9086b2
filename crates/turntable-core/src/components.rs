//! ECS components for hecs entities.
//!
//! Components are plain data. The rotation logic lives in the
//! simulation crate's systems.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROTATION_AXIS, DEFAULT_ROTATION_SPEED};
use crate::types::Space;

/// Spins its entity's transform a little every frame.
///
/// Per frame the transform turns by `axis * speed * dt` degrees of euler
/// rotation. The axis is not normalized: its length scales the rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotator {
    /// Degrees per second.
    pub speed: f32,
    pub axis: Vec3,
    pub space: Space,
    /// Disabled rotators are skipped by the update.
    pub enabled: bool,
}

impl Default for Rotator {
    fn default() -> Self {
        Self {
            speed: DEFAULT_ROTATION_SPEED,
            axis: DEFAULT_ROTATION_AXIS,
            space: Space::Local,
            enabled: true,
        }
    }
}

impl Rotator {
    pub fn new(axis: Vec3, speed: f32) -> Self {
        Self {
            axis,
            speed,
            ..Self::default()
        }
    }

    pub fn with_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }

    /// True when both fields satisfy the finite invariant.
    pub fn is_finite(&self) -> bool {
        self.speed.is_finite() && self.axis.is_finite()
    }
}

/// Display name of a scene object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Stable identifier handed out by the scene, used by commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);
