//! Fundamental geometric and timing types.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_FRAME_DELTA;

/// Position, orientation, and scale of a scene object.
///
/// Used directly as an ECS component. The rotation updater only ever
/// touches `rotation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    #[serde(default)]
    pub translation: Vec3,
    #[serde(default = "identity_rotation")]
    pub rotation: Quat,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn identity_rotation() -> Quat {
    Quat::IDENTITY
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Self::IDENTITY
        }
    }

    /// Orientation as euler angles in degrees, in the same (x, y, z)
    /// convention the rotator uses for its increments.
    pub fn euler_degrees(&self) -> Vec3 {
        let (y, x, z) = self.rotation.to_euler(EulerRot::YXZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }
}

/// Which frame a rotation increment is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    /// Relative to the object's own axes.
    #[default]
    Local,
    /// Relative to the world axes.
    World,
}

/// Frame timing, advanced once per frame by the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Number of frames advanced so far.
    pub frame: u64,
    /// Scaled seconds covered by the last frame.
    pub delta_secs: f32,
    /// Raw seconds of the last frame, after clamping, before scaling.
    pub unscaled_delta_secs: f32,
    /// Total scaled seconds elapsed.
    pub elapsed_secs: f64,
}

impl FrameTime {
    /// Advance by one frame.
    ///
    /// Negative or non-finite raw deltas count as zero; large ones are
    /// clamped to `MAX_FRAME_DELTA`.
    pub fn advance(&mut self, raw_delta_secs: f32, time_scale: f32) {
        let raw = if raw_delta_secs.is_finite() && raw_delta_secs > 0.0 {
            raw_delta_secs.min(MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.frame += 1;
        self.unscaled_delta_secs = raw;
        self.delta_secs = raw * time_scale;
        self.elapsed_secs += self.delta_secs as f64;
    }
}
