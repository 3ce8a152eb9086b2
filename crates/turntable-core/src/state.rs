//! Scene snapshot: the visible state of the scene after each frame.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::components::{ObjectId, Rotator};
use crate::types::FrameTime;

/// Complete scene state published after each frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: FrameTime,
    pub paused: bool,
    pub time_scale: f32,
    /// Objects ordered by id.
    pub objects: Vec<ObjectView>,
}

/// One scene object as seen from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectView {
    pub object_id: ObjectId,
    pub name: String,
    pub translation: Vec3,
    pub rotation: Quat,
    /// Orientation as (x, y, z) euler degrees, for display.
    pub euler_degrees: Vec3,
    pub rotator: Option<Rotator>,
}

impl SceneSnapshot {
    pub fn object(&self, object_id: ObjectId) -> Option<&ObjectView> {
        self.objects.iter().find(|o| o.object_id == object_id)
    }

    pub fn object_named(&self, name: &str) -> Option<&ObjectView> {
        self.objects.iter().find(|o| o.name == name)
    }
}
