//! Scene commands sent from the host (inspector, loop driver) to the scene.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::components::ObjectId;
use crate::config::ObjectConfig;
use crate::inspector::{PropertyValue, RotatorProperty};

/// All possible edits to a running scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    // --- Inspector edits ---
    /// Write one rotator property on an object.
    SetProperty {
        object_id: ObjectId,
        property: RotatorProperty,
        value: PropertyValue,
    },
    /// Enable or disable an object's rotator.
    SetEnabled { object_id: ObjectId, enabled: bool },

    // --- Scene graph ---
    /// Add an object to the scene.
    Spawn { object: ObjectConfig },
    /// Remove an object from the scene.
    Despawn { object_id: ObjectId },

    // --- Time control ---
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f32 },
    /// Stop advancing scene time.
    Pause,
    /// Resume advancing scene time.
    Resume,
}
