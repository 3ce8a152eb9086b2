//! Snapshot system: queries the ECS world and builds a SceneSnapshot.
//!
//! Read-only, never modifies the world.

use hecs::World;

use turntable_core::components::{Name, ObjectId, Rotator};
use turntable_core::state::{ObjectView, SceneSnapshot};
use turntable_core::types::{FrameTime, Transform};

/// Build a complete SceneSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &FrameTime,
    paused: bool,
    time_scale: f32,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        paused,
        time_scale,
        objects: build_objects(world),
    }
}

fn build_objects(world: &World) -> Vec<ObjectView> {
    let mut objects: Vec<ObjectView> = world
        .query::<(&ObjectId, &Name, &Transform, Option<&Rotator>)>()
        .iter()
        .map(|(_, (id, name, transform, rotator))| ObjectView {
            object_id: *id,
            name: name.0.clone(),
            translation: transform.translation,
            rotation: transform.rotation,
            euler_degrees: transform.euler_degrees(),
            rotator: rotator.copied(),
        })
        .collect();
    objects.sort_by_key(|o| o.object_id);
    objects
}
