//! Entity spawn factories for populating the scene world.

use hecs::{Entity, EntityBuilder, World};

use turntable_core::components::{Name, ObjectId};
use turntable_core::config::ObjectConfig;

/// Spawn one configured object, assigning it the next free id.
///
/// Every object gets an id, a name, and a transform; only objects
/// configured with a rotator get the `Rotator` component.
pub fn spawn_object(
    world: &mut World,
    next_object_id: &mut u32,
    object: &ObjectConfig,
) -> (Entity, ObjectId) {
    let id = ObjectId(*next_object_id);
    *next_object_id += 1;

    let mut builder = EntityBuilder::new();
    builder
        .add(id)
        .add(Name(object.name.clone()))
        .add(object.transform);
    if let Some(rotator) = object.rotator {
        builder.add(rotator);
    }
    let entity = world.spawn(builder.build());
    (entity, id)
}

/// Find the entity carrying `object_id`.
pub fn find_object(world: &World, object_id: ObjectId) -> Option<Entity> {
    world
        .query::<&ObjectId>()
        .iter()
        .find(|(_, id)| **id == object_id)
        .map(|(entity, _)| entity)
}
