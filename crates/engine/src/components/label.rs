use crate::prelude::*;

/// Human readable name used to look entities up in the scene
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
}

/// Find the first entity tagged with `label`
pub fn find_entity(world: &mut World, label: &str) -> Option<Entity> {
    world
        .query::<(Entity, &Tag)>()
        .iter(world)
        .find(|(_, tag)| tag.label == label)
        .map(|(entity, _)| entity)
}
