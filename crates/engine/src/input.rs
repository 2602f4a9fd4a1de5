use crate::prelude::*;

use std::collections::HashSet;

/// Resource that tracks which controls currently have a pointer held on them
#[derive(Resource, Default)]
pub struct InputState {
    /// Entities with a pointer currently down
    pub pointers_down: HashSet<Entity>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a pointer is currently held on `entity`
    pub fn is_pointer_down(&self, entity: Entity) -> bool {
        self.pointers_down.contains(&entity)
    }

    /// Handle pointer press
    pub fn press_pointer(&mut self, entity: Entity) {
        self.pointers_down.insert(entity);
    }

    /// Handle pointer release
    pub fn release_pointer(&mut self, entity: Entity) {
        self.pointers_down.remove(&entity);
    }

    /// Apply a pointer event of either kind
    pub fn apply(&mut self, entity: Entity, event_type: PointerEventType) {
        match event_type {
            PointerEventType::PointerDown => self.press_pointer(entity),
            PointerEventType::PointerUp => self.release_pointer(entity),
        }
    }
}
