use crate::prelude::*;

use std::sync::Arc;

/// Marker for entities that behave as clickable buttons
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventType {
    PointerDown,
    PointerUp,
}

/// Listener invoked with the world when its pointer event fires
pub type PointerCallback = Arc<dyn Fn(&mut World) + Send + Sync>;

pub struct TriggerEntry {
    pub event_type: PointerEventType,
    pub callback: PointerCallback,
}

/// Per-entity list of pointer listeners
#[derive(Component, Default)]
pub struct EventTrigger {
    pub triggers: Vec<TriggerEntry>,
}

impl EventTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener<F>(&mut self, event_type: PointerEventType, callback: F)
    where
        F: Fn(&mut World) + Send + Sync + 'static,
    {
        self.triggers.push(TriggerEntry {
            event_type,
            callback: Arc::new(callback),
        });
    }

    pub fn clear(&mut self) {
        self.triggers.clear();
    }

    pub fn listener_count(&self, event_type: PointerEventType) -> usize {
        self.listeners(event_type).count()
    }

    fn listeners(&self, event_type: PointerEventType) -> impl Iterator<Item = &PointerCallback> {
        self.triggers
            .iter()
            .filter(move |entry| entry.event_type == event_type)
            .map(|entry| &entry.callback)
    }
}

/// Invoke every listener on `target` registered for `event_type`.
///
/// Listeners run in registration order and may freely mutate the world,
/// including the trigger itself. Returns how many listeners ran.
pub fn dispatch_pointer_event(
    world: &mut World,
    target: Entity,
    event_type: PointerEventType,
) -> usize {
    let callbacks: Vec<PointerCallback> = match world.get::<EventTrigger>(target) {
        Some(trigger) => trigger.listeners(event_type).cloned().collect(),
        None => return 0,
    };

    for callback in &callbacks {
        callback(world);
    }

    callbacks.len()
}
