use crate::prelude::*;
use crate::Result;

/// Layer that records pointer events in [`InputState`] and fires the
/// target's [`EventTrigger`] listeners.
/// Must be added before any layer that reacts to the resulting state.
pub struct InputLayer;

impl InputLayer {
    pub fn new(context: &LayerContext) -> Result<Self> {
        let mut world = context.world()?;
        world.init_resource::<InputState>();
        Ok(Self)
    }
}

impl Layer for InputLayer {
    fn frame(&mut self, _context: &LayerContext) -> Result<()> {
        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}

    fn event(&mut self, context: &LayerContext, event: LayerEvent) {
        let LayerEvent::Pointer { target, event_type } = event;

        let mut world = match context.world() {
            Ok(world) => world,
            Err(e) => {
                log::error!("Unable to deliver {:?}: {}", event_type, e);
                return;
            }
        };

        if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
            input_state.apply(target, event_type);
        }

        let fired = dispatch_pointer_event(&mut world, target, event_type);
        log::trace!("{:?} on {:?} fired {} listener(s)", event_type, target, fired);
    }
}
