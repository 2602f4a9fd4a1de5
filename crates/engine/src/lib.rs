pub use bevy_ecs::world::World;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::input::InputState;
use crate::prelude::*;
pub type Result<T> = anyhow::Result<T>;

pub mod components;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod ui;

pub trait Layer: 'static {
    fn frame(&mut self, context: &LayerContext) -> Result<()>;
    fn detach(&mut self, context: &LayerContext);
    fn event(&mut self, _context: &LayerContext, _event: LayerEvent) {}
}

pub trait LayerFactory: 'static {
    fn create(&self, context: &LayerContext) -> Result<Box<dyn Layer>>;
}

pub struct LayerContext {
    pub world: Arc<Mutex<World>>,
    pub delta_time: Duration,
}

impl LayerContext {
    /// Lock the shared world for the duration of the returned guard
    pub fn world(&self) -> Result<MutexGuard<'_, World>> {
        lock_world(&self.world)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerEvent {
    /// A pointer went down or up over `target`
    Pointer {
        target: Entity,
        event_type: PointerEventType,
    },
}

/// Lock a shared world, reporting poisoning as an error
pub fn lock_world(world: &Mutex<World>) -> Result<MutexGuard<'_, World>> {
    world
        .lock()
        .map_err(|_| anyhow::anyhow!("World lock poisoned"))
}

pub struct ApplicationBuilder {
    layer_factories: Vec<Box<dyn LayerFactory>>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            layer_factories: Vec::new(),
        }
    }

    pub fn add_layer_factory(mut self, factory: impl LayerFactory) -> Self {
        self.layer_factories.push(Box::new(factory));
        self
    }

    pub fn add_layer<F>(mut self, factory_fn: F) -> Self
    where
        F: Fn(&LayerContext) -> Result<Box<dyn Layer>> + 'static,
    {
        self.layer_factories
            .push(Box::new(ClosureLayerFactory::new(factory_fn)));
        self
    }

    pub fn build(self) -> Application {
        let mut world = World::new();
        world.insert_resource(InputState::new());
        world.insert_resource(Time::default());

        Application {
            layer_factories: self.layer_factories,
            layers: Vec::new(),
            world: Arc::new(Mutex::new(world)),
            started: false,
        }
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ClosureLayerFactory<F> {
    factory_fn: F,
}

impl<F> ClosureLayerFactory<F> {
    fn new(factory_fn: F) -> Self {
        Self { factory_fn }
    }
}

impl<F> LayerFactory for ClosureLayerFactory<F>
where
    F: Fn(&LayerContext) -> Result<Box<dyn Layer>> + 'static,
{
    fn create(&self, context: &LayerContext) -> Result<Box<dyn Layer>> {
        (self.factory_fn)(context)
    }
}

/// Headless application: owns the world and drives layers frame by frame.
///
/// Entities are spawned before [`Application::start`], which instantiates the
/// layers in the order they were added. After that the host calls
/// [`Application::update`] once per frame and [`Application::pointer_event`]
/// whenever a pointer goes down or up. Both run on the caller's thread.
pub struct Application {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    layers: Vec<Box<dyn Layer>>,
    world: Arc<Mutex<World>>,
    started: bool,
}

impl Application {
    pub fn world(&self) -> Arc<Mutex<World>> {
        self.world.clone()
    }

    fn context(&self, delta_time: Duration) -> LayerContext {
        LayerContext {
            world: self.world.clone(),
            delta_time,
        }
    }

    pub fn spawn<B: Bundle>(&mut self, label: impl Into<String>, bundle: B) -> Result<Entity> {
        let bundle = (
            Tag {
                label: label.into(),
            },
            bundle,
        );
        Ok(lock_world(&self.world)?.spawn(bundle).id())
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Instantiate all layers. Calling this twice is an error.
    pub fn start(&mut self) -> Result<()> {
        if self.is_started() {
            anyhow::bail!("Application already started");
        }

        let context = self.context(Duration::ZERO);
        let layers = self
            .layer_factories
            .iter()
            .map(|factory| factory.create(&context))
            .collect::<Result<Vec<_>>>()?;

        log::info!("Application started with {} layer(s)", layers.len());
        self.layers = layers;
        self.started = true;
        Ok(())
    }

    /// Advance every layer by one frame of `delta_time`
    pub fn update(&mut self, delta_time: Duration) -> Result<()> {
        let context = self.context(delta_time);

        for layer in &mut self.layers {
            layer.frame(&context)?;
        }

        context.world()?.clear_trackers();

        Ok(())
    }

    /// Deliver a pointer event to the entity tagged `target`.
    ///
    /// Returns `false` when no such entity exists.
    pub fn pointer_event(&mut self, target: &str, event_type: PointerEventType) -> Result<bool> {
        let entity = {
            let mut world = lock_world(&self.world)?;
            find_entity(&mut world, target)
        };

        let Some(entity) = entity else {
            log::warn!("Pointer event {:?} for unknown control '{}'", event_type, target);
            return Ok(false);
        };

        let context = self.context(Duration::ZERO);
        for layer in &mut self.layers {
            layer.event(
                &context,
                LayerEvent::Pointer {
                    target: entity,
                    event_type,
                },
            );
        }

        Ok(true)
    }

    /// Detach layers in reverse order and drop them
    pub fn shutdown(&mut self) {
        let context = self.context(Duration::ZERO);
        for layer in self.layers.iter_mut().rev() {
            layer.detach(&context);
        }
        self.layers.clear();
        self.started = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Resource, Default)]
    struct FrameCount(u32);

    #[derive(Resource, Default)]
    struct LastDelta(Duration);

    struct CountingLayer {
        log: Rc<RefCell<Vec<String>>>,
        name: &'static str,
    }

    impl Layer for CountingLayer {
        fn frame(&mut self, context: &LayerContext) -> Result<()> {
            let mut world = context.world()?;
            world.get_resource_or_insert_with(FrameCount::default).0 += 1;
            world.insert_resource(LastDelta(context.delta_time));
            Ok(())
        }

        fn detach(&mut self, _context: &LayerContext) {
            self.log.borrow_mut().push(format!("detach {}", self.name));
        }

        fn event(&mut self, _context: &LayerContext, event: LayerEvent) {
            self.log.borrow_mut().push(format!("{} {:?}", self.name, event));
        }
    }

    fn counting_app(log: &Rc<RefCell<Vec<String>>>) -> Application {
        let first = log.clone();
        let second = log.clone();
        ApplicationBuilder::new()
            .add_layer(move |_| {
                Ok(Box::new(CountingLayer {
                    log: first.clone(),
                    name: "first",
                }))
            })
            .add_layer(move |_| {
                Ok(Box::new(CountingLayer {
                    log: second.clone(),
                    name: "second",
                }))
            })
            .build()
    }

    #[test]
    fn test_update_runs_every_layer_with_frame_delta() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut app = counting_app(&log);
        app.start().unwrap();

        app.update(Duration::from_millis(250)).unwrap();

        let world = app.world();
        let world = world.lock().unwrap();
        assert_eq!(world.resource::<FrameCount>().0, 2);
        assert_eq!(world.resource::<LastDelta>().0, Duration::from_millis(250));
    }

    #[test]
    fn test_start_twice_fails() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut app = counting_app(&log);
        app.start().unwrap();
        assert!(app.start().is_err());
    }

    #[test]
    fn test_pointer_event_reaches_layers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut app = counting_app(&log);
        let button = app.spawn("ButtonUp", Button).unwrap();
        app.start().unwrap();

        assert!(app.pointer_event("ButtonUp", PointerEventType::PointerDown).unwrap());
        assert!(!app.pointer_event("Missing", PointerEventType::PointerDown).unwrap());

        let expected = LayerEvent::Pointer {
            target: button,
            event_type: PointerEventType::PointerDown,
        };
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], format!("first {:?}", expected));
        assert_eq!(log[1], format!("second {:?}", expected));
    }

    #[test]
    fn test_shutdown_detaches_in_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut app = counting_app(&log);
        app.start().unwrap();
        app.shutdown();

        assert!(!app.is_started());
        assert_eq!(*log.borrow(), vec!["detach second", "detach first"]);
    }
}
