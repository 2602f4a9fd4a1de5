use crate::prelude::*;

use bevy_ecs::schedule::Schedule;
use turntable_engine::Result;

/// Wires rotation buttons on start and advances rotating displays each frame
pub struct DisplayLayer {
    schedule: Schedule,
}

impl DisplayLayer {
    pub fn new(context: &LayerContext) -> Result<Self> {
        {
            let mut world = context.world()?;

            let displays: Vec<Entity> = world
                .query_filtered::<Entity, (With<RotatingDisplay>, With<RotationButtons>)>()
                .iter(&world)
                .collect();

            if displays.is_empty() {
                log::warn!("No rotating display with RotationButtons in the scene");
            }

            for display in displays {
                setup_rotation_buttons(&mut world, display);
            }
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(crate::systems::update_rotating_display);
        Ok(Self { schedule })
    }
}

impl Layer for DisplayLayer {
    fn frame(&mut self, context: &LayerContext) -> Result<()> {
        let mut world = context.world()?;
        world.insert_resource(Time(context.delta_time));

        self.schedule.run(&mut world);

        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn demo_app() -> (Application, Entity) {
        let mut app = ApplicationBuilder::new()
            .add_layer(|context| Ok(Box::new(InputLayer::new(context)?)))
            .add_layer(|context| Ok(Box::new(DisplayLayer::new(context)?)))
            .build();

        let display = app
            .spawn(
                "Display",
                (
                    Transform::default(),
                    RotatingDisplay::default(),
                    RotationButtons::default(),
                ),
            )
            .unwrap();
        for name in ["ButtonUp", "ButtonDown", "ButtonLeft"] {
            app.spawn(name, Button).unwrap();
        }
        app.start().unwrap();

        (app, display)
    }

    fn display_state(app: &Application, display: Entity) -> RotatingDisplay {
        let world = app.world();
        let world = world.lock().unwrap();
        world.get::<RotatingDisplay>(display).unwrap().clone()
    }

    #[test]
    fn test_pointer_press_rotates_display() {
        let (mut app, display) = demo_app();

        assert!(app.pointer_event("ButtonDown", PointerEventType::PointerDown).unwrap());
        app.update(Duration::from_millis(100)).unwrap();
        let state = display_state(&app, display);
        assert!((state.target_pitch - 10.0).abs() < 0.001);

        assert!(app.pointer_event("ButtonDown", PointerEventType::PointerUp).unwrap());
        app.update(Duration::from_millis(100)).unwrap();
        let state = display_state(&app, display);
        assert!((state.target_pitch - 10.0).abs() < 0.001);
        assert!((state.target_yaw - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_missing_button_stays_released() {
        let (mut app, display) = demo_app();

        assert!(!app.pointer_event("ButtonRight", PointerEventType::PointerDown).unwrap());
        app.update(Duration::from_millis(500)).unwrap();

        let state = display_state(&app, display);
        assert!(!state.is_active(RotationDirection::Right));
        assert!((state.target_yaw - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_transform_follows_display() {
        let (mut app, display) = demo_app();
        app.pointer_event("ButtonLeft", PointerEventType::PointerDown)
            .unwrap();
        app.update(Duration::from_millis(50)).unwrap();

        let world = app.world();
        let world = world.lock().unwrap();
        let state = world.get::<RotatingDisplay>(display).unwrap();
        let transform = world.get::<Transform>(display).unwrap();
        assert_eq!(world.resource::<Time>().0, Duration::from_millis(50));
        assert!(world.resource::<InputState>().pointers_down.len() == 1);
        assert!((state.target_yaw + 5.0).abs() < 0.001);
        assert!(transform.rotation.angle_to(&state.orientation()) < 0.0001);
    }
}
