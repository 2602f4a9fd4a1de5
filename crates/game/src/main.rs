use std::time::Duration;

use turntable_engine::Result;

mod components;
mod display_layer;
mod prelude;
mod systems;

use display_layer::DisplayLayer;
use prelude::*;

const FRAME_RATE: u32 = 60;
const DEMO_SECONDS: u32 = 6;

/// Pointer script for the headless demo: (second, control, event)
const SCRIPT: &[(u32, &str, PointerEventType)] = &[
    (1, "ButtonUp", PointerEventType::PointerDown),
    (2, "ButtonUp", PointerEventType::PointerUp),
    (3, "ButtonLeft", PointerEventType::PointerDown),
    (4, "ButtonLeft", PointerEventType::PointerUp),
];

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("turntable", log::LevelFilter::Debug)
        .filter_module("turntable_engine", log::LevelFilter::Info)
        .init();

    let mut app = ApplicationBuilder::new()
        .add_layer(|context| Ok(Box::new(InputLayer::new(context)?)))
        .add_layer(|context| Ok(Box::new(DisplayLayer::new(context)?)))
        .build();

    let display = app.spawn(
        "Display",
        (
            Transform::default(),
            RotatingDisplay::new(10.0, 100.0)
                .with_pitch_limits(-60.0, 60.0)
                .with_smoothing_rate(5.0),
            RotationButtons::new("ButtonUp", "ButtonDown", "ButtonLeft", "ButtonRight"),
        ),
    )?;

    for name in ["ButtonUp", "ButtonDown", "ButtonLeft", "ButtonRight"] {
        app.spawn(name, Button)?;
    }

    app.start()?;

    let frame_time = Duration::from_secs(1) / FRAME_RATE;
    for frame in 0..FRAME_RATE * DEMO_SECONDS {
        if frame % FRAME_RATE == 0 {
            let second = frame / FRAME_RATE;
            for (_, control, event_type) in SCRIPT.iter().filter(|(at, _, _)| *at == second) {
                app.pointer_event(control, *event_type)?;
            }
        }

        app.update(frame_time)?;

        if (frame + 1) % FRAME_RATE == 0 {
            let world = app.world();
            let world = turntable_engine::lock_world(&world)?;
            if let Some(state) = world.get::<RotatingDisplay>(display) {
                log::info!(
                    "t={}s pitch {:.2} (target {:.2}) yaw {:.2} (target {:.2})",
                    (frame + 1) / FRAME_RATE,
                    state.current_pitch,
                    state.target_pitch,
                    state.current_yaw,
                    state.target_yaw,
                );
            }
        }
    }

    app.shutdown();

    Ok(())
}
