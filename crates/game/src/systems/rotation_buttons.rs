use crate::prelude::*;
use turntable_engine::Result;

/// Wire each direction's named button to `display`.
///
/// Buttons that are missing or lack a [`Button`] component are logged and
/// skipped; that direction then never fires. Returns the number of buttons
/// bound.
pub fn setup_rotation_buttons(world: &mut World, display: Entity) -> usize {
    let buttons = world
        .get::<RotationButtons>(display)
        .cloned()
        .unwrap_or_default();

    let mut bound = 0;
    for direction in RotationDirection::ALL {
        match bind_rotation_button(world, display, buttons.name(direction), direction) {
            Ok(()) => bound += 1,
            Err(e) => log::warn!("{}", e),
        }
    }

    log::info!(
        "Bound {}/{} rotation buttons for {:?}",
        bound,
        RotationDirection::ALL.len(),
        display
    );
    bound
}

/// Attach press/release listeners on the button named `name` that toggle
/// `direction` on the display. Existing listeners on the button are replaced.
pub fn bind_rotation_button(
    world: &mut World,
    display: Entity,
    name: &str,
    direction: RotationDirection,
) -> Result<()> {
    let Some(button) = find_entity(world, name) else {
        anyhow::bail!("Button '{}' not found in the scene.", name);
    };

    if world.get::<Button>(button).is_none() {
        anyhow::bail!("Entity '{}' does not have a Button component.", name);
    }

    if world.get::<EventTrigger>(button).is_none() {
        world.entity_mut(button).insert(EventTrigger::new());
    }

    let mut trigger = world
        .get_mut::<EventTrigger>(button)
        .ok_or_else(|| anyhow::anyhow!("EventTrigger missing on '{}'", name))?;

    trigger.clear();
    trigger.add_listener(PointerEventType::PointerDown, move |world| {
        set_display_intent(world, display, direction, true)
    });
    trigger.add_listener(PointerEventType::PointerUp, move |world| {
        set_display_intent(world, display, direction, false)
    });

    log::debug!("Bound '{}' to {:?}", name, direction);
    Ok(())
}

fn set_display_intent(
    world: &mut World,
    display: Entity,
    direction: RotationDirection,
    active: bool,
) {
    if let Some(mut rotating) = world.get_mut::<RotatingDisplay>(display) {
        if active {
            rotating.press(direction);
            log::debug!("{:?} pressed", direction);
        } else {
            rotating.release(direction);
            log::debug!("{:?} released", direction);
        }
    }
}
