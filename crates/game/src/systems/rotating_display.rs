use crate::prelude::*;

/// Advance every rotating display by the frame time and apply its orientation
pub fn update_rotating_display(
    mut query: Query<(&mut Transform, &mut RotatingDisplay)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut display) in query.iter_mut() {
        transform.rotation = display.tick(dt);
    }
}
