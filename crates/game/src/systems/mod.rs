mod rotating_display;
mod rotation_buttons;

pub use rotating_display::*;
pub use rotation_buttons::*;
