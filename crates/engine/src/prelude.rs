pub use bevy_ecs::prelude::*;
pub use nalgebra::{Point3, UnitQuaternion, Vector3};

pub use crate::components::*;
pub use crate::input::InputState;
pub use crate::layers::*;
pub use crate::ui::*;
pub use crate::{Application, ApplicationBuilder, Layer, LayerContext, LayerEvent, LayerFactory};
