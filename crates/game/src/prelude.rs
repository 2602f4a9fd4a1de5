pub use turntable_engine::prelude::*;

pub use crate::components::*;
pub use crate::systems::*;
