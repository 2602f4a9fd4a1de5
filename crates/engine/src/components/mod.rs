mod label;
mod resources;
mod transform;

pub use label::*;
pub use resources::*;
pub use transform::*;
