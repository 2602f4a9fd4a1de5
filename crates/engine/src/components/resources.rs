use crate::prelude::*;

use std::time::Duration;

/// Time elapsed since the previous frame
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Time(pub Duration);

impl Time {
    pub fn delta_secs(&self) -> f32 {
        self.0.as_secs_f32()
    }
}
