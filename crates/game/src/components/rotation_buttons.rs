use crate::prelude::*;

/// Names of the scene buttons that drive a [`RotatingDisplay`]
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct RotationButtons {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl Default for RotationButtons {
    fn default() -> Self {
        Self {
            up: "ButtonUp".to_string(),
            down: "ButtonDown".to_string(),
            left: "ButtonLeft".to_string(),
            right: "ButtonRight".to_string(),
        }
    }
}

impl RotationButtons {
    pub fn new(
        up: impl Into<String>,
        down: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn name(&self, direction: RotationDirection) -> &str {
        match direction {
            RotationDirection::Up => &self.up,
            RotationDirection::Down => &self.down,
            RotationDirection::Left => &self.left,
            RotationDirection::Right => &self.right,
        }
    }
}
