use crate::prelude::*;

use std::collections::HashSet;

/// Direction a user can hold to rotate the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Up,
    Down,
    Left,
    Right,
}

impl RotationDirection {
    pub const ALL: [RotationDirection; 4] = [
        RotationDirection::Up,
        RotationDirection::Down,
        RotationDirection::Left,
        RotationDirection::Right,
    ];
}

/// Turntable-style display: drifts around Y while idle, rotates while a
/// direction is held, and eases its applied orientation toward the target.
///
/// All angles are in degrees.
#[derive(Component, Clone, Debug)]
pub struct RotatingDisplay {
    /// Yaw drift in degrees per second while no horizontal input is held
    pub idle_rotation_speed: f32,
    /// Rotation speed in degrees per second while a direction is held
    pub user_rotation_speed: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    /// Exponential smoothing coefficient (1/s)
    pub smoothing_rate: f32,

    pub target_pitch: f32,
    pub target_yaw: f32,
    pub current_pitch: f32,
    pub current_yaw: f32,

    intents: HashSet<RotationDirection>,
}

impl Default for RotatingDisplay {
    fn default() -> Self {
        Self {
            idle_rotation_speed: 10.0,
            user_rotation_speed: 100.0,
            pitch_min: -60.0,
            pitch_max: 60.0,
            smoothing_rate: 5.0,
            target_pitch: 0.0,
            target_yaw: 0.0,
            current_pitch: 0.0,
            current_yaw: 0.0,
            intents: HashSet::new(),
        }
    }
}

impl RotatingDisplay {
    pub fn new(idle_rotation_speed: f32, user_rotation_speed: f32) -> Self {
        Self {
            idle_rotation_speed,
            user_rotation_speed,
            ..Default::default()
        }
    }

    /// Limits are stored in ascending order whichever way they are passed
    pub fn with_pitch_limits(mut self, min: f32, max: f32) -> Self {
        self.pitch_min = min.min(max);
        self.pitch_max = min.max(max);
        self
    }

    pub fn with_smoothing_rate(mut self, smoothing_rate: f32) -> Self {
        self.smoothing_rate = smoothing_rate;
        self
    }

    /// Start or stop rotating in `direction`. Takes effect on the next tick.
    pub fn set_intent(&mut self, direction: RotationDirection, active: bool) {
        if active {
            self.intents.insert(direction);
        } else {
            self.intents.remove(&direction);
        }
    }

    pub fn press(&mut self, direction: RotationDirection) {
        self.set_intent(direction, true);
    }

    pub fn release(&mut self, direction: RotationDirection) {
        self.set_intent(direction, false);
    }

    pub fn is_active(&self, direction: RotationDirection) -> bool {
        self.intents.contains(&direction)
    }

    /// Advance by `delta_time` seconds and return the orientation to apply
    pub fn tick(&mut self, delta_time: f32) -> UnitQuaternion<f32> {
        use RotationDirection::{Down, Left, Right, Up};

        let user_step = self.user_rotation_speed * delta_time;

        if !self.is_active(Left) && !self.is_active(Right) {
            self.target_yaw += self.idle_rotation_speed * delta_time;
        }

        if self.is_active(Up) {
            self.target_pitch -= user_step;
        }
        if self.is_active(Down) {
            self.target_pitch += user_step;
        }
        if self.is_active(Left) {
            self.target_yaw -= user_step;
        }
        if self.is_active(Right) {
            self.target_yaw += user_step;
        }

        // Total for any limits, unlike f32::clamp: inverted limits pin to pitch_max
        self.target_pitch = self.target_pitch.max(self.pitch_min).min(self.pitch_max);

        // Not clamped to [0, 1]: large frames overshoot the target
        let t = self.smoothing_rate * delta_time;
        self.current_pitch = lerp(self.current_pitch, self.target_pitch, t);
        self.current_yaw = lerp(self.current_yaw, self.target_yaw, t);

        self.orientation()
    }

    /// Orientation for the current angles: pitch about X, then yaw about Y
    pub fn orientation(&self) -> UnitQuaternion<f32> {
        let pitch =
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.current_pitch.to_radians());
        let yaw = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.current_yaw.to_radians());
        yaw * pitch
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
