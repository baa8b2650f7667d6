// Per-tick input snapshot consumed by the motion controller

use glam::Vec2;

use crate::engine::input::{Action, InputManager};

/// What the player asked for this tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionInput {
    /// Smoothed analog axis, components in [-1, 1]
    pub axis: Vec2,
    /// Digital axis, components in {-1, 0, 1}
    pub raw: Vec2,
    /// Jump went down this tick
    pub jump_pressed: bool,
    /// Jump is currently down
    pub jump_held: bool,
    /// Dash went down this tick
    pub dash_pressed: bool,
    /// Attack went down this tick
    pub attack_pressed: bool,
}

impl MotionInput {
    /// Sample the input manager; call after `advance_axes` and before `update`
    pub fn sample(input: &InputManager) -> Self {
        let (x, y) = input.axis();
        let (raw_x, raw_y) = input.raw_axis();

        Self {
            axis: Vec2::new(x, y),
            raw: Vec2::new(raw_x, raw_y),
            jump_pressed: input.just_pressed(Action::Jump),
            jump_held: input.is_pressed(Action::Jump),
            dash_pressed: input.just_pressed(Action::Dash),
            attack_pressed: input.just_pressed(Action::Attack),
        }
    }

    /// Input with both axes pinned to a digital direction
    pub fn holding(direction: Vec2) -> Self {
        Self {
            axis: direction,
            raw: direction,
            ..Self::default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump_pressed = true;
        self.jump_held = true;
        self
    }

    pub fn with_dash(mut self) -> Self {
        self.dash_pressed = true;
        self
    }

    pub fn with_attack(mut self) -> Self {
        self.attack_pressed = true;
        self
    }
}
