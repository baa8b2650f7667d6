// Digital input state with edge detection

use super::action::Action;
use std::collections::HashSet;

/// Pressed/just-pressed/just-released state of every action
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions that went from released to pressed since the last tick
    just_pressed: HashSet<Action>,

    /// Actions that went from pressed to released since the last tick
    just_released: HashSet<Action>,

    /// Actions that were pressed in the previous tick
    previous_pressed: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this tick
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this tick
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Check if an action is held (pressed for multiple ticks)
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed.contains(&action) && self.previous_pressed.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Close the current tick: edges are consumed, held state carries over
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
    }

    /// Raw digital direction, each component in {-1, 0, 1}
    /// Returns (horizontal, vertical)
    pub fn get_direction(&self) -> (f32, f32) {
        let mut horizontal = 0.0;
        let mut vertical = 0.0;

        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }
        if self.is_pressed(Action::MoveDown) {
            vertical -= 1.0;
        }
        if self.is_pressed(Action::MoveUp) {
            vertical += 1.0;
        }

        (horizontal, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.just_released(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::Dash);
        input.update();
        assert!(input.is_pressed(Action::Dash));
        assert!(!input.just_pressed(Action::Dash));
    }

    #[test]
    fn test_repeat_press_is_not_an_edge() {
        let mut input = PlayerInput::new();
        input.press(Action::Dash);
        input.update();
        input.press(Action::Dash);
        assert!(!input.just_pressed(Action::Dash));
    }

    #[test]
    fn test_held_detection() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(!input.is_held(Action::Jump));

        input.update();
        assert!(input.is_held(Action::Jump));
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.press(Action::Attack);
        input.reset();

        assert!(!input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Attack));
    }

    #[test]
    fn test_get_direction_neutral() {
        let input = PlayerInput::new();
        assert_eq!(input.get_direction(), (0.0, 0.0));
    }

    #[test]
    fn test_get_direction_diagonal() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveUp);
        assert_eq!(input.get_direction(), (-1.0, 1.0));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut input = PlayerInput::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveRight);
        assert_eq!(input.get_direction(), (0.0, 0.0));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Jump);
        assert!(!input.just_released(Action::Jump));
    }
}
