// Input manager - coordinates bindings, digital state and analog axes

use super::action::{Action, InputSource};
use super::axis::AnalogAxis;
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Owns the local player's input state
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
    horizontal: AnalogAxis,
    vertical: AnalogAxis,
}

impl InputManager {
    /// Create a new input manager with the default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfig::with_defaults())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
            horizontal: AnalogAxis::default(),
            vertical: AnalogAxis::default(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_source(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.handle_source(InputSource::mouse(button), state);
    }

    /// Route a press or release of `source` to its bound action, if any
    pub fn handle_source(&mut self, source: InputSource, state: ElementState) {
        let Some(action) = self.config.get_action(source) else {
            return;
        };

        match state {
            ElementState::Pressed => self.player.press(action),
            ElementState::Released => self.player.release(action),
        }
    }

    /// Ease the analog axes towards the held directions
    /// Call this at the start of every fixed tick
    pub fn advance_axes(&mut self, dt: f32) {
        let (horizontal, vertical) = self.player.get_direction();
        self.horizontal.update(horizontal, dt);
        self.vertical.update(vertical, dt);
    }

    /// Close the current tick so edges fire only once
    /// Call this after the tick's gameplay has read the input
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Drop edges that arrived on a frame where no tick ran
    ///
    /// Held state survives, so a key still down after unpausing reads as
    /// held but not as a fresh press.
    pub fn discard_edges(&mut self) {
        self.player.update();
    }

    /// Smoothed (horizontal, vertical) axis in [-1, 1]
    pub fn axis(&self) -> (f32, f32) {
        (self.horizontal.value(), self.vertical.value())
    }

    /// Raw (horizontal, vertical) axis in {-1, 0, 1}
    pub fn raw_axis(&self) -> (f32, f32) {
        self.player.get_direction()
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.player.is_pressed(action)
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Drop all held input, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.player.reset();
        self.horizontal.reset();
        self.vertical.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
