// Input handling system
//
// - `action`: game actions and default key bindings
// - `axis`: smoothed analog axis built from digital directions
// - `player`: pressed / just-pressed / just-released state
// - `config`: remappable bindings
// - `manager`: routes winit events and owns the state above
//
// Each fixed tick: `advance_axes(dt)`, let gameplay read the state, then
// `update()` so button edges fire exactly once.

pub mod action;
pub mod axis;
pub mod config;
pub mod manager;
pub mod player;

pub use action::{Action, InputSource};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;
