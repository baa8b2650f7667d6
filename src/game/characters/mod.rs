// Character system
//
// This module contains everything related to playable characters:
// - Character binding to the physics world and animation player
// - Motion controller with its timed sequences (dash, camera shake)
// - Optional melee combat capability
// - Tunable stats and the derived phase readout

pub mod animation;
pub mod character;
pub mod combat;
pub mod command;
pub mod controller;
pub mod dash;
pub mod host;
pub mod shake;
pub mod state;
pub mod stats;
pub mod timer;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationFrameData, AnimationPlayer};
pub use character::{Character, CharacterId, RapierCharacter};
pub use combat::{CombatConfig, ExclusionPolicy, MeleeCombat};
pub use command::MotionInput;
pub use controller::{MotionController, MotionState};
pub use host::{
    AnimFlag, AnimFloat, Animator, CameraEffects, CharacterPhysics, FloorQuery, MotionContext,
    PhysicsBody,
};
pub use state::{MotionPhase, MotionStateMachine};
pub use stats::{MotionStats, BASE_MOTION_STATS};
