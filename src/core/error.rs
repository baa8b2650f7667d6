// Error types for the character controller

use thiserror::Error;

/// Errors raised while building or driving a character
#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    /// A tunable is negative, zero where it must not be, or not finite
    #[error("invalid value for `{name}`: {value}")]
    InvalidStat { name: &'static str, value: f32 },

    /// The rigid body backing a character is no longer in the physics world
    #[error("character {character} has no rigid body in the physics world")]
    MissingBody { character: u32 },
}
