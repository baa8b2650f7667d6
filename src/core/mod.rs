// Shared math helpers and error types

pub mod error;
pub mod math;

pub use error::MotionError;
