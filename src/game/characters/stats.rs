// Character tunables - one designer-facing table for movement, dash and feedback

use glam::Vec2;

use crate::core::MotionError;
use crate::engine::physics::LayerMask;

/// Designer-tunable constants for the motion controller
#[derive(Debug, Clone, PartialEq)]
pub struct MotionStats {
    // Movement
    /// Horizontal speed at full stick deflection (units/second)
    pub move_speed: f32,
    /// Upward velocity given by a jump
    pub jump_strength: f32,

    // Jump arc
    /// Gravity multiplier while falling (the extra part beyond 1.0 is applied by the controller)
    pub fall_multiplier: f32,
    /// Gravity multiplier while rising with the jump button released
    pub low_jump_multiplier: f32,

    // Dash
    /// Speed of a dash (units/second)
    pub dash_speed: f32,
    /// How long gravity stays off during a dash (seconds)
    pub dash_duration: f32,
    /// Delay after the dash starts before checking whether it touched ground (seconds)
    pub dash_ground_check: f32,

    // Floor detection
    /// Offset from the character origin to the floor probe
    pub floor_offset: Vec2,
    /// Radius of the floor probe
    pub floor_radius: f32,
    /// Collision layers that count as floor
    pub floor_layers: LayerMask,

    // Camera feedback
    /// Noise amplitude while the camera shakes
    pub shake_gain: f32,
    /// Default shake duration (seconds)
    pub shake_duration: f32,

    // Dimensions (for physics collider)
    /// Character width in world units
    pub width: f32,
    /// Character height in world units
    pub height: f32,
}

/// Baseline tuning
pub const BASE_MOTION_STATS: MotionStats = MotionStats {
    move_speed: 10.0,
    jump_strength: 5.0,

    fall_multiplier: 2.5,
    low_jump_multiplier: 2.0,

    dash_speed: 20.0,
    dash_duration: 0.3,
    dash_ground_check: 0.15,

    // Probe sits at the feet of a 2-unit tall character
    floor_offset: Vec2::new(0.0, -1.0),
    floor_radius: 0.2,
    floor_layers: LayerMask::FLOOR,

    shake_gain: 5.0,
    shake_duration: 0.3,

    width: 1.0,
    height: 2.0,
};

impl Default for MotionStats {
    fn default() -> Self {
        BASE_MOTION_STATS
    }
}

impl MotionStats {
    /// Get the standard tuning
    pub fn standard() -> Self {
        BASE_MOTION_STATS
    }

    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_jump_strength(mut self, jump_strength: f32) -> Self {
        self.jump_strength = jump_strength;
        self
    }

    pub fn with_dash(mut self, speed: f32, duration: f32) -> Self {
        self.dash_speed = speed;
        self.dash_duration = duration;
        self
    }

    pub fn with_floor_probe(mut self, offset: Vec2, radius: f32, layers: LayerMask) -> Self {
        self.floor_offset = offset;
        self.floor_radius = radius;
        self.floor_layers = layers;
        self
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<(), MotionError> {
        let non_negative = [
            ("move_speed", self.move_speed),
            ("jump_strength", self.jump_strength),
            ("dash_speed", self.dash_speed),
            ("dash_duration", self.dash_duration),
            ("dash_ground_check", self.dash_ground_check),
            ("floor_radius", self.floor_radius),
            ("shake_gain", self.shake_gain),
            ("shake_duration", self.shake_duration),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(MotionError::InvalidStat { name, value });
            }
        }

        // Multipliers below 1.0 would make the arc floatier than plain gravity
        for (name, value) in [
            ("fall_multiplier", self.fall_multiplier),
            ("low_jump_multiplier", self.low_jump_multiplier),
        ] {
            if !value.is_finite() || value < 1.0 {
                return Err(MotionError::InvalidStat { name, value });
            }
        }

        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MotionError::InvalidStat { name, value });
            }
        }

        if !self.floor_offset.is_finite() {
            return Err(MotionError::InvalidStat {
                name: "floor_offset",
                value: self.floor_offset.length(),
            });
        }

        Ok(())
    }
}
