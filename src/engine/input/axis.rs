// Smoothed analog axis built from two digital directions

use crate::core::math::{move_towards, sign_or_zero};

/// Default rate (units/second) at which the axis moves towards a held direction
pub const DEFAULT_SENSITIVITY: f32 = 3.0;

/// Default rate (units/second) at which the axis falls back to zero when released
pub const DEFAULT_GRAVITY: f32 = 3.0;

/// An analog value in [-1, 1] that eases towards the raw digital direction
///
/// Pressing the opposite direction snaps the value through zero first so
/// turning around feels immediate.
#[derive(Debug, Clone, Copy)]
pub struct AnalogAxis {
    value: f32,
    raw: f32,
    sensitivity: f32,
    gravity: f32,
    snap: bool,
}

impl AnalogAxis {
    pub fn new(sensitivity: f32, gravity: f32, snap: bool) -> Self {
        Self {
            value: 0.0,
            raw: 0.0,
            sensitivity,
            gravity,
            snap,
        }
    }

    /// Advance the axis towards `raw` (-1, 0 or 1) over `dt` seconds
    pub fn update(&mut self, raw: f32, dt: f32) {
        self.raw = sign_or_zero(raw);

        if self.raw == 0.0 {
            self.value = move_towards(self.value, 0.0, self.gravity * dt);
            return;
        }

        if self.snap && self.value != 0.0 && sign_or_zero(self.value) != self.raw {
            self.value = 0.0;
        }
        self.value = move_towards(self.value, self.raw, self.sensitivity * dt);
    }

    /// Smoothed value in [-1, 1]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Last digital value fed to the axis
    pub fn raw(&self) -> f32 {
        self.raw
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
        self.raw = 0.0;
    }
}

impl Default for AnalogAxis {
    fn default() -> Self {
        Self::new(DEFAULT_SENSITIVITY, DEFAULT_GRAVITY, true)
    }
}
