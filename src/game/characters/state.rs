// Character phase tracking

use log::debug;

/// High-level phase of a character, derived from the controller's flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionPhase {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground
    Walking,
    /// In the air, moving upward
    Jumping,
    /// In the air, moving downward
    Falling,
    /// Gravity-free dash burst
    Dashing,
    /// Melee attack in progress
    Attacking,
}

impl MotionPhase {
    /// Derive the phase from one tick's outcome
    ///
    /// Attack wins over dash, dash over airborne, airborne over walking.
    pub fn classify(
        attacking: bool,
        dashing: bool,
        on_ground: bool,
        velocity_x: f32,
        velocity_y: f32,
    ) -> Self {
        if attacking {
            Self::Attacking
        } else if dashing {
            Self::Dashing
        } else if !on_ground {
            if velocity_y > 0.0 {
                Self::Jumping
            } else {
                Self::Falling
            }
        } else if velocity_x != 0.0 {
            Self::Walking
        } else {
            Self::Idle
        }
    }

    /// Check if the character is on the ground
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Idle | Self::Walking)
    }

    /// Check if the character is in the air
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping | Self::Falling)
    }

    /// Get the name of the clip that fits this phase
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walk",
            Self::Jumping => "jump",
            Self::Falling => "fall",
            Self::Dashing => "dash",
            Self::Attacking => "attack",
        }
    }
}

/// Remembers the current and previous phase and how long the current one lasted
#[derive(Debug, Default)]
pub struct MotionStateMachine {
    current: MotionPhase,
    previous: MotionPhase,
    phase_time: f32,
}

impl MotionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current phase
    pub fn phase(&self) -> MotionPhase {
        self.current
    }

    /// Get the previous phase
    pub fn previous_phase(&self) -> MotionPhase {
        self.previous
    }

    /// Get time spent in the current phase
    pub fn phase_time(&self) -> f32 {
        self.phase_time
    }

    /// Check if the phase just changed this tick
    pub fn phase_just_changed(&self) -> bool {
        self.phase_time == 0.0
    }

    /// Record this tick's phase
    pub fn update(&mut self, dt: f32, phase: MotionPhase) {
        if self.current != phase {
            debug!("Motion phase {:?} -> {:?}", self.current, phase);
            self.previous = self.current;
            self.current = phase;
            self.phase_time = 0.0;
        } else {
            self.phase_time += dt;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
