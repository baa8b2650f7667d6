// Countdown timers for timed gameplay sequences

/// Slack for f32 drift when a duration is spent in fixed ticks
const TICK_EPSILON: f32 = 1e-4;

/// A one-shot countdown advanced explicitly once per tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Countdown {
    #[default]
    Idle,
    Active { remaining: f32 },
}

impl Countdown {
    /// Start (or restart) the countdown
    pub fn start(&mut self, duration: f32) {
        *self = Self::Active {
            remaining: duration,
        };
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Seconds left, 0.0 when idle
    pub fn remaining(&self) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Active { remaining } => *remaining,
        }
    }

    /// Advance by `dt`. Returns true on the tick the countdown runs out,
    /// after which it is idle again.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Self::Active { remaining } = self else {
            return false;
        };

        *remaining -= dt;
        if *remaining <= TICK_EPSILON {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }
}
