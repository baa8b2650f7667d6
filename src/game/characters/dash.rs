// Dash maneuver: a gravity-free burst with a mid-dash ground check

use glam::Vec2;
use log::trace;

use super::host::PhysicsBody;
use super::timer::Countdown;

/// What happened to the dash sequence during a tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashProgress {
    /// The mid-dash ground check is due this tick
    pub ground_check_due: bool,
    /// The dash ended this tick; holds the gravity scale to restore
    pub finished: Option<f32>,
}

/// Timers and saved body state of an in-flight dash
#[derive(Debug, Clone, Default)]
pub struct DashManeuver {
    duration: Countdown,
    ground_check: Countdown,
    /// Gravity scale the body had before the first of any overlapping dashes
    saved_gravity: Option<f32>,
}

impl DashManeuver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch the body along `direction` and suspend its gravity
    ///
    /// If a previous sequence is still running (landing can clear the
    /// `dashing` flag early) its timers restart and the gravity saved by
    /// that earlier dash is kept.
    pub fn begin<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        direction: Vec2,
        speed: f32,
        duration: f32,
        ground_check: f32,
    ) {
        body.set_velocity(Vec2::ZERO);
        body.set_velocity(direction.normalize_or_zero() * speed);

        if self.saved_gravity.is_none() {
            self.saved_gravity = Some(body.gravity_scale());
        }
        body.set_gravity_scale(0.0);

        self.duration.start(duration);
        self.ground_check.start(ground_check);
        trace!("Dash sequence started for {}s", duration);
    }

    /// Advance both timers by `dt`
    pub fn tick(&mut self, dt: f32) -> DashProgress {
        let ground_check_due = self.ground_check.tick(dt);
        let finished = if self.duration.tick(dt) {
            self.saved_gravity.take()
        } else {
            None
        };

        DashProgress {
            ground_check_due,
            finished,
        }
    }

    /// A dash sequence is still counting down
    pub fn in_flight(&self) -> bool {
        self.duration.is_active()
    }

    pub fn remaining(&self) -> f32 {
        self.duration.remaining()
    }

    /// Abort without restoring anything, returning the saved gravity scale
    pub fn cancel(&mut self) -> Option<f32> {
        self.duration.cancel();
        self.ground_check.cancel();
        self.saved_gravity.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Body {
        velocity: Vec2,
        gravity_scale: f32,
    }

    impl PhysicsBody for Body {
        fn velocity(&self) -> Vec2 {
            self.velocity
        }
        fn set_velocity(&mut self, velocity: Vec2) {
            self.velocity = velocity;
        }
        fn gravity_scale(&self) -> f32 {
            self.gravity_scale
        }
        fn set_gravity_scale(&mut self, scale: f32) {
            self.gravity_scale = scale;
        }
        fn position(&self) -> Vec2 {
            Vec2::ZERO
        }
        fn world_gravity(&self) -> Vec2 {
            Vec2::new(0.0, -9.81)
        }
    }

    #[test]
    fn test_begin_sets_velocity_and_gravity() {
        let mut body = Body {
            velocity: Vec2::new(3.0, -7.0),
            gravity_scale: 1.5,
        };
        let mut dash = DashManeuver::new();
        dash.begin(&mut body, Vec2::new(1.0, 1.0), 20.0, 0.3, 0.15);

        let expected = Vec2::new(1.0, 1.0).normalize() * 20.0;
        assert!((body.velocity - expected).length() < 1e-5);
        assert_eq!(body.gravity_scale, 0.0);
        assert!(dash.in_flight());
    }

    #[test]
    fn test_ground_check_fires_before_end() {
        let mut body = Body {
            gravity_scale: 1.0,
            ..Default::default()
        };
        let mut dash = DashManeuver::new();
        dash.begin(&mut body, Vec2::X, 20.0, 0.3, 0.15);

        let first = dash.tick(0.1);
        assert_eq!(first, DashProgress::default());

        let second = dash.tick(0.1);
        assert!(second.ground_check_due);
        assert_eq!(second.finished, None);

        let third = dash.tick(0.15);
        assert!(!third.ground_check_due);
        assert_eq!(third.finished, Some(1.0));
        assert!(!dash.in_flight());
    }

    #[test]
    fn test_overlapping_dash_keeps_original_gravity() {
        let mut body = Body {
            gravity_scale: 2.0,
            ..Default::default()
        };
        let mut dash = DashManeuver::new();
        dash.begin(&mut body, Vec2::X, 20.0, 0.3, 0.15);
        dash.tick(0.1);
        dash.begin(&mut body, Vec2::NEG_Y, 20.0, 0.3, 0.15);

        assert_eq!(dash.tick(0.2).finished, None);
        assert_eq!(dash.tick(0.2).finished, Some(2.0));
    }

    #[test]
    fn test_cancel() {
        let mut body = Body {
            gravity_scale: 1.0,
            ..Default::default()
        };
        let mut dash = DashManeuver::new();
        dash.begin(&mut body, Vec2::X, 20.0, 0.3, 0.15);
        assert_eq!(dash.cancel(), Some(1.0));
        assert_eq!(dash.tick(1.0), DashProgress::default());
    }
}
