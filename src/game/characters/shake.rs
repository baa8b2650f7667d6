// Fire-and-forget camera shakes

use log::trace;

use super::host::CameraEffects;
use super::timer::Countdown;

/// Running camera shakes
///
/// Every shake raises the noise amplitude when it starts and zeroes it when
/// its own countdown runs out. Shakes never cancel each other, so the first
/// one to finish silences the camera even if a later one is still running.
#[derive(Debug, Clone, Default)]
pub struct CameraShake {
    instances: Vec<Countdown>,
    shaking: bool,
}

impl CameraShake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a shake of `gain` amplitude lasting `duration` seconds
    pub fn start(&mut self, camera: &mut dyn CameraEffects, gain: f32, duration: f32) {
        self.shaking = true;
        camera.set_noise_amplitude(gain);

        let mut countdown = Countdown::default();
        countdown.start(duration);
        self.instances.push(countdown);
        trace!("Camera shake started ({} running)", self.instances.len());
    }

    /// Advance every running shake by `dt`
    pub fn tick(&mut self, camera: &mut dyn CameraEffects, dt: f32) {
        let mut any_finished = false;
        for countdown in &mut self.instances {
            if countdown.tick(dt) {
                any_finished = true;
            }
        }

        if any_finished {
            camera.set_noise_amplitude(0.0);
            self.shaking = false;
        }
        self.instances.retain(Countdown::is_active);
    }

    pub fn is_shaking(&self) -> bool {
        self.shaking
    }

    /// Number of shakes still counting down
    pub fn running(&self) -> usize {
        self.instances.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Default)]
    struct Camera {
        amplitudes: Vec<f32>,
    }

    impl CameraEffects for Camera {
        fn set_noise_amplitude(&mut self, amplitude: f32) {
            self.amplitudes.push(amplitude);
        }
        fn world_to_viewport(&self, world_pos: Vec2) -> Vec2 {
            world_pos
        }
        fn emit_ripple(&mut self, _viewport_pos: Vec2) {}
    }

    #[test]
    fn test_shake_raises_then_resets_amplitude() {
        let mut camera = Camera::default();
        let mut shake = CameraShake::new();

        shake.start(&mut camera, 5.0, 0.3);
        assert!(shake.is_shaking());
        assert_eq!(camera.amplitudes, vec![5.0]);

        shake.tick(&mut camera, 0.2);
        assert!(shake.is_shaking());

        shake.tick(&mut camera, 0.2);
        assert!(!shake.is_shaking());
        assert_eq!(camera.amplitudes, vec![5.0, 0.0]);
        assert_eq!(shake.running(), 0);
    }

    #[test]
    fn test_overlapping_shakes_first_finish_silences_camera() {
        let mut camera = Camera::default();
        let mut shake = CameraShake::new();

        shake.start(&mut camera, 5.0, 0.3);
        shake.tick(&mut camera, 0.1);
        shake.start(&mut camera, 5.0, 1.0);
        assert_eq!(shake.running(), 2);

        shake.tick(&mut camera, 0.25);
        assert!(!shake.is_shaking());
        assert_eq!(camera.amplitudes.last(), Some(&0.0));
        assert_eq!(shake.running(), 1);

        // The longer shake still resets the amplitude when it ends
        shake.tick(&mut camera, 1.0);
        assert_eq!(camera.amplitudes, vec![5.0, 5.0, 0.0, 0.0]);
        assert_eq!(shake.running(), 0);
    }
}
