// 2D camera, shake noise channel and screen-space ripples

use glam::{Mat4, Vec2};
use log::trace;

use crate::core::math::lerp;

/// How long a ripple stays on screen, in seconds
pub const RIPPLE_LIFETIME: f32 = 0.6;

/// World units of camera offset per unit of noise amplitude
const NOISE_OFFSET_SCALE: f32 = 0.05;

/// 2D orthographic camera
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec2,
    /// Camera zoom level (1.0 = normal, 2.0 = zoomed in 2x)
    pub zoom: f32,
    /// Visible world width at zoom 1.0
    view_width: f32,
    /// Visible world height at zoom 1.0
    view_height: f32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a new camera showing `view_width` x `view_height` world units
    pub fn new(position: Vec2, view_width: f32, view_height: f32) -> Self {
        let mut camera = Self {
            position,
            zoom: 1.0,
            view_width,
            view_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        let half_width = (self.view_width / 2.0) / self.zoom;
        let half_height = (self.view_height / 2.0) / self.zoom;

        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half_width,
            self.position.x + half_width,
            self.position.y - half_height,
            self.position.y + half_height,
            -100.0, // Near plane
            100.0,  // Far plane
        );
    }

    /// Set camera position
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_view_proj();
    }

    /// Set camera zoom
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.1); // Prevent zoom from being too small
        self.update_view_proj();
    }

    /// Resize the visible area, keeping the zoom
    pub fn resize(&mut self, view_width: f32, view_height: f32) {
        self.view_width = view_width;
        self.view_height = view_height;
        self.update_view_proj();
    }

    /// Convert world coordinates to viewport coordinates
    ///
    /// (0, 0) is the bottom-left corner of the view and (1, 1) the top-right.
    pub fn world_to_viewport(&self, world_pos: Vec2) -> Vec2 {
        let ndc = self.view_proj.project_point3(world_pos.extend(0.0));
        Vec2::new((ndc.x + 1.0) * 0.5, (ndc.y + 1.0) * 0.5)
    }
}

/// Procedural noise that shakes the camera while its amplitude is non-zero
#[derive(Debug, Clone)]
pub struct NoiseChannel {
    /// Strength of the shake; 0.0 disables it
    pub amplitude_gain: f32,
    /// How fast the noise oscillates
    pub frequency_gain: f32,
    time: f32,
}

impl NoiseChannel {
    pub fn new(frequency_gain: f32) -> Self {
        Self {
            amplitude_gain: 0.0,
            frequency_gain,
            time: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Current world-space offset produced by the noise
    pub fn offset(&self) -> Vec2 {
        if self.amplitude_gain == 0.0 {
            return Vec2::ZERO;
        }

        let t = self.time * self.frequency_gain * 25.0;
        let wobble = Vec2::new(
            (t * 1.3).sin() + (t * 2.9).sin() * 0.5,
            (t * 1.7).cos() + (t * 3.1).sin() * 0.5,
        );
        wobble * self.amplitude_gain * NOISE_OFFSET_SCALE
    }
}

impl Default for NoiseChannel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// A distortion ring expanding from a point on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    /// Origin in viewport coordinates
    pub center: Vec2,
    /// Seconds since the ripple was emitted
    pub age: f32,
}

impl Ripple {
    /// 0.0 when emitted, 1.0 when it disappears
    pub fn progress(&self) -> f32 {
        (self.age / RIPPLE_LIFETIME).min(1.0)
    }
}

/// Camera following a target with a shake channel and ripple emitter
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub camera: Camera,
    pub noise: NoiseChannel,
    ripples: Vec<Ripple>,
    /// Fraction of the distance to the target covered each second
    follow_rate: f32,
    /// Where the camera would be without shake
    anchor: Vec2,
}

impl CameraRig {
    pub fn new(camera: Camera) -> Self {
        let anchor = camera.position;
        Self {
            camera,
            noise: NoiseChannel::default(),
            ripples: Vec::new(),
            follow_rate: 8.0,
            anchor,
        }
    }

    pub fn with_follow_rate(mut self, follow_rate: f32) -> Self {
        self.follow_rate = follow_rate;
        self
    }

    /// Move towards `target`, apply shake and age ripples
    pub fn update(&mut self, dt: f32, target: Vec2) {
        let t = (self.follow_rate * dt).min(1.0);
        self.anchor = Vec2::new(lerp(self.anchor.x, target.x, t), lerp(self.anchor.y, target.y, t));

        self.noise.advance(dt);
        self.camera.set_position(self.anchor + self.noise.offset());

        for ripple in &mut self.ripples {
            ripple.age += dt;
        }
        self.ripples.retain(|ripple| ripple.age < RIPPLE_LIFETIME);
    }

    /// Start a ripple at a viewport-space point
    pub fn emit_ripple(&mut self, center: Vec2) {
        trace!("Ripple emitted at {:?}", center);
        self.ripples.push(Ripple { center, age: 0.0 });
    }

    /// Ripples still on screen
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Position of the camera without shake
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }
}
