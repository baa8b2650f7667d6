// Services the motion controller drives each tick
//
// The controller never looks anything up on its own: the character hands it
// a `MotionContext` bundling these collaborators for the duration of a tick.

use glam::Vec2;

use crate::engine::camera::CameraRig;
use crate::engine::physics::LayerMask;

/// Velocity and gravity of the character's rigid body
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
    /// World-space origin of the character
    fn position(&self) -> Vec2;
    /// Gravity of the world the body lives in
    fn world_gravity(&self) -> Vec2;
}

/// Shape-overlap query against the level geometry
pub trait FloorQuery {
    fn overlap_circle(&self, center: Vec2, radius: f32, layers: LayerMask) -> bool;
}

/// A body that can also probe the level around it
pub trait CharacterPhysics: PhysicsBody + FloorQuery {}

impl<T: PhysicsBody + FloorQuery> CharacterPhysics for T {}

/// Boolean animator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimFlag {
    Walk,
    Jump,
    Dash,
    Attack,
}

impl AnimFlag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Dash => "dash",
            Self::Attack => "attack",
        }
    }
}

/// Float animator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimFloat {
    VerticalSpeed,
    AttackX,
    AttackY,
}

impl AnimFloat {
    pub fn name(self) -> &'static str {
        match self {
            Self::VerticalSpeed => "verticalSpeed",
            Self::AttackX => "attackX",
            Self::AttackY => "attackY",
        }
    }
}

/// Write-only parameter sink of the character's animation state machine
pub trait Animator {
    fn set_bool(&mut self, flag: AnimFlag, value: bool);
    fn set_float(&mut self, param: AnimFloat, value: f32);
    /// Mirror the sprite when the character faces left
    fn set_flip_horizontal(&mut self, flip: bool);
}

/// Camera-side feedback effects
pub trait CameraEffects {
    fn set_noise_amplitude(&mut self, amplitude: f32);
    fn world_to_viewport(&self, world_pos: Vec2) -> Vec2;
    fn emit_ripple(&mut self, viewport_pos: Vec2);
}

impl CameraEffects for CameraRig {
    fn set_noise_amplitude(&mut self, amplitude: f32) {
        self.noise.amplitude_gain = amplitude;
    }

    fn world_to_viewport(&self, world_pos: Vec2) -> Vec2 {
        self.camera.world_to_viewport(world_pos)
    }

    fn emit_ripple(&mut self, viewport_pos: Vec2) {
        CameraRig::emit_ripple(self, viewport_pos);
    }
}

/// Collaborators lent to the controller for one tick
pub struct MotionContext<'a> {
    pub body: &'a mut dyn CharacterPhysics,
    pub animator: &'a mut dyn Animator,
    pub camera: &'a mut dyn CameraEffects,
}
