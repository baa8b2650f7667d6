// Character entity: a motion controller bound to a rapier body

use glam::Vec2;
use log::{debug, info, warn};

use crate::core::MotionError;
use crate::engine::camera::CameraRig;
use crate::engine::physics::{
    body::presets, ColliderHandle, LayerMask, PhysicsWorld, RigidBodyHandle, Vector,
};

use super::animation::AnimationPlayer;
use super::combat::CombatConfig;
use super::command::MotionInput;
use super::controller::MotionController;
use super::host::{FloorQuery, MotionContext, PhysicsBody};
use super::state::MotionPhase;
use super::stats::MotionStats;

/// Unique identifier for a character
pub type CharacterId = u32;

fn to_glam(v: &Vector<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn to_rapier(v: Vec2) -> Vector<f32> {
    Vector::new(v.x, v.y)
}

/// A character's rigid body seen through the controller's collaborator traits
///
/// Lookups of a removed body read as a resting body at the origin; callers
/// check the handle before building one.
pub struct RapierCharacter<'w> {
    world: &'w mut PhysicsWorld,
    handle: RigidBodyHandle,
}

impl<'w> RapierCharacter<'w> {
    pub fn new(world: &'w mut PhysicsWorld, handle: RigidBodyHandle) -> Self {
        Self { world, handle }
    }
}

impl PhysicsBody for RapierCharacter<'_> {
    fn velocity(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| to_glam(body.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.set_linvel(to_rapier(velocity), true);
        }
    }

    fn gravity_scale(&self) -> f32 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| body.gravity_scale())
            .unwrap_or(1.0)
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        if let Some(body) = self.world.get_rigid_body_mut(self.handle) {
            body.set_gravity_scale(scale, true);
        }
    }

    fn position(&self) -> Vec2 {
        self.world
            .get_rigid_body(self.handle)
            .map(|body| to_glam(body.translation()))
            .unwrap_or(Vec2::ZERO)
    }

    fn world_gravity(&self) -> Vec2 {
        to_glam(&self.world.gravity())
    }
}

impl FloorQuery for RapierCharacter<'_> {
    fn overlap_circle(&self, center: Vec2, radius: f32, layers: LayerMask) -> bool {
        self.world
            .overlap_circle(to_rapier(center), radius, layers, Some(self.handle))
    }
}

/// A player-controlled character in the level
#[derive(Debug)]
pub struct Character {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for display)
    pub name: String,

    // Physics
    /// Handle to the character's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the character's collider
    pub collider_handle: ColliderHandle,

    /// Movement, jump, dash and attack logic
    pub controller: MotionController,
    /// Animation player for sprite animations
    pub animation: AnimationPlayer,
}

impl Character {
    /// Create a new character and add it to the physics world
    pub fn spawn(
        id: CharacterId,
        name: &str,
        stats: MotionStats,
        combat: Option<CombatConfig>,
        physics: &mut PhysicsWorld,
        spawn_x: f32,
        spawn_y: f32,
    ) -> Result<Self, MotionError> {
        let mut controller = MotionController::new(stats)?;
        if let Some(config) = combat {
            controller = controller.with_combat(config);
        }

        let body = presets::player_body(spawn_x, spawn_y);
        let body_handle = physics.add_rigid_body(body);

        let stats = controller.stats();
        let collider = presets::player_collider(stats.width, stats.height);
        let collider_handle = physics.add_collider(collider, body_handle);

        info!(
            "Spawned {} (#{}) at ({}, {}), combat: {}",
            name,
            id,
            spawn_x,
            spawn_y,
            controller.has_combat()
        );

        Ok(Self {
            id,
            name: name.to_string(),
            body_handle,
            collider_handle,
            controller,
            animation: AnimationPlayer::with_standard_animations(),
        })
    }

    /// Run one fixed tick: controller, then animation, then animation events
    pub fn tick(
        &mut self,
        physics: &mut PhysicsWorld,
        camera: &mut CameraRig,
        input: &MotionInput,
        dt: f32,
    ) -> Result<(), MotionError> {
        if physics.get_rigid_body(self.body_handle).is_none() {
            warn!("{} has no rigid body, skipping tick", self.name);
            return Err(MotionError::MissingBody { character: self.id });
        }

        let mut body = RapierCharacter::new(physics, self.body_handle);
        let mut ctx = MotionContext {
            body: &mut body,
            animator: &mut self.animation,
            camera,
        };
        self.controller.update(&mut ctx, input, dt);

        self.animation.update(dt);
        if let Some(clip) = self.animation.take_finished() {
            if clip == "attack" {
                self.controller.on_attack_finished(&mut self.animation);
            }
        }

        Ok(())
    }

    /// Teleport back to a spawn point and forget all movement state
    pub fn respawn(&mut self, physics: &mut PhysicsWorld, x: f32, y: f32) {
        if let Some(body) = physics.get_rigid_body_mut(self.body_handle) {
            body.set_translation(Vector::new(x, y), true);
            body.set_linvel(Vector::new(0.0, 0.0), true);
        }

        let mut body = RapierCharacter::new(physics, self.body_handle);
        self.controller.reset(&mut body, &mut self.animation);
        self.animation.reset();
        debug!("{} respawned at ({}, {})", self.name, x, y);
    }

    /// Get character's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics
            .get_rigid_body(self.body_handle)
            .map(|body| to_glam(body.translation()))
    }

    /// Get character's current velocity
    pub fn velocity(&self, physics: &PhysicsWorld) -> Option<Vec2> {
        physics
            .get_rigid_body(self.body_handle)
            .map(|body| to_glam(body.linvel()))
    }

    pub fn phase(&self) -> MotionPhase {
        self.controller.phase()
    }

    pub fn is_grounded(&self) -> bool {
        self.controller.state().on_ground
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::Camera;
    use crate::game::characters::host::AnimFlag;
    use approx::assert_relative_eq;

    const DT: f32 = 1.0 / 60.0;

    struct Level {
        physics: PhysicsWorld,
        camera: CameraRig,
    }

    impl Level {
        fn new() -> Self {
            let mut physics = PhysicsWorld::new();
            // Floor top surface at y = 0
            let floor = physics.add_rigid_body(presets::platform_body(0.0, -0.5));
            physics.add_collider(presets::platform_collider(40.0, 1.0), floor);
            physics.step();

            Self {
                physics,
                camera: CameraRig::new(Camera::new(Vec2::ZERO, 20.0, 12.0)),
            }
        }

        fn tick(&mut self, character: &mut Character, input: MotionInput) {
            character
                .tick(&mut self.physics, &mut self.camera, &input, DT)
                .unwrap();
            self.physics.step();
        }

        fn spawn(&mut self, combat: Option<CombatConfig>) -> Character {
            // Capsule of height 2 standing on the floor
            Character::spawn(
                0,
                "hero",
                MotionStats::standard(),
                combat,
                &mut self.physics,
                0.0,
                1.0,
            )
            .unwrap()
        }
    }

    #[test]
    fn test_spawn_rejects_invalid_stats() {
        let mut physics = PhysicsWorld::new();
        let stats = MotionStats::standard().with_dash(-1.0, 0.3);
        let result = Character::spawn(3, "broken", stats, None, &mut physics, 0.0, 0.0);
        assert!(matches!(
            result,
            Err(MotionError::InvalidStat {
                name: "dash_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_adapter_reads_and_writes_body() {
        let mut level = Level::new();
        let character = level.spawn(None);

        let mut body = RapierCharacter::new(&mut level.physics, character.body_handle);
        assert_eq!(body.position(), Vec2::new(0.0, 1.0));
        assert_eq!(body.world_gravity(), Vec2::new(0.0, -9.81));

        body.set_velocity(Vec2::new(3.0, -2.0));
        body.set_gravity_scale(0.0);
        assert_eq!(body.velocity(), Vec2::new(3.0, -2.0));
        assert_eq!(body.gravity_scale(), 0.0);
    }

    #[test]
    fn test_standing_character_is_grounded() {
        let mut level = Level::new();
        let mut character = level.spawn(None);

        level.tick(&mut character, MotionInput::default());

        assert!(character.is_grounded());
        assert_eq!(character.phase(), MotionPhase::Idle);
    }

    #[test]
    fn test_character_high_above_floor_is_airborne() {
        let mut level = Level::new();
        let mut character = Character::spawn(
            1,
            "faller",
            MotionStats::standard(),
            None,
            &mut level.physics,
            0.0,
            10.0,
        )
        .unwrap();

        level.tick(&mut character, MotionInput::default());

        assert!(!character.is_grounded());
    }

    #[test]
    fn test_jump_sets_body_velocity() {
        let mut level = Level::new();
        let mut character = level.spawn(None);
        level.tick(&mut character, MotionInput::default());

        character
            .tick(
                &mut level.physics,
                &mut level.camera,
                &MotionInput::default().with_jump(),
                DT,
            )
            .unwrap();

        let velocity = character.velocity(&level.physics).unwrap();
        assert_relative_eq!(velocity.y, 5.0);
        assert!(character.animation.flag(AnimFlag::Jump));
    }

    #[test]
    fn test_dash_moves_body_and_shakes_camera() {
        let mut level = Level::new();
        let mut character = level.spawn(None);
        level.tick(&mut character, MotionInput::default());

        character
            .tick(
                &mut level.physics,
                &mut level.camera,
                &MotionInput::holding(Vec2::X).with_dash(),
                DT,
            )
            .unwrap();

        let body = level.physics.get_rigid_body(character.body_handle).unwrap();
        assert_relative_eq!(body.linvel().x, 20.0);
        assert_eq!(body.gravity_scale(), 0.0);
        assert_eq!(level.camera.noise.amplitude_gain, 5.0);
        assert_eq!(level.camera.ripples().len(), 1);
        assert_eq!(character.animation.current_animation(), "dash");
    }

    #[test]
    fn test_dash_restores_gravity_on_real_body() {
        let mut level = Level::new();
        let mut character = level.spawn(None);
        level.tick(&mut character, MotionInput::default());
        level.tick(&mut character, MotionInput::holding(Vec2::X).with_dash());

        for _ in 0..30 {
            level.tick(&mut character, MotionInput::default());
        }

        let body = level.physics.get_rigid_body(character.body_handle).unwrap();
        assert_eq!(body.gravity_scale(), 1.0);
        assert!(!character.controller.state().dashing);
    }

    #[test]
    fn test_attack_clears_when_clip_finishes() {
        let mut level = Level::new();
        let mut character = level.spawn(Some(CombatConfig::default()));
        level.tick(&mut character, MotionInput::default());

        level.tick(&mut character, MotionInput::default().with_attack());
        assert!(character.controller.state().is_attacking);
        assert_eq!(character.animation.current_animation(), "attack");

        for _ in 0..20 {
            level.tick(&mut character, MotionInput::default());
        }

        assert!(!character.controller.state().is_attacking);
        assert_eq!(character.animation.current_animation(), "idle");
    }

    #[test]
    fn test_attack_again_on_tick_after_finish() {
        let mut level = Level::new();
        let mut character = level.spawn(Some(CombatConfig::default()));
        level.tick(&mut character, MotionInput::default());

        level.tick(&mut character, MotionInput::default().with_attack());
        let mut ticks = 0;
        while character.controller.state().is_attacking {
            level.tick(&mut character, MotionInput::default());
            ticks += 1;
            assert!(ticks < 60, "first attack never finished");
        }

        // Press again on the very next tick
        level.tick(&mut character, MotionInput::default().with_attack());
        assert!(character.controller.state().is_attacking);
        assert!(character.animation.is_playing());
        assert_eq!(character.animation.current_animation(), "attack");

        for _ in 0..30 {
            level.tick(&mut character, MotionInput::default());
        }
        assert!(!character.controller.state().is_attacking);
    }

    #[test]
    fn test_missing_body_is_an_error() {
        let mut level = Level::new();
        let mut character = level.spawn(None);
        level.physics.remove_rigid_body(character.body_handle);

        let result = character.tick(
            &mut level.physics,
            &mut level.camera,
            &MotionInput::default(),
            DT,
        );

        assert_eq!(result, Err(MotionError::MissingBody { character: 0 }));
    }

    #[test]
    fn test_respawn_resets_body_and_state() {
        let mut level = Level::new();
        let mut character = level.spawn(None);
        level.tick(&mut character, MotionInput::default());
        level.tick(&mut character, MotionInput::holding(Vec2::NEG_X).with_dash());

        character.respawn(&mut level.physics, 4.0, 6.0);

        assert_eq!(character.position(&level.physics), Some(Vec2::new(4.0, 6.0)));
        assert_eq!(character.velocity(&level.physics), Some(Vec2::ZERO));
        let body = level.physics.get_rigid_body(character.body_handle).unwrap();
        assert_eq!(body.gravity_scale(), 1.0);
        assert!(!character.controller.state().dashing);
        assert_eq!(character.controller.state().facing, 1.0);
        assert_eq!(character.animation.current_animation(), "idle");
    }
}
