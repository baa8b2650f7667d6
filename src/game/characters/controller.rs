// Per-tick platformer movement: walk, variable-height jump, dash and melee

use glam::Vec2;
use log::{debug, trace};

use super::combat::{CombatConfig, MeleeCombat};
use super::command::MotionInput;
use super::dash::DashManeuver;
use super::host::{
    AnimFlag, AnimFloat, Animator, CameraEffects, FloorQuery, MotionContext, PhysicsBody,
};
use super::shake::CameraShake;
use super::state::{MotionPhase, MotionStateMachine};
use super::stats::MotionStats;
use crate::core::MotionError;

/// Flags and cached direction owned by a controller
#[derive(Debug, Clone, PartialEq)]
pub struct MotionState {
    /// +1 facing right, -1 facing left
    pub facing: f32,
    /// Result of this tick's floor probe
    pub on_ground: bool,
    pub dashing: bool,
    /// Raised when a dash starts, dropped when the dash touches ground or the character lands
    pub can_dash: bool,
    pub is_attacking: bool,
    pub shaking: bool,
    /// Set on the landing tick so landing fires once per touchdown
    pub hit_ground_latch: bool,
    /// Last facing/aim direction, used to aim attacks without directional input
    pub move_direction: Vec2,
    /// Walking is enabled
    pub can_move: bool,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            facing: 1.0,
            on_ground: false,
            dashing: false,
            can_dash: false,
            is_attacking: false,
            shaking: false,
            hit_ground_latch: false,
            move_direction: Vec2::X,
            can_move: true,
        }
    }
}

/// Drives one character from input, one fixed tick at a time
#[derive(Debug)]
pub struct MotionController {
    stats: MotionStats,
    state: MotionState,
    dash: DashManeuver,
    shake: CameraShake,
    combat: Option<MeleeCombat>,
    phase: MotionStateMachine,
}

impl MotionController {
    pub fn new(stats: MotionStats) -> Result<Self, MotionError> {
        stats.validate()?;

        Ok(Self {
            stats,
            state: MotionState::default(),
            dash: DashManeuver::new(),
            shake: CameraShake::new(),
            combat: None,
            phase: MotionStateMachine::new(),
        })
    }

    /// Attach the melee capability
    pub fn with_combat(mut self, config: CombatConfig) -> Self {
        self.combat = Some(MeleeCombat::new(config));
        self
    }

    pub fn stats(&self) -> &MotionStats {
        &self.stats
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase.phase()
    }

    pub fn has_combat(&self) -> bool {
        self.combat.is_some()
    }

    pub fn set_can_move(&mut self, can_move: bool) {
        self.state.can_move = can_move;
    }

    /// A dash sequence is still counting down (even if landing cleared `dashing`)
    pub fn dash_in_flight(&self) -> bool {
        self.dash.in_flight()
    }

    /// Run one tick
    pub fn update(&mut self, ctx: &mut MotionContext<'_>, input: &MotionInput, dt: f32) {
        self.advance_sequences(ctx, dt);

        self.walk(ctx, input);
        self.try_attack(ctx, input);
        self.shape_jump_arc(ctx, input, dt);

        if input.jump_pressed {
            self.try_jump(ctx);
        }
        if input.dash_pressed {
            self.try_dash(ctx, input.raw);
        }

        self.check_floor(ctx);
        self.handle_landing(ctx);
        self.publish_vertical_speed(ctx);
        ctx.animator.set_flip_horizontal(self.state.facing < 0.0);

        let velocity = ctx.body.velocity();
        let phase = MotionPhase::classify(
            self.state.is_attacking,
            self.state.dashing,
            self.state.on_ground,
            velocity.x,
            velocity.y,
        );
        self.phase.update(dt, phase);
    }

    /// Animation event: the attack clip finished
    pub fn on_attack_finished(&mut self, animator: &mut dyn Animator) {
        if self.state.is_attacking {
            debug!("Attack finished");
        }
        self.state.is_attacking = false;
        animator.set_bool(AnimFlag::Attack, false);
    }

    /// Shake the camera for `duration` seconds, or the default duration
    pub fn shake_camera(&mut self, camera: &mut dyn CameraEffects, duration: Option<f32>) {
        let duration = duration.unwrap_or(self.stats.shake_duration);
        self.shake.start(camera, self.stats.shake_gain, duration);
        self.state.shaking = true;
    }

    /// Forget all flags and abort a running dash, restoring the body's gravity
    pub fn reset(&mut self, body: &mut dyn PhysicsBody, animator: &mut dyn Animator) {
        if let Some(gravity) = self.dash.cancel() {
            body.set_gravity_scale(gravity);
        }
        let can_move = self.state.can_move;
        let shaking = self.shake.is_shaking();
        self.state = MotionState {
            can_move,
            shaking,
            ..MotionState::default()
        };
        self.phase.reset();

        for flag in [AnimFlag::Walk, AnimFlag::Jump, AnimFlag::Dash, AnimFlag::Attack] {
            animator.set_bool(flag, false);
        }
        animator.set_flip_horizontal(false);
    }

    fn advance_sequences(&mut self, ctx: &mut MotionContext<'_>, dt: f32) {
        let progress = self.dash.tick(dt);

        if progress.ground_check_due && self.state.on_ground {
            trace!("Dash touched ground");
            self.state.can_dash = false;
        }

        if let Some(gravity) = progress.finished {
            ctx.body.set_gravity_scale(gravity);
            self.state.dashing = false;
            ctx.animator.set_bool(AnimFlag::Dash, false);
            debug!("Dash ended");
        }

        self.shake.tick(&mut *ctx.camera, dt);
        self.state.shaking = self.shake.is_shaking();
    }

    fn walk(&mut self, ctx: &mut MotionContext<'_>, input: &MotionInput) {
        if !self.state.can_move || self.state.dashing {
            return;
        }

        let direction = input.axis;
        let velocity = ctx.body.velocity();
        ctx.body
            .set_velocity(Vec2::new(direction.x * self.stats.move_speed, velocity.y));

        if direction != Vec2::ZERO {
            if self.state.on_ground {
                ctx.animator.set_bool(AnimFlag::Walk, true);
            } else {
                ctx.animator.set_bool(AnimFlag::Jump, true);
            }

            if direction.x < 0.0 && self.state.facing > 0.0 {
                self.state.facing = -1.0;
            } else if direction.x > 0.0 && self.state.facing < 0.0 {
                self.state.facing = 1.0;
            }

            if direction.x != 0.0 {
                self.state.move_direction = Vec2::new(self.state.facing, input.raw.y);
            }
        } else {
            ctx.animator.set_bool(AnimFlag::Walk, false);
        }

        if direction.x == 0.0 && input.raw == Vec2::Y {
            self.state.move_direction = Vec2::Y;
        }
    }

    fn try_attack(&mut self, ctx: &mut MotionContext<'_>, input: &MotionInput) {
        let Some(combat) = self.combat.as_ref() else {
            return;
        };
        if !input.attack_pressed || !combat.can_attack(self.state.is_attacking, self.state.dashing)
        {
            return;
        }

        let aim = MeleeCombat::aim(
            self.state.move_direction,
            input.raw,
            ctx.body.velocity().x,
        );

        self.state.is_attacking = true;
        ctx.animator.set_float(AnimFloat::AttackX, aim.x);
        ctx.animator.set_float(AnimFloat::AttackY, aim.y);
        ctx.animator.set_bool(AnimFlag::Attack, true);
        debug!("Attack towards {:?}", aim);
    }

    /// Extra gravity on the way down, and on the way up once jump is released
    fn shape_jump_arc(&mut self, ctx: &mut MotionContext<'_>, input: &MotionInput, dt: f32) {
        let mut velocity = ctx.body.velocity();
        let gravity = ctx.body.world_gravity().y;

        let multiplier = if velocity.y < 0.0 {
            self.stats.fall_multiplier
        } else if velocity.y > 0.0 && !input.jump_held {
            self.stats.low_jump_multiplier
        } else {
            return;
        };

        velocity.y += gravity * (multiplier - 1.0) * dt;
        ctx.body.set_velocity(velocity);
    }

    fn try_jump(&mut self, ctx: &mut MotionContext<'_>) {
        if !self.state.on_ground {
            return;
        }

        ctx.animator.set_bool(AnimFlag::Jump, true);

        let velocity = ctx.body.velocity();
        ctx.body
            .set_velocity(Vec2::new(velocity.x, 0.0) + Vec2::Y * self.stats.jump_strength);
        debug!("Jump");
    }

    fn try_dash(&mut self, ctx: &mut MotionContext<'_>, raw: Vec2) {
        if self.state.dashing || raw == Vec2::ZERO {
            return;
        }
        if let Some(combat) = self.combat.as_ref() {
            if !combat.policy().dash_allowed(self.state.is_attacking) {
                trace!("Dash blocked by attack");
                return;
            }
        }

        ctx.animator.set_bool(AnimFlag::Dash, true);

        let viewport = ctx.camera.world_to_viewport(ctx.body.position());
        ctx.camera.emit_ripple(viewport);
        self.shake_camera(&mut *ctx.camera, None);

        self.state.can_dash = true;
        self.dash.begin(
            &mut *ctx.body,
            raw,
            self.stats.dash_speed,
            self.stats.dash_duration,
            self.stats.dash_ground_check,
        );
        self.state.dashing = true;
        debug!("Dash towards {:?}", raw);
    }

    fn check_floor(&mut self, ctx: &mut MotionContext<'_>) {
        let probe = ctx.body.position() + self.stats.floor_offset;
        self.state.on_ground =
            ctx.body
                .overlap_circle(probe, self.stats.floor_radius, self.stats.floor_layers);
    }

    fn handle_landing(&mut self, ctx: &mut MotionContext<'_>) {
        if self.state.on_ground && !self.state.hit_ground_latch {
            self.hit_ground(ctx.animator);
            self.state.hit_ground_latch = true;
        }

        if !self.state.on_ground && self.state.hit_ground_latch {
            self.state.hit_ground_latch = false;
        }
    }

    fn hit_ground(&mut self, animator: &mut dyn Animator) {
        self.state.can_dash = false;
        self.state.dashing = false;
        animator.set_bool(AnimFlag::Jump, false);
        debug!("Landed");
    }

    fn publish_vertical_speed(&mut self, ctx: &mut MotionContext<'_>) {
        let vertical_speed = if ctx.body.velocity().y > 0.0 { 1.0 } else { -1.0 };

        if !self.state.on_ground {
            ctx.animator
                .set_float(AnimFloat::VerticalSpeed, vertical_speed);
        } else if vertical_speed < 0.0 {
            ctx.animator.set_bool(AnimFlag::Jump, false);
        }
    }
}
