// Character animation system
//
// The player doubles as the controller's animator: it stores the parameters
// the controller publishes and picks the clip to show from them.

use std::collections::HashMap;

use log::trace;

use super::host::{AnimFlag, AnimFloat, Animator};

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "walk", "attack")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count,
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

/// Manages animation playback for a character
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Currently playing animation name
    current_animation: String,
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    playing: bool,
    flip_horizontal: bool,
    flags: HashMap<AnimFlag, bool>,
    floats: HashMap<AnimFloat, f32>,
    /// A one-shot clip reached its last frame and nobody has been told yet
    finished: Option<String>,
    /// The flag driving the current clip went false since the clip started
    rearmed: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationPlayer {
    pub fn new() -> Self {
        Self {
            animations: HashMap::new(),
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            flip_horizontal: false,
            flags: HashMap::new(),
            floats: HashMap::new(),
            finished: None,
            rearmed: false,
        }
    }

    /// Create an animation player with the platformer clip set
    pub fn with_standard_animations() -> Self {
        let mut player = Self::new();

        player.add_animation(AnimationClip::looping("idle", 8, 10.0));
        player.add_animation(AnimationClip::looping("walk", 8, 12.0));
        player.add_animation(AnimationClip::looping("jump", 4, 10.0));
        player.add_animation(AnimationClip::looping("fall", 4, 10.0));
        player.add_animation(AnimationClip::looping("dash", 4, 20.0));
        // Attack reports back when done
        player.add_animation(AnimationClip::one_shot("attack", 5, 20.0));

        player.play("idle");

        player
    }

    /// Add an animation clip
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Play an animation by name
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.play_from_start(name);
        }
    }

    /// Play an animation from the beginning, even if it's the same
    pub fn play_from_start(&mut self, name: &str) {
        trace!("Animation: {} -> {}", self.current_animation, name);
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
        self.rearmed = false;
    }

    /// Get a boolean parameter (unset parameters read as false)
    pub fn flag(&self, flag: AnimFlag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    /// Get a float parameter (unset parameters read as 0)
    pub fn float(&self, param: AnimFloat) -> f32 {
        self.floats.get(&param).copied().unwrap_or(0.0)
    }

    /// Name of the clip the current parameters ask for
    ///
    /// Attack beats dash, dash beats airborne, airborne beats walking.
    pub fn desired_clip(&self) -> &'static str {
        if self.flag(AnimFlag::Attack) {
            "attack"
        } else if self.flag(AnimFlag::Dash) {
            "dash"
        } else if self.flag(AnimFlag::Jump) {
            if self.float(AnimFloat::VerticalSpeed) > 0.0 {
                "jump"
            } else {
                "fall"
            }
        } else if self.flag(AnimFlag::Walk) {
            "walk"
        } else {
            "idle"
        }
    }

    /// Pick the clip for the current parameters and advance it (called every tick)
    pub fn update(&mut self, dt: f32) {
        let desired = self.desired_clip();
        if desired == self.current_animation && !self.playing && self.rearmed {
            // Same one-shot requested again after it finished
            self.play_from_start(desired);
        } else {
            self.play(desired);
        }

        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current_animation) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    self.finished = Some(clip.name.clone());
                    break;
                }
            }
        }
    }

    /// Consume the name of a one-shot clip that completed since the last call
    pub fn take_finished(&mut self) -> Option<String> {
        self.finished.take()
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Get animation data for rendering (frame index and flip state)
    pub fn get_frame_data(&self) -> AnimationFrameData {
        let max_frame = self
            .animations
            .get(&self.current_animation)
            .map(|clip| clip.frame_count.saturating_sub(1))
            .unwrap_or(0);

        AnimationFrameData {
            animation_name: self.current_animation.clone(),
            frame_index: self.current_frame.min(max_frame),
            flip_horizontal: self.flip_horizontal,
        }
    }

    /// Forget every parameter and go back to idle
    pub fn reset(&mut self) {
        self.flags.clear();
        self.floats.clear();
        self.finished = None;
        self.flip_horizontal = false;
        self.play_from_start("idle");
    }
}

impl Animator for AnimationPlayer {
    fn set_bool(&mut self, flag: AnimFlag, value: bool) {
        if !value && flag.name() == self.current_animation {
            self.rearmed = true;
        }
        self.flags.insert(flag, value);
    }

    fn set_float(&mut self, param: AnimFloat, value: f32) {
        self.floats.insert(param, value);
    }

    fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }
}

/// Data needed to render the current animation frame
#[derive(Debug, Clone)]
pub struct AnimationFrameData {
    pub animation_name: String,
    pub frame_index: usize,
    pub flip_horizontal: bool,
}
