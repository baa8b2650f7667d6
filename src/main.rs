use anyhow::Result;
use glam::Vec2;
use log::{info, trace, warn};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::camera::{Camera, CameraRig};
use engine::game_loop::{GameLoop, FIXED_TIMESTEP};
use engine::input::{Action, InputManager, InputSource};
use engine::physics::{body::presets, PhysicsWorld};
use game::characters::{Character, CombatConfig, MotionInput, MotionStats};

/// Visible world height; the width follows the window's aspect ratio
const VIEW_HEIGHT: f32 = 12.0;
const SPAWN: Vec2 = Vec2::new(0.0, 3.0);
/// Falling below this puts the player back at the spawn point
const KILL_PLANE: f32 = -20.0;

/// Pause/menu keys act on the window, not on the simulation
fn system_action(input: &InputManager, event: &KeyEvent) -> Option<Action> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    let PhysicalKey::Code(code) = event.physical_key else {
        return None;
    };
    match input.config().get_action(InputSource::key(code)) {
        Some(action @ (Action::Pause | Action::Menu)) => Some(action),
        _ => None,
    }
}

/// Floor plus a couple of ledges to dash between
fn build_level(physics: &mut PhysicsWorld) {
    let platforms = [
        (0.0, -0.5, 30.0, 1.0),
        (-6.0, 3.0, 4.0, 0.5),
        (6.0, 5.0, 4.0, 0.5),
    ];
    for (x, y, width, height) in platforms {
        let body = physics.add_rigid_body(presets::platform_body(x, y));
        physics.add_collider(presets::platform_collider(width, height), body);
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Dash Platformer...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Dash Platformer")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut physics = PhysicsWorld::new();
    build_level(&mut physics);

    let mut player = Character::spawn(
        0,
        "Player",
        MotionStats::standard(),
        Some(CombatConfig::default()),
        &mut physics,
        SPAWN.x,
        SPAWN.y,
    )?;

    let size = window.inner_size();
    let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
    let mut camera =
        CameraRig::new(Camera::new(SPAWN, VIEW_HEIGHT * aspect, VIEW_HEIGHT)).with_follow_rate(6.0);
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(
                    "Close requested after {} ticks / {} frames, shutting down...",
                    game_loop.tick_count(),
                    game_loop.frame_count()
                );
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
                let aspect =
                    physical_size.width.max(1) as f32 / physical_size.height.max(1) as f32;
                camera.camera.resize(VIEW_HEIGHT * aspect, VIEW_HEIGHT);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                match system_action(&input, &event) {
                    Some(Action::Menu) => {
                        info!("Menu requested, shutting down...");
                        elwt.exit();
                    }
                    Some(Action::Pause) => {
                        game_loop.toggle_pause();
                        info!("Paused: {}", game_loop.is_paused());
                    }
                    _ => input.process_keyboard_event(&event),
                }
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_button(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let frame = player.animation.get_frame_data();
                trace!(
                    "Draw {} frame {} (flip: {}) at {:?}",
                    frame.animation_name,
                    frame.frame_index,
                    frame.flip_horizontal,
                    camera.camera.position
                );
            }
            Event::AboutToWait => {
                let ticks = game_loop.begin_frame();

                for _ in 0..ticks {
                    input.advance_axes(FIXED_TIMESTEP);
                    let command = MotionInput::sample(&input);

                    if let Err(err) = player.tick(&mut physics, &mut camera, &command, FIXED_TIMESTEP)
                    {
                        warn!("Player tick failed: {}", err);
                    }
                    physics.step();

                    if let Some(position) = player.position(&physics) {
                        if position.y < KILL_PLANE {
                            info!("{} fell out of the level", player.name);
                            player.respawn(&mut physics, SPAWN.x, SPAWN.y);
                        }
                        camera.update(FIXED_TIMESTEP, position);
                    }

                    input.update();
                }

                if game_loop.is_paused() {
                    input.discard_edges();
                }

                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
