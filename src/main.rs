//! Drift Engine main entry point.
//!
//! A 2D tile-engine core written in Rust using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **glam** for 2D vector math
//!
//! This executable is a headless demo driver: it plays the role of the
//! window/input/render collaborators, scripting key edges and consuming
//! dirty sprites, so the simulation core can be watched from a terminal.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (bounds, motion, animation, sprite, etc.)
//! - [`events`] – action messages and collision events
//! - [`game`] – stage assembly and the fixed-timestep loop
//! - [`resources`] – ECS resources (spatial index, frame clock, config)
//! - [`systems`] – ECS systems (control, movement, collision, animation)
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, build the stage and a small scripted scene
//! 2. Feed one frame of wall-time per iteration into the frame clock
//! 3. Inject scripted press/release edges for the player
//! 4. Drain dirty sprites the way a renderer would
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

mod components;
mod events;
mod game;
mod resources;
mod systems;

use std::path::PathBuf;

use clap::Parser;
use rustc_hash::FxHashMap;

use crate::components::animation::AnimationClip;
use crate::components::boxcollider::Rect;
use crate::events::action::MoveAction;
use crate::game::Stage;
use crate::resources::gameconfig::GameConfig;

/// Drift Engine 2D
#[derive(Parser)]
#[command(version, about = "Headless demo driver for the Drift Engine core")]
struct Cli {
    /// Number of simulated display frames to run.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Directional walk clips over a 4x4 spritesheet: one row per direction,
/// four slices per row, eight ticks each.
fn walk_clips() -> FxHashMap<String, AnimationClip> {
    let mut clips = FxHashMap::default();
    for (row, name) in ["walking_up", "walking_down", "walking_left", "walking_right"]
        .iter()
        .enumerate()
    {
        let slices = (0..4).map(|col| row * 4 + col).collect();
        let clip = AnimationClip::new(slices, vec![8; 4]).expect("static clip table is valid");
        clips.insert(name.to_string(), clip);
    }
    clips
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let mut stage = Stage::new(&config);
    let (world_w, world_h) = config.world_size();
    let (world_w, world_h) = (world_w as f32, world_h as f32);

    // Solid walls just inside the world edges.
    stage
        .spawn_prop("north_wall", Rect::new(0.0, 0.0, world_w, 32.0), true, 0)
        .expect("seed north wall");
    stage
        .spawn_prop(
            "south_wall",
            Rect::new(0.0, world_h - 32.0, world_w, world_h),
            true,
            0,
        )
        .expect("seed south wall");

    // A few scattered crates in the open area.
    let mut seed = fastrand::Rng::with_seed(7);
    for i in 0..8 {
        let x = seed.f32() * (world_w - 160.0) + 64.0;
        let y = seed.f32() * (world_h - 224.0) + 96.0;
        stage
            .spawn_prop(&format!("crate_{i}"), Rect::new(x, y, x + 32.0, y + 32.0), true, 1)
            .expect("seed crate");
    }

    // The player, centered, focused.
    let player_rect = Rect::new(
        world_w * 0.5 - 16.0,
        world_h * 0.5 - 16.0,
        world_w * 0.5 + 16.0,
        world_h * 0.5 + 16.0,
    );
    let player = stage
        .spawn_actor("player", player_rect, config.player_speed, walk_clips(), 0)
        .expect("seed player");
    stage.set_focus(player);

    log::info!(
        "Stage ready: {}x{} world, player at {:?}",
        world_w,
        world_h,
        player_rect.center()
    );

    // Scripted input: walk right, then down, then back up-left into the wall.
    let script = [
        (30u32, MoveAction::Right, true),
        (210, MoveAction::Right, false),
        (210, MoveAction::Down, true),
        (360, MoveAction::Down, false),
        (360, MoveAction::Up, true),
        (360, MoveAction::Left, true),
    ];

    let step = 1.0 / config.tick_rate as f32;
    for frame in 0..cli.frames {
        for (at, action, pressed) in script {
            if at == frame {
                stage.send_action(player, action, pressed);
            }
        }

        stage.advance(step);

        let dirty = stage.drain_dirty();
        if !dirty.is_empty() {
            log::debug!("frame {frame}: {} dirty sprites", dirty.len());
        }
    }

    log::info!(
        "Ran {} ticks; focus ended at {:?}",
        stage.ticks(),
        stage.focus_point()
    );
}
