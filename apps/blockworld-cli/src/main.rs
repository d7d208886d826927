use clap::{Parser, Subcommand};
use glam::Vec3;
use tracing_subscriber::EnvFilter;

use blockworld_common::{BlockId, GameConfig};
use blockworld_input::{EditAction, InputState, Key, MouseButton};
use blockworld_interact::{place_block, remove_block};
use blockworld_kernel::ChunkManager;
use blockworld_render::{DebugTextRenderer, RenderView, Renderer};
use blockworld_sim::Player;
use blockworld_tools::WorldInspector;

const DT: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(name = "blockworld-cli", about = "Headless driver for the blockworld core")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Optional JSON config overriding the default tunables
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run a scripted game loop: drop onto the floor, walk, jump, edit blocks
    Simulate {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u32,
    },
    /// Demonstrate ray-stepped block placement and removal
    Edit,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_path(path)?,
        None => GameConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            println!("blockworld-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", blockworld_render::crate_info());
            println!("tools: {}", blockworld_tools::crate_info());
            let demo = ChunkManager::flat_world(2, 16.0, BlockId::DirtGrass);
            println!(
                "kernel: demo world loads {} chunks, {} entities",
                demo.chunk_count(),
                demo.entity_count()
            );
        }
        Commands::Simulate { frames } => run_simulation(config, frames),
        Commands::Edit => run_edit_demo(config),
    }

    Ok(())
}

/// Scripted frames: settle out of the initial drop, walk forward, jump once,
/// look down, then place and remove a block.
fn run_simulation(config: GameConfig, frames: u32) {
    let mut manager = ChunkManager::flat_world(2, 16.0, BlockId::DirtGrass);
    // Start a short drop above the floor so the demo lands early in the run.
    let mut player = Player::new(GameConfig {
        spawn_point: Vec3::new(20.5, 2.0, 20.5),
        ..config.clone()
    });
    let mut input = InputState::new();

    println!("Simulating {frames} frames at dt={DT:.4}");

    for frame in 0..frames {
        match frame {
            240 => input.press(Key::W),
            300 => {
                input.release(Key::W);
                input.press(Key::Space);
            }
            301 => input.release(Key::Space),
            // Tip the camera down toward the floor.
            330..=390 => input.accumulate_look(0.0, 2.0),
            420 => input.set_mouse(MouseButton::Right, true),
            421 => input.set_mouse(MouseButton::Right, false),
            480 => input.set_mouse(MouseButton::Left, true),
            481 => input.set_mouse(MouseButton::Left, false),
            _ => {}
        }

        let frame_input = input.resolve(player.camera.forward(), player.camera.right());
        player.apply_input(&frame_input);

        if let Some(action) = frame_input.edit {
            let outcome = match action {
                EditAction::Remove => {
                    remove_block(&mut manager, player.eye(), player.camera.forward(), &config)
                }
                EditAction::Place => place_block(
                    &mut manager,
                    player.eye(),
                    player.camera.forward(),
                    player.selected_block(),
                    &config,
                ),
            };
            println!("frame {frame}: edit -> {outcome:?}");
        }

        player.update(&manager, DT);

        if frame % 120 == 0 {
            println!("frame {frame}: {}", WorldInspector::summary(&manager, &player));
        }
    }

    let view = RenderView::from_camera(&player.camera);
    println!("{}", DebugTextRenderer::new().render(&manager, &player, &view));
}

/// Aim straight down at the floor from a few units up and edit it.
fn run_edit_demo(config: GameConfig) {
    let mut manager = ChunkManager::flat_world(1, 16.0, BlockId::DirtGrass);
    let eye = Vec3::new(5.5, 3.0, 5.5);
    let down = Vec3::NEG_Y;

    println!("World before edits: {} entities", manager.entity_count());

    let placed = place_block(&mut manager, eye, down, BlockId::Stone, &config);
    println!("place -> {placed:?}");

    let stacked = place_block(&mut manager, eye, down, BlockId::OakLog, &config);
    println!("place -> {stacked:?}");

    let removed = remove_block(&mut manager, eye, down, &config);
    println!("remove -> {removed:?}");

    let missed = remove_block(&mut manager, eye, Vec3::Y, &config);
    println!("remove (skyward) -> {missed:?}");

    println!("World after edits: {} entities", manager.entity_count());
}
