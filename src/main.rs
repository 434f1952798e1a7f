//! Bigger Fish headless runner.
//!
//! Builds a [`Game`] with the desktop platform (file-backed save) and lets
//! the autopilot play a fixed number of frames at a fixed step, then logs a
//! summary of the run and of the save.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run --release -- --frames 7200 --seed 42
//! ```
use std::path::PathBuf;

use biggerfish::game::Game;
use biggerfish::resources::gameconfig::GameConfig;
use biggerfish::resources::platform::DesktopPlatform;
use biggerfish::resources::savedata::SaveData;
use biggerfish::resources::session::Session;
use biggerfish::systems::render::CommandList;
use clap::Parser;

/// Bigger Fish: eat what is smaller, avoid what is bigger.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Frames to simulate before exiting.
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    let platform = DesktopPlatform::new(config.save_path.clone());
    let mut game = Game::new(config, platform, cli.seed).with_autopilot();
    let dt = 1.0 / cli.fps.max(1) as f32;

    log::info!("Bigger Fish: {} frames at {} fps", cli.frames, cli.fps);
    let mut surface = CommandList::default();
    let mut frames = 0;
    while frames < cli.frames && game.is_running() {
        game.update(dt);
        surface.commands.clear();
        game.draw(&mut surface);
        frames += 1;
    }

    let session = game.world().resource::<Session>();
    let save = game.world().resource::<SaveData>();
    log::info!(
        "stopped after {} frames in {:?}: tier {}, {} points",
        frames,
        game.scene(),
        session.tier(),
        session.points()
    );
    log::info!(
        "best tier {}, best points {}, {} fish eaten in total",
        save.best_tier,
        save.best_points,
        save.fish_eaten
    );
}
