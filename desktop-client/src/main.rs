mod config;
mod offline;
mod ui;

use clap::Parser;
use common::games::GameRng;
use common::leaderboard::LeaderboardStore;
use common::{log, logger};
use std::path::PathBuf;

use config::get_config_manager;
use offline::SnakeRunner;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_arcade_client")]
struct Args {
    /// Client config file; defaults to one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leaderboard file, overriding the config
    #[arg(long)]
    leaderboard: Option<PathBuf>,

    /// Fixed seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config.as_deref()).get_config()?;
    let leaderboard_path = args
        .leaderboard
        .unwrap_or_else(|| PathBuf::from(&config.leaderboard_file));
    log!("Leaderboard file: {}", leaderboard_path.display());

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    let runner = SnakeRunner::new(
        config.game.clone(),
        LeaderboardStore::from_json_file(leaderboard_path),
        rng,
        config.sound_effects,
    )?;

    let cell = config.display.cell_size as f32;
    let window_size = [
        config.game.grid.width as f32 * cell,
        config.game.grid.height as f32 * cell,
    ];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_title("Snake Arcade"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Arcade",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(runner, config.display)))),
    )?;

    Ok(())
}
