mod config;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::logger::init_logger;
use common::snake::{SnakeSession, SnakeSessionSettings};
use common::{log, FileHighScoreStore, SessionRng};
use eframe::egui;

use config::{get_config_manager, DEFAULT_CONFIG_FILE};
use ui::SnakeApp;

const WINDOW_MARGIN: [f32; 2] = [40.0, 180.0];

#[derive(Parser)]
#[command(name = "snake_desktop")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    #[arg(long)]
    use_log_prefix: bool,
    /// Fixed seed for food placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    init_logger(prefix);

    let config = get_config_manager(&args.config).get_config()?;

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting snake with seed {}", rng.seed());

    let store = FileHighScoreStore::from_yaml_file(&config.highscore.location);
    let session = SnakeSession::new(SnakeSessionSettings::from(&config.game), store, rng);
    let app = SnakeApp::new(session, config.game.cell_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config.game.canvas_width as f32 + WINDOW_MARGIN[0],
                config.game.canvas_height as f32 + WINDOW_MARGIN[1],
            ])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;

    Ok(())
}
