use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use chessdesk::core::{load_settings, save_settings, BoardSettings, WindowConfig};
use chessdesk::game::ChessGame;
use chessdesk::rendering::{ActiveBoard, BoardView, BoardViewPlugin, SavesLocation};

/// Desktop chess board
#[derive(Parser, Debug)]
#[command(name = "chessdesk", version, about)]
struct Args {
    /// Directory holding pieces/<code>.png
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Tile edge in pixels
    #[arg(long)]
    tile_size: Option<u32>,

    /// Start with Black at the bottom
    #[arg(long)]
    flipped: bool,

    /// Light square colour, e.g. #ffcf9f
    #[arg(long)]
    light: Option<String>,

    /// Dark square colour, e.g. #d28c45
    #[arg(long)]
    dark: Option<String>,

    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,

    /// Render the board to this PNG and exit without opening a window
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Persist the effective settings to the user config file
    #[arg(long)]
    save_settings: bool,
}

impl Args {
    fn apply(&self, settings: &mut BoardSettings) {
        if let Some(dir) = &self.assets {
            settings.asset_dir = dir.clone();
        }
        if let Some(size) = self.tile_size {
            settings.tile_size = size;
        }
        if self.flipped {
            settings.start_flipped = true;
        }
        if let Some(light) = &self.light {
            settings.light_hex = light.clone();
        }
        if let Some(dark) = &self.dark {
            settings.dark_hex = dark.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings();
    args.apply(&mut settings);
    if args.save_settings {
        let path = save_settings(&settings).context("saving settings")?;
        // No tracing subscriber exists until the app's LogPlugin is built
        println!("Saved settings to {}", path.display());
    }

    let game = match &args.fen {
        Some(fen) => ChessGame::from_fen(fen)?,
        None => ChessGame::new(),
    };
    let mut view = BoardView::from_settings(game, &settings)
        .with_context(|| format!("loading board assets from {:?}", settings.asset_dir))?;
    view.render()?;

    if let Some(path) = &args.snapshot {
        view.snapshot()?
            .save(path)
            .with_context(|| format!("writing snapshot to {:?}", path))?;
        println!("{}", view.current_fen());
        return Ok(());
    }

    let window = WindowConfig::for_board(view.board_size_px());
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window.to_window()),
            ..default()
        }))
        .insert_resource(ActiveBoard(view))
        .insert_resource(SavesLocation(settings.saves_dir.clone()))
        .add_plugins(BoardViewPlugin)
        .run();
    Ok(())
}
