use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use balloon_barrage::core::config::config::GameConfig;
use balloon_barrage::rendering::sprites::DecodedSprites;
use balloon_barrage::GamePlugin;

#[derive(Parser, Debug)]
#[command(name = "balloon_barrage", about = "Infinite balloons, infinite bullets")]
struct Cli {
    /// Extra config file layered over assets/config/game.ron
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override window width (pixels)
    #[arg(long)]
    width: Option<f32>,
    /// Override window height (pixels)
    #[arg(long)]
    height: Option<f32>,
    /// Exit automatically after this many seconds
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut paths = vec![PathBuf::from("assets/config/game.ron")];
    if let Some(extra) = &cli.config {
        paths.push(extra.clone());
    }
    let (mut cfg, used, errors) = GameConfig::load_layered(&paths);
    for e in &errors {
        eprintln!("config: {e}");
    }
    if used.is_empty() {
        eprintln!("config: no file loaded; using built-in defaults");
    }
    if let Some(w) = cli.width {
        cfg.window.width = w;
    }
    if let Some(h) = cli.height {
        cfg.window.height = h;
    }
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    for warning in cfg.validate() {
        eprintln!("config warning: {warning}");
    }

    // Sprite decode failure is fatal; nothing can be drawn without the sheets.
    let sprites = DecodedSprites::decode_embedded().context("decoding embedded sprites")?;

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(sprites)
        .insert_resource(ClearColor(Color::srgb_u8(0x87, 0xCE, 0xEB)))
        .insert_resource(Time::<Fixed>::from_hz(cfg.sim.step_hz))
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    transparent: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
