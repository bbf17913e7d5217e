use std::path::PathBuf;

use anyhow::{bail, Context};
use bevy::prelude::*;
use clap::Parser;

use rocket_boost::app::game::ConfigDiagnostics;
use rocket_boost::core::level::{LevelCatalog, LevelProgress};
use rocket_boost::gameplay::flight::media::asset_root;
use rocket_boost::gameplay::flight::{CuePaths, FlightSettings, FlightTuning};
use rocket_boost::{GameConfig, GamePlugin};

#[derive(Parser, Debug)]
#[command(version, about = "Fly the rocket from the launch pad to the finish block")]
struct Args {
    /// RON config layers; later files override earlier keys.
    #[arg(long = "config", default_value = "assets/config/game.ron")]
    config: Vec<PathBuf>,
    /// Level id to start on.
    #[arg(long, env = "LEVEL_ID")]
    level: Option<String>,
    /// Enable skip-level / toggle-collision keys in a release build.
    #[arg(long)]
    debug_keys: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (cfg, used_layers, errors) = GameConfig::load_layered(&args.config);
    let r = &cfg.rocket;
    let tuning = FlightTuning::new(r.rotate_speed, r.boost_speed, r.level_load_delay)
        .context("invalid rocket tuning")?;
    let cues = CuePaths::from_config(&cfg.cues).context("invalid audio cues")?;
    let assets_dir = asset_root();
    cues.verify(&assets_dir)
        .with_context(|| format!("audio cues missing under {}", assets_dir.display()))?;
    let catalog = LevelCatalog::load(&cfg.levels.registry)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("loading levels from {}", cfg.levels.registry))?;
    if catalog.is_empty() {
        bail!("level registry {} lists no levels", cfg.levels.registry);
    }
    let (start, mut warnings) = catalog.resolve_start(args.level.as_deref(), &cfg.levels.start_level);
    warnings.extend(cfg.validate());

    let settings = FlightSettings {
        tuning,
        debug_keys: FlightSettings::debug_keys_enabled(cfg.debug.keys_enabled || args.debug_keys),
    };
    let progress = LevelProgress::new(start, catalog.len());

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ConfigDiagnostics {
            used_layers,
            errors,
            warnings,
        })
        .insert_resource(settings)
        .insert_resource(cues)
        .insert_resource(catalog)
        .insert_resource(progress)
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
