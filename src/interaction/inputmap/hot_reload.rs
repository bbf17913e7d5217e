use bevy::prelude::*;
use std::{path::PathBuf, time::SystemTime};

use super::parse::parse_input_toml;
use super::plugin::input_config_path;
use super::types::InputMap;

#[derive(Resource, Debug)]
struct InputReloadState { last_modified: Option<SystemTime>, timer: Timer, path: PathBuf }
impl Default for InputReloadState { fn default() -> Self { Self { last_modified: None, timer: Timer::from_seconds(0.5, TimerMode::Repeating), path: PathBuf::from(input_config_path()) } } }

/// Re-parses the input file when its mtime moves; keeps the old map on parse errors.
pub struct InputMapHotReloadPlugin;
impl Plugin for InputMapHotReloadPlugin { fn build(&self, app: &mut App) { app.init_resource::<InputReloadState>().add_systems(Update, poll_input_map_reload); } }

fn poll_input_map_reload(time: Res<Time>, mut state: ResMut<InputReloadState>, mut input_map: ResMut<InputMap>) {
    if !state.timer.tick(time.delta()).finished() { return; }
    let Ok(mod_time) = std::fs::metadata(&state.path).and_then(|m| m.modified()) else { return; };
    // First observation only records the timestamp; the startup load already parsed this file.
    let Some(prev) = state.last_modified.replace(mod_time) else { return; };
    if mod_time <= prev { return; }
    let Ok(raw) = std::fs::read_to_string(&state.path) else { return; };
    let parsed = parse_input_toml(&raw, input_map.debug_layer);
    if !parsed.errors.is_empty() { for e in parsed.errors { warn!(target: "input", "INPUT HOT-RELOAD parse error: {e}"); } return; }
    *input_map = parsed.input_map; info!(target: "input", "Input map hot-reloaded"); }
