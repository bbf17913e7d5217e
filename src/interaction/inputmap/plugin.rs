use bevy::prelude::*;

use super::parse::parse_input_toml;
use super::systems::system_evaluate_bindings;
use super::types::InputMap;
use crate::gameplay::flight::FlightSettings;

/// Built-in bindings used when the input file is missing or unreadable.
pub const DEFAULT_INPUT_TOML: &str = include_str!("../../../assets/config/input.toml");

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

pub struct InputActionsPlugin;
impl Plugin for InputActionsPlugin { fn build(&self, app: &mut App) {
    if !app.world().contains_resource::<ButtonInput<KeyCode>>() { app.init_resource::<ButtonInput<KeyCode>>(); }
    app.init_resource::<InputMap>()
        .configure_sets(PreUpdate, InputActionUpdateSet.after(bevy::input::InputSystem))
        .add_systems(PreStartup, load_initial_input_map)
        .add_systems(PreUpdate, system_evaluate_bindings.in_set(InputActionUpdateSet));
} }

pub fn input_config_path() -> String { std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| "assets/config/input.toml".into()) }

fn load_initial_input_map(mut commands: Commands, settings: Option<Res<FlightSettings>>) {
    let debug_layer = settings.map_or(FlightSettings::debug_keys_enabled(false), |s| s.debug_keys);
    let path = input_config_path();
    let raw = match std::fs::read_to_string(&path) { Ok(raw) => raw, Err(e) => { warn!(target: "input", "input map {path} unreadable ({e}); using built-in bindings"); DEFAULT_INPUT_TOML.to_string() } };
    let parsed = parse_input_toml(&raw, debug_layer);
    for e in &parsed.errors { error!(target: "input", "INPUT MAP ERROR: {e}"); }
    info!(target: "input", "Input map loaded: {} actions, {} bindings (debug layer: {debug_layer})", parsed.input_map.actions.len(), parsed.input_map.bindings.len());
    commands.insert_resource(parsed.input_map); }
