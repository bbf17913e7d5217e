// This file is part of Rocket Boost.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::level::LevelLoaderPlugin;
use crate::core::system::system_order::configure_game_sets;
use crate::debug::DebugPlugin;
use crate::gameplay::flight::FlightPlugin;
use crate::gameplay::oscillator::OscillatorPlugin;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::hot_reload::InputMapHotReloadPlugin;
use crate::interaction::inputmap::plugin::InputActionsPlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::RenderingPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        configure_game_sets(app);
        app.add_plugins((
            PhysicsSetupPlugin,
            InputActionsPlugin,
            FlightPlugin,
            LevelLoaderPlugin,
            OscillatorPlugin,
            RenderingPlugin,
            DebugPlugin,
        ))
        .add_systems(Startup, log_config_diagnostics);
        #[cfg(feature = "debug")]
        app.add_plugins(InputMapHotReloadPlugin);
    }
}

/// Warnings gathered while building the config, logged once the log plugin is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigDiagnostics {
    pub used_layers: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

fn log_config_diagnostics(diag: Option<Res<ConfigDiagnostics>>) {
    let Some(diag) = diag else {
        return;
    };
    info!(target: "config", "config layers used: {:?}", diag.used_layers);
    for e in &diag.errors {
        error!(target: "config", "{e}");
    }
    for w in &diag.warnings {
        warn!(target: "config", "{w}");
    }
}
