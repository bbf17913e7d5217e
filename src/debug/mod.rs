//! Debug module: feature gated wireframe toggle & periodic flight logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;

#[cfg(feature = "debug")]
pub use modes::*;

#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::core::system::system_order::LevelTransitionSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier2d::render::DebugRenderContext;
        use keys::debug_key_input_system;
        use logging::debug_logging_system;

        fn toggle_rapier_debug(state: Res<DebugState>, ctx: Option<ResMut<DebugRenderContext>>) {
            if let Some(mut c) = ctx {
                if c.enabled != state.wireframe {
                    c.enabled = state.wireframe;
                }
            }
        }

        let state = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| DebugState {
                wireframe: cfg.rapier_debug,
                log_interval: cfg.debug.log_interval.max(0.05),
                ..Default::default()
            })
            .unwrap_or_default();
        app.insert_resource(state).add_systems(
            Update,
            (
                debug_key_input_system,
                toggle_rapier_debug,
                debug_logging_system,
            )
                .chain()
                .after(LevelTransitionSet),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
