//! Player rocket: flight state machine, its collaborators and the systems binding them.
pub mod controller;
pub mod media;
pub mod ports;
pub mod spawn;
pub mod systems;

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

use crate::core::system::system_order::{
    configure_game_sets, CollisionResponseSet, DeferredTimersSet, FlightControlSet,
};
use crate::core::level::{DeferredLoads, LevelProgress};
use crate::interaction::inputmap::InputMap;

pub use controller::{Flight, FlightController, FlightSetupError, FlightState, FlightTuning};
pub use media::{CuePaths, CueSet, EffectEmitters, Voice};
pub use ports::SurfaceRole;

/// Tuning and debug flag handed to every rocket the level loader spawns.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FlightSettings {
    pub tuning: FlightTuning,
    pub debug_keys: bool,
}

impl FlightSettings {
    /// Debug builds always poll the cheat keys; release builds only when asked to.
    pub fn debug_keys_enabled(requested: bool) -> bool {
        cfg!(debug_assertions) || requested
    }
}

impl Default for FlightSettings {
    fn default() -> Self {
        Self {
            tuning: FlightTuning::default(),
            debug_keys: Self::debug_keys_enabled(false),
        }
    }
}

pub struct FlightPlugin;

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        configure_game_sets(app);
        // Rapier registers the event in real runs; headless apps may not add it.
        if !app.world().contains_resource::<Events<CollisionEvent>>() {
            app.add_event::<CollisionEvent>();
        }
        app.init_resource::<FlightSettings>()
            .init_resource::<CueSet>()
            .init_resource::<InputMap>()
            .init_resource::<LevelProgress>()
            .init_resource::<DeferredLoads>()
            .add_systems(Startup, media::load_cue_set)
            .add_systems(Update, media::reap_finished_voices.in_set(DeferredTimersSet))
            .add_systems(Update, systems::flight_control_system.in_set(FlightControlSet))
            .add_systems(Update, systems::flight_collision_system.in_set(CollisionResponseSet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_builds_hide_debug_keys_unless_requested() {
        assert_eq!(FlightSettings::default().debug_keys, cfg!(debug_assertions));
        assert!(FlightSettings::debug_keys_enabled(true));
        assert_eq!(FlightSettings::debug_keys_enabled(false), cfg!(debug_assertions));
    }
}
