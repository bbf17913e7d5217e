#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use bevy_rapier2d::prelude::Velocity;
#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use crate::core::components::Rocket;
#[cfg(feature = "debug")]
use crate::core::level::{DeferredLoads, LevelProgress};
#[cfg(feature = "debug")]
use crate::gameplay::flight::Flight;

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    progress: Res<LevelProgress>,
    deferred: Res<DeferredLoads>,
    rockets: Query<(&Transform, &Velocity, &Flight), With<Rocket>>,
) {
    state.frame_counter += 1;
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    for (tf, vel, flight) in &rockets {
        info!(target: "flight", "FLIGHT frame={} t={:.3}s level={}/{} state={:?} collisions={} pos=({:.0},{:.0}) vel=({:.0},{:.0}) pending_loads={}",
            state.frame_counter,
            time.elapsed_secs(),
            progress.current(),
            progress.count(),
            flight.state(),
            flight.collisions_enabled(),
            tf.translation.x,
            tf.translation.y,
            vel.linvel.x,
            vel.linvel.y,
            deferred.len());
    }
}
