//! Central system ordering labels to make the update sequence explicit.
//! Stages (high-level, all in `Update` unless noted):
//! 1. Input evaluation (`PreUpdate`, input map plugin)
//! 2. DeferredTimers (pending level loads count down, finished voices are reaped)
//! 3. FlightControl (input -> forces / rotation before Rapier)
//! 4. CollisionResponse (collision events from the previous physics step)
//! 5. LevelTransition (apply a requested level load)
//! 6. Rapier (`PostUpdate`, handled by plugin)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DeferredTimersSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct FlightControlSet; // forces applied before physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct CollisionResponseSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct LevelTransitionSet;

/// Chain the gameplay sets in `Update`. Safe to call from several plugins.
pub fn configure_game_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            DeferredTimersSet,
            FlightControlSet,
            CollisionResponseSet,
            LevelTransitionSet,
        )
            .chain(),
    );
}
