use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::controller::{Flight, FlightController};
use super::media::{CueSet, EffectEmitters, RocketMedia, Voice};
use super::ports::SurfaceRole;
use crate::core::components::Rocket;
use crate::core::level::{DeferredLoads, LevelDirector, LevelProgress};
use crate::interaction::inputmap::InputMap;
use crate::physics::rapier::RapierBody;

type RocketParts = (
    Entity,
    &'static mut Flight,
    &'static mut Transform,
    &'static mut ExternalImpulse,
    &'static mut Velocity,
    &'static mut LockedAxes,
    &'static mut Voice,
    &'static mut EffectEmitters,
);

/// Feed this frame's input into every rocket.
pub fn flight_control_system(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<InputMap>,
    cues: Res<CueSet>,
    mut progress: ResMut<LevelProgress>,
    mut deferred: ResMut<DeferredLoads>,
    mut rockets: Query<RocketParts, With<Rocket>>,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();
    for (_, mut flight, mut tf, mut impulse, mut vel, mut locked, mut voice, mut effects) in &mut rockets {
        let mut body = RapierBody::new(&mut tf, &mut impulse, &mut vel, &mut locked);
        let mut media = RocketMedia::new(&mut commands, &cues, &mut voice, &mut effects, now);
        let mut levels = LevelDirector::new(&mut progress, &mut deferred);
        FlightController::new(&mut flight, &mut body, &mut media, &mut levels).tick(dt, &*input);
    }
}

/// Route collision-begin events touching a rocket into its controller.
pub fn flight_collision_system(
    mut commands: Commands,
    time: Res<Time>,
    mut events: EventReader<CollisionEvent>,
    cues: Res<CueSet>,
    mut progress: ResMut<LevelProgress>,
    mut deferred: ResMut<DeferredLoads>,
    roles: Query<&SurfaceRole>,
    mut rockets: Query<RocketParts, With<Rocket>>,
) {
    let now = time.elapsed_secs();
    for ev in events.read() {
        let CollisionEvent::Started(a, b, _) = *ev else {
            continue;
        };
        for (me, other) in [(a, b), (b, a)] {
            let Ok((_, mut flight, mut tf, mut impulse, mut vel, mut locked, mut voice, mut effects)) =
                rockets.get_mut(me)
            else {
                continue;
            };
            // Colliders without a role (and other rockets) count as obstacles.
            let role = roles.get(other).copied().unwrap_or_default();
            debug!(target: "flight", "collision begin {me:?} -> {other:?} ({role:?})");
            let mut body = RapierBody::new(&mut tf, &mut impulse, &mut vel, &mut locked);
            let mut media = RocketMedia::new(&mut commands, &cues, &mut voice, &mut effects, now);
            let mut levels = LevelDirector::new(&mut progress, &mut deferred);
            FlightController::new(&mut flight, &mut body, &mut media, &mut levels)
                .on_collision_begin(role);
        }
    }
}
