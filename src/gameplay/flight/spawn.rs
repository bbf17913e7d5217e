use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::controller::Flight;
use super::media::{EffectEmitters, Voice};
use super::FlightSettings;
use crate::core::components::{BlockSize, LevelEntity, Rocket};
use crate::core::config::RocketConfig;

pub const ROCKET_Z: f32 = 10.0;

/// Spawn the player rocket at `at` with a fresh `Alive` flight state.
pub fn spawn_rocket(
    commands: &mut Commands,
    at: Vec2,
    rocket: &RocketConfig,
    settings: &FlightSettings,
) -> Entity {
    let size = Vec2::new(rocket.width.max(1.0), rocket.height.max(1.0));
    let id = commands
        .spawn((
            Name::new("Rocket"),
            Rocket,
            LevelEntity,
            Flight::new(settings.tuning, settings.debug_keys),
            Voice::default(),
            EffectEmitters::default(),
            BlockSize(size),
            Transform::from_xyz(at.x, at.y, ROCKET_Z),
            (
                RigidBody::Dynamic,
                Collider::cuboid(size.x * 0.5, size.y * 0.5),
                ActiveEvents::COLLISION_EVENTS,
                ExternalImpulse::default(),
                Velocity::zero(),
                LockedAxes::empty(),
                Damping {
                    linear_damping: rocket.linear_damping.max(0.0),
                    angular_damping: rocket.angular_damping.max(0.0),
                },
            ),
        ))
        .id();
    debug!(target: "flight", "rocket spawned at {at:?} ({}x{})", size.x, size.y);
    id
}
