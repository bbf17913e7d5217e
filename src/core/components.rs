use bevy::prelude::*;

/// Marker for the player rocket (holds physics body, collider & flight state).
#[derive(Component)]
pub struct Rocket;

/// Anything spawned for the active level; despawned wholesale on level change.
#[derive(Component)]
pub struct LevelEntity;

/// Full extents of a level block, used by the collider and the gizmo renderer.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BlockSize(pub Vec2);
