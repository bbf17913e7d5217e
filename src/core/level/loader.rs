use bevy::prelude::*;
use bevy_rapier2d::prelude::{Collider, RigidBody};

use crate::core::components::{BlockSize, LevelEntity};
use crate::core::config::GameConfig;
use crate::core::system::system_order::{
    configure_game_sets, DeferredTimersSet, LevelTransitionSet,
};
use crate::gameplay::flight::spawn::spawn_rocket;
use crate::gameplay::flight::FlightSettings;
use crate::gameplay::oscillator::Oscillator;

use super::catalog::LevelCatalog;
use super::layout::{BlockDef, LevelLayout};
use super::progress::{tick_deferred_loads, DeferredLoads, LevelProgress};

const BLOCK_Z: f32 = 0.0;

/// Plugin performing data-driven level loading and level switching.
pub struct LevelLoaderPlugin;

impl Plugin for LevelLoaderPlugin {
    fn build(&self, app: &mut App) {
        configure_game_sets(app);
        app.init_resource::<LevelCatalog>()
            .init_resource::<LevelProgress>()
            .init_resource::<DeferredLoads>()
            .init_resource::<GameConfig>()
            .init_resource::<FlightSettings>()
            .add_systems(Startup, log_catalog)
            .add_systems(Update, tick_deferred_loads.in_set(DeferredTimersSet))
            .add_systems(Update, apply_level_request.in_set(LevelTransitionSet));
    }
}

fn log_catalog(catalog: Res<LevelCatalog>, progress: Res<LevelProgress>) {
    if catalog.is_empty() {
        warn!(target: "level", "LevelLoader: no levels available; nothing will spawn");
        return;
    }
    info!(
        target: "level",
        "LevelLoader: mode={:?} levels={:?} start={}",
        catalog.mode(),
        catalog.ids().collect::<Vec<_>>(),
        progress.current()
    );
    for i in 0..catalog.len() {
        if let Some(entry) = catalog.get(i) {
            for w in entry.layout.warnings() {
                warn!(target: "level", "LevelLoader: {}: {w}", entry.id);
            }
        }
    }
}

/// Tear down the live level and spawn the requested one.
pub fn apply_level_request(
    mut commands: Commands,
    mut progress: ResMut<LevelProgress>,
    mut deferred: ResMut<DeferredLoads>,
    catalog: Res<LevelCatalog>,
    cfg: Res<GameConfig>,
    settings: Res<FlightSettings>,
    live: Query<Entity, With<LevelEntity>>,
) {
    let Some(index) = progress.take_request() else {
        return;
    };
    let Some(entry) = catalog.get(index) else {
        error!(target: "level", "LevelLoader: level {index} missing from catalog");
        return;
    };
    let mut despawned = 0usize;
    for e in &live {
        commands.entity(e).try_despawn();
        despawned += 1;
    }
    if !deferred.is_empty() {
        debug!(target: "level", "LevelLoader: dropping {} pending loads", deferred.len());
        deferred.clear();
    }
    let blocks = spawn_layout(&mut commands, &entry.layout, &cfg, &settings);
    info!(
        target: "level",
        "LevelLoader: loaded level {index} '{}' ({} blocks, {despawned} entities cleared)",
        entry.id,
        blocks
    );
}

/// Spawn the rocket and every valid block of `layout`; returns the block count.
pub fn spawn_layout(
    commands: &mut Commands,
    layout: &LevelLayout,
    cfg: &GameConfig,
    settings: &FlightSettings,
) -> usize {
    spawn_rocket(commands, layout.rocket.into(), &cfg.rocket, settings);
    let mut spawned = 0;
    for (i, block) in layout.blocks.iter().enumerate() {
        if block.size.x <= 0.0 || block.size.y <= 0.0 {
            continue;
        }
        spawn_block(commands, i, block);
        spawned += 1;
    }
    spawned
}

fn spawn_block(commands: &mut Commands, i: usize, block: &BlockDef) {
    let size: Vec2 = block.size.into();
    let at: Vec2 = block.position.into();
    let role = block.surface_role();
    let mut cmd = commands.spawn((
        Name::new(format!("Block{i}:{role:?}")),
        LevelEntity,
        role,
        BlockSize(size),
        Collider::cuboid(size.x * 0.5, size.y * 0.5),
        Transform::from_xyz(at.x, at.y, BLOCK_Z),
    ));
    match block.oscillate {
        // Kinematic so Rapier moves the collider with the animated transform.
        Some(osc) => {
            cmd.insert((
                RigidBody::KinematicPositionBased,
                Oscillator::new(at.extend(BLOCK_Z), Vec2::from(osc.movement).extend(0.0), osc.period),
            ));
        }
        None => {
            cmd.insert(RigidBody::Fixed);
        }
    }
}
