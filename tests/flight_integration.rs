use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::{CollisionEvent, ExternalImpulse};
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use rocket_boost::core::components::Rocket;
use rocket_boost::core::level::catalog::CatalogEntry;
use rocket_boost::core::level::layout::LevelLayout;
use rocket_boost::core::level::{DeferredLoads, LevelCatalog, LevelLoaderPlugin, LevelProgress, LevelSourceMode};
use rocket_boost::gameplay::flight::media::RocketVoice;
use rocket_boost::gameplay::flight::ports::{Clip, SurfaceRole};
use rocket_boost::gameplay::flight::{EffectEmitters, Flight, FlightPlugin, FlightSettings, FlightState, FlightTuning, Voice};
use rocket_boost::interaction::inputmap::InputActionsPlugin;

const LAYOUT: &str = r#"(
    version: 1,
    name: "test",
    rocket: (x: 0.0, y: 0.0),
    blocks: [
        (position: (x: 0.0, y: -100.0), size: (x: 100.0, y: 10.0), role: "Friendly"),
        (position: (x: 200.0, y: 0.0), size: (x: 10.0, y: 100.0), role: "Finish"),
        (position: (x: -200.0, y: 0.0), size: (x: 10.0, y: 100.0), role: "Obstacle"),
    ],
)"#;

// Each update advances virtual time by 0.1s; the 0.25s delay fires on the third update after scheduling.
const DELAY: f32 = 0.25;

fn game_app(levels: usize, debug_keys: bool) -> App {
    let layout = LevelLayout::from_ron_str(LAYOUT).expect("test layout");
    let entries = (0..levels)
        .map(|i| CatalogEntry { id: format!("level{i}"), layout: layout.clone() })
        .collect();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.insert_resource(LevelCatalog::new(entries, LevelSourceMode::Embedded));
    app.insert_resource(LevelProgress::new(0, levels));
    app.insert_resource(FlightSettings {
        tuning: FlightTuning::new(120.0, 100.0, DELAY).expect("tuning"),
        debug_keys,
    });
    app.add_plugins((InputActionsPlugin, FlightPlugin, LevelLoaderPlugin));
    app.update(); // startup + first level spawn
    app
}

fn rocket(app: &mut App) -> Entity {
    let mut q = app.world_mut().query_filtered::<Entity, With<Rocket>>();
    q.single(app.world()).expect("exactly one rocket")
}

fn block(app: &mut App, role: SurfaceRole) -> Entity {
    let mut q = app.world_mut().query::<(Entity, &SurfaceRole)>();
    q.iter(app.world())
        .find(|(_, r)| **r == role)
        .map(|(e, _)| e)
        .expect("block with role")
}

fn state(app: &mut App) -> FlightState {
    let e = rocket(app);
    app.world().get::<Flight>(e).expect("flight").state()
}

fn current_level(app: &App) -> usize {
    app.world().resource::<LevelProgress>().current()
}

fn collide(app: &mut App, role: SurfaceRole) {
    let me = rocket(app);
    let other = block(app, role);
    app.world_mut()
        .send_event(CollisionEvent::Started(other, me, CollisionEventFlags::empty()));
    app.update();
}

fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
    app.update();
}

fn voices(app: &mut App, clip: Clip) -> usize {
    let mut q = app.world_mut().query::<&RocketVoice>();
    q.iter(app.world()).filter(|v| v.clip == clip).count()
}

#[test]
fn first_level_spawns_rocket_and_blocks() {
    let mut app = game_app(2, false);
    let e = rocket(&mut app);
    assert_eq!(state(&mut app), FlightState::Alive);
    assert_eq!(app.world().get::<Transform>(e).expect("tf").translation.truncate(), Vec2::ZERO);
    let mut q = app.world_mut().query::<&SurfaceRole>();
    assert_eq!(q.iter(app.world()).count(), 3);
}

#[test]
fn boost_pushes_up_and_loops_one_voice() {
    let mut app = game_app(1, false);
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::Space);
    app.update();
    app.update();
    let e = rocket(&mut app);
    let impulse = app.world().get::<ExternalImpulse>(e).expect("impulse").impulse;
    assert!(impulse.y > 0.0 && impulse.x.abs() < 1e-4, "{impulse:?}");
    assert_eq!(voices(&mut app, Clip::Boost), 1, "boost cue must not layer");
    assert!(app.world().get::<EffectEmitters>(e).expect("fx").boost.is_some());

    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(KeyCode::Space);
    app.update();
    assert!(app.world().get::<Voice>(e).expect("voice").current().is_none());
    assert_eq!(voices(&mut app, Clip::Boost), 0);
    assert!(app.world().get::<EffectEmitters>(e).expect("fx").boost.is_none());
}

#[test]
fn rotate_left_wins_over_right() {
    let mut app = game_app(1, false);
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyD);
    }
    app.update();
    let e = rocket(&mut app);
    let (angle, _, _) = app.world().get::<Transform>(e).expect("tf").rotation.to_euler(EulerRot::ZYX);
    assert!((angle.to_degrees() - 12.0).abs() < 1e-3, "angle {}", angle.to_degrees());
}

#[test]
fn finish_advances_after_delay() {
    let mut app = game_app(3, false);
    let first = rocket(&mut app);
    collide(&mut app, SurfaceRole::Finish);
    assert_eq!(state(&mut app), FlightState::Transcending);
    assert_eq!(voices(&mut app, Clip::Victory), 1);
    assert_eq!(app.world().resource::<DeferredLoads>().len(), 1);

    // Terminal: a later obstacle hit changes nothing.
    collide(&mut app, SurfaceRole::Obstacle);
    assert_eq!(state(&mut app), FlightState::Transcending);
    assert_eq!(app.world().resource::<DeferredLoads>().len(), 1);
    assert_eq!(current_level(&app), 0);

    app.update();
    app.update();
    assert_eq!(current_level(&app), 1);
    assert_ne!(rocket(&mut app), first, "level reload respawns the rocket");
    assert_eq!(state(&mut app), FlightState::Alive);
    assert_eq!(voices(&mut app, Clip::Victory), 0, "reload clears level audio");
}

#[test]
fn finish_on_last_level_wraps_to_first() {
    let mut app = game_app(2, true);
    tap(&mut app, KeyCode::KeyL);
    assert_eq!(current_level(&app), 1);
    collide(&mut app, SurfaceRole::Finish);
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(current_level(&app), 0);
}

#[test]
fn obstacle_restarts_from_first_level() {
    let mut app = game_app(3, true);
    tap(&mut app, KeyCode::KeyL);
    tap(&mut app, KeyCode::KeyL);
    assert_eq!(current_level(&app), 2);
    collide(&mut app, SurfaceRole::Obstacle);
    assert_eq!(state(&mut app), FlightState::Dying);
    assert_eq!(voices(&mut app, Clip::Death), 1);
    for _ in 0..4 {
        app.update();
    }
    assert_eq!(current_level(&app), 0);
    assert_eq!(state(&mut app), FlightState::Alive);
}

#[test]
fn friendly_contact_is_harmless() {
    let mut app = game_app(2, false);
    collide(&mut app, SurfaceRole::Friendly);
    assert_eq!(state(&mut app), FlightState::Alive);
    assert!(app.world().resource::<DeferredLoads>().is_empty());
}

#[test]
fn toggled_collisions_ignore_obstacles() {
    let mut app = game_app(2, true);
    tap(&mut app, KeyCode::KeyC);
    collide(&mut app, SurfaceRole::Obstacle);
    assert_eq!(state(&mut app), FlightState::Alive);
    tap(&mut app, KeyCode::KeyC);
    collide(&mut app, SurfaceRole::Obstacle);
    assert_eq!(state(&mut app), FlightState::Dying);
}

#[test]
fn debug_keys_need_the_flag() {
    let mut app = game_app(2, false);
    tap(&mut app, KeyCode::KeyL);
    assert_eq!(current_level(&app), 0);
}

#[test]
fn skip_while_dying_cancels_the_restart() {
    let mut app = game_app(3, true);
    collide(&mut app, SurfaceRole::Obstacle);
    tap(&mut app, KeyCode::KeyL);
    assert_eq!(current_level(&app), 1);
    assert!(app.world().resource::<DeferredLoads>().is_empty());
    for _ in 0..5 {
        app.update();
    }
    assert_eq!(current_level(&app), 1);
    assert_eq!(state(&mut app), FlightState::Alive);
}
