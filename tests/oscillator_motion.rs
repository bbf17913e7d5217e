use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use rocket_boost::gameplay::oscillator::{Oscillator, OscillatorPlugin};

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)));
    app.add_plugins(OscillatorPlugin);
    app
}

#[test]
fn oscillator_tracks_elapsed_time() {
    let mut app = app();
    let start = Vec3::new(10.0, 0.0, 0.0);
    let e = app
        .world_mut()
        .spawn((Oscillator::new(start, Vec3::new(0.0, 100.0, 0.0), 2.0), Transform::from_translation(start)))
        .id();
    for _ in 0..2 {
        app.update();
    }
    let t = app.world().resource::<Time>().elapsed_secs();
    let y = app.world().get::<Transform>(e).expect("tf").translation.y;
    let expected = 100.0 * ((t / 2.0 * std::f32::consts::TAU).sin() / 2.0 + 0.5);
    assert!((y - expected).abs() < 1e-3, "y={y} expected={expected} t={t}");
}

#[test]
fn zero_period_never_moves() {
    let mut app = app();
    let start = Vec3::new(-3.0, 7.0, 0.0);
    let e = app
        .world_mut()
        .spawn((Oscillator::new(start, Vec3::splat(50.0), 0.0), Transform::default()))
        .id();
    for _ in 0..3 {
        app.update();
    }
    assert_eq!(app.world().get::<Transform>(e).expect("tf").translation, start);
}
