use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    // Level coordinates are centred on the origin, matching the default 2D camera.
    commands.spawn((Name::new("MainCamera"), Camera2d));
}
