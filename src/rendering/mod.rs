pub mod camera;
pub mod gizmos;
pub mod palette;

use bevy::prelude::*;

/// Camera plus gizmo drawing; the only visuals the game has.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((camera::camera::CameraPlugin, gizmos::gizmos::GizmoRenderPlugin));
    }
}
