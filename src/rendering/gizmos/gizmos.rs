//! Immediate-mode drawing of level blocks, the rocket and its particle emitters.
use bevy::prelude::*;
use std::f32::consts::TAU;

use crate::core::components::{BlockSize, Rocket};
use crate::gameplay::flight::ports::SurfaceRole;
use crate::gameplay::flight::{EffectEmitters, Flight};
use crate::rendering::palette::palette::{color_for_role, color_for_state, FINISH, FLAME, OBSTACLE};

const BURST_SPOKES: usize = 12;
/// Seconds a victory / death burst keeps expanding before it fades out.
const BURST_LIFETIME: f32 = 1.2;

pub struct GizmoRenderPlugin;

impl Plugin for GizmoRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, (draw_blocks, draw_rockets, draw_effects));
    }
}

fn planar(tf: &Transform) -> Isometry2d {
    let (angle, _, _) = tf.rotation.to_euler(EulerRot::ZYX);
    Isometry2d::new(tf.translation.truncate(), Rot2::radians(angle))
}

fn draw_blocks(mut gizmos: Gizmos, q: Query<(&Transform, &BlockSize, &SurfaceRole)>) {
    for (tf, size, role) in &q {
        gizmos.rect_2d(planar(tf), **size, color_for_role(*role));
    }
}

fn draw_rockets(mut gizmos: Gizmos, q: Query<(&Transform, &BlockSize, &Flight), With<Rocket>>) {
    for (tf, size, flight) in &q {
        let iso = planar(tf);
        let color = color_for_state(flight.state());
        gizmos.rect_2d(iso, **size, color);
        // nose
        let nose = iso.transform_point(Vec2::new(0.0, size.y * 0.5 + size.x * 0.5));
        gizmos.circle_2d(Isometry2d::from_translation(nose), size.x * 0.25, color);
    }
}

fn draw_effects(
    time: Res<Time>,
    mut gizmos: Gizmos,
    q: Query<(&Transform, &BlockSize, &EffectEmitters), With<Rocket>>,
) {
    let now = time.elapsed_secs();
    for (tf, size, fx) in &q {
        let iso = planar(tf);
        if let Some(start) = fx.boost {
            // Flickering exhaust below the tail.
            let flicker = 0.75 + 0.25 * ((now - start) * 40.0).sin();
            for i in 0..3 {
                let depth = size.y * 0.5 + size.x * (0.4 + i as f32 * 0.5) * flicker;
                let at = iso.transform_point(Vec2::new(0.0, -depth));
                gizmos.circle_2d(Isometry2d::from_translation(at), size.x * 0.3 / (i + 1) as f32, FLAME);
            }
        }
        if let Some(start) = fx.victory {
            burst(&mut gizmos, iso.translation, now - start, size.y, FINISH, false);
        }
        if let Some(start) = fx.death {
            burst(&mut gizmos, iso.translation, now - start, size.y, OBSTACLE, true);
        }
    }
}

fn burst(gizmos: &mut Gizmos, center: Vec2, age: f32, scale: f32, color: Color, spokes: bool) {
    if !(0.0..BURST_LIFETIME).contains(&age) {
        return;
    }
    let t = age / BURST_LIFETIME;
    let radius = scale * (0.5 + 2.0 * t);
    let color = color.with_alpha(1.0 - t);
    if spokes {
        for i in 0..BURST_SPOKES {
            let dir = Vec2::from_angle(i as f32 / BURST_SPOKES as f32 * TAU);
            gizmos.line_2d(center + dir * radius * 0.4, center + dir * radius, color);
        }
    } else {
        gizmos.circle_2d(Isometry2d::from_translation(center), radius, color);
        gizmos.circle_2d(Isometry2d::from_translation(center), radius * 0.6, color);
    }
}
