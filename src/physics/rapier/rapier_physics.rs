use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;
use crate::gameplay::flight::ports::PhysicsBody;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & world gravity

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let (ppm, rapier_debug) = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| (cfg.world.pixels_per_meter, cfg.rapier_debug))
            .unwrap_or((100.0, false));
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(ppm.max(1e-3)))
            .add_systems(Startup, configure_gravity);
        // Debug builds always carry the wireframe so it can be toggled at runtime.
        if rapier_debug || cfg!(feature = "debug") {
            app.add_plugins(RapierDebugRenderPlugin {
                enabled: rapier_debug,
                ..default()
            });
        }
    }
}

fn configure_gravity(mut q_cfg: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    // RapierConfiguration lives on the default context entity, not as a resource.
    if let Ok(mut cfg) = q_cfg.single_mut() {
        cfg.gravity = Vect::new(0.0, game_cfg.world.gravity_y);
        info!(target: "config", "rapier gravity set to {:?}", cfg.gravity);
    } else {
        warn!(target: "config", "no RapierConfiguration found; keeping default gravity");
    }
}

/// [`PhysicsBody`] over one rocket's Rapier components, borrowed for a single system call.
pub struct RapierBody<'a> {
    transform: &'a mut Transform,
    impulse: &'a mut ExternalImpulse,
    velocity: &'a mut Velocity,
    locked: &'a mut LockedAxes,
}

impl<'a> RapierBody<'a> {
    pub fn new(
        transform: &'a mut Transform,
        impulse: &'a mut ExternalImpulse,
        velocity: &'a mut Velocity,
        locked: &'a mut LockedAxes,
    ) -> Self {
        Self {
            transform,
            impulse,
            velocity,
            locked,
        }
    }
}

impl PhysicsBody for RapierBody<'_> {
    fn apply_local_force(&mut self, force: Vec3) {
        // Planar world: the out-of-plane component is dropped after rotating into world space.
        let world = self.transform.rotation * force;
        self.impulse.impulse += world.truncate();
    }

    fn set_rotation_frozen(&mut self, frozen: bool) {
        if frozen {
            self.locked.insert(LockedAxes::ROTATION_LOCKED);
            self.velocity.angvel = 0.0;
        } else {
            self.locked.remove(LockedAxes::ROTATION_LOCKED);
        }
    }

    fn rotate_by(&mut self, axis: Vec3, degrees: f32) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.transform
            .rotate(Quat::from_axis_angle(axis, degrees.to_radians()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parts {
        transform: Transform,
        impulse: ExternalImpulse,
        velocity: Velocity,
        locked: LockedAxes,
    }

    impl Parts {
        fn new() -> Self {
            Self {
                transform: Transform::default(),
                impulse: ExternalImpulse::default(),
                velocity: Velocity::angular(2.0),
                locked: LockedAxes::empty(),
            }
        }
        fn body(&mut self) -> RapierBody<'_> {
            RapierBody::new(
                &mut self.transform,
                &mut self.impulse,
                &mut self.velocity,
                &mut self.locked,
            )
        }
    }

    #[test]
    fn thrust_follows_body_orientation() {
        let mut parts = Parts::new();
        parts.transform.rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        parts.body().apply_local_force(Vec3::Y * 2.0);
        let imp = parts.impulse.impulse;
        assert!((imp.x + 2.0).abs() < 1e-5 && imp.y.abs() < 1e-5, "{imp:?}");
    }

    #[test]
    fn freeze_zeroes_spin_and_unfreeze_releases_lock() {
        let mut parts = Parts::new();
        parts.body().set_rotation_frozen(true);
        assert!(parts.locked.contains(LockedAxes::ROTATION_LOCKED));
        assert_eq!(parts.velocity.angvel, 0.0);
        parts.body().set_rotation_frozen(false);
        assert!(!parts.locked.contains(LockedAxes::ROTATION_LOCKED));
    }

    #[test]
    fn rotate_by_degrees_about_roll_axis() {
        let mut parts = Parts::new();
        parts.body().rotate_by(Vec3::Z, 90.0);
        let (_, angle) = parts.transform.rotation.to_axis_angle();
        assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
        parts.body().rotate_by(Vec3::ZERO, 45.0);
        let (_, unchanged) = parts.transform.rotation.to_axis_angle();
        assert!((unchanged - angle).abs() < 1e-6);
    }
}
