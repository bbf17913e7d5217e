//! Narrow collaborator interfaces the flight controller drives.
//!
//! The controller never touches ECS storage directly; the systems in
//! [`super::systems`] wrap Rapier, Bevy audio and the level loader in these
//! traits for the duration of one call.
use bevy::prelude::*;

/// Physics collaborator for a single rigid body.
pub trait PhysicsBody {
    /// Apply a force along the body's local axes. The vector is already
    /// integrated over the tick (force * dt).
    fn apply_local_force(&mut self, force: Vec3);
    /// Suspend (`true`) or restore (`false`) physics-driven rotation.
    fn set_rotation_frozen(&mut self, frozen: bool);
    /// Rotate the body about `axis` by `degrees`.
    fn rotate_by(&mut self, axis: Vec3, degrees: f32);
}

/// Audio clips carried by the rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clip {
    Boost,
    Victory,
    Death,
}

/// Particle effects carried by the rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Boost,
    Victory,
    Death,
}

/// Audio + particle collaborator.
pub trait MediaCue {
    fn play_loop(&mut self, clip: Clip);
    fn play_once(&mut self, clip: Clip);
    fn is_playing(&self) -> bool;
    /// Stop whatever clip is currently playing.
    fn stop(&mut self);
    fn start_effect(&mut self, effect: Effect);
    fn stop_effect(&mut self, effect: Effect);
}

/// Continuation fired by the scheduler once its delay elapses.
pub type DeferredLoad = Box<dyn FnOnce(&mut dyn LevelLoader) + Send + Sync + 'static>;

/// Level management collaborator.
pub trait LevelLoader {
    fn load_level(&mut self, index: usize);
    fn level_count(&self) -> usize;
    fn current_level_index(&self) -> usize;
    /// Run `then` after `seconds` of simulation time. No cancellation handle is returned.
    fn schedule_after(&mut self, seconds: f32, then: DeferredLoad);
}

/// Logical controls the controller polls. Physical keys are bound in the input map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Boost,
    RotateLeft,
    RotateRight,
    ToggleCollisions,
    SkipLevel,
}

impl Control {
    /// Action name used by the input map.
    pub const fn action_name(self) -> &'static str {
        match self {
            Control::Boost => "Boost",
            Control::RotateLeft => "RotateLeft",
            Control::RotateRight => "RotateRight",
            Control::ToggleCollisions => "ToggleCollisions",
            Control::SkipLevel => "SkipLevel",
        }
    }
}

/// Input snapshot for the current tick.
pub trait InputSource {
    fn is_held(&self, control: Control) -> bool;
    /// Edge-triggered: true only on the tick the control went down.
    fn is_pressed(&self, control: Control) -> bool;
}

/// What kind of surface a collider represents. Resolved once when the level spawns it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceRole {
    /// Landing pads and other surfaces the rocket may touch freely.
    Friendly,
    /// Level goal.
    Finish,
    #[default]
    Obstacle,
}

impl SurfaceRole {
    /// Map a level-file tag onto a role. Unknown tags are lethal.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "Friendly" => SurfaceRole::Friendly,
            "Finish" => SurfaceRole::Finish,
            _ => SurfaceRole::Obstacle,
        }
    }
}

/// Advance to the next level, wrapping to the first after the last one.
pub fn load_next_level(levels: &mut dyn LevelLoader) {
    let next = levels.current_level_index() + 1;
    let next = if next >= levels.level_count() { 0 } else { next };
    levels.load_level(next);
}

/// Restart from the first level.
pub fn load_first_level(levels: &mut dyn LevelLoader) {
    levels.load_level(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tags_are_obstacles() {
        assert_eq!(SurfaceRole::from_tag("Friendly"), SurfaceRole::Friendly);
        assert_eq!(SurfaceRole::from_tag("Finish"), SurfaceRole::Finish);
        assert_eq!(SurfaceRole::from_tag("Untagged"), SurfaceRole::Obstacle);
        assert_eq!(SurfaceRole::from_tag("friendly"), SurfaceRole::Obstacle);
        assert_eq!(SurfaceRole::from_tag(""), SurfaceRole::Obstacle);
    }
}
