//! Rocket flight / life-cycle state machine.
//!
//! [`Flight`] is the persistent per-rocket state stored on the entity.
//! [`FlightController`] borrows it together with the four collaborators and
//! runs one tick or one collision against them.
use bevy::prelude::*;
use thiserror::Error;

use super::ports::{
    load_first_level, load_next_level, Clip, Control, Effect, InputSource, LevelLoader,
    MediaCue, PhysicsBody, SurfaceRole,
};

/// Life-cycle state. Dying and Transcending are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlightState {
    #[default]
    Alive,
    Dying,
    Transcending,
}

#[derive(Debug, Error, PartialEq)]
pub enum FlightSetupError {
    #[error("rotate_speed must be a positive number of degrees per second (got {0})")]
    RotateSpeed(f32),
    #[error("boost_speed must be a positive force (got {0})")]
    BoostSpeed(f32),
    #[error("level_load_delay must be >= 0 seconds (got {0})")]
    LevelLoadDelay(f32),
    #[error("cue '{0}' has no asset path configured")]
    MissingCue(&'static str),
    #[error("cue '{cue}' file not found at {}", path.display())]
    MissingCueFile {
        cue: &'static str,
        path: std::path::PathBuf,
    },
}

/// Validated, immutable flight parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightTuning {
    rotate_speed: f32,
    boost_speed: f32,
    level_load_delay: f32,
}

impl FlightTuning {
    pub const DEFAULT_ROTATE_SPEED: f32 = 120.0;
    pub const DEFAULT_BOOST_SPEED: f32 = 100.0;
    pub const DEFAULT_LEVEL_LOAD_DELAY: f32 = 1.0;

    pub fn new(
        rotate_speed: f32,
        boost_speed: f32,
        level_load_delay: f32,
    ) -> Result<Self, FlightSetupError> {
        if !(rotate_speed.is_finite() && rotate_speed > 0.0) {
            return Err(FlightSetupError::RotateSpeed(rotate_speed));
        }
        if !(boost_speed.is_finite() && boost_speed > 0.0) {
            return Err(FlightSetupError::BoostSpeed(boost_speed));
        }
        if !(level_load_delay.is_finite() && level_load_delay >= 0.0) {
            return Err(FlightSetupError::LevelLoadDelay(level_load_delay));
        }
        Ok(Self {
            rotate_speed,
            boost_speed,
            level_load_delay,
        })
    }
}

impl Default for FlightTuning {
    fn default() -> Self {
        Self {
            rotate_speed: Self::DEFAULT_ROTATE_SPEED,
            boost_speed: Self::DEFAULT_BOOST_SPEED,
            level_load_delay: Self::DEFAULT_LEVEL_LOAD_DELAY,
        }
    }
}

/// Persistent flight state for one rocket.
#[derive(Component, Debug, Clone)]
pub struct Flight {
    state: FlightState,
    tuning: FlightTuning,
    collisions_enabled: bool,
    debug_keys: bool,
}

impl Flight {
    /// `debug_keys` is fixed for the rocket's lifetime.
    pub fn new(tuning: FlightTuning, debug_keys: bool) -> Self {
        Self {
            state: FlightState::Alive,
            tuning,
            collisions_enabled: true,
            debug_keys,
        }
    }

    pub fn state(&self) -> FlightState {
        self.state
    }
    pub fn is_alive(&self) -> bool {
        self.state == FlightState::Alive
    }
    pub fn collisions_enabled(&self) -> bool {
        self.collisions_enabled
    }
}

/// Local up axis the boost pushes along.
const THRUST_AXIS: Vec3 = Vec3::Y;
/// Roll axis (points out of the play plane).
const ROLL_AXIS: Vec3 = Vec3::Z;

/// A borrowed view binding a [`Flight`] to its collaborators.
pub struct FlightController<'a, B, M, L> {
    flight: &'a mut Flight,
    body: &'a mut B,
    media: &'a mut M,
    levels: &'a mut L,
}

impl<'a, B, M, L> FlightController<'a, B, M, L>
where
    B: PhysicsBody,
    M: MediaCue,
    L: LevelLoader,
{
    pub fn new(flight: &'a mut Flight, body: &'a mut B, media: &'a mut M, levels: &'a mut L) -> Self {
        Self {
            flight,
            body,
            media,
            levels,
        }
    }

    /// Advance one simulation tick of `dt` seconds.
    pub fn tick(&mut self, dt: f32, input: &impl InputSource) {
        if self.flight.is_alive() {
            self.respond_to_boost(dt, input);
            self.respond_to_rotate(dt, input);
        }
        if self.flight.debug_keys {
            self.respond_to_debug_keys(input);
        }
    }

    /// Collider began touching another collider with `role`.
    pub fn on_collision_begin(&mut self, role: SurfaceRole) {
        if !self.flight.is_alive() || !self.flight.collisions_enabled {
            return;
        }
        match role {
            SurfaceRole::Friendly => {}
            SurfaceRole::Finish => self.start_victory_sequence(),
            SurfaceRole::Obstacle => self.start_death_sequence(),
        }
    }

    fn respond_to_boost(&mut self, dt: f32, input: &impl InputSource) {
        if input.is_held(Control::Boost) {
            self.body
                .apply_local_force(THRUST_AXIS * self.flight.tuning.boost_speed * dt);
            if !self.media.is_playing() {
                self.media.play_loop(Clip::Boost);
            }
            self.media.start_effect(Effect::Boost);
        } else {
            self.media.stop();
            self.media.stop_effect(Effect::Boost);
        }
    }

    fn respond_to_rotate(&mut self, dt: f32, input: &impl InputSource) {
        self.body.set_rotation_frozen(true);
        let frame_speed = self.flight.tuning.rotate_speed * dt;
        if input.is_held(Control::RotateLeft) {
            self.body.rotate_by(ROLL_AXIS, frame_speed);
        } else if input.is_held(Control::RotateRight) {
            self.body.rotate_by(ROLL_AXIS, -frame_speed);
        }
        self.body.set_rotation_frozen(false);
    }

    fn respond_to_debug_keys(&mut self, input: &impl InputSource) {
        if input.is_pressed(Control::SkipLevel) {
            info!(target: "flight", "debug: skipping to next level");
            load_next_level(&mut *self.levels);
        } else if input.is_pressed(Control::ToggleCollisions) {
            self.flight.collisions_enabled = !self.flight.collisions_enabled;
            info!(
                target: "flight",
                "debug: collisions {}",
                if self.flight.collisions_enabled { "enabled" } else { "disabled" }
            );
        }
    }

    fn start_victory_sequence(&mut self) {
        self.flight.state = FlightState::Transcending;
        self.media.stop();
        self.media.play_once(Clip::Victory);
        self.media.start_effect(Effect::Victory);
        let delay = self.flight.tuning.level_load_delay;
        info!(target: "flight", "rocket transcending; next level in {delay:.2}s");
        self.levels.schedule_after(delay, Box::new(load_next_level));
    }

    fn start_death_sequence(&mut self) {
        self.flight.state = FlightState::Dying;
        self.media.stop();
        self.media.play_once(Clip::Death);
        self.media.start_effect(Effect::Death);
        let delay = self.flight.tuning.level_load_delay;
        info!(target: "flight", "rocket destroyed; restarting in {delay:.2}s");
        self.levels.schedule_after(delay, Box::new(load_first_level));
    }
}
