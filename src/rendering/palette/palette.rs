use bevy::prelude::*;

use crate::gameplay::flight::ports::SurfaceRole;
use crate::gameplay::flight::FlightState;

pub const FRIENDLY: Color = Color::srgb(0.15, 0.95, 0.55); // spring green
pub const FINISH: Color = Color::srgb(1.0, 1.0, 0.25); // lemon yellow
pub const OBSTACLE: Color = Color::srgb(1.0, 0.15, 0.20); // warm red

pub const ROCKET_ALIVE: Color = Color::srgb(0.10, 0.60, 1.0);
pub const ROCKET_DYING: Color = Color::srgb(0.35, 0.05, 0.07);
pub const ROCKET_TRANSCENDING: Color = Color::srgb(0.40, 0.40, 0.06);

pub const FLAME: Color = Color::srgb(1.0, 0.55, 0.10);

#[inline]
pub fn color_for_role(role: SurfaceRole) -> Color {
    match role {
        SurfaceRole::Friendly => FRIENDLY,
        SurfaceRole::Finish => FINISH,
        SurfaceRole::Obstacle => OBSTACLE,
    }
}

#[inline]
pub fn color_for_state(state: FlightState) -> Color {
    match state {
        FlightState::Alive => ROCKET_ALIVE,
        FlightState::Dying => ROCKET_DYING,
        FlightState::Transcending => ROCKET_TRANSCENDING,
    }
}
