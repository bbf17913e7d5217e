use bevy::prelude::*;

use crate::core::system::system_order::FlightControlSet;

/// Periods at or below this leave the object at its start position.
pub const MIN_PERIOD: f32 = f32::EPSILON;

/// Sine sweep between `start` and `start + movement`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub start: Vec3,
    pub movement: Vec3,
    /// Seconds for one full there-and-back cycle.
    pub period: f32,
}

impl Oscillator {
    pub fn new(start: Vec3, movement: Vec3, period: f32) -> Self {
        Self {
            start,
            movement,
            period,
        }
    }

    /// Position at elapsed time `t`.
    pub fn sample(&self, t: f32) -> Vec3 {
        if !(self.period > MIN_PERIOD) {
            return self.start;
        }
        let cycles = t / self.period;
        let factor = (cycles * std::f32::consts::TAU).sin() / 2.0 + 0.5;
        self.start + self.movement * factor
    }
}

pub struct OscillatorPlugin;

impl Plugin for OscillatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drive_oscillators.before(FlightControlSet));
    }
}

pub fn drive_oscillators(time: Res<Time>, mut q: Query<(&Oscillator, &mut Transform)>) {
    let t = time.elapsed_secs();
    for (osc, mut tf) in &mut q {
        tf.translation = osc.sample(t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_between_start_and_offset() {
        let osc = Oscillator::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 10.0, 0.0), 4.0);
        assert!((osc.sample(0.0).y - 5.0).abs() < 1e-4);
        assert!((osc.sample(1.0).y - 10.0).abs() < 1e-4);
        assert!((osc.sample(3.0).y - 0.0).abs() < 1e-4);
        assert_eq!(osc.sample(3.0).x, 1.0);
    }

    #[test]
    fn degenerate_period_stays_at_start() {
        let start = Vec3::new(3.0, 4.0, 0.0);
        for period in [0.0, -1.0, f32::NAN] {
            let osc = Oscillator::new(start, Vec3::ONE, period);
            assert_eq!(osc.sample(12.5), start);
        }
    }
}
