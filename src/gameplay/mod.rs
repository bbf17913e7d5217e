pub mod flight;
pub mod oscillator;
