pub mod config;

pub use config::{
    CueConfig, DebugConfig, GameConfig, LevelsConfig, RocketConfig, WindowConfig, WorldConfig,
};
