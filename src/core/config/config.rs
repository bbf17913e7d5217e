use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Rocket Boost".into(),
        }
    }
}

/// Flight tuning + rigid body shape of the player rocket.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RocketConfig {
    /// Degrees per second.
    pub rotate_speed: f32,
    pub boost_speed: f32,
    /// Seconds between a victory/death and the level load.
    pub level_load_delay: f32,
    pub width: f32,
    pub height: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
}
impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            rotate_speed: 120.0,
            boost_speed: 100.0,
            level_load_delay: 1.0,
            width: 20.0,
            height: 60.0,
            linear_damping: 0.3,
            angular_damping: 1.0,
        }
    }
}

/// Asset paths (relative to the asset root) of the rocket's audio clips.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CueConfig {
    pub boost: String,
    pub victory: String,
    pub death: String,
}
impl Default for CueConfig {
    fn default() -> Self {
        Self {
            boost: "audio/boost.wav".into(),
            victory: "audio/victory.wav".into(),
            death: "audio/death.wav".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LevelsConfig {
    /// Registry RON listing the levels in play order.
    pub registry: String,
    /// Level id to start on; empty = first registry entry.
    pub start_level: String,
}
impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            registry: "assets/levels/levels.ron".into(),
            start_level: String::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Downward pull in pixels / s^2 (negative = down).
    pub gravity_y: f32,
    pub pixels_per_meter: f32,
}
impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity_y: -300.0,
            pixels_per_meter: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Enable skip-level / toggle-collisions keys in release builds.
    pub keys_enabled: bool,
    /// Seconds between periodic flight log lines (debug feature only).
    pub log_interval: f32,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            keys_enabled: false,
            log_interval: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub world: WorldConfig,
    pub rocket: RocketConfig,
    pub cues: CueConfig,
    pub levels: LevelsConfig,
    pub debug: DebugConfig,
    pub rapier_debug: bool,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge several RON files (later files override earlier keys) into one config.
    /// Returns the config, the paths actually used and any read/parse errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, errors)
                }
            },
            None => (GameConfig::default(), used, errors),
        }
    }

    /// Non-fatal sanity warnings. Hard errors (bad tuning, missing cues) are
    /// reported by `FlightTuning::new` / `CuePaths` instead.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.world.gravity_y > 0.0 {
            w.push(format!(
                "world.gravity_y is positive ({}); rocket will fall upwards",
                self.world.gravity_y
            ));
        }
        if self.world.pixels_per_meter <= 0.0 {
            w.push("world.pixels_per_meter must be > 0".into());
        }
        let r = &self.rocket;
        if r.width <= 0.0 || r.height <= 0.0 {
            w.push(format!("rocket size {}x{} must be > 0", r.width, r.height));
        }
        if r.level_load_delay > 10.0 {
            w.push(format!(
                "rocket.level_load_delay {}s very long; level transitions will feel stuck",
                r.level_load_delay
            ));
        }
        if r.boost_speed > 0.0 && self.world.gravity_y < 0.0 {
            // Rough lift check: thrust acceleration against gravity for a unit density body.
            let area_m2 = (r.width / self.world.pixels_per_meter.max(1e-3))
                * (r.height / self.world.pixels_per_meter.max(1e-3));
            if area_m2 > 0.0 {
                let thrust_px = r.boost_speed / area_m2;
                if thrust_px < -self.world.gravity_y {
                    w.push(format!(
                        "rocket.boost_speed {} cannot lift the rocket against gravity {}",
                        r.boost_speed, self.world.gravity_y
                    ));
                }
            }
        }
        if !(r.linear_damping >= 0.0 && r.angular_damping >= 0.0) {
            w.push("rocket damping must be >= 0".into());
        }
        if self.debug.log_interval <= 0.0 {
            w.push("debug.log_interval must be > 0".into());
        }
        w
    }
}
