use bevy::prelude::*;
use serde::Deserialize;

use crate::gameplay::flight::ports::SurfaceRole;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Vec2Def { pub x: f32, pub y: f32 }
impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self { Vec2::new(v.x, v.y) }
}

/// Back-and-forth motion: full `movement` offset reached every half `period`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct OscillateDef { pub movement: Vec2Def, pub period: f32 }

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BlockDef {
    pub position: Vec2Def,
    /// Full extents (not half extents).
    pub size: Vec2Def,
    /// `Friendly`, `Finish`; anything else is an obstacle.
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub oscillate: Option<OscillateDef>,
}

impl BlockDef {
    pub fn surface_role(&self) -> SurfaceRole { SurfaceRole::from_tag(&self.role) }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LevelLayout {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    pub rocket: Vec2Def,
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

impl LevelLayout {
    pub fn from_ron_str(txt: &str) -> Result<Self, String> {
        let lf: LevelLayout = ron::from_str(txt).map_err(|e| format!("parse layout: {e}"))?;
        if lf.version != 1 {
            return Err(format!("LevelLayout version {} unsupported (expected 1)", lf.version));
        }
        Ok(lf)
    }

    /// Suspicious but loadable content.
    pub fn warnings(&self) -> Vec<String> {
        let mut w = Vec::new();
        for (i, b) in self.blocks.iter().enumerate() {
            if b.size.x <= 0.0 || b.size.y <= 0.0 {
                w.push(format!("block {i}: non-positive size {}x{} (skipped)", b.size.x, b.size.y));
            }
            if let Some(osc) = &b.oscillate {
                if osc.period <= f32::EPSILON {
                    w.push(format!("block {i}: oscillate period {} too small; block stays put", osc.period));
                }
            }
        }
        if !self.blocks.iter().any(|b| b.surface_role() == SurfaceRole::Finish) {
            w.push(format!("level '{}' has no Finish block", self.name));
        }
        w
    }
}
