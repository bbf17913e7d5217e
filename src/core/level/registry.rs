use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LevelEntry {
    pub id: String,
    /// Layout RON path, relative to the registry file.
    pub layout: String,
}

/// Ordered level list. Position in `list` is the level index used by the flight controller.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LevelRegistry {
    pub version: u32,
    pub list: Vec<LevelEntry>,
}

impl LevelRegistry {
    pub fn from_ron_str(txt: &str) -> Result<Self, String> {
        let reg: LevelRegistry = ron::from_str(txt).map_err(|e| format!("parse registry: {e}"))?;
        if reg.version != 1 {
            return Err(format!("LevelRegistry version {} unsupported (expected 1)", reg.version));
        }
        if reg.list.is_empty() {
            return Err("LevelRegistry list empty".into());
        }
        if let Some(dup) = reg
            .list
            .iter()
            .enumerate()
            .find(|(i, e)| reg.list[..*i].iter().any(|p| p.id == e.id))
        {
            return Err(format!("LevelRegistry duplicate id '{}'", dup.1.id));
        }
        Ok(reg)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let txt = fs::read_to_string(&path).map_err(|e| format!("read registry {:?}: {e}", path.as_ref()))?;
        Self::from_ron_str(&txt).map_err(|e| format!("{:?}: {e}", path.as_ref()))
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.list.iter().position(|e| e.id == id)
    }
}
