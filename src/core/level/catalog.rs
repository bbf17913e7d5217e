use bevy::prelude::*;
use std::path::Path;

use super::layout::LevelLayout;
use super::registry::{LevelEntry, LevelRegistry};

/// Where level data came from (for logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelSourceMode {
    Embedded,
    #[default]
    Disk,
}

#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub id: String,
    pub layout: LevelLayout,
}

/// Every level parsed up front, in play order.
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelCatalog {
    entries: Vec<CatalogEntry>,
    mode: LevelSourceMode,
}

impl LevelCatalog {
    pub fn new(entries: Vec<CatalogEntry>, mode: LevelSourceMode) -> Self {
        Self { entries, mode }
    }

    /// Parse the registry then every layout it lists through `read_layout`.
    pub fn from_registry(
        registry: &LevelRegistry,
        mode: LevelSourceMode,
        mut read_layout: impl FnMut(&LevelEntry) -> Result<String, String>,
    ) -> Result<Self, String> {
        let mut entries = Vec::with_capacity(registry.list.len());
        for entry in &registry.list {
            let txt = read_layout(entry)?;
            let layout = LevelLayout::from_ron_str(&txt)
                .map_err(|e| format!("level '{}' ({}): {e}", entry.id, entry.layout))?;
            entries.push(CatalogEntry {
                id: entry.id.clone(),
                layout,
            });
        }
        Ok(Self::new(entries, mode))
    }

    /// Load the registry at `path`; layout paths resolve against its directory.
    pub fn load_from_disk(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let registry = LevelRegistry::load_from_file(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_registry(&registry, LevelSourceMode::Disk, |entry| {
            let layout_path = base.join(&entry.layout);
            std::fs::read_to_string(&layout_path)
                .map_err(|e| format!("read layout {}: {e}", layout_path.display()))
        })
    }

    /// Embedded data when built with `embedded_levels`, otherwise the registry on disk.
    pub fn load(registry_path: impl AsRef<Path>) -> Result<Self, String> {
        #[cfg(feature = "embedded_levels")]
        {
            let _ = registry_path;
            super::embedded_levels::embedded_catalog()
        }
        #[cfg(not(feature = "embedded_levels"))]
        {
            Self::load_from_disk(registry_path)
        }
    }

    pub fn mode(&self) -> LevelSourceMode {
        self.mode
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.id.as_str())
    }

    /// Start level selection: `requested` (CLI flag or `LEVEL_ID`) > `configured` > first level.
    /// Unknown ids fall through to the next candidate and produce a warning.
    pub fn resolve_start(&self, requested: Option<&str>, configured: &str) -> (usize, Vec<String>) {
        let mut warnings = Vec::new();
        let candidates = [("requested", requested.unwrap_or("")), ("configured", configured)];
        for (source, id) in candidates {
            let id = id.trim();
            if id.is_empty() {
                continue;
            }
            match self.index_of(id) {
                Some(index) => return (index, warnings),
                None => warnings.push(format!(
                    "{source} level '{id}' not found in {:?}",
                    self.ids().collect::<Vec<_>>()
                )),
            }
        }
        (0, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LevelCatalog {
        let registry = LevelRegistry::from_ron_str(
            r#"(version: 1, list: [(id: "one", layout: "1"), (id: "two", layout: "2"), (id: "three", layout: "3")])"#,
        )
        .expect("registry");
        LevelCatalog::from_registry(&registry, LevelSourceMode::Embedded, |_| {
            Ok("(version: 1, rocket: (x: 0.0, y: 0.0))".to_string())
        })
        .expect("catalog")
    }

    #[test]
    fn start_level_precedence() {
        let c = catalog();
        assert_eq!(c.resolve_start(Some("three"), "two"), (2, vec![]));
        assert_eq!(c.resolve_start(None, "two"), (1, vec![]));
        assert_eq!(c.resolve_start(Some("  "), ""), (0, vec![]));
        let (index, warnings) = c.resolve_start(Some("nope"), "two");
        assert_eq!(index, 1);
        assert_eq!(warnings.len(), 1);
        let (index, warnings) = c.resolve_start(Some("nope"), "also_nope");
        assert_eq!(index, 0);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn layout_errors_name_the_level() {
        let registry =
            LevelRegistry::from_ron_str(r#"(version: 1, list: [(id: "broken", layout: "b.ron")])"#)
                .expect("registry");
        let err = LevelCatalog::from_registry(&registry, LevelSourceMode::Disk, |_| {
            Ok("(not a layout".to_string())
        })
        .unwrap_err();
        assert!(err.contains("broken"), "{err}");
    }

    #[test]
    fn shipped_levels_load_from_disk() {
        let root = env!("CARGO_MANIFEST_DIR");
        let c = LevelCatalog::load_from_disk(Path::new(root).join("assets/levels/levels.ron"))
            .expect("shipped registry loads");
        assert_eq!(c.len(), 3);
        for i in 0..c.len() {
            let entry = c.get(i).expect("entry");
            assert!(entry.layout.warnings().is_empty(), "{}: {:?}", entry.id, entry.layout.warnings());
        }
    }
}
