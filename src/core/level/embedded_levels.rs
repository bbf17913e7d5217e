//! Compile-time embedded level data (`embedded_levels` feature).
//!
//! Adding a level means adding its layout to `EMBEDDED_LAYOUTS` as well as to
//! `assets/levels/levels.ron`.
use super::catalog::{LevelCatalog, LevelSourceMode};
use super::registry::LevelRegistry;

const REGISTRY_RON: &str = include_str!("../../../assets/levels/levels.ron");

/// Layout file name (as written in the registry) -> contents.
const EMBEDDED_LAYOUTS: &[(&str, &str)] = &[
    ("launch_pad.ron", include_str!("../../../assets/levels/launch_pad.ron")),
    ("the_gap.ron", include_str!("../../../assets/levels/the_gap.ron")),
    ("pendulum.ron", include_str!("../../../assets/levels/pendulum.ron")),
];

pub fn embedded_catalog() -> Result<LevelCatalog, String> {
    let registry = LevelRegistry::from_ron_str(REGISTRY_RON)?;
    LevelCatalog::from_registry(&registry, LevelSourceMode::Embedded, |entry| {
        EMBEDDED_LAYOUTS
            .iter()
            .find(|(name, _)| *name == entry.layout)
            .map(|(_, txt)| txt.to_string())
            .ok_or_else(|| format!("embedded layout '{}' not compiled in", entry.layout))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_level_is_embedded() {
        let catalog = embedded_catalog().expect("embedded catalog");
        assert_eq!(catalog.mode(), LevelSourceMode::Embedded);
        assert_eq!(catalog.len(), EMBEDDED_LAYOUTS.len());
    }
}
