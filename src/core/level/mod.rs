pub mod catalog;
#[cfg(feature = "embedded_levels")]
pub mod embedded_levels;
pub mod layout;
pub mod loader;
pub mod progress;
pub mod registry;

pub use catalog::{LevelCatalog, LevelSourceMode};
pub use loader::LevelLoaderPlugin;
pub use progress::{DeferredLoads, LevelDirector, LevelProgress};
