//! Data loading and spawn content
//!
//! Spawn templates, their day/night catalog, and the controller
//! configuration, loaded from external RON files.

pub mod catalog;
pub mod config;
pub mod loader;
pub mod templates;

pub use catalog::TemplateCatalog;
pub use config::SpawnConfig;
pub use loader::{export_default_data, DataManager};
pub use templates::{default_spawn_templates, SpawnPeriod, SpawnTemplate};
