//! RON data loader
//!
//! Loads spawn configuration and templates from external RON files, with
//! fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Result, SpawnError};
use super::config::SpawnConfig;
use super::templates::{default_spawn_templates, SpawnTemplate};

const CONFIG_FILE: &str = "spawn.ron";
const TEMPLATES_FILE: &str = "templates.ron";

/// Manages all external spawn data
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Controller tunables
    pub config: SpawnConfig,
    /// Every spawn-capable template, classified later
    pub templates: Vec<SpawnTemplate>,
}

impl DataManager {
    /// Load from the user config directory, then assets/data, then defaults
    pub fn new() -> Self {
        let mut dirs = Vec::new();
        if let Some(dir) = user_data_directory() {
            dirs.push(dir);
        }
        dirs.push(PathBuf::from("assets/data"));
        Self::load_from_dirs(&dirs)
    }

    /// Load each file from the first directory that has it
    pub fn load_from_dirs(dirs: &[PathBuf]) -> Self {
        let config = first_existing(dirs, CONFIG_FILE)
            .and_then(|path| load_ron::<SpawnConfig>(&path))
            .unwrap_or_default();
        let templates = first_existing(dirs, TEMPLATES_FILE)
            .and_then(|path| load_ron::<Vec<SpawnTemplate>>(&path))
            .unwrap_or_else(default_spawn_templates);

        Self { config, templates }
    }

    /// Get controller configuration
    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Get spawn templates
    pub fn templates(&self) -> &[SpawnTemplate] {
        &self.templates
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            config: SpawnConfig::default(),
            templates: default_spawn_templates(),
        }
    }
}

/// Per-user data directory, if the platform has one
pub fn user_data_directory() -> Option<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "controlled-spawn", "ControlledSpawn")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

fn first_existing(dirs: &[PathBuf], file: &str) -> Option<PathBuf> {
    dirs.iter().map(|dir| dir.join(file)).find(|path| path.exists())
}

fn load_ron<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match fs::read_to_string(path) {
        Ok(content) => match ron::from_str(&content) {
            Ok(value) => {
                log::info!("Loaded {}", path.display());
                Some(value)
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                None
            }
        },
        Err(e) => {
            log::warn!("Failed to read {}: {}. Using defaults.", path.display(), e);
            None
        }
    }
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(base_path: &Path) -> Result<()> {
    fs::create_dir_all(base_path)
        .map_err(|e| SpawnError::Config(format!("Failed to create {}: {}", base_path.display(), e)))?;

    let pretty = ron::ser::PrettyConfig::default();

    let config_ron = ron::ser::to_string_pretty(&SpawnConfig::default(), pretty.clone())
        .map_err(|e| SpawnError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(base_path.join(CONFIG_FILE), config_ron)
        .map_err(|e| SpawnError::Config(format!("Failed to write {}: {}", CONFIG_FILE, e)))?;

    let templates_ron = ron::ser::to_string_pretty(&default_spawn_templates(), pretty)
        .map_err(|e| SpawnError::Config(format!("Failed to serialize templates: {}", e)))?;
    fs::write(base_path.join(TEMPLATES_FILE), templates_ron)
        .map_err(|e| SpawnError::Config(format!("Failed to write {}: {}", TEMPLATES_FILE, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("controlled_spawn_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_then_load_round_trips_defaults() {
        let dir = scratch_dir("export");
        export_default_data(&dir).unwrap();
        assert!(dir.join(CONFIG_FILE).exists());
        assert!(dir.join(TEMPLATES_FILE).exists());

        let manager = DataManager::load_from_dirs(&[dir.clone()]);
        assert_eq!(manager.config, SpawnConfig::default());
        assert_eq!(manager.templates, default_spawn_templates());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = scratch_dir("missing");
        let manager = DataManager::load_from_dirs(&[dir]);
        assert_eq!(manager.config, SpawnConfig::default());
        assert!(!manager.templates.is_empty());
    }

    #[test]
    fn test_first_directory_wins() {
        let override_dir = scratch_dir("override");
        let base_dir = scratch_dir("base");
        fs::create_dir_all(&override_dir).unwrap();
        export_default_data(&base_dir).unwrap();
        fs::write(override_dir.join(CONFIG_FILE), "(max_enemies: 4)").unwrap();

        let manager = DataManager::load_from_dirs(&[override_dir.clone(), base_dir.clone()]);
        assert_eq!(manager.config.max_enemies, 4);
        assert_eq!(manager.templates, default_spawn_templates());

        let _ = fs::remove_dir_all(&override_dir);
        let _ = fs::remove_dir_all(&base_dir);
    }

    #[test]
    fn test_unparsable_file_falls_back() {
        let dir = scratch_dir("garbage");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TEMPLATES_FILE), "not ron at all [").unwrap();

        let manager = DataManager::load_from_dirs(&[dir.clone()]);
        assert_eq!(manager.templates, default_spawn_templates());

        let _ = fs::remove_dir_all(&dir);
    }
}
