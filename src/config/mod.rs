use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfigData {
    /// Override for the region dataset path (defaults to the bundled dataset)
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Override for the marker storage slot (defaults to the data directory)
    #[serde(default)]
    pub marker_slot_path: Option<PathBuf>,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
        }
    }
}

impl AppConfig {
    /// The region dataset path, honoring the config override.
    pub fn dataset_path(&self) -> PathBuf {
        self.data
            .dataset_path
            .clone()
            .unwrap_or_else(crate::paths::region_dataset_file)
    }

    /// The marker storage slot path, honoring the config override.
    pub fn marker_slot_path(&self) -> PathBuf {
        self.data
            .marker_slot_path
            .clone()
            .unwrap_or_else(crate::paths::marker_slot_file)
    }
}

/// Load configuration from disk; a corrupt or unreadable file resets to defaults.
fn load_config() -> AppConfig {
    let config_path = crate::paths::config_file();

    let data = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    data
                }
                Err(e) => {
                    warn!("Failed to parse config file, using defaults: {}", e);
                    AppConfigData::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file, using defaults: {}", e);
                AppConfigData::default()
            }
        }
    } else {
        info!("No config file found, using defaults");
        AppConfigData::default()
    };

    AppConfig {
        data,
        config_path,
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource.
///
/// Writes a default config file on first run so the overrides are discoverable.
fn load_config_system(mut config: ResMut<AppConfig>) {
    let loaded = load_config();
    let first_run = !loaded.config_path.exists();
    config.data = loaded.data;
    config.config_path = loaded.config_path;

    if first_run {
        save_config(&config);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert!(data.dataset_path.is_none());
        assert!(data.marker_slot_path.is_none());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            dataset_path: Some(PathBuf::from("/data/boundaries.geojson")),
            marker_slot_path: Some(PathBuf::from("/data/markers.json")),
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.dataset_path, data.dataset_path);
        assert_eq!(parsed.marker_slot_path, data.marker_slot_path);
    }

    #[test]
    fn test_empty_object_deserializes() {
        // Older config files without the override fields still parse
        let parsed: AppConfigData = serde_json::from_str("{}").unwrap();
        assert!(parsed.dataset_path.is_none());
        assert!(parsed.marker_slot_path.is_none());
    }

    #[test]
    fn test_default_paths_fall_back() {
        let config = AppConfig::default();
        assert!(
            config
                .dataset_path()
                .to_string_lossy()
                .ends_with("regions.geojson")
        );
        assert!(
            config
                .marker_slot_path()
                .to_string_lossy()
                .ends_with("markers.json")
        );
    }
}
