//! User preference management with XDG Base Directory compliance.
//!
//! This module provides the tunable numbers of the catalog core (popular
//! threshold, shuffle window, attenuation curve) and the catalog location,
//! persisted as JSON under the XDG config directory.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::PathBuf,
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

use crate::{
    catalog::{CatalogSettings, DEFAULT_POPULAR_THRESHOLD},
    display::{DEFAULT_MAX_VOLUME, DEFAULT_SILENCE_DISTANCE},
};

/// Application directory name under the XDG base directories.
const APP_DIR: &str = "showreel";

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable user settings structure with default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Path to the catalog JSON asset.
    pub catalog_path: Option<String>,
    /// View-count cutoff for the popular lane (None = catalog setting or 500 000).
    pub popular_threshold: Option<u64>,
    /// Preferred number of recent picks the shuffle avoids.
    pub shuffle_window: usize,
    /// Distance at which proximity audio falls silent.
    pub silence_distance: f64,
    /// Proximity audio volume at distance 0.
    pub max_volume: u32,
    /// Artists shown with a tribute badge.
    pub deceased_artists: Vec<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            popular_threshold: None,
            shuffle_window: 20,
            silence_distance: DEFAULT_SILENCE_DISTANCE,
            max_volume: DEFAULT_MAX_VOLUME,
            deceased_artists: vec![],
        }
    }
}

impl UserSettings {
    /// Checks numeric ranges.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.silence_distance.is_finite() || self.silence_distance <= 0.0 {
            return Err(SettingsError::InvalidValue {
                reason: format!(
                    "silence_distance must be a positive number, got {}",
                    self.silence_distance
                ),
            });
        }
        if self.max_volume == 0 {
            return Err(SettingsError::InvalidValue {
                reason: "max_volume must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Resolves the popular-lane threshold.
    ///
    /// User settings win over catalog settings, which win over the built-in default.
    #[must_use]
    pub fn resolve_popular_threshold(&self, catalog: &CatalogSettings) -> u64 {
        self.popular_threshold
            .or(catalog.popular_threshold)
            .unwrap_or(DEFAULT_POPULAR_THRESHOLD)
    }
}

/// Handles loading, saving, and validation of user preferences.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe user settings storage.
    settings: RwLock<UserSettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl Clone for SettingsManager {
    fn clone(&self) -> Self {
        Self {
            settings: RwLock::new(self.settings.read().clone()),
            config_path: self.config_path.clone(),
        }
    }
}

impl SettingsManager {
    /// Creates a new settings manager with default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a new settings manager with a custom config path (for testing).
    ///
    /// # Arguments
    ///
    /// * `config_path` - Custom path for the settings file
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk or fail validation.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings: UserSettings = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            from_str(&contents)?
        } else {
            debug!("Using default settings, no file at {:?}", config_path);
            UserSettings::default()
        };
        settings.validate()?;

        Ok(SettingsManager {
            settings: RwLock::new(settings),
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.settings.read()
    }

    /// Gets the configuration file path.
    pub fn get_config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Validates, applies, and saves new settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the settings are invalid or cannot be saved.
    pub fn update_settings(&self, new_settings: UserSettings) -> Result<(), SettingsError> {
        new_settings.validate()?;
        *self.settings.write() = new_settings;
        self.save_settings()
    }

    fn save_settings(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Gets the settings file path under the XDG config directory.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = xdg_home("XDG_CONFIG_HOME", ".config");
    config_dir.push(APP_DIR);
    config_dir.push("settings.json");
    config_dir
}

/// Gets the application data directory (favorites live here).
#[must_use]
pub fn get_data_dir() -> PathBuf {
    let mut data_dir = xdg_home("XDG_DATA_HOME", ".local/share");
    data_dir.push(APP_DIR);
    data_dir
}

/// Resolves an XDG base directory.
///
/// Uses the environment variable if set and non-empty, otherwise `$HOME/<fallback>`.
fn xdg_home(env_key: &str, home_fallback: &str) -> PathBuf {
    if let Ok(dir) = var(env_key)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(home_fallback);
        return path;
    }

    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use std::{
        fs::write,
        io::{Error, ErrorKind::NotFound},
    };

    use {
        serde_json::{from_str, to_string},
        tempfile::tempdir,
    };

    use crate::{
        catalog::CatalogSettings,
        config::settings::{SettingsError, SettingsManager, UserSettings},
    };

    #[test]
    fn test_user_settings_default() {
        let settings = UserSettings::default();
        assert_eq!(settings.popular_threshold, None);
        assert_eq!(settings.shuffle_window, 20);
        assert_eq!(settings.silence_distance, 35.0);
        assert_eq!(settings.max_volume, 80);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_user_settings_serialization() {
        let settings = UserSettings {
            catalog_path: Some("/srv/videos.json".to_string()),
            popular_threshold: Some(1_000_000),
            shuffle_window: 5,
            silence_distance: 50.0,
            max_volume: 100,
            deceased_artists: vec!["Someone".to_string()],
        };

        let serialized = to_string(&settings).unwrap();
        let deserialized: UserSettings = from_str(&serialized).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: UserSettings = from_str(r#"{"shuffle_window": 3}"#).unwrap();
        assert_eq!(settings.shuffle_window, 3);
        assert_eq!(settings.max_volume, 80);
    }

    #[test]
    fn test_popular_threshold_precedence() {
        let catalog = CatalogSettings {
            popular_threshold: Some(250_000),
        };
        let mut settings = UserSettings::default();
        assert_eq!(
            settings.resolve_popular_threshold(&CatalogSettings::default()),
            500_000
        );
        assert_eq!(settings.resolve_popular_threshold(&catalog), 250_000);

        settings.popular_threshold = Some(10);
        assert_eq!(settings.resolve_popular_threshold(&catalog), 10);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = UserSettings {
            silence_distance: 0.0,
            ..UserSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidValue { .. })
        ));

        let settings = UserSettings {
            max_volume: 0,
            ..UserSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_manager_round_trip_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let manager = SettingsManager::with_config_path(path.clone()).unwrap();
        assert_eq!(*manager.get_settings(), UserSettings::default());

        let updated = UserSettings {
            shuffle_window: 7,
            ..UserSettings::default()
        };
        manager.update_settings(updated.clone()).unwrap();
        assert!(path.exists());

        let reloaded = SettingsManager::with_config_path(path).unwrap();
        assert_eq!(*reloaded.get_settings(), updated);
    }

    #[test]
    fn test_manager_rejects_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        write(&path, r#"{"max_volume": 0}"#).unwrap();
        assert!(SettingsManager::with_config_path(path).is_err());
    }

    #[test]
    fn test_settings_error_display() {
        let io_error = Error::new(NotFound, "File not found");
        let settings_error = SettingsError::IoError(io_error);
        assert!(settings_error.to_string().contains("IO error"));

        let invalid_value_error = SettingsError::InvalidValue {
            reason: "test reason".to_string(),
        };
        assert_eq!(
            invalid_value_error.to_string(),
            "Invalid settings value: test reason"
        );
    }
}
