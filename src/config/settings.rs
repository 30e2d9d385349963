//! User settings for spendlog
//!
//! A small JSON settings file: schema version, currency symbol, and the
//! category vocabulary. The budget itself is deliberately not persisted;
//! it is re-derived each session from income and savings goal.

use serde::{Deserialize, Serialize};
use std::fs;

use super::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::CategorySet;

/// User settings for spendlog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in all rendered amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category vocabulary (core labels plus the two reserved labels)
    #[serde(default)]
    pub categories: CategorySet,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            categories: CategorySet::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> TrackerResult<Self> {
        let path = paths.settings_file();

        if !path.exists() {
            let settings = Self::default();
            settings.save(paths)?;
            return Ok(settings);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            TrackerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let settings: Settings = serde_json::from_str(&content)?;

        settings
            .categories
            .validate()
            .map_err(|e| TrackerError::Config(format!("Invalid category set: {}", e)))?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> TrackerResult<()> {
        paths.ensure_directories()?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(paths.settings_file(), content).map_err(|e| {
            TrackerError::Config(format!(
                "Failed to write {}: {}",
                paths.settings_file().display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.categories.core_count(), 5);
        assert!(paths.is_initialized());

        // Second load reads the file it just wrote
        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.schema_version, settings.schema_version);
    }

    #[test]
    fn test_save_and_reload_custom_symbol() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".to_string();
        settings.save(&paths).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.currency_symbol, "$");
    }

    #[test]
    fn test_rejects_invalid_category_set() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(
            paths.settings_file(),
            r#"{"schema_version":1,"currency_symbol":"₹","categories":{"core":[],"savings":"S","savings_use":"U"}}"#,
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
    }
}
