//! Ledger configuration
//!
//! Loaded from a JSON file. Every field is optional:
//!
//! ```json
//! {
//!   "data_dir": "./stockroom-data",
//!   "slot_key": "inventory_items",
//!   "thresholds": { "low": 20, "critical": 10 },
//!   "categories": [{ "id": "medication", "name": "Medication", "icon": "💊" }],
//!   "log_level": "warn"
//! }
//! ```

mod errors;

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use errors::{ConfigError, ConfigResult};

use crate::model::{default_categories, Category, Thresholds};
use crate::observability::Severity;
use crate::slot::validate_key;

/// Path used when no `--config` is given.
pub const DEFAULT_CONFIG_PATH: &str = "./stockroom.json";

fn default_data_dir() -> String {
    "./stockroom-data".to_string()
}
fn default_slot_key() -> String {
    "inventory_items".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Directory holding the persisted slot
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Name of the slot holding the record collection
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// One of trace, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            slot_key: default_slot_key(),
            thresholds: Thresholds::default(),
            categories: default_categories(),
            log_level: default_log_level(),
        }
    }
}

impl InventoryConfig {
    /// Load and validate configuration from `path`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: InventoryConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::invalid("data_dir must not be empty"));
        }

        validate_key(&self.slot_key).map_err(|e| ConfigError::invalid(e.to_string()))?;

        if self.thresholds.critical > self.thresholds.low {
            return Err(ConfigError::invalid(format!(
                "thresholds.critical ({}) must not exceed thresholds.low ({})",
                self.thresholds.critical, self.thresholds.low
            )));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(ConfigError::invalid("category id must not be empty"));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(ConfigError::invalid(format!(
                "Invalid log_level: '{}'. Expected trace, info, warn or error.",
                self.log_level
            )));
        }

        Ok(())
    }

    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }

    /// Logging floor. Falls back to WARN for an unparseable level.
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Warn)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Advisory only: the store accepts any category id.
    pub fn is_known_category(&self, id: &str) -> bool {
        self.category(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = InventoryConfig::from_json("{}").unwrap();
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(config.data_dir, "./stockroom-data");
        assert_eq!(config.slot_key, "inventory_items");
        assert_eq!(config.thresholds, Thresholds { low: 20, critical: 10 });
        assert_eq!(config.categories.len(), 6);
        assert_eq!(config.severity(), Severity::Warn);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stockroom.json");
        let data_dir = temp_dir.path().join("data");

        let config = json!({
            "data_dir": data_dir.to_string_lossy(),
            "thresholds": { "low": 8, "critical": 3 },
            "log_level": "info"
        });
        fs::write(&path, config.to_string()).unwrap();

        let config = InventoryConfig::load(&path).unwrap();
        assert_eq!(config.data_path(), data_dir.as_path());
        assert_eq!(config.thresholds.low, 8);
        assert_eq!(config.severity(), Severity::Info);
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        assert!(matches!(InventoryConfig::load(&path), Err(ConfigError::Read { .. })));
        assert_eq!(InventoryConfig::load_or_default(&path).unwrap(), InventoryConfig::default());
    }

    #[test]
    fn test_rejects_critical_above_low() {
        let err = InventoryConfig::from_json(r#"{"thresholds": {"low": 5, "critical": 6}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_bad_slot_key() {
        assert!(InventoryConfig::from_json(r#"{"slot_key": "../escape"}"#).is_err());
        assert!(InventoryConfig::from_json(r#"{"slot_key": ""}"#).is_err());
    }

    #[test]
    fn test_rejects_duplicate_categories() {
        let config = json!({
            "categories": [
                { "id": "a", "name": "A" },
                { "id": "a", "name": "Again" }
            ]
        });
        assert!(InventoryConfig::from_json(&config.to_string()).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(InventoryConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            InventoryConfig::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_category_lookup() {
        let config = InventoryConfig::default();
        assert_eq!(config.category("medication").unwrap().name, "Medication");
        assert!(config.is_known_category("other"));
        assert!(!config.is_known_category("weapons"));
    }
}
