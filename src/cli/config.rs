//! Configuration file structure
//!
//! All fields are optional; a missing file section falls back to the
//! built-in default. Without `--config` the defaults are used as-is.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::registry::DEFAULT_REGISTRY_CAPACITY;
use crate::store::{StoreConfig, DEFAULT_MAX_LOAD_PERCENT, DEFAULT_TOP_N, MAX_TABLE_CAPACITY};
use crate::version::DEFAULT_INDEX_CAPACITY;

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Initial slot count of the file registry (default 101)
    #[serde(default = "default_registry_capacity")]
    pub registry_capacity: usize,

    /// Initial slot count of each file's version index (default 101)
    #[serde(default = "default_version_index_capacity")]
    pub version_index_capacity: usize,

    /// Whether tables grow when they fill up (default true)
    #[serde(default = "default_grow_tables")]
    pub grow_tables: bool,

    /// Occupancy percentage that triggers growth, 1..=100 (default 75)
    #[serde(default = "default_max_load_percent")]
    pub max_load_percent: u8,

    /// Ranking size when RECENT_FILES or BIGGEST_TREES give none (default 5)
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_registry_capacity() -> usize {
    DEFAULT_REGISTRY_CAPACITY
}
fn default_version_index_capacity() -> usize {
    DEFAULT_INDEX_CAPACITY
}
fn default_grow_tables() -> bool {
    true
}
fn default_max_load_percent() -> u8 {
    DEFAULT_MAX_LOAD_PERCENT
}
fn default_top_n() -> usize {
    DEFAULT_TOP_N
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            registry_capacity: default_registry_capacity(),
            version_index_capacity: default_version_index_capacity(),
            grow_tables: default_grow_tables(),
            max_load_percent: default_max_load_percent(),
            default_top_n: default_top_n(),
            log_level: default_log_level(),
        }
    }
}

impl VaultConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: VaultConfig = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        check_capacity("registry_capacity", self.registry_capacity)?;
        check_capacity("version_index_capacity", self.version_index_capacity)?;

        if !(1..=100).contains(&self.max_load_percent) {
            return Err(CliError::config_error(format!(
                "Invalid max_load_percent: {}. Expected a value in 1..=100.",
                self.max_load_percent
            )));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`.
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(e))
    }

    /// Table sizing handed to the store.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig {
            registry_capacity: self.registry_capacity,
            version_index_capacity: self.version_index_capacity,
            grow_tables: self.grow_tables,
            max_load_percent: self.max_load_percent,
            default_top_n: self.default_top_n,
        }
    }
}

fn check_capacity(field: &str, value: usize) -> CliResult<()> {
    if value == 0 || value > MAX_TABLE_CAPACITY {
        return Err(CliError::config_error(format!(
            "Invalid {}: {}. Expected a value in 1..={}.",
            field, value, MAX_TABLE_CAPACITY
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_defaults() {
        let config = VaultConfig::from_json("{}").unwrap();
        assert_eq!(config, VaultConfig::default());
        assert_eq!(config.store_config(), StoreConfig::default());
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_config_loads_from_file() {
        let file = write_config(
            r#"{"registry_capacity": 7, "grow_tables": false, "default_top_n": 2, "log_level": "warn"}"#,
        );
        let config = VaultConfig::load(file.path()).unwrap();

        assert_eq!(config.registry_capacity, 7);
        assert_eq!(config.version_index_capacity, 101);
        assert!(!config.grow_tables);
        assert_eq!(config.store_config().default_top_n, 2);
        assert_eq!(config.severity().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        for body in [
            r#"{"registry_capacity": 0}"#,
            r#"{"version_index_capacity": 0}"#,
            r#"{"registry_capacity": 1000000000000000000}"#,
            r#"{"version_index_capacity": 16777217}"#,
            r#"{"max_load_percent": 0}"#,
            r#"{"max_load_percent": 101}"#,
            r#"{"log_level": "loud"}"#,
            "not json",
        ] {
            let err = VaultConfig::from_json(body).unwrap_err();
            assert_eq!(err.code_str(), "VAULT_CLI_CONFIG_ERROR", "body: {}", body);
        }
    }

    #[test]
    fn test_largest_capacity_accepted() {
        let config = VaultConfig::from_json(&format!(
            r#"{{"registry_capacity": {0}, "version_index_capacity": {0}}}"#,
            MAX_TABLE_CAPACITY
        ))
        .unwrap();
        assert_eq!(config.store_config().registry_capacity, MAX_TABLE_CAPACITY);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = VaultConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.message().starts_with("Failed to read config"));
    }

    #[test]
    fn test_no_path_uses_defaults() {
        assert_eq!(
            VaultConfig::load_or_default(None).unwrap(),
            VaultConfig::default()
        );
    }
}
