//! Index tuning loaded from TOML.
//!
//! ```toml
//! [index]
//! initial_capacity = 4096
//! record_metrics = false
//! ```

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

/// Upper bound on pre-sized build rows.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 28;

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("invalid index config: {message}")]
    Parse { message: String },

    #[error("initial_capacity {capacity} exceeds the maximum of {max}")]
    InvalidCapacity { capacity: usize, max: usize },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

///
/// IndexConfig
///
/// Construction options for a typed as-of index.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Build rows to reserve space for up front.
    pub initial_capacity: usize,

    /// Emit index metrics events.
    pub record_metrics: bool,
}

impl IndexConfig {
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            record_metrics: true,
        }
    }

    #[must_use]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    #[must_use]
    pub const fn with_metrics(mut self, record_metrics: bool) -> Self {
        self.record_metrics = record_metrics;
        self
    }

    /// Parse the `[index]` table of a TOML document. A missing table yields
    /// the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        file.index.validate()?;

        Ok(file.index)
    }

    /// Read and parse a TOML config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        Self::from_toml_str(&source)
    }

    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::InvalidCapacity {
                capacity: self.initial_capacity,
                max: MAX_INITIAL_CAPACITY,
            });
        }

        Ok(())
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

// Top-level document; other tables belong to other components.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    index: IndexConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = IndexConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, IndexConfig::default());
        assert!(config.record_metrics);
    }

    #[test]
    fn index_table_overrides_defaults() {
        let config = IndexConfig::from_toml_str(
            r"
            [index]
            initial_capacity = 4096
            record_metrics = false

            [engine]
            threads = 8
            ",
        )
        .expect("config");

        assert_eq!(config.initial_capacity, 4096);
        assert!(!config.record_metrics);
    }

    #[test]
    fn unknown_index_keys_are_rejected() {
        let err = IndexConfig::from_toml_str("[index]\ncapacity = 1\n").expect_err("unknown key");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn oversized_capacity_is_rejected() {
        let source = format!("[index]\ninitial_capacity = {}\n", MAX_INITIAL_CAPACITY + 1);
        let err = IndexConfig::from_toml_str(&source).expect_err("too large");

        assert_eq!(
            err,
            ConfigError::InvalidCapacity {
                capacity: MAX_INITIAL_CAPACITY + 1,
                max: MAX_INITIAL_CAPACITY,
            }
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = IndexConfig::from_path("/nonexistent/asofdb.toml").expect_err("missing");
        assert!(matches!(err, ConfigError::Read { path, .. } if path.ends_with("asofdb.toml")));
    }
}
