//! TOML configuration for the workshop shell.
//!
//! Every key is optional:
//!
//! ```toml
//! catalog_path = "catalog.csv"
//! default_unit_price = "10.00"
//! log_level = "debug"
//! log_file = "workshop.log"
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use workshop_core::{SparePart, input::MAX_UNIT_PRICE};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// CSV catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Unit price for spare parts added without one.
    pub default_unit_price: Option<Decimal>,
    /// Bare level or full `EnvFilter` directive.
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Command-line values win over file values.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        if log_level.is_some() {
            self.log_level = log_level;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    pub fn unit_price(&self) -> Decimal {
        self.default_unit_price
            .filter(|p| !p.is_sign_negative() && *p <= MAX_UNIT_PRICE)
            .unwrap_or(SparePart::DEFAULT_UNIT_PRICE)
    }

    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.unit_price(), dec!(10.00));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn reads_every_key() {
        let config = AppConfig::from_toml_str(
            r#"
            catalog_path = "catalog.csv"
            default_unit_price = "12.50"
            log_level = "debug"
            log_file = "workshop.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.csv")));
        assert_eq!(config.unit_price(), dec!(12.50));
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("workshop.log")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml_str("colour = \"blue\"").unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn negative_unit_price_falls_back_to_default() {
        let config = AppConfig::from_toml_str("default_unit_price = \"-3\"").unwrap();

        assert_eq!(config.unit_price(), dec!(10.00));
    }

    #[test]
    fn oversized_unit_price_falls_back_to_default() {
        let config = AppConfig::from_toml_str("default_unit_price = \"2000000000\"").unwrap();

        assert_eq!(config.unit_price(), dec!(10.00));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = AppConfig::from_toml_str("log_level = \"warn\"\ncatalog_path = \"a.csv\"")
            .unwrap()
            .with_overrides(Some(PathBuf::from("b.csv")), None, None);

        assert_eq!(config.catalog_path, Some(PathBuf::from("b.csv")));
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::from_file(Path::new("no/such/workshop.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
