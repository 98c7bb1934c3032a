//! Configuration management for the qrecip CLI
//!
//! Values resolve as command-line flag, then configuration file, then the
//! built-in reference defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use qrecip_core::SeriesParams;

use crate::error::{CliError, CliResult};

/// Global CLI configuration
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default logging level when `RUST_LOG` is unset
    pub log_level: Option<String>,

    /// Series defaults
    pub series: SeriesParams,
}

impl CliConfig {
    /// Load configuration from file, falling back to defaults if it does not exist
    pub fn load_from_file(path: &Path) -> CliResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            debug!("loading config from {}", path.display());
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicitly requested file, or the default location if none was given
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(CliError::missing_resource(format!(
                "config file {}",
                path.display()
            ))),
            Some(path) => Self::load_from_file(path),
            None => match Self::default_config_path() {
                Ok(path) => Self::load_from_file(&path),
                Err(err) => {
                    debug!("no default config location: {}", err);
                    Ok(Self::default())
                }
            },
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::config("Could not determine config directory"))?;
        Ok(config_dir.join("qrecip").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_default_file_yields_defaults() {
        let cfg = CliConfig::load_from_file(Path::new("/nonexistent/qrecip.toml")).unwrap();
        assert_eq!(cfg, CliConfig::default());
        assert_eq!(cfg.series, SeriesParams::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let err = CliConfig::resolve(Some(Path::new("/nonexistent/qrecip.toml"))).unwrap_err();
        assert!(matches!(err, CliError::MissingResource(_)));
    }

    #[test]
    fn test_partial_file() {
        let cfg: CliConfig = toml::from_str("log_level = \"debug\"\n[series]\nterms = 10\n").unwrap();
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
        assert_eq!(cfg.series.terms, 10);
        assert_eq!(cfg.series.rounds, SeriesParams::default().rounds);
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[series]\nterms = \"many\"\n").unwrap();
        let err = CliConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::Serde(_)));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = toml::from_str::<CliConfig>("[series]\nterm = 10\n").unwrap_err();
        assert!(err.to_string().contains("term"), "{}", err);
        assert!(toml::from_str::<CliConfig>("log_levl = \"info\"\n").is_err());
    }
}
