//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shell
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{MAX_DECIMAL_PLACES, ShellConfig};

/// Loads the shell configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_registry::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./payroll.yaml")?;
/// println!("Average shown to {} places", config.display.decimal_places);
/// # Ok::<(), payroll_registry::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML or unknown enum values
    /// - `display.decimal_places` exceeds [`MAX_DECIMAL_PLACES`]
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<ShellConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| PayrollError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;
        debug!(path = %path_str, ?config, "Configuration loaded");

        Ok(config)
    }

    /// Loads configuration from `path` when given, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> PayrollResult<ShellConfig> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(ShellConfig::default()),
        }
    }

    fn parse(content: &str) -> Result<ShellConfig, String> {
        // An empty document deserializes to unit, not a mapping.
        if content.trim().is_empty() {
            return Ok(ShellConfig::default());
        }
        let config: ShellConfig = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &ShellConfig) -> Result<(), String> {
        let decimal_places = config.display.decimal_places;
        if decimal_places > MAX_DECIMAL_PLACES {
            return Err(format!(
                "display.decimal_places must be at most {MAX_DECIMAL_PLACES}, got {decimal_places}"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListingFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_configuration() {
        let file = write_config("display:\n  decimal_places: 3\n  listing_format: json\n");
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.display.decimal_places, 3);
        assert_eq!(config.display.listing_format, ListingFormat::Json);
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let file = write_config("");
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");
        match result {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file_returns_parse_error() {
        let file = write_config("display: [unclosed\n");
        match ConfigLoader::load(file.path()) {
            Err(PayrollError::ConfigParseError { path, message }) => {
                assert_eq!(path, file.path().display().to_string());
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_excessive_decimal_places() {
        let file = write_config("display:\n  decimal_places: 4000000000\n");
        match ConfigLoader::load(file.path()) {
            Err(PayrollError::ConfigParseError { message, .. }) => {
                assert!(message.contains("decimal_places"));
                assert!(message.contains("4000000000"));
            }
            other => panic!("Expected ConfigParseError error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_decimal_places_boundary() {
        let file = write_config("display:\n  decimal_places: 28\n");
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.display.decimal_places, MAX_DECIMAL_PLACES);

        let file = write_config("display:\n  decimal_places: 29\n");
        assert!(matches!(
            ConfigLoader::load(file.path()),
            Err(PayrollError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = ConfigLoader::load_or_default(None::<&str>).unwrap();
        assert_eq!(config, ShellConfig::default());
    }
}
