//! Help banner configuration.
//!
//! Driver front ends that share one option table (the compiler, the
//! interpreter, the REPL) differ only in the banner printed above the option
//! list. [`HelpConfig`] captures that banner and can be kept in YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! overview: Swift compiler
//! usage: swiftc
//! include_hidden: false
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Overview shown by the compiler driver.
pub const DEFAULT_OVERVIEW: &str = "Swift compiler";

/// Usage line shown by the compiler driver.
pub const DEFAULT_USAGE: &str = "swiftc";

/// Banner settings for [`render_help`](crate::render_help).
///
/// Missing keys fall back to the compiler driver defaults.
///
/// # Examples
///
/// ```
/// use swift_driver_core::HelpConfig;
///
/// let config: HelpConfig = serde_yaml::from_str("usage: swift repl").unwrap();
/// assert_eq!(config.usage, "swift repl");
/// assert_eq!(config.overview, "Swift compiler");
/// assert!(!config.include_hidden);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Text after `OVERVIEW:`.
    pub overview: String,
    /// Text after `USAGE:`.
    pub usage: String,
    /// Whether hidden options are listed when the caller does not say.
    pub include_hidden: bool,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            overview: DEFAULT_OVERVIEW.to_string(),
            usage: DEFAULT_USAGE.to_string(),
            include_hidden: false,
        }
    }
}

impl HelpConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::DriverError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::DriverError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::DriverError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::DriverError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DriverError;

    #[test]
    fn test_default_is_compiler_banner() {
        let config = HelpConfig::default();
        assert_eq!(config.overview, "Swift compiler");
        assert_eq!(config.usage, "swiftc");
        assert!(!config.include_hidden);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("help.yaml");

        let config = HelpConfig {
            overview: "Swift interpreter".to_string(),
            usage: "swift [options] <inputs>".to_string(),
            include_hidden: true,
        };
        config.save(&path).unwrap();

        let loaded = HelpConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = HelpConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, DriverError::IoError(_)));
    }

    #[test]
    fn test_load_malformed_yaml_is_yaml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "overview: [unterminated").unwrap();

        let err = HelpConfig::load(&path).unwrap_err();
        assert!(matches!(err, DriverError::YamlError(_)));
    }
}
