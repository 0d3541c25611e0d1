//! Configuration file support for avfdiag.
//!
//! Loads and validates avfdiag configuration from TOML files.
//! Default location: /etc/avfdiag/avfdiag.toml

use crate::error::{DiagError, DiagResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/avfdiag/avfdiag.toml";

/// Log levels accepted by `log_level`.
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Complete avfdiag configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagConfig {
    /// Snapshot file exported by the driver.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Graph node index of the AVF input node; trace next-node indices are
    /// resolved against its next-node table.
    #[serde(default)]
    pub trace_node_index: u32,
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("/var/run/avfdiag/snapshot.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DiagConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            log_level: default_log_level(),
            trace_node_index: 0,
        }
    }
}

impl DiagConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> DiagResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| DiagError::io(path, e))?;
        Self::from_toml(path, &contents)
    }

    fn from_toml(path: &Path, contents: &str) -> DiagResult<Self> {
        let config: DiagConfig = toml::from_str(contents).map_err(|source| DiagError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// A missing file is only tolerated for the default location; an
    /// explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> DiagResult<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG_PATH), false),
        };

        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(path, &contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(DiagError::io(path, e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> DiagResult<()> {
        if self.snapshot_path.as_os_str().is_empty() {
            return Err(DiagError::invalid_config(
                "snapshot_path",
                "must not be empty",
            ));
        }

        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(DiagError::invalid_config(
                "log_level",
                format!("unknown level '{}'", self.log_level),
            ));
        }

        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        snapshot_path: Option<PathBuf>,
        log_level: Option<String>,
        trace_node_index: Option<u32>,
    ) -> DiagResult<Self> {
        if let Some(path) = snapshot_path {
            self.snapshot_path = path;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(index) = trace_node_index {
            self.trace_node_index = index;
        }
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = DiagConfig::default();
        assert_eq!(config.snapshot_path, PathBuf::from("/var/run/avfdiag/snapshot.json"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.trace_node_index, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "trace_node_index = 12").unwrap();

        let config = DiagConfig::from_file(file.path()).unwrap();
        assert_eq!(config.trace_node_index, 12);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"loud\"").unwrap();

        let err = DiagConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DiagError::InvalidConfig { ref field, .. } if field == "log_level"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "trace_node_index = \"seven\"").unwrap();

        let err = DiagConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DiagError::ConfigParse { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = DiagConfig::load(Some(Path::new("/nonexistent/avfdiag.toml"))).unwrap_err();
        assert!(matches!(err, DiagError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let config = DiagConfig::default()
            .with_overrides(Some(PathBuf::from("/tmp/s.json")), Some("debug".into()), Some(3))
            .unwrap();
        assert_eq!(config.snapshot_path, PathBuf::from("/tmp/s.json"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.trace_node_index, 3);

        assert!(DiagConfig::default()
            .with_overrides(Some(PathBuf::new()), None, None)
            .is_err());
    }
}
