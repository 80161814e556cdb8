//! Config file loading

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::toml_schema::{CliSection, PyprojectToml};

/// Error type for configuration loading.
///
/// Both variants carry the path the load was attempted on, so callers can
/// report it without tracking the path themselves.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading the file
    Io(PathBuf, io::Error),
    /// TOML parsing error, including wrongly typed recognized keys
    Parse(PathBuf, toml::de::Error),
}

impl ConfigError {
    /// True when the failure is simply a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io(_, e) if e.kind() == io::ErrorKind::NotFound)
    }

    /// Path of the file the load was attempted on.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Io(path, _) | ConfigError::Parse(path, _) => path,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "failed to read {}: {e}", path.display()),
            ConfigError::Parse(path, e) => write!(f, "failed to parse {}: {e}", path.display()),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
        }
    }
}

/// Load a pyproject.toml and extract its `tool.render-engine.cli` table.
///
/// A document without the table yields an empty section. A missing file is
/// an `Io` error answering true to [`ConfigError::is_not_found`].
pub fn load_cli_section(path: &Path) -> Result<CliSection, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
    let manifest: PyprojectToml =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    Ok(manifest.into_cli_section())
}
