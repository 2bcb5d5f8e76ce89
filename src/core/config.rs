//! Key configuration.
//!
//! Resolves which key to use from, in order: an explicit key, an explicit
//! key file, and the default key file under the user config directory.
//! Environment variables (`ENCVAR_KEY`, `ENCVAR_KEY_FILE`) are folded into
//! the explicit options by the CLI parser.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::DEFAULT_KEY_FILE;
use crate::core::key::KeyWithType;
use crate::error::{ConfigError, Result};

/// Where a key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// A key in textual `<ALGO>:<base64>` form.
    Inline(String),
    /// A file holding a key in textual form.
    File(PathBuf),
}

impl KeySource {
    /// Pick the source from explicit options, falling back to the default
    /// key file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoKey` if nothing was given and the default
    /// key file does not exist.
    pub fn resolve(key: Option<String>, key_file: Option<PathBuf>) -> Result<Self> {
        if let Some(key) = key {
            debug!("using inline key");
            return Ok(Self::Inline(key));
        }
        if let Some(path) = key_file {
            debug!(path = %path.display(), "using key file");
            return Ok(Self::File(path));
        }
        let path = default_key_path()?;
        if path.exists() {
            debug!(path = %path.display(), "using default key file");
            return Ok(Self::File(path));
        }
        Err(ConfigError::NoKey(path.display().to_string()).into())
    }

    /// Load and parse the key.
    pub fn load(&self) -> Result<KeyWithType> {
        match self {
            Self::Inline(text) => KeyWithType::parse(text),
            Self::File(path) => read_key_file(path),
        }
    }
}

/// Default key file location (`<config dir>/encvar/key`).
pub fn default_key_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join(DEFAULT_KEY_FILE))
}

/// Read a key file holding a key in textual form.
pub fn read_key_file(path: &Path) -> Result<KeyWithType> {
    debug!(path = %path.display(), "loading key");
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadKeyFile {
        path: path.display().to_string(),
        source,
    })?;
    KeyWithType::parse(&contents)
}

/// Write a key file, creating parent directories.
///
/// The file is restricted to the owner (0600) on Unix.
///
/// # Errors
///
/// Returns `ConfigError::KeyFileExists` if the file exists and `force` is
/// not set.
pub fn write_key_file(path: &Path, key: &KeyWithType, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::KeyFileExists(path.display().to_string()).into());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, format!("{}\n", key.encode().as_str()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    }

    debug!(path = %path.display(), algorithm = key.algorithm(), "wrote key file");
    Ok(())
}
