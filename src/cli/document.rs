//! JSON and TOML documents read from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::walk::{Walk, Walker};
use crate::error::{ConfigError, Result};

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(serde_json::Value),
    Toml(toml::Value),
}

impl Document {
    /// Read and parse a document, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedFormat` for anything but `.json`
    /// and `.toml`.
    pub fn load(path: &Path) -> Result<Self> {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        debug!(path = %path.display(), format = ?format, "loading document");

        match format.as_deref() {
            Some("json") => Ok(Self::Json(serde_json::from_str(&fs::read_to_string(path)?)?)),
            Some("toml") => Ok(Self::Toml(toml::from_str(&fs::read_to_string(path)?)?)),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }

    /// Render the document in its own format.
    pub fn render(&self) -> Result<String> {
        match self {
            Self::Json(value) => {
                let mut out = serde_json::to_string_pretty(value)?;
                out.push('\n');
                Ok(out)
            }
            Self::Toml(value) => Ok(toml::to_string_pretty(value)?),
        }
    }
}

impl Walk for Document {
    fn walk(&mut self, walker: &mut Walker<'_>) -> Result<()> {
        match self {
            Self::Json(value) => value.walk(walker),
            Self::Toml(value) => value.walk(walker),
        }
    }
}
