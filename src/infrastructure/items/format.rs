//! Item file formats
//!
//! Format is picked from the file extension; the same document shapes are
//! accepted in every format.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{SkilltreeError, SkilltreeResult};

/// Serialization format of an item file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemFormat {
    Json,
    Yaml,
    Toml,
}

impl ItemFormat {
    /// Detect format from the extension
    pub fn from_path(path: &Path) -> SkilltreeResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            _ => Err(SkilltreeError::UnsupportedFormat {
                file: path.to_path_buf(),
            }),
        }
    }

    /// Deserialize `content`; `path` is only used for error messages
    pub fn parse<T: DeserializeOwned>(self, content: &str, path: &Path) -> SkilltreeResult<T> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Yaml => Ok(serde_yaml_ng::from_str(content)?),
            Self::Toml => toml::from_str(content).map_err(|e| SkilltreeError::Toml {
                file: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }
}
