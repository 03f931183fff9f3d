//! Format-agnostic configuration loading and saving
//!
//! Format is detected from the file extension:
//! - `.toml` -> TOML
//! - `.json` -> JSON
//! - `.yaml`, `.yml` -> YAML

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result, io};

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Load a configuration value from a file.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = io::read_text(path)?;

    match extension_of(path).as_str() {
        "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: "TOML".into(),
            message: e.to_string(),
        }),
        "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: "JSON".into(),
            message: e.to_string(),
        }),
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: "YAML".into(),
            message: e.to_string(),
        }),
        other => Err(Error::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }
}

/// Save a configuration value to a file.
///
/// Uses atomic write to prevent corruption.
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = match extension_of(path).as_str() {
        "toml" => toml::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: "TOML".into(),
            message: e.to_string(),
        })?,
        "json" => serde_json::to_string_pretty(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: "JSON".into(),
            message: e.to_string(),
        })?,
        "yaml" | "yml" => serde_yaml::to_string(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: "YAML".into(),
            message: e.to_string(),
        })?,
        other => {
            return Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            });
        }
    };

    io::write_atomic(path, content.as_bytes())
}
