// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::validation::collapse_errors;
use crate::errors::ConfigError;
use crate::mapping::NameMapping;
use crate::observability::messages::config::MappingFileLoaded;
use crate::observability::messages::StructuredLog;
use crate::schema::RecordType;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A mapping file: record type declarations plus named mapping profiles.
///
/// Record types are validated as they are parsed (empty or duplicate field
/// names fail the parse). Cross references between profiles and records are
/// checked by [`validate_config`](crate::config::validate_config).
///
/// # Example
/// ```yaml
/// records:
///   - name: Book
///     fields:
///       - { name: title, kind: string }
///       - { name: author, kind: string }
/// profiles:
///   spanish:
///     record: Book
///     fields: { title: titulo, author: autor }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub records: Vec<RecordType>,
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

/// A named name mapping bound to one record type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileConfig {
    /// Name of the record type this profile applies to
    pub record: String,
    /// Field name → external key; fields not listed keep their name
    #[serde(default)]
    pub fields: NameMapping,
}

/// Serialization format of a mapping file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension (`.yaml`, `.yml`, `.toml`).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Parse mapping file contents in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg: Config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a mapping file, choosing the parser from its extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let cfg = parse_config(&content, format)?;

    MappingFileLoaded {
        path: &path.display().to_string(),
        record_count: cfg.records.len(),
        profile_count: cfg.profiles.len(),
    }
    .log();

    Ok(cfg)
}

/// Load a mapping file and check that every profile targets a declared record
/// type and only names fields that record declares.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    crate::config::validate_config(&cfg).map_err(collapse_errors)?;

    Ok(cfg)
}
