// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for loading and validating mapping files.

use super::ConversionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is neither YAML nor TOML.
    #[error("Unsupported mapping file format: '{0}'")]
    UnsupportedFormat(String),

    /// Two record types share a name.
    #[error("Duplicate record type: '{0}'")]
    DuplicateRecord(String),

    /// A profile targets a record type the file does not declare.
    #[error("Profile '{profile}' targets unknown record type '{record}'")]
    UnknownRecord { profile: String, record: String },

    /// A profile refers to a field its record type does not declare.
    #[error("Profile '{profile}' is invalid: {source}")]
    InvalidProfile {
        profile: String,
        #[source]
        source: ConversionError,
    },

    /// Several problems were found; each is listed on its own line.
    #[error("Mapping file validation failed:\n{}", join_lines(.0))]
    Multiple(Vec<ConfigError>),
}

fn join_lines(errors: &[ConfigError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("\n")
}
