// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Cross-reference validation for mapping files.
//!
//! Field-level problems inside a record type are caught while parsing. This
//! pass checks what parsing cannot see:
//!
//! 1. **Uniqueness**: record type names are unique
//! 2. **References**: every profile targets a declared record type
//! 3. **Mappings**: every profile only remaps fields its record declares
//!
//! All problems are collected so a broken file is reported in one go.

use crate::config::Config;
use crate::errors::ConfigError;
use crate::observability::messages::config::ProfileRejected;
use crate::observability::messages::StructuredLog;
use std::collections::{HashMap, HashSet};

pub fn validate_config(cfg: &Config) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for record in &cfg.records {
        if !seen.insert(record.name()) {
            errors.push(ConfigError::DuplicateRecord(record.name().to_string()));
        }
    }

    let records: HashMap<&str, _> = cfg.records.iter().map(|r| (r.name(), r)).collect();

    for (name, profile) in &cfg.profiles {
        let error = match records.get(profile.record.as_str()) {
            None => ConfigError::UnknownRecord {
                profile: name.clone(),
                record: profile.record.clone(),
            },
            Some(record) => match profile.fields.validate_against(record) {
                Ok(()) => continue,
                Err(source) => ConfigError::InvalidProfile {
                    profile: name.clone(),
                    source,
                },
            },
        };

        ProfileRejected {
            profile: name,
            reason: &error,
        }
        .log();
        errors.push(error);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A single error as-is, several wrapped in [`ConfigError::Multiple`].
pub(crate) fn collapse_errors(mut errors: Vec<ConfigError>) -> ConfigError {
    if errors.len() == 1 {
        errors.remove(0)
    } else {
        ConfigError::Multiple(errors)
    }
}
