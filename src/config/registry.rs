// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::config::validation::collapse_errors;
use crate::config::{validate_config, Config};
use crate::converter;
use crate::errors::{ConfigError, ConversionError, ConversionResult};
use crate::mapping::NameMapping;
use crate::record::RecordInstance;
use crate::schema::RecordType;

/// A profile resolved against its record type.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingProfile {
    pub record_type: RecordType,
    pub mapping: NameMapping,
}

/// Record types and mapping profiles from a validated mapping file, looked up by name.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    records: HashMap<String, RecordType>,
    profiles: HashMap<String, MappingProfile>,
}

impl MappingRegistry {
    pub fn record_type(&self, name: &str) -> Option<&RecordType> {
        self.records.get(name)
    }

    pub fn profile(&self, name: &str) -> Option<&MappingProfile> {
        self.profiles.get(name)
    }

    /// Profile names, sorted.
    pub fn profile_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run `from_dict` with a named profile's record type and mapping.
    pub fn from_dict_with_profile(
        &self,
        profile: &str,
        source: &Map<String, Value>,
    ) -> ConversionResult<RecordInstance> {
        let p = self.lookup(profile)?;
        converter::from_dict(&p.record_type, source, &p.mapping)
    }

    /// Run `to_dict` with a named profile's mapping. The instance must be of
    /// the profile's record type.
    pub fn to_dict_with_profile(
        &self,
        profile: &str,
        instance: &RecordInstance,
    ) -> ConversionResult<Map<String, Value>> {
        let p = self.lookup(profile)?;
        if instance.record_type().name() != p.record_type.name() {
            return Err(ConversionError::ProfileMismatch {
                profile: profile.to_string(),
                expected: p.record_type.name().to_string(),
                found: instance.record_type().name().to_string(),
            });
        }
        converter::to_dict(instance, &p.mapping)
    }

    fn lookup(&self, profile: &str) -> ConversionResult<&MappingProfile> {
        self.profiles
            .get(profile)
            .ok_or_else(|| ConversionError::UnknownProfile(profile.to_string()))
    }
}

/// Validate `cfg` and index its record types and profiles.
pub fn build_registry(cfg: &Config) -> Result<MappingRegistry, ConfigError> {
    validate_config(cfg).map_err(collapse_errors)?;

    let records: HashMap<String, RecordType> = cfg
        .records
        .iter()
        .map(|r| (r.name().to_string(), r.clone()))
        .collect();

    let mut profiles = HashMap::new();
    for (name, profile) in &cfg.profiles {
        // validate_config guarantees the record exists
        if let Some(record_type) = records.get(&profile.record) {
            profiles.insert(
                name.clone(),
                MappingProfile {
                    record_type: record_type.clone(),
                    mapping: profile.fields.clone(),
                },
            );
        }
    }

    Ok(MappingRegistry { records, profiles })
}
