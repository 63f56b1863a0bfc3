// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Field name → external key substitution tables.

use crate::errors::ConversionError;
use crate::schema::RecordType;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Maps declared field names to the keys used in an external mapping.
///
/// Fields left out keep their declared name. Entries iterate in field-name
/// order, so validation reports the same unknown field every time.
///
/// # Example
/// ```
/// use fieldmap::mapping::NameMapping;
///
/// let mapping = NameMapping::new().with("author", "autor");
/// assert_eq!(mapping.external_key("author"), "autor");
/// assert_eq!(mapping.external_key("title"), "title");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct NameMapping {
    entries: BTreeMap<String, String>,
}

impl NameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, external_key: impl Into<String>) -> Self {
        self.insert(field, external_key);
        self
    }

    /// Insert or replace the external key for `field`, returning the old key.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        external_key: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(field.into(), external_key.into())
    }

    /// The key used externally for `field`: the mapped key if present, else
    /// the field name itself.
    pub fn external_key<'a>(&'a self, field: &'a str) -> &'a str {
        self.entries.get(field).map(String::as_str).unwrap_or(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(f, k)| (f.as_str(), k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail with [`ConversionError::InvalidMapping`] on the first entry whose
    /// field `record_type` does not declare.
    pub fn validate_against(&self, record_type: &RecordType) -> Result<(), ConversionError> {
        match self.iter().find(|(field, _)| !record_type.contains_field(field)) {
            Some((field, external_key)) => Err(ConversionError::InvalidMapping {
                record_type: record_type.name().to_string(),
                field: field.to_string(),
                external_key: external_key.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl<F, K> FromIterator<(F, K)> for NameMapping
where
    F: Into<String>,
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, K)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(f, k)| (f.into(), k.into())).collect(),
        }
    }
}
