// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The field-mapped converter.
//!
//! Both directions walk the record type's declared fields once, resolving each
//! field's external key through an optional [`NameMapping`]. Nothing is cached
//! between calls.

use crate::errors::{ConversionError, ConversionResult};
use crate::mapping::NameMapping;
use crate::observability::messages::converter::{
    ConversionCompleted, ConversionStarted, Direction, InvalidMappingDetected, MissingFieldDetected,
    OutputKeyCollision,
};
use crate::observability::messages::StructuredLog;
use crate::record::RecordInstance;
use crate::schema::RecordType;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[cfg(test)]
mod integration_tests;

/// Build a [`RecordInstance`] of `record_type` from an external mapping.
///
/// Each declared field is looked up under `mapping`'s key for it, or under its
/// own name when unmapped. Values are taken as-is.
///
/// # Errors
/// * [`ConversionError::InvalidMapping`] if `mapping` names an undeclared
///   field; checked before any lookup.
/// * [`ConversionError::MissingField`] for the first declared field whose key
///   is absent from `source`.
///
/// # Example
/// ```
/// use fieldmap::converter::from_dict;
/// use fieldmap::mapping::NameMapping;
/// use fieldmap::schema::{FieldDescriptor, FieldKind, RecordType};
/// use serde_json::json;
///
/// const BOOK_FIELDS: &[FieldDescriptor] = &[
///     FieldDescriptor::new("title", FieldKind::String),
///     FieldDescriptor::new("author", FieldKind::String),
/// ];
/// const BOOK: RecordType = RecordType::from_static("Book", BOOK_FIELDS);
///
/// let source = json!({"titulo": "Some Book", "autor": "Me"});
/// let mapping = NameMapping::new().with("title", "titulo").with("author", "autor");
///
/// let book = from_dict(&BOOK, source.as_object().unwrap(), &mapping).unwrap();
/// assert_eq!(book.get("title"), Some(&json!("Some Book")));
/// ```
pub fn from_dict(
    record_type: &RecordType,
    source: &Map<String, Value>,
    mapping: &NameMapping,
) -> ConversionResult<RecordInstance> {
    ConversionStarted {
        record_type: record_type.name(),
        direction: Direction::FromDict,
        field_count: record_type.len(),
        mapped_field_count: mapping.len(),
    }
    .log();

    check_mapping(record_type, mapping, Direction::FromDict)?;

    let mut values = Vec::with_capacity(record_type.len());
    for field in record_type.field_names() {
        let lookup_key = mapping.external_key(field);
        match source.get(lookup_key) {
            Some(value) => values.push(value.clone()),
            None => {
                MissingFieldDetected {
                    record_type: record_type.name(),
                    field,
                    lookup_key,
                }
                .log();
                return Err(ConversionError::MissingField {
                    record_type: record_type.name().to_string(),
                    field: field.to_string(),
                    lookup_key: lookup_key.to_string(),
                });
            }
        }
    }

    ConversionCompleted {
        record_type: record_type.name(),
        direction: Direction::FromDict,
        entry_count: values.len(),
    }
    .log();

    Ok(RecordInstance::from_resolved(record_type.clone(), values))
}

/// Turn `instance` into an external mapping, one entry per declared field.
///
/// Keys follow declared order. If two fields resolve to the same output key,
/// the later field's value replaces the earlier one and a warning is logged.
///
/// # Errors
/// [`ConversionError::InvalidMapping`] if `mapping` names an undeclared field.
pub fn to_dict(
    instance: &RecordInstance,
    mapping: &NameMapping,
) -> ConversionResult<Map<String, Value>> {
    let record_type = instance.record_type();

    ConversionStarted {
        record_type: record_type.name(),
        direction: Direction::ToDict,
        field_count: record_type.len(),
        mapped_field_count: mapping.len(),
    }
    .log();

    check_mapping(record_type, mapping, Direction::ToDict)?;

    let mut result = Map::with_capacity(record_type.len());
    let mut written_by: HashMap<&str, &str> = HashMap::new();

    for (field, value) in instance.iter() {
        let output_key = mapping.external_key(field);
        if let Some(previous) = written_by.insert(output_key, field) {
            OutputKeyCollision {
                record_type: record_type.name(),
                output_key,
                overwritten_field: previous,
                winning_field: field,
            }
            .log();
        }
        result.insert(output_key.to_string(), value.clone());
    }

    ConversionCompleted {
        record_type: record_type.name(),
        direction: Direction::ToDict,
        entry_count: result.len(),
    }
    .log();

    Ok(result)
}

pub(crate) fn check_mapping(
    record_type: &RecordType,
    mapping: &NameMapping,
    direction: Direction,
) -> ConversionResult<()> {
    mapping.validate_against(record_type).inspect_err(|e| {
        if let ConversionError::InvalidMapping { field, external_key, .. } = e {
            InvalidMappingDetected {
                record_type: record_type.name(),
                direction,
                field,
                external_key,
            }
            .log();
        }
    })
}
