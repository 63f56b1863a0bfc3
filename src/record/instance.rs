// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SchemaError;
use crate::schema::RecordType;
use serde_json::{Map, Value};

/// A value for each declared field of a [`RecordType`], held in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInstance {
    record_type: RecordType,
    values: Vec<Value>,
}

impl RecordInstance {
    /// Pair a record type with one value per declared field.
    ///
    /// Fails with [`SchemaError::ValueCountMismatch`] when the value count
    /// differs from the field count.
    pub fn new(record_type: RecordType, values: Vec<Value>) -> Result<Self, SchemaError> {
        if values.len() != record_type.len() {
            return Err(SchemaError::ValueCountMismatch {
                record_type: record_type.name().to_string(),
                expected: record_type.len(),
                found: values.len(),
            });
        }
        Ok(Self { record_type, values })
    }

    /// Values produced by walking `record_type`'s fields once each.
    pub(crate) fn from_resolved(record_type: RecordType, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), record_type.len());
        Self { record_type, values }
    }

    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.record_type
            .field_names()
            .position(|name| name == field)
            .map(|i| &self.values[i])
    }

    /// Replace the value of a declared field, returning the previous one.
    /// Unknown fields are left alone and yield `None`.
    pub fn set(&mut self, field: &str, value: Value) -> Option<Value> {
        let i = self.record_type.field_names().position(|name| name == field)?;
        Some(std::mem::replace(&mut self.values[i], value))
    }

    /// `(field name, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.record_type.field_names().zip(self.values.iter())
    }

    /// The instance as an object keyed by declared field names.
    pub fn to_declared_map(&self) -> Map<String, Value> {
        self.iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}
