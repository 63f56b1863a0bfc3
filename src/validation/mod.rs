// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Opt-in type checking of record instances.
//!
//! The converter passes values through untouched. Callers that want the
//! declared [`FieldKind`](crate::schema::FieldKind)s enforced run
//! [`check_types`] on the result. Every field is checked; all mismatches are
//! returned together rather than stopping at the first.
//!
//! # Example
//! ```rust
//! use fieldmap::record::RecordInstance;
//! use fieldmap::schema::{FieldDescriptor, FieldKind, RecordType};
//! use fieldmap::validation::check_types;
//! use serde_json::json;
//!
//! let movie = RecordType::new(
//!     "Movie",
//!     vec![
//!         FieldDescriptor::owned("title", FieldKind::String),
//!         FieldDescriptor::owned("year", FieldKind::Integer),
//!     ],
//! )
//! .unwrap();
//!
//! let instance = RecordInstance::new(movie, vec![json!("Alien"), json!("1979")]).unwrap();
//!
//! match check_types(&instance) {
//!     Ok(()) => println!("types match"),
//!     Err(mismatches) => {
//!         for mismatch in mismatches {
//!             eprintln!("Type error: {}", mismatch);
//!         }
//!     }
//! }
//! ```

use crate::errors::TypeMismatch;
use crate::observability::messages::config::TypeCheckFailed;
use crate::observability::messages::StructuredLog;
use crate::record::RecordInstance;
use serde_json::Value;

/// Check every field value of `instance` against its declared kind.
///
/// `null` passes for optional fields and for `any`.
pub fn check_types(instance: &RecordInstance) -> Result<(), Vec<TypeMismatch>> {
    let record_type = instance.record_type();

    let mismatches: Vec<TypeMismatch> = record_type
        .fields()
        .iter()
        .zip(instance.iter().map(|(_, value)| value))
        .filter(|(descriptor, value)| !(descriptor.optional && value.is_null()))
        .filter(|(descriptor, value)| !descriptor.kind.accepts(value))
        .map(|(descriptor, value)| TypeMismatch {
            field: descriptor.name().to_string(),
            expected: descriptor.kind,
            found: json_type_name(value),
        })
        .collect();

    if mismatches.is_empty() {
        Ok(())
    } else {
        TypeCheckFailed {
            record_type: record_type.name(),
            mismatch_count: mismatches.len(),
        }
        .log();
        Err(mismatches)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}
