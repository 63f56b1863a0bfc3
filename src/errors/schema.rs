// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors detected while defining a record type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("Record type '{record_type}' declares field '{field}' more than once")]
    DuplicateField { record_type: String, field: String },

    #[error("Record type '{record_type}' declares a field with an empty name")]
    EmptyFieldName { record_type: String },

    #[error("Record type name must not be empty")]
    EmptyTypeName,

    /// An instance was given a different number of values than the type declares.
    #[error("'{record_type}' declares {expected} fields but {found} values were given")]
    ValueCountMismatch {
        record_type: String,
        expected: usize,
        found: usize,
    },
}
