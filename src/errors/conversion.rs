// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by `from_dict` / `to_dict` and the typed `Record` helpers.

use thiserror::Error;

/// Everything that can go wrong while converting between a record and an
/// external mapping.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// A name mapping refers to a field the record type does not declare.
    /// Raised before any field is resolved.
    #[error("Invalid mapping for '{record_type}': unknown field '{field}' -> '{external_key}'")]
    InvalidMapping {
        record_type: String,
        field: String,
        external_key: String,
    },

    /// The resolved lookup key for a declared field is absent from the source.
    #[error("Missing field '{field}' of '{record_type}': key '{lookup_key}' not found in source")]
    MissingField {
        record_type: String,
        field: String,
        lookup_key: String,
    },

    /// The resolved values could not be turned into the target Rust type.
    #[error("Cannot build '{record_type}' from resolved values: {source}")]
    Deserialize {
        record_type: String,
        #[source]
        source: serde_json::Error,
    },

    /// A typed record's serialized fields differ from its schema: a declared
    /// field is missing, or an undeclared one is present.
    #[error("'{record_type}' does not match its schema at field '{field}'")]
    SchemaDrift { record_type: String, field: String },

    /// A typed record (or JSON document) was not a JSON object.
    #[error("'{record_type}' did not serialize to an object")]
    NotAnObject { record_type: String },

    /// No profile of that name is registered.
    #[error("Unknown mapping profile '{0}'")]
    UnknownProfile(String),

    /// A profile was applied to an instance of a different record type.
    #[error("Profile '{profile}' applies to '{expected}', not '{found}'")]
    ProfileMismatch {
        profile: String,
        expected: String,
        found: String,
    },

    /// JSON text could not be read or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
