// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::schema::FieldKind;
use std::fmt;

/// A field whose value does not match its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMismatch {
    /// The declared field name
    pub field: String,
    /// The kind the record type declares for the field
    pub expected: FieldKind,
    /// The JSON type actually found
    pub found: &'static str,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field '{}' expected {} but found {}",
            self.field, self.expected, self.found
        )
    }
}

impl std::error::Error for TypeMismatch {}
