// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// Declared value type of a field.
///
/// The converter never looks at this; it is metadata for
/// [`check_types`](crate::validation::check_types) and for readers of a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Integer,
    Float,
    Boolean,
    List,
    Map,
    #[default]
    Any,
}

impl FieldKind {
    /// Whether `value` is acceptable for this kind. Integers are accepted
    /// where floats are declared.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Float => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::List => value.is_array(),
            FieldKind::Map => value.is_object(),
            FieldKind::Any => true,
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::List => "list",
            FieldKind::Map => "map",
            FieldKind::Any => "any",
        };
        f.write_str(name)
    }
}

/// One declared field: its name, kind, and whether `null` is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldDescriptor {
    pub name: Cow<'static, str>,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub optional: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
            optional: false,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
            optional: true,
        }
    }

    /// Build a descriptor with an owned name, for schemas assembled at runtime.
    pub fn owned(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            kind,
            optional: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
