// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::FieldDescriptor;
use crate::errors::SchemaError;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashSet;

/// A named, ordered set of field descriptors.
///
/// # Example
/// ```
/// use fieldmap::schema::{FieldDescriptor, FieldKind, RecordType};
///
/// const BOOK_FIELDS: &[FieldDescriptor] = &[
///     FieldDescriptor::new("title", FieldKind::String),
///     FieldDescriptor::new("author", FieldKind::String),
/// ];
/// const BOOK: RecordType = RecordType::from_static("Book", BOOK_FIELDS);
///
/// assert_eq!(BOOK.field_names().collect::<Vec<_>>(), vec!["title", "author"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRecordType")]
pub struct RecordType {
    name: Cow<'static, str>,
    fields: Cow<'static, [FieldDescriptor]>,
}

#[derive(Deserialize)]
struct RawRecordType {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<RawRecordType> for RecordType {
    type Error = SchemaError;

    fn try_from(raw: RawRecordType) -> Result<Self, Self::Error> {
        RecordType::new(raw.name, raw.fields)
    }
}

impl RecordType {
    /// Schema for a compile-time record. Not validated here; a duplicate
    /// field name shows up through [`RecordType::validate`].
    pub const fn from_static(name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            fields: Cow::Borrowed(fields),
        }
    }

    /// Schema assembled at runtime, validated on construction.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let record_type = Self {
            name: Cow::Owned(name.into()),
            fields: Cow::Owned(fields),
        };
        record_type.validate()?;
        Ok(record_type)
    }

    /// Check that the type has a name and its field names are non-empty and unique.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyTypeName);
        }

        let mut seen = HashSet::new();
        for field in self.fields.iter() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    record_type: self.name.to_string(),
                });
            }
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateField {
                    record_type: self.name.to_string(),
                    field: field.name.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Declared field names, in declared order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.name())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    #[test]
    fn test_runtime_type_keeps_declared_order() {
        let t = RecordType::new(
            "Movie",
            vec![
                FieldDescriptor::owned("year", FieldKind::Integer),
                FieldDescriptor::owned("title", FieldKind::String),
            ],
        )
        .unwrap();

        assert_eq!(t.name(), "Movie");
        assert_eq!(t.field_names().collect::<Vec<_>>(), vec!["year", "title"]);
        assert!(t.contains_field("title"));
        assert!(!t.contains_field("director"));
        assert_eq!(t.field("year").map(|f| f.kind), Some(FieldKind::Integer));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let err = RecordType::new(
            "Movie",
            vec![
                FieldDescriptor::owned("title", FieldKind::String),
                FieldDescriptor::owned("title", FieldKind::Any),
            ],
        )
        .unwrap_err();

        assert_eq!(
            err,
            SchemaError::DuplicateField {
                record_type: "Movie".into(),
                field: "title".into(),
            }
        );
    }

    #[test]
    fn test_empty_names_rejected() {
        assert_eq!(RecordType::new("", vec![]).unwrap_err(), SchemaError::EmptyTypeName);

        let fields = vec![FieldDescriptor::owned("", FieldKind::Any)];
        let err = RecordType::new("Movie", fields).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyFieldName { .. }));
    }

    #[test]
    fn test_static_type_validate_catches_duplicates() {
        const BROKEN_FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("a", FieldKind::Any),
            FieldDescriptor::new("a", FieldKind::Any),
        ];
        const BROKEN: RecordType = RecordType::from_static("Broken", BROKEN_FIELDS);
        assert!(BROKEN.validate().is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let yaml = r#"
name: Book
fields:
  - { name: title, kind: string }
  - { name: title, kind: string }
"#;
        let result: Result<RecordType, _> = serde_yaml::from_str(yaml);
        let error_msg = result.unwrap_err().to_string();
        assert!(error_msg.contains("more than once"));
    }
}
