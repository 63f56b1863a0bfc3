// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Conversion for ordinary Rust structs.
//!
//! A struct implements [`Record`] by naming its schema; serde does the
//! field-level work and the converter does the key remapping.

use crate::converter;
use crate::errors::{ConversionError, ConversionResult};
use crate::mapping::NameMapping;
use crate::observability::messages::converter::Direction;
use crate::record::RecordInstance;
use crate::schema::RecordType;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A struct with a static schema that converts to and from external mappings.
///
/// The schema must list exactly the struct's serialized field names. A field
/// skipped during serialization, or one the schema does not declare, surfaces
/// as [`ConversionError::SchemaDrift`].
///
/// # Example
/// ```
/// use fieldmap::mapping::NameMapping;
/// use fieldmap::record::Record;
/// use fieldmap::schema::{FieldDescriptor, FieldKind, RecordType};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq, Serialize, Deserialize)]
/// struct Book {
///     title: String,
///     author: String,
/// }
///
/// const BOOK_FIELDS: &[FieldDescriptor] = &[
///     FieldDescriptor::new("title", FieldKind::String),
///     FieldDescriptor::new("author", FieldKind::String),
/// ];
///
/// impl Record for Book {
///     const SCHEMA: RecordType = RecordType::from_static("Book", BOOK_FIELDS);
/// }
///
/// let book = Book { title: "Some Book".into(), author: "Me".into() };
/// let out = book.to_dict(&NameMapping::new().with("author", "autor")).unwrap();
/// assert_eq!(serde_json::Value::Object(out), json!({"title": "Some Book", "autor": "Me"}));
/// ```
pub trait Record: Serialize + DeserializeOwned {
    const SCHEMA: RecordType;

    /// Build `Self` from an external mapping, resolving keys through `mapping`.
    fn from_dict(source: &Map<String, Value>, mapping: &NameMapping) -> ConversionResult<Self> {
        let instance = converter::from_dict(&Self::SCHEMA, source, mapping)?;
        Self::from_instance(&instance)
    }

    /// Convert `self` to an external mapping, renaming keys through `mapping`.
    ///
    /// The mapping is checked against the schema before `self` is serialized.
    fn to_dict(&self, mapping: &NameMapping) -> ConversionResult<Map<String, Value>> {
        converter::check_mapping(&Self::SCHEMA, mapping, Direction::ToDict)?;
        let instance = self.to_instance()?;
        converter::to_dict(&instance, mapping)
    }

    /// Parse a JSON object and build `Self` from it.
    fn from_json(text: &str, mapping: &NameMapping) -> ConversionResult<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(source) => Self::from_dict(&source, mapping),
            _ => Err(ConversionError::NotAnObject {
                record_type: Self::SCHEMA.name().to_string(),
            }),
        }
    }

    /// Render `self` as a JSON object string.
    fn to_json(&self, mapping: &NameMapping) -> ConversionResult<String> {
        let out = self.to_dict(mapping)?;
        Ok(serde_json::to_string(&Value::Object(out))?)
    }

    fn from_instance(instance: &RecordInstance) -> ConversionResult<Self> {
        serde_json::from_value(Value::Object(instance.to_declared_map())).map_err(|source| {
            ConversionError::Deserialize {
                record_type: Self::SCHEMA.name().to_string(),
                source,
            }
        })
    }

    fn to_instance(&self) -> ConversionResult<RecordInstance> {
        let schema = Self::SCHEMA;
        let mut object = match serde_json::to_value(self)? {
            Value::Object(object) => object,
            _ => {
                return Err(ConversionError::NotAnObject {
                    record_type: schema.name().to_string(),
                })
            }
        };

        // Every serialized field must be declared.
        if let Some(extra) = object.keys().find(|key| !schema.contains_field(key)) {
            return Err(ConversionError::SchemaDrift {
                record_type: schema.name().to_string(),
                field: extra.clone(),
            });
        }

        let mut values = Vec::with_capacity(schema.len());
        for field in schema.field_names() {
            match object.remove(field) {
                Some(value) => values.push(value),
                None => {
                    return Err(ConversionError::SchemaDrift {
                        record_type: schema.name().to_string(),
                        field: field.to_string(),
                    })
                }
            }
        }

        Ok(RecordInstance::from_resolved(schema, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, FieldKind};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Reading {
        sensor: String,
        celsius: f64,
    }

    const READING_FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("sensor", FieldKind::String),
        FieldDescriptor::new("celsius", FieldKind::Float),
    ];

    impl Record for Reading {
        const SCHEMA: RecordType = RecordType::from_static("Reading", READING_FIELDS);
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Drifted {
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    const DRIFTED_FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::optional("note", FieldKind::String),
    ];

    impl Record for Drifted {
        const SCHEMA: RecordType = RecordType::from_static("Drifted", DRIFTED_FIELDS);
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Catalogued {
        title: String,
        author: String,
        isbn: String,
    }

    const CATALOGUED_FIELDS: &[FieldDescriptor] = &[
        FieldDescriptor::new("title", FieldKind::String),
        FieldDescriptor::new("author", FieldKind::String),
    ];

    impl Record for Catalogued {
        const SCHEMA: RecordType = RecordType::from_static("Catalogued", CATALOGUED_FIELDS);
    }

    fn catalogued() -> Catalogued {
        Catalogued {
            title: "T".into(),
            author: "A".into(),
            isbn: "978-0000000000".into(),
        }
    }

    #[test]
    fn test_undeclared_struct_field_reports_schema_drift() {
        let err = catalogued().to_dict(&NameMapping::new()).unwrap_err();

        match err {
            ConversionError::SchemaDrift { record_type, field } => {
                assert_eq!(record_type, "Catalogued");
                assert_eq!(field, "isbn");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_to_dict_checks_mapping_before_serializing() {
        let mapping = NameMapping::new().with("nonexistent", "x");
        let err = catalogued().to_dict(&mapping).unwrap_err();

        assert!(matches!(
            err,
            ConversionError::InvalidMapping { ref field, .. } if field == "nonexistent"
        ));
    }

    #[test]
    fn test_wrong_value_type_is_deserialize_error() {
        let source = json!({"sensor": "s1", "celsius": "warm"});
        let err = Reading::from_dict(source.as_object().unwrap(), &NameMapping::new()).unwrap_err();

        match err {
            ConversionError::Deserialize { record_type, .. } => assert_eq!(record_type, "Reading"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_to_instance_follows_schema_order() {
        let reading = Reading {
            sensor: "s1".into(),
            celsius: 21.5,
        };
        let instance = reading.to_instance().unwrap();
        let names: Vec<&str> = instance.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["sensor", "celsius"]);
        assert_eq!(Reading::from_instance(&instance).unwrap(), reading);
    }

    #[test]
    fn test_skipped_field_reports_schema_drift() {
        let err = Drifted { note: None }.to_instance().unwrap_err();
        assert!(matches!(err, ConversionError::SchemaDrift { ref field, .. } if field == "note"));

        assert!(Drifted { note: Some("x".into()) }.to_instance().is_ok());
    }

    #[test]
    fn test_from_json_requires_object() {
        let err = Reading::from_json("[1, 2]", &NameMapping::new()).unwrap_err();
        assert!(matches!(err, ConversionError::NotAnObject { .. }));

        let err = Reading::from_json("{not json", &NameMapping::new()).unwrap_err();
        assert!(matches!(err, ConversionError::Json(_)));
    }

    #[test]
    fn test_json_round_trip_with_mapping() {
        let mapping = NameMapping::new().with("celsius", "temp_c");
        let reading = Reading {
            sensor: "s1".into(),
            celsius: 21.5,
        };

        let text = reading.to_json(&mapping).unwrap();
        assert_eq!(text, r#"{"sensor":"s1","temp_c":21.5}"#);
        assert_eq!(Reading::from_json(&text, &mapping).unwrap(), reading);
    }
}
