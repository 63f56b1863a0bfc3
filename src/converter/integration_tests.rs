// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConversionError;
use crate::mapping::NameMapping;
use crate::record::Record;
use crate::schema::{FieldDescriptor, FieldKind, RecordType};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Book {
    title: String,
    author: String,
}

const BOOK_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("title", FieldKind::String),
    FieldDescriptor::new("author", FieldKind::String),
];

impl Record for Book {
    const SCHEMA: RecordType = RecordType::from_static("Book", BOOK_FIELDS);
}

fn some_book() -> Book {
    Book {
        title: "Some Book".to_string(),
        author: "Me".to_string(),
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {}", other),
    }
}

#[test]
fn test_custom_map_all_fields_from_dict() {
    let original = object(json!({"titulo": "Some Book", "autor": "Me"}));
    let mapping = NameMapping::new().with("title", "titulo").with("author", "autor");

    assert_eq!(Book::from_dict(&original, &mapping).unwrap(), some_book());
}

#[test]
fn test_custom_map_one_field_from_dict() {
    let original = object(json!({"title": "Some Book", "autor": "Me"}));
    let mapping = NameMapping::new().with("author", "autor");

    assert_eq!(Book::from_dict(&original, &mapping).unwrap(), some_book());
}

#[test]
fn test_custom_map_all_fields_to_dict() {
    let mapping = NameMapping::new().with("title", "titulo").with("author", "autor");
    let actual = some_book().to_dict(&mapping).unwrap();

    assert_eq!(Value::Object(actual), json!({"titulo": "Some Book", "autor": "Me"}));
}

#[test]
fn test_custom_map_one_field_to_dict() {
    let actual = some_book().to_dict(&NameMapping::new().with("author", "autor")).unwrap();

    let keys: Vec<&str> = actual.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["title", "autor"]);
    assert_eq!(Value::Object(actual), json!({"title": "Some Book", "autor": "Me"}));
}

#[test]
fn test_round_trip_with_empty_mapping() {
    let books = vec![
        some_book(),
        Book {
            title: String::new(),
            author: "Anonymous".to_string(),
        },
        Book {
            title: "Ünïcödé".to_string(),
            author: "\"quoted\"".to_string(),
        },
    ];

    for book in books {
        let dict = book.to_dict(&NameMapping::new()).unwrap();
        assert_eq!(Book::from_dict(&dict, &NameMapping::new()).unwrap(), book);
    }
}

#[test]
fn test_round_trip_with_full_bijective_mapping() {
    let mappings = vec![
        NameMapping::new().with("title", "titulo").with("author", "autor"),
        // swapped names are still a bijection
        NameMapping::new().with("title", "author").with("author", "title"),
    ];

    for mapping in mappings {
        let dict = some_book().to_dict(&mapping).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(Book::from_dict(&dict, &mapping).unwrap(), some_book());
    }
}

#[test]
fn test_swapped_mapping_writes_values_under_each_others_names() {
    let mapping = NameMapping::new().with("title", "author").with("author", "title");
    let dict = some_book().to_dict(&mapping).unwrap();

    assert_eq!(dict.get("author"), Some(&json!("Some Book")));
    assert_eq!(dict.get("title"), Some(&json!("Me")));
}

#[test]
fn test_partial_remap_is_independent_per_direction() {
    let mapping = NameMapping::new().with("author", "autor");
    let dict = some_book().to_dict(&mapping).unwrap();

    assert_eq!(dict.get("title"), Some(&json!("Some Book")));
    assert!(!dict.contains_key("author"));
    assert_eq!(Book::from_dict(&dict, &mapping).unwrap(), some_book());

    // The same dict read without the mapping cannot find "author".
    let err = Book::from_dict(&dict, &NameMapping::new()).unwrap_err();
    assert!(matches!(err, ConversionError::MissingField { ref field, .. } if field == "author"));
}

#[test]
fn test_unknown_mapping_key_rejected_in_both_directions() {
    let mappings = vec![
        NameMapping::new().with("nonexistent", "x"),
        NameMapping::new().with("title", "titulo").with("nonexistent", "x"),
        NameMapping::new()
            .with("title", "titulo")
            .with("author", "autor")
            .with("nonexistent", "x"),
    ];
    let source = object(json!({"title": "Some Book", "author": "Me", "titulo": "T", "autor": "A"}));

    for mapping in mappings {
        let from_err = Book::from_dict(&source, &mapping).unwrap_err();
        assert!(
            matches!(
                from_err,
                ConversionError::InvalidMapping { ref field, .. } if field == "nonexistent"
            ),
            "from_dict: {}",
            from_err
        );

        let to_err = some_book().to_dict(&mapping).unwrap_err();
        assert!(
            matches!(
                to_err,
                ConversionError::InvalidMapping { ref field, .. } if field == "nonexistent"
            ),
            "to_dict: {}",
            to_err
        );
    }
}

#[test]
fn test_missing_source_key_rejected() {
    let source = object(json!({"titulo": "T"}));
    let mapping = NameMapping::new().with("title", "titulo");

    match Book::from_dict(&source, &mapping).unwrap_err() {
        ConversionError::MissingField { field, lookup_key, .. } => {
            assert_eq!(field, "author");
            assert_eq!(lookup_key, "author");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_source_is_not_modified() {
    let source = object(json!({"titulo": "Some Book", "autor": "Me", "extra": [1, 2, 3]}));
    let before = source.clone();
    let mapping = NameMapping::new().with("title", "titulo").with("author", "autor");

    let _ = Book::from_dict(&source, &mapping).unwrap();
    assert_eq!(source, before);
}
