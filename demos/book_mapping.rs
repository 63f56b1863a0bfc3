// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use fieldmap::config::{build_registry, load_and_validate_config};
use fieldmap::mapping::NameMapping;
use fieldmap::observability::init_tracing;
use fieldmap::record::Record;
use fieldmap::schema::{FieldDescriptor, FieldKind, RecordType};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::env;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
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

/// Demo of typed and profile-driven conversion.
/// Usage: cargo run --example book_mapping [mapping_file]
fn main() -> Result<()> {
    init_tracing("fieldmap=debug");

    let config_file = env::args().nth(1).unwrap_or_else(|| "configs/books.yaml".to_string());

    println!("=== Typed record ===\n");
    let book = Book {
        title: "Some Book".to_string(),
        author: "Me".to_string(),
    };
    let mapping = NameMapping::new().with("author", "autor");
    let json_text = book.to_json(&mapping)?;
    println!("to_json with author -> autor: {}", json_text);
    let back = Book::from_json(&json_text, &mapping)?;
    println!("from_json: {:?}", back);

    println!("\n=== Profiles from {} ===\n", config_file);
    let cfg = load_and_validate_config(&config_file)
        .with_context(|| format!("Failed to load mapping file {}", config_file))?;
    let registry = build_registry(&cfg)?;

    let feed = json!({"titulo": "Cien años de soledad", "autor": "Gabriel García Márquez"});
    let source = feed
        .as_object()
        .context("demo feed is not an object")?;
    let instance = registry.from_dict_with_profile("spanish", source)?;
    for (field, value) in instance.iter() {
        println!("- {}: {}", field, value);
    }

    let book = Book::from_instance(&instance)?;
    let plain = book.to_dict(&NameMapping::new())?;
    println!("\nPlain dict: {}", Value::Object(plain));

    Ok(())
}
