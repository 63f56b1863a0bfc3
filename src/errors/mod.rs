// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod conversion;
mod schema;
mod type_mismatch;

pub use config::ConfigError;
pub use conversion::{ConversionError, ConversionResult};
pub use schema::SchemaError;
pub use type_mismatch::TypeMismatch;
