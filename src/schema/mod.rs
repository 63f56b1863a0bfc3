// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Record type schemas.
//!
//! A [`RecordType`] is the ordered list of field descriptors the converter
//! walks. Rust structs attach one as a `const`, mapping files build them at
//! load time.

mod field;
mod record_type;

pub use field::{FieldDescriptor, FieldKind};
pub use record_type::RecordType;
