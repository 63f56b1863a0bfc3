// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // mapping files + registry
pub mod converter;  // from_dict / to_dict
pub mod errors;     // error handling
pub mod mapping;    // field name -> external key tables
pub mod observability;
pub mod record;     // record instances + typed records
pub mod schema;     // record type declarations
pub mod validation; // opt-in type checks
