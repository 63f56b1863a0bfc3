// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with a `Display` impl and a
//! [`StructuredLog`](messages::StructuredLog) impl, so log text lives in one
//! place and every event carries its fields as structured data.
//!
//! # Architecture
//!
//! * `messages::converter` - `from_dict` / `to_dict` lifecycle and failures
//! * `messages::config` - mapping file loading and validation
//!
//! # Usage
//!
//! ```rust
//! use fieldmap::observability::messages::converter::MissingFieldDetected;
//! use fieldmap::observability::messages::StructuredLog;
//!
//! let msg = MissingFieldDetected {
//!     record_type: "Book",
//!     field: "author",
//!     lookup_key: "autor",
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (for example
/// `"fieldmap=debug"`) is used. Calling this twice is harmless: the second
/// install fails and is ignored.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
