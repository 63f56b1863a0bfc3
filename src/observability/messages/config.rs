// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for mapping file loading and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Mapping file loaded and parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct MappingFileLoaded<'a> {
    pub path: &'a str,
    pub record_count: usize,
    pub profile_count: usize,
}

impl Display for MappingFileLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded mapping file '{}': {} record types, {} profiles",
            self.path, self.record_count, self.profile_count
        )
    }
}

impl StructuredLog for MappingFileLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            record_count = self.record_count,
            profile_count = self.profile_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "mapping_file",
            name = name,
            path = self.path,
        )
    }
}

/// A mapping profile failed validation.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ProfileRejected<'a> {
    pub profile: &'a str,
    pub reason: &'a dyn std::error::Error,
}

impl Display for ProfileRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Profile '{}' rejected: {}", self.profile, self.reason)
    }
}

impl StructuredLog for ProfileRejected<'_> {
    fn log(&self) {
        tracing::error!(
            profile = self.profile,
            reason = %self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "profile_rejected",
            name = name,
            profile = self.profile,
        )
    }
}

/// A record instance failed opt-in type checking.
///
/// # Log Level
/// `warn!` - Data does not match its schema
pub struct TypeCheckFailed<'a> {
    pub record_type: &'a str,
    pub mismatch_count: usize,
}

impl Display for TypeCheckFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Type check of '{}' found {} mismatched fields",
            self.record_type, self.mismatch_count
        )
    }
}

impl StructuredLog for TypeCheckFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            record_type = self.record_type,
            mismatch_count = self.mismatch_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "type_check",
            name = name,
            record_type = self.record_type,
        )
    }
}
