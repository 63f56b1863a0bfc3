// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for conversion events.
//!
//! This module contains message types for logging events related to:
//! * Conversion start and completion in both directions
//! * Rejected name mappings
//! * Unresolvable source keys
//! * Output key collisions

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Direction of a conversion, used as a structured field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    FromDict,
    ToDict,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Direction::FromDict => f.write_str("from_dict"),
            Direction::ToDict => f.write_str("to_dict"),
        }
    }
}

/// Conversion started.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct ConversionStarted<'a> {
    pub record_type: &'a str,
    pub direction: Direction,
    pub field_count: usize,
    pub mapped_field_count: usize,
}

impl Display for ConversionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} for '{}' started: fields={}, remapped={}",
            self.direction, self.record_type, self.field_count, self.mapped_field_count
        )
    }
}

impl StructuredLog for ConversionStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            record_type = self.record_type,
            direction = %self.direction,
            field_count = self.field_count,
            mapped_field_count = self.mapped_field_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "conversion",
            name = name,
            record_type = self.record_type,
            direction = %self.direction,
            field_count = self.field_count,
        )
    }
}

/// Conversion completed.
///
/// # Log Level
/// `debug!` - Per-call detail
pub struct ConversionCompleted<'a> {
    pub record_type: &'a str,
    pub direction: Direction,
    pub entry_count: usize,
}

impl Display for ConversionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} for '{}' completed: entries={}",
            self.direction, self.record_type, self.entry_count
        )
    }
}

impl StructuredLog for ConversionCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            record_type = self.record_type,
            direction = %self.direction,
            entry_count = self.entry_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "conversion",
            name = name,
            record_type = self.record_type,
            direction = %self.direction,
            entry_count = self.entry_count,
        )
    }
}

/// A name mapping referenced a field the record type does not declare.
///
/// # Log Level
/// `error!` - Caller error
///
/// # Example
/// ```
/// use fieldmap::observability::messages::converter::{Direction, InvalidMappingDetected};
///
/// let msg = InvalidMappingDetected {
///     record_type: "Book",
///     direction: Direction::ToDict,
///     field: "nonexistent",
///     external_key: "x",
/// };
///
/// assert!(msg.to_string().contains("'nonexistent'"));
/// ```
pub struct InvalidMappingDetected<'a> {
    pub record_type: &'a str,
    pub direction: Direction,
    pub field: &'a str,
    pub external_key: &'a str,
}

impl Display for InvalidMappingDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rejected mapping for '{}': unknown field '{}' -> '{}'",
            self.direction, self.record_type, self.field, self.external_key
        )
    }
}

impl StructuredLog for InvalidMappingDetected<'_> {
    fn log(&self) {
        tracing::error!(
            record_type = self.record_type,
            direction = %self.direction,
            field = self.field,
            external_key = self.external_key,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "invalid_mapping",
            name = name,
            record_type = self.record_type,
            field = self.field,
            external_key = self.external_key,
        )
    }
}

/// A declared field's lookup key was absent from the source mapping.
///
/// # Log Level
/// `error!` - Caller error
pub struct MissingFieldDetected<'a> {
    pub record_type: &'a str,
    pub field: &'a str,
    pub lookup_key: &'a str,
}

impl Display for MissingFieldDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Field '{}' of '{}' unresolved: key '{}' not in source",
            self.field, self.record_type, self.lookup_key
        )
    }
}

impl StructuredLog for MissingFieldDetected<'_> {
    fn log(&self) {
        tracing::error!(
            record_type = self.record_type,
            field = self.field,
            lookup_key = self.lookup_key,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "missing_field",
            name = name,
            record_type = self.record_type,
            field = self.field,
            lookup_key = self.lookup_key,
        )
    }
}

/// Two declared fields resolved to the same output key; the later one wins.
///
/// # Log Level
/// `warn!` - Data is dropped
pub struct OutputKeyCollision<'a> {
    pub record_type: &'a str,
    pub output_key: &'a str,
    pub overwritten_field: &'a str,
    pub winning_field: &'a str,
}

impl Display for OutputKeyCollision<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Output key '{}' of '{}' written by both '{}' and '{}'; keeping '{}'",
            self.output_key,
            self.record_type,
            self.overwritten_field,
            self.winning_field,
            self.winning_field
        )
    }
}

impl StructuredLog for OutputKeyCollision<'_> {
    fn log(&self) {
        tracing::warn!(
            record_type = self.record_type,
            output_key = self.output_key,
            overwritten_field = self.overwritten_field,
            winning_field = self.winning_field,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "output_key_collision",
            name = name,
            record_type = self.record_type,
            output_key = self.output_key,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_message_names_winner() {
        let msg = OutputKeyCollision {
            record_type: "Book",
            output_key: "k",
            overwritten_field: "title",
            winning_field: "author",
        };
        assert_eq!(
            msg.to_string(),
            "Output key 'k' of 'Book' written by both 'title' and 'author'; keeping 'author'"
        );
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::FromDict.to_string(), "from_dict");
        assert_eq!(Direction::ToDict.to_string(), "to_dict");
    }
}
