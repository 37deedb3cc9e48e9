// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Record creation and duplicate rejection
//! * Record lookup misses
//! * Filtered listing
//! * Record deletion

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A new string was analyzed and stored.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordCreated<'a> {
    pub id: &'a str,
    pub length: usize,
    pub is_palindrome: bool,
}

impl Display for RecordCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stored string {}: length={}, is_palindrome={}",
            self.id, self.length, self.is_palindrome
        )
    }
}

impl StructuredLog for RecordCreated<'_> {
    fn log(&self) {
        tracing::info!(
            id = self.id,
            length = self.length,
            is_palindrome = self.is_palindrome,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("record", span_name = name, id = self.id)
    }
}

/// A submitted string was already stored.
///
/// # Log Level
/// `warn!` - Client error worth noticing
pub struct DuplicateRejected<'a> {
    pub id: &'a str,
}

impl Display for DuplicateRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected duplicate string {}", self.id)
    }
}

impl StructuredLog for DuplicateRejected<'_> {
    fn log(&self) {
        tracing::warn!(id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("record", span_name = name, id = self.id)
    }
}

/// A lookup or delete referenced a string that is not stored.
///
/// # Log Level
/// `debug!` - Expected client miss
pub struct RecordMissing<'a> {
    pub id: &'a str,
    pub operation: &'a str,
}

impl Display for RecordMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} found no string {}", self.operation, self.id)
    }
}

impl StructuredLog for RecordMissing<'_> {
    fn log(&self) {
        tracing::debug!(id = self.id, operation = self.operation, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "record",
            span_name = name,
            id = self.id,
            operation = self.operation,
        )
    }
}

/// Records were listed with structured filters.
///
/// # Log Level
/// `debug!` - Routine read
pub struct RecordsListed {
    pub filter_count: usize,
    pub match_count: usize,
}

impl Display for RecordsListed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Listed {} strings with {} filters",
            self.match_count, self.filter_count
        )
    }
}

impl StructuredLog for RecordsListed {
    fn log(&self) {
        tracing::debug!(
            filter_count = self.filter_count,
            match_count = self.match_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("listing", span_name = name, filter_count = self.filter_count)
    }
}

/// A stored string was deleted.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RecordDeleted<'a> {
    pub id: &'a str,
}

impl Display for RecordDeleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Deleted string {}", self.id)
    }
}

impl StructuredLog for RecordDeleted<'_> {
    fn log(&self) {
        tracing::info!(id = self.id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("record", span_name = name, id = self.id)
    }
}
