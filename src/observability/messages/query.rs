// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for natural-language query interpretation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A query was interpreted and applied.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use string_analyzer::observability::messages::query::QueryInterpreted;
///
/// let msg = QueryInterpreted {
///     query: "strings longer than 10 characters",
///     filter_count: 1,
///     match_count: 0,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct QueryInterpreted<'a> {
    pub query: &'a str,
    pub filter_count: usize,
    pub match_count: usize,
}

impl Display for QueryInterpreted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Interpreted query '{}' as {} filters: {} matches",
            self.query, self.filter_count, self.match_count
        )
    }
}

impl StructuredLog for QueryInterpreted<'_> {
    fn log(&self) {
        tracing::info!(
            query = self.query,
            filter_count = self.filter_count,
            match_count = self.match_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("query", span_name = name, query = self.query)
    }
}

/// A query could not be interpreted.
///
/// # Log Level
/// `warn!` - Client error worth noticing
pub struct QueryRejected<'a> {
    pub query: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for QueryRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected query '{}': {}", self.query, self.error)
    }
}

impl StructuredLog for QueryRejected<'_> {
    fn log(&self) {
        tracing::warn!(query = self.query, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("query", span_name = name, query = self.query)
    }
}
