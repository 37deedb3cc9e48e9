// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit the same data as structured `tracing` fields.
//!
//! # Organization
//!
//! * `store` - Record lifecycle events
//! * `query` - Query interpretation events
//! * `config` - Configuration loading and validation events
//!
//! # Usage Pattern
//!
//! ```rust
//! use string_analyzer::observability::messages::{query::QueryInterpreted, StructuredLog};
//!
//! let msg = QueryInterpreted {
//!     query: "all palindromic strings",
//!     filter_count: 1,
//!     match_count: 3,
//! };
//!
//! let span = msg.span("natural_language_filter");
//! let _guard = span.enter();
//! msg.log();
//! ```

pub mod config;
pub mod query;
pub mod store;

use tracing::Span;

/// Emit a message at its designated level, with its fields attached.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
