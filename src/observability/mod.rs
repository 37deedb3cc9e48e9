// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the service layer. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names consistent between the message text and structured fields
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::store` - Record creation, lookup, listing and deletion
//! * `messages::query` - Natural-language query interpretation
//! * `messages::config` - Configuration loading and validation
//!
//! The analyzer and the query parser are pure and never log; callers log
//! their outcomes.
//!
//! # Usage
//!
//! ```rust
//! use string_analyzer::observability::messages::{store::RecordCreated, StructuredLog};
//!
//! let msg = RecordCreated {
//!     id: "e00f9ef51a95f6e854862eed28dc0f1a68f154d9f75ddd841ab00de6ede9209b",
//!     length: 7,
//!     is_palindrome: true,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Default filter directive when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `fallback`; `fallback` wins over [`DEFAULT_LOG_FILTER`].
/// Calling this more than once is harmless.
pub fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
