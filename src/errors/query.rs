// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for natural-language query parsing and structured filter parameters.

use thiserror::Error;

/// Errors produced by the natural-language query parser.
///
/// All variants are caused by the caller's input and are never transient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Query was empty or whitespace only.
    #[error("query required")]
    EmptyQuery,

    /// No rule in the vocabulary matched the query.
    #[error("unable to parse query: '{query}'")]
    UnparseableQuery { query: String },

    /// A numeric literal in the query does not fit the filter's range.
    #[error("number '{literal}' in query is out of range")]
    InvalidNumber { literal: String },
}

/// Errors produced when building a filter set from structured parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid value '{value}' for parameter '{parameter}'")]
    InvalidValue { parameter: String, value: String },

    #[error("min_length {min_length} is greater than max_length {max_length}")]
    ConflictingRange { min_length: i64, max_length: i64 },
}
