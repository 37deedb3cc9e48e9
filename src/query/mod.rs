// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Natural-language filter parsing.
//!
//! This is a small rule table, not language understanding: each rule is a
//! regular expression over the lowercased query, the [`FilterField`] it sets,
//! and a function that extracts the value from the match.
//!
//! # Usage
//!
//! ```rust
//! use string_analyzer::query::{parse, FilterSet};
//!
//! let filters = parse("strings longer than 10 characters").unwrap();
//! assert_eq!(filters, FilterSet { min_length: Some(11), ..Default::default() });
//! ```

mod filter_set;
mod parser;

pub use filter_set::{Filter, FilterField, FilterSet};
pub use parser::{Extractor, QueryParser, Rule};

use std::sync::LazyLock;

use crate::errors::QueryError;

static PARSER: LazyLock<QueryParser> = LazyLock::new(QueryParser::new);

/// Parse a phrase with the shared, compiled-once parser.
pub fn parse(query: &str) -> Result<FilterSet, QueryError> {
    PARSER.parse(query)
}
