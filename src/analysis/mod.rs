// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! String analysis.
//!
//! Computes the fixed set of derived properties stored alongside every
//! submitted string. Everything here is a pure function of its input.
//!
//! # Normalization
//!
//! * Leading and trailing whitespace is trimmed before measuring.
//! * `length`, `unique_characters` and `character_frequency` count Unicode
//!   scalar values of the trimmed string.
//! * Palindrome checks ignore case but keep internal whitespace, so
//!   `"Racecar"` is a palindrome and `"A man a plan a canal Panama"` is not.
//! * The content hash covers the original, untrimmed bytes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};

use crate::errors::AnalysisError;

/// Properties derived from a single string.
///
/// Fully determined by the input; two calls with the same string always
/// produce equal results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    /// Lowercase hex SHA-256 of the original value.
    #[serde(rename = "sha256_hash")]
    pub content_hash: String,
    #[serde(rename = "character_frequency_map")]
    pub character_frequency: BTreeMap<char, usize>,
}

/// Analyze a string.
///
/// # Example
/// ```
/// use string_analyzer::analysis::analyze;
///
/// let result = analyze("racecar");
/// assert_eq!(result.length, 7);
/// assert!(result.is_palindrome);
/// assert_eq!(result.unique_characters, 4);
/// assert_eq!(result.word_count, 1);
/// ```
pub fn analyze(value: &str) -> AnalysisResult {
    let normalized = normalize(value);

    let mut character_frequency = BTreeMap::new();
    for c in normalized.chars() {
        *character_frequency.entry(c).or_insert(0) += 1;
    }

    AnalysisResult {
        length: normalized.chars().count(),
        is_palindrome: is_palindrome(normalized),
        unique_characters: normalized.chars().collect::<HashSet<_>>().len(),
        word_count: normalized.split_whitespace().count(),
        content_hash: content_hash(value),
        character_frequency,
    }
}

/// Analyze a dynamically typed value, as found in a JSON request body.
///
/// Only JSON strings are accepted.
pub fn analyze_json(value: &Value) -> Result<AnalysisResult, AnalysisError> {
    match value {
        Value::String(s) => Ok(analyze(s)),
        other => Err(AnalysisError::InvalidInputType {
            found: json_type_name(other),
        }),
    }
}

/// SHA-256 of the UTF-8 bytes of `value`, rendered as 64 lowercase hex chars.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Trim the value the way every measurement expects it.
pub fn normalize(value: &str) -> &str {
    value.trim()
}

/// Case-insensitive, whitespace-sensitive palindrome test on an already
/// normalized string.
pub fn is_palindrome(normalized: &str) -> bool {
    let folded: Vec<char> = normalized.to_lowercase().chars().collect();
    folded.iter().eq(folded.iter().rev())
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
