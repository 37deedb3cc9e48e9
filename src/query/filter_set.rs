// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::analysis::AnalysisResult;
use crate::errors::FilterError;

/// Structured filters over stored strings.
///
/// Every field is optional; an absent field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

/// Names the individual fields of a [`FilterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    IsPalindrome,
    WordCount,
    MinLength,
    MaxLength,
    ContainsCharacter,
}

/// A single constraint, tagged with the field it sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    IsPalindrome(bool),
    WordCount(usize),
    MinLength(i64),
    MaxLength(i64),
    ContainsCharacter(char),
}

impl Filter {
    pub fn field(&self) -> FilterField {
        match self {
            Filter::IsPalindrome(_) => FilterField::IsPalindrome,
            Filter::WordCount(_) => FilterField::WordCount,
            Filter::MinLength(_) => FilterField::MinLength,
            Filter::MaxLength(_) => FilterField::MaxLength,
            Filter::ContainsCharacter(_) => FilterField::ContainsCharacter,
        }
    }
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of constraints present.
    pub fn len(&self) -> usize {
        [
            self.is_palindrome.is_some(),
            self.word_count.is_some(),
            self.min_length.is_some(),
            self.max_length.is_some(),
            self.contains_character.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn has(&self, field: FilterField) -> bool {
        match field {
            FilterField::IsPalindrome => self.is_palindrome.is_some(),
            FilterField::WordCount => self.word_count.is_some(),
            FilterField::MinLength => self.min_length.is_some(),
            FilterField::MaxLength => self.max_length.is_some(),
            FilterField::ContainsCharacter => self.contains_character.is_some(),
        }
    }

    /// Set one constraint, replacing any previous value for its field.
    pub fn insert(&mut self, filter: Filter) {
        match filter {
            Filter::IsPalindrome(v) => self.is_palindrome = Some(v),
            Filter::WordCount(v) => self.word_count = Some(v),
            Filter::MinLength(v) => self.min_length = Some(v),
            Filter::MaxLength(v) => self.max_length = Some(v),
            Filter::ContainsCharacter(v) => self.contains_character = Some(v),
        }
    }

    /// Whether a stored string satisfies every constraint.
    ///
    /// Equality on `is_palindrome` and `word_count`, inclusive range on
    /// `length`, and a case-insensitive containment test on the value.
    pub fn matches(&self, value: &str, analysis: &AnalysisResult) -> bool {
        if let Some(expected) = self.is_palindrome {
            if analysis.is_palindrome != expected {
                return false;
            }
        }
        if let Some(expected) = self.word_count {
            if analysis.word_count != expected {
                return false;
            }
        }
        let length = i64::try_from(analysis.length).unwrap_or(i64::MAX);
        if let Some(min) = self.min_length {
            if length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            let needle: Vec<char> = c.to_lowercase().collect();
            let haystack: Vec<char> = value.to_lowercase().chars().collect();
            if !haystack.windows(needle.len()).any(|w| w == needle.as_slice()) {
                return false;
            }
        }
        true
    }

    /// Build a filter set from structured query parameters.
    ///
    /// Recognized keys are `is_palindrome`, `word_count`, `min_length`,
    /// `max_length` and `contains_character`; anything else is ignored.
    pub fn from_query_params<'a, I>(params: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filters = FilterSet::default();

        for (key, raw) in params {
            let filter = match key {
                "is_palindrome" => match raw.to_ascii_lowercase().as_str() {
                    "true" => Filter::IsPalindrome(true),
                    "false" => Filter::IsPalindrome(false),
                    _ => return Err(invalid(key, raw)),
                },
                "word_count" => Filter::WordCount(parse_number(key, raw)?),
                "min_length" => Filter::MinLength(parse_number(key, raw)?),
                "max_length" => Filter::MaxLength(parse_number(key, raw)?),
                "contains_character" => {
                    let mut chars = raw.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Filter::ContainsCharacter(c),
                        _ => return Err(invalid(key, raw)),
                    }
                }
                _ => continue,
            };
            filters.insert(filter);
        }

        if let (Some(min_length), Some(max_length)) = (filters.min_length, filters.max_length) {
            if min_length > max_length {
                return Err(FilterError::ConflictingRange {
                    min_length,
                    max_length,
                });
            }
        }

        Ok(filters)
    }
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Result<T, FilterError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn invalid(key: &str, raw: &str) -> FilterError {
    FilterError::InvalidValue {
        parameter: key.to_string(),
        value: raw.to_string(),
    }
}
