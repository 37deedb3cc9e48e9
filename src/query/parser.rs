// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use regex::{Captures, Regex};
use std::str::FromStr;

use super::filter_set::{Filter, FilterField, FilterSet};
use crate::errors::QueryError;

/// Turns the captures of a matched pattern into a constraint.
pub type Extractor = fn(&Captures<'_>) -> Result<Filter, QueryError>;

/// One entry of the vocabulary: a pattern, the field it sets, and how to
/// read the value out of the match.
pub struct Rule {
    pub pattern: Regex,
    pub field: FilterField,
    pub extract: Extractor,
}

/// Rule-table parser for plain-English filter phrases.
///
/// Rules run in table order against the lowercased query. A rule whose
/// field was already set by an earlier rule is skipped, so alternatives for
/// the same field behave like an if/else chain while different fields stay
/// independent.
pub struct QueryParser {
    rules: Vec<Rule>,
}

const RULE_TABLE: &[(&str, FilterField, Extractor)] = &[
    (r"palindrom(e|ic)", FilterField::IsPalindrome, palindrome),
    (r"\b(single|one)[\s-]+word", FilterField::WordCount, single_word),
    (r"\b(\d+)\s+words?\b", FilterField::WordCount, word_count),
    (r"\blonger\s+than\s+(\d+)", FilterField::MinLength, longer_than),
    (r"\bshorter\s+than\s+(\d+)", FilterField::MaxLength, shorter_than),
    (r"\bletter\s+(\w)\b", FilterField::ContainsCharacter, character),
    (r"\bfirst\s+vowel\b", FilterField::ContainsCharacter, first_vowel),
    (
        r"\bcontain(?:s|ing)?\s+(?:(?:the|a|an|character|letter)\s+)*(\w)\b",
        FilterField::ContainsCharacter,
        character,
    ),
];

fn palindrome(_: &Captures<'_>) -> Result<Filter, QueryError> {
    Ok(Filter::IsPalindrome(true))
}

fn single_word(_: &Captures<'_>) -> Result<Filter, QueryError> {
    Ok(Filter::WordCount(1))
}

fn word_count(caps: &Captures<'_>) -> Result<Filter, QueryError> {
    Ok(Filter::WordCount(number(caps)?))
}

fn longer_than(caps: &Captures<'_>) -> Result<Filter, QueryError> {
    number::<i64>(caps)?
        .checked_add(1)
        .map(Filter::MinLength)
        .ok_or_else(|| QueryError::InvalidNumber {
            literal: caps[1].to_string(),
        })
}

// `shorter than 0` yields -1, which no string satisfies
fn shorter_than(caps: &Captures<'_>) -> Result<Filter, QueryError> {
    Ok(Filter::MaxLength(number::<i64>(caps)? - 1))
}

fn first_vowel(_: &Captures<'_>) -> Result<Filter, QueryError> {
    Ok(Filter::ContainsCharacter('a'))
}

fn number<T: FromStr>(caps: &Captures<'_>) -> Result<T, QueryError> {
    caps[1].parse().map_err(|_| QueryError::InvalidNumber {
        literal: caps[1].to_string(),
    })
}

fn character(caps: &Captures<'_>) -> Result<Filter, QueryError> {
    // `\w` always captures exactly one char
    let c = caps[1].chars().next().unwrap_or_default();
    Ok(Filter::ContainsCharacter(c))
}

impl QueryParser {
    pub fn new() -> Self {
        let rules = RULE_TABLE
            .iter()
            .map(|(pattern, field, extract)| Rule {
                pattern: Regex::new(pattern).expect("rule table patterns are valid regexes"),
                field: *field,
                extract: *extract,
            })
            .collect();

        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Parse a phrase into filters.
    ///
    /// Fails when the query is blank or when nothing in it is recognized.
    /// Contradictory constraints are returned as parsed; they simply match
    /// no string.
    pub fn parse(&self, query: &str) -> Result<FilterSet, QueryError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        let mut filters = FilterSet::default();
        for rule in &self.rules {
            if filters.has(rule.field) {
                continue;
            }
            if let Some(caps) = rule.pattern.captures(&query) {
                filters.insert((rule.extract)(&caps)?);
            }
        }

        if filters.is_empty() {
            return Err(QueryError::UnparseableQuery { query });
        }

        Ok(filters)
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}
