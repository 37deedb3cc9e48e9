// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while turning a request body into an analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The body has no `value` field, or it is `null`.
    #[error("Missing 'value' field")]
    MissingValue,

    /// The `value` field is present but is not a string.
    #[error("Invalid data type for 'value': expected string, found {found}")]
    InvalidInputType { found: &'static str },
}
