// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// One or more validation rules failed; every failure is reported.
    #[error("Configuration validation failed:\n{}", format_all(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_all(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The same string is listed more than once in `seed`
    DuplicateSeedValue {
        /// The repeated value
        value: String,
        /// Zero-based positions of every occurrence
        positions: Vec<usize>,
    },
    /// A configured query is empty or whitespace only
    BlankQuery {
        /// Zero-based position in `queries`
        position: usize,
    },
    /// The log filter directive could not be parsed
    InvalidLogFilter {
        /// The rejected directive
        filter: String,
        /// Parser message
        reason: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateSeedValue { value, positions } => {
                let positions: Vec<String> = positions.iter().map(|p| p.to_string()).collect();
                write!(
                    f,
                    "Seed value '{}' is listed more than once (positions {})",
                    value,
                    positions.join(", ")
                )
            }
            ValidationError::BlankQuery { position } => {
                write!(f, "Query at position {} is blank", position)
            }
            ValidationError::InvalidLogFilter { filter, reason } => {
                write!(f, "Invalid log filter '{}': {}", filter, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
