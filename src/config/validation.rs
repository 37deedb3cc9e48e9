// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::config::{ValidationCompleted, ValidationFailed};
use crate::observability::messages::StructuredLog;

/// Validate a loaded configuration.
///
/// Checks that no seed value repeats (each would collide on its content
/// hash), that no query is blank, and that `log_filter` parses.
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, value) in cfg.seed.iter().enumerate() {
        positions.entry(value.as_str()).or_default().push(i);
    }
    let mut duplicates: Vec<ValidationError> = positions
        .into_iter()
        .filter(|(_, p)| p.len() > 1)
        .map(|(value, positions)| ValidationError::DuplicateSeedValue {
            value: value.to_string(),
            positions,
        })
        .collect();
    duplicates.sort_by_key(|e| match e {
        ValidationError::DuplicateSeedValue { positions, .. } => positions[0],
        _ => usize::MAX,
    });
    errors.extend(duplicates);

    for (position, query) in cfg.queries.iter().enumerate() {
        if query.trim().is_empty() {
            errors.push(ValidationError::BlankQuery { position });
        }
    }

    if let Some(filter) = &cfg.log_filter {
        if let Err(e) = EnvFilter::try_new(filter) {
            errors.push(ValidationError::InvalidLogFilter {
                filter: filter.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        ValidationCompleted {
            seed_count: cfg.seed.len(),
            query_count: cfg.queries.len(),
        }
        .log();
        Ok(())
    } else {
        ValidationFailed {
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}
