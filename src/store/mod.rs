// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod memory;

pub use memory::MemoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, AnalysisResult};

/// A stored string together with its analysis.
///
/// `id` is the content hash of `value`, which makes `value` unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedString {
    pub id: String,
    pub value: String,
    pub properties: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl AnalyzedString {
    /// Analyze `value` and stamp the record with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.content_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }

    pub fn matches(&self, filters: &crate::query::FilterSet) -> bool {
        filters.matches(&self.value, &self.properties)
    }
}
