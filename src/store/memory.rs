// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::AnalyzedString;
use crate::analysis::content_hash;
use crate::errors::StoreError;
use crate::query::FilterSet;
use crate::traits::StringStore;

/// In-process store backed by a hash map keyed on content hash.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, AnalyzedString>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StringStore for MemoryStore {
    async fn insert(&self, record: AnalyzedString) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists {
                value: record.value,
            });
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn get(&self, value: &str) -> Result<AnalyzedString, StoreError> {
        self.records
            .read()
            .await
            .get(&content_hash(value))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                value: value.to_string(),
            })
    }

    async fn list(&self, filters: &FilterSet) -> Vec<AnalyzedString> {
        let mut matching: Vec<AnalyzedString> = self
            .records
            .read()
            .await
            .values()
            .filter(|record| record.matches(filters))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.value.cmp(&b.value))
        });
        matching
    }

    async fn remove(&self, value: &str) -> Result<AnalyzedString, StoreError> {
        self.records
            .write()
            .await
            .remove(&content_hash(value))
            .ok_or_else(|| StoreError::NotFound {
                value: value.to_string(),
            })
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    async fn seeded(values: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        for value in values {
            store.insert(AnalyzedString::new(*value)).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = seeded(&["racecar"]).await;

        let record = store.get("racecar").await.unwrap();
        assert_eq!(record.value, "racecar");
        assert!(record.properties.is_palindrome);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let store = seeded(&["racecar"]).await;

        let err = store.insert(AnalyzedString::new("racecar")).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::AlreadyExists {
                value: "racecar".to_string()
            }
        );
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_values_differing_in_padding_are_distinct() {
        let store = seeded(&["racecar", " racecar "]).await;
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = MemoryStore::new();
        assert!(store.is_empty().await);
        assert_eq!(
            store.get("nope").await.unwrap_err(),
            StoreError::NotFound {
                value: "nope".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_list_applies_filters() {
        let store = seeded(&["racecar", "hello world", "level", "a toyota"]).await;

        let palindromes = store
            .list(&FilterSet {
                is_palindrome: Some(true),
                ..Default::default()
            })
            .await;
        let mut values: Vec<&str> = palindromes.iter().map(|r| r.value.as_str()).collect();
        values.sort();
        assert_eq!(values, vec!["level", "racecar"]);

        let all = store.list(&FilterSet::default()).await;
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = seeded(&["racecar", "level"]).await;

        let removed = store.remove("racecar").await.unwrap();
        assert_eq!(removed.value, "racecar");
        assert_eq!(store.len().await, 1);
        assert!(store.remove("racecar").await.is_err());
    }

    #[tokio::test]
    async fn test_concurrent_inserts_of_same_value() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert(AnalyzedString::new("kayak")).await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(store.len().await, 1);
    }
}
