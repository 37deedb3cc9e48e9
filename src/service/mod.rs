// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! CRUD operations over analyzed strings.
//!
//! [`StringService`] wires the analyzer and the query parser to a
//! [`StringStore`]. It owns logging and error classification; transport is
//! left to whoever embeds it.

#[cfg(test)]
mod integration_tests;

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::analysis::{content_hash, json_type_name};
use crate::errors::{AnalysisError, ServiceError, StoreError};
use crate::observability::messages::{query::*, store::*, StructuredLog};
use crate::query::{parse, FilterSet};
use crate::store::AnalyzedString;
use crate::traits::StringStore;

/// Result of a structured listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// How a natural-language query was understood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Result of a natural-language listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<AnalyzedString>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

pub struct StringService {
    store: Arc<dyn StringStore>,
}

impl StringService {
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self { store }
    }

    /// Analyze and store a new string.
    pub async fn create(&self, value: &str) -> Result<AnalyzedString, ServiceError> {
        let record = AnalyzedString::new(value);

        match self.store.insert(record.clone()).await {
            Ok(()) => {
                RecordCreated {
                    id: &record.id,
                    length: record.properties.length,
                    is_palindrome: record.properties.is_palindrome,
                }
                .log();
                Ok(record)
            }
            Err(e) => {
                if let StoreError::AlreadyExists { .. } = e {
                    DuplicateRejected { id: &record.id }.log();
                }
                Err(e.into())
            }
        }
    }

    /// Create from a JSON request body of the form `{"value": "..."}`.
    pub async fn create_from_json(&self, body: &Value) -> Result<AnalyzedString, ServiceError> {
        let value = match body.get("value") {
            None | Some(Value::Null) => return Err(AnalysisError::MissingValue.into()),
            Some(value) => value,
        };

        match value {
            Value::String(s) => self.create(s).await,
            other => Err(AnalysisError::InvalidInputType {
                found: json_type_name(other),
            }
            .into()),
        }
    }

    pub async fn get(&self, value: &str) -> Result<AnalyzedString, ServiceError> {
        self.store.get(value).await.map_err(|e| {
            RecordMissing {
                id: &content_hash(value),
                operation: "get",
            }
            .log();
            ServiceError::from(e)
        })
    }

    /// List stored strings matching structured query parameters.
    pub async fn list<'a, I>(&self, params: I) -> Result<ListResponse, ServiceError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let filters = FilterSet::from_query_params(params)?;
        let data = self.store.list(&filters).await;

        RecordsListed {
            filter_count: filters.len(),
            match_count: data.len(),
        }
        .log();

        Ok(ListResponse {
            count: data.len(),
            data,
            filters_applied: filters,
        })
    }

    pub async fn delete(&self, value: &str) -> Result<(), ServiceError> {
        match self.store.remove(value).await {
            Ok(record) => {
                RecordDeleted { id: &record.id }.log();
                Ok(())
            }
            Err(e) => {
                RecordMissing {
                    id: &content_hash(value),
                    operation: "delete",
                }
                .log();
                Err(e.into())
            }
        }
    }

    /// Interpret a plain-English query and list the matching strings.
    pub async fn filter_by_natural_language(
        &self,
        query: &str,
    ) -> Result<NaturalLanguageResponse, ServiceError> {
        let filters = match parse(query) {
            Ok(filters) => filters,
            Err(e) => {
                QueryRejected { query, error: &e }.log();
                return Err(e.into());
            }
        };

        let data = self.store.list(&filters).await;

        let msg = QueryInterpreted {
            query,
            filter_count: filters.len(),
            match_count: data.len(),
        };
        let span = msg.span("natural_language_filter");
        let _guard = span.enter();
        msg.log();

        Ok(NaturalLanguageResponse {
            count: data.len(),
            data,
            interpreted_query: InterpretedQuery {
                original: query.to_string(),
                parsed_filters: filters,
            },
        })
    }

    pub fn store(&self) -> &Arc<dyn StringStore> {
        &self.store
    }
}
