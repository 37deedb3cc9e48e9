// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::json;
use std::sync::Arc;

use super::*;
use crate::errors::{FilterError, QueryError};
use crate::store::MemoryStore;

async fn service_with(values: &[&str]) -> StringService {
    let service = StringService::new(Arc::new(MemoryStore::new()));
    for value in values {
        service.create(value).await.unwrap();
    }
    service
}

fn values(data: &[AnalyzedString]) -> Vec<&str> {
    let mut values: Vec<&str> = data.iter().map(|r| r.value.as_str()).collect();
    values.sort();
    values
}

/// Create, fetch and delete a string through the service
#[tokio::test]
async fn test_create_get_delete_lifecycle() {
    let service = service_with(&[]).await;

    let created = service.create("racecar").await.unwrap();
    assert_eq!(created.properties.length, 7);
    assert!(created.properties.is_palindrome);

    let fetched = service.get("racecar").await.unwrap();
    assert_eq!(fetched, created);

    service.delete("racecar").await.unwrap();

    let err = service.get("racecar").await.unwrap_err();
    assert_eq!(err.status_code(), 404);
    let err = service.delete("racecar").await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

/// Submitting the same value twice is a conflict
#[tokio::test]
async fn test_duplicate_create_conflicts() {
    let service = service_with(&["level"]).await;

    let err = service.create("level").await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::Store(StoreError::AlreadyExists {
            value: "level".to_string()
        })
    );
    assert_eq!(err.status_code(), 409);
}

/// JSON bodies are type-checked before anything is stored
#[tokio::test]
async fn test_create_from_json() {
    let service = service_with(&[]).await;

    let created = service
        .create_from_json(&json!({ "value": "hello world" }))
        .await
        .unwrap();
    assert_eq!(created.properties.word_count, 2);

    let err = service.create_from_json(&json!({})).await.unwrap_err();
    assert_eq!(err, ServiceError::Analysis(AnalysisError::MissingValue));

    let err = service
        .create_from_json(&json!({ "value": null }))
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::Analysis(AnalysisError::MissingValue));

    let err = service
        .create_from_json(&json!({ "value": 123 }))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Analysis(AnalysisError::InvalidInputType { found: "number" })
    );
    assert_eq!(err.status_code(), 422);

    assert_eq!(service.store().len().await, 1);
}

/// Structured listing applies every recognized parameter
#[tokio::test]
async fn test_list_with_structured_filters() {
    let service = service_with(&["racecar", "level", "hello world", "step on no pets", "zebra"]).await;

    let response = service
        .list(vec![("is_palindrome", "true"), ("word_count", "1")])
        .await
        .unwrap();
    assert_eq!(values(&response.data), vec!["level", "racecar"]);
    assert_eq!(response.count, 2);
    assert_eq!(response.filters_applied.is_palindrome, Some(true));

    let response = service
        .list(vec![("min_length", "6"), ("max_length", "11")])
        .await
        .unwrap();
    assert_eq!(values(&response.data), vec!["hello world", "racecar"]);

    let response = service.list(Vec::new()).await.unwrap();
    assert_eq!(response.count, 5);
}

/// Invalid structured parameters are a bad request
#[tokio::test]
async fn test_list_rejects_invalid_parameters() {
    let service = service_with(&["racecar"]).await;

    let err = service.list(vec![("min_length", "long")]).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Filter(FilterError::InvalidValue { .. })
    ));
    assert_eq!(err.status_code(), 400);
}

/// Natural-language queries filter the same way as structured ones
#[tokio::test]
async fn test_natural_language_filter() {
    let service = service_with(&["racecar", "level", "hello world", "step on no pets", "zebra"]).await;

    let response = service
        .filter_by_natural_language("all single word palindromic strings")
        .await
        .unwrap();
    assert_eq!(values(&response.data), vec!["level", "racecar"]);
    assert_eq!(response.count, 2);
    assert_eq!(
        response.interpreted_query.original,
        "all single word palindromic strings"
    );
    assert_eq!(
        response.interpreted_query.parsed_filters,
        FilterSet {
            is_palindrome: Some(true),
            word_count: Some(1),
            ..Default::default()
        }
    );

    let response = service
        .filter_by_natural_language("strings containing the letter z")
        .await
        .unwrap();
    assert_eq!(values(&response.data), vec!["zebra"]);

    let response = service
        .filter_by_natural_language("strings longer than 10 characters")
        .await
        .unwrap();
    assert_eq!(values(&response.data), vec!["hello world", "step on no pets"]);
}

/// Query failures carry the parser's error
#[tokio::test]
async fn test_natural_language_filter_errors() {
    let service = service_with(&["racecar"]).await;

    let err = service.filter_by_natural_language("").await.unwrap_err();
    assert_eq!(err, ServiceError::Query(QueryError::EmptyQuery));
    assert_eq!(err.status_code(), 400);

    let err = service
        .filter_by_natural_language("blue elephants dancing")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Query(QueryError::UnparseableQuery { .. })
    ));
}

/// Contradictory length phrases parse and simply match nothing
#[tokio::test]
async fn test_natural_language_inverted_range_matches_nothing() {
    let service = service_with(&["racecar", "level", "hello world"]).await;

    let response = service
        .filter_by_natural_language("longer than 9 and shorter than 3")
        .await
        .unwrap();
    assert_eq!(response.count, 0);
    assert_eq!(response.interpreted_query.parsed_filters.min_length, Some(10));
    assert_eq!(response.interpreted_query.parsed_filters.max_length, Some(2));

    let response = service
        .filter_by_natural_language("strings shorter than 0 characters")
        .await
        .unwrap();
    assert!(response.data.is_empty());
    assert_eq!(response.interpreted_query.parsed_filters.max_length, Some(-1));
}

/// Responses serialize to the documented JSON shape
#[tokio::test]
async fn test_response_serialization() {
    let service = service_with(&["racecar"]).await;

    let response = service
        .filter_by_natural_language("palindromes")
        .await
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["value"], "racecar");
    assert_eq!(
        json["interpreted_query"]["parsed_filters"],
        json!({ "is_palindrome": true })
    );
}
