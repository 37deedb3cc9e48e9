// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{AnalysisError, FilterError, QueryError, StoreError};

/// Any failure surfaced by [`crate::service::StringService`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// HTTP status class a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Analysis(_) => 422,
            ServiceError::Query(_) => 400,
            ServiceError::Filter(_) => 400,
            ServiceError::Store(StoreError::AlreadyExists { .. }) => 409,
            ServiceError::Store(StoreError::NotFound { .. }) => 404,
        }
    }
}
