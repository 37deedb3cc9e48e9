// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors returned by string stores.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same content hash is already stored.
    #[error("String already exists: '{value}'")]
    AlreadyExists { value: String },

    #[error("String does not exist: '{value}'")]
    NotFound { value: String },
}
