// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod analysis;
mod config;
mod query;
mod service;
mod store;

pub use analysis::AnalysisError;
pub use config::{ConfigError, ValidationError};
pub use query::{FilterError, QueryError};
pub use service::ServiceError;
pub use store::StoreError;
