// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod analysis;   // string properties
pub mod config;     // YAML config
pub mod errors;     // error handling
pub mod observability;
pub mod query;      // natural-language filters
pub mod service;    // CRUD operations
pub mod store;      // persistence
pub mod traits;     // store seam
