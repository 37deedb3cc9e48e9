use async_trait::async_trait;

use crate::errors::StoreError;
use crate::query::FilterSet;
use crate::store::AnalyzedString;

/// Persistence seam for analyzed strings.
///
/// Records are keyed by their content hash, so a value can only be stored
/// once. Implementations must be safe to share across tasks.
#[async_trait]
pub trait StringStore: Send + Sync {
    /// Store a new record; fails with `AlreadyExists` if its id is taken.
    async fn insert(&self, record: AnalyzedString) -> Result<(), StoreError>;

    async fn get(&self, value: &str) -> Result<AnalyzedString, StoreError>;

    /// All records satisfying `filters`, oldest first.
    async fn list(&self, filters: &FilterSet) -> Vec<AnalyzedString>;

    /// Remove and return the record for `value`.
    async fn remove(&self, value: &str) -> Result<AnalyzedString, StoreError>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
