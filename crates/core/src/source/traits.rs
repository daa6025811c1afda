use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::entry::WeightEntry;

/// Trait abstraction over wherever the weight log lives remotely.
///
/// The shipped implementation speaks the weight-tracker server's endpoint
/// pair; tests substitute an in-memory mock. Swapping the backend touches
/// only the implementation, never the callers.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait EntrySource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the full entry table.
    async fn fetch_entries(&self) -> Result<Vec<WeightEntry>, CoreError>;

    /// Upsert one entry remotely: the server updates the row carrying that
    /// exact date if one exists, inserts otherwise, and echoes back the
    /// entry as stored.
    async fn upsert_entry(&self, entry: &WeightEntry) -> Result<WeightEntry, CoreError>;
}
