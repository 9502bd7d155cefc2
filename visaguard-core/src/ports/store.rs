// visaguard-core/src/ports/store.rs

// This file defines what the ingestion stage needs from a document store,
// without knowing how it is done. The production deployment points this at a
// real document database; local runs use the JSON-lines adapter.

use crate::domain::dataset::TabularDataset;
use crate::error::VisaguardError;
use async_trait::async_trait;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetches every document of `collection` as one in-memory table.
    /// The column set is the union of the fields seen across documents;
    /// fields absent from a document become empty cells.
    async fn fetch_collection(&self, collection: &str)
    -> Result<TabularDataset, VisaguardError>;
}
