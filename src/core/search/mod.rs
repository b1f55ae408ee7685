//! Content Index Seam
//!
//! The similarity-search collaborator over ingested lecture chunks. This
//! core only issues read-only queries against it; indexing, storage, and
//! ranking are entirely the collaborator's concern.

mod error;
mod models;

pub use error::{Result, SearchError};
pub use models::{ChunkMetadata, ContextChunk};

use async_trait::async_trait;

/// Read-only similarity search over ingested lecture content.
///
/// Results come back in the index's own relevance order and are
/// best-effort: fewer than `k` chunks is not an error. Passing
/// `document_ids` restricts the search to those uploaded documents.
#[async_trait]
pub trait ContentIndex: Send + Sync {
    async fn search(
        &self,
        query: &str,
        k: usize,
        document_ids: Option<&[String]>,
    ) -> Result<Vec<ContextChunk>>;
}
