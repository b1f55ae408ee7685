//! Document Registry
//!
//! Process-wide bookkeeping for uploaded lecture documents. Modeled as an
//! explicit repository object passed through request context — populate on
//! upload, query by id, clear on delete-all — rather than ambient global
//! state, so concurrent requests see a defined lifecycle.
//!
//! Extraction and indexing of the document content happen in external
//! collaborators; only the metadata lives here.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum number of documents registered at once.
pub const MAX_DOCUMENTS: usize = 4;

/// Maximum combined page count across all registered documents.
pub const MAX_TOTAL_PAGES: u32 = 400;

// ============================================================================
// Errors
// ============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Maximum of {MAX_DOCUMENTS} documents allowed; delete one before uploading")]
    TooManyDocuments,

    #[error("Total page limit ({MAX_TOTAL_PAGES}) would be exceeded: {current} registered, {adding} incoming")]
    PageLimitExceeded { current: u32, adding: u32 },

    #[error("Unknown document id: {0}")]
    UnknownDocument(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

// ============================================================================
// Records
// ============================================================================

/// Metadata for one uploaded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub id: String,
    pub filename: String,
    pub title: String,
    pub page_count: u32,
    pub chunk_count: u32,
    pub uploaded_at: DateTime<Utc>,
}

// ============================================================================
// Registry
// ============================================================================

/// In-process repository of uploaded-document metadata.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: HashMap<String, DocumentInfo>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly ingested document, enforcing the count and page
    /// limits. Returns the generated document id.
    pub fn register(
        &mut self,
        filename: &str,
        title: &str,
        page_count: u32,
        chunk_count: u32,
    ) -> Result<String> {
        if self.documents.len() >= MAX_DOCUMENTS {
            return Err(RegistryError::TooManyDocuments);
        }
        let current: u32 = self.documents.values().map(|d| d.page_count).sum();
        if current + page_count > MAX_TOTAL_PAGES {
            return Err(RegistryError::PageLimitExceeded {
                current,
                adding: page_count,
            });
        }

        let id = Uuid::new_v4().to_string();
        log::info!("Registered document {id} ({filename}, {page_count} pages, {chunk_count} chunks)");
        self.documents.insert(
            id.clone(),
            DocumentInfo {
                id: id.clone(),
                filename: filename.to_string(),
                title: title.to_string(),
                page_count,
                chunk_count,
                uploaded_at: Utc::now(),
            },
        );
        Ok(id)
    }

    pub fn get(&self, id: &str) -> Result<&DocumentInfo> {
        self.documents
            .get(id)
            .ok_or_else(|| RegistryError::UnknownDocument(id.to_string()))
    }

    /// All registered documents, most recent first.
    pub fn list(&self) -> Vec<&DocumentInfo> {
        let mut docs: Vec<&DocumentInfo> = self.documents.values().collect();
        docs.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        docs
    }

    pub fn remove(&mut self, id: &str) -> Result<DocumentInfo> {
        self.documents
            .remove(id)
            .ok_or_else(|| RegistryError::UnknownDocument(id.to_string()))
    }

    /// Delete-all lifecycle hook.
    pub fn clear(&mut self) {
        self.documents.clear();
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Combined page count of everything registered.
    pub fn total_pages(&self) -> u32 {
        self.documents.values().map(|d| d.page_count).sum()
    }
}
