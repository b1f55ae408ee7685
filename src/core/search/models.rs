//! Context Chunk Models
//!
//! Data structures for retrievable units of lecture content. Chunks are
//! owned by the content index; this core samples them and never mutates
//! them.

use serde::{Deserialize, Serialize};

/// Similarity-search metadata attached to a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChunkMetadata {
    /// Id of the uploaded document this chunk came from.
    pub source_id: String,
    /// Page the chunk starts on.
    pub page: u32,
    /// Chunk holds pseudo-code; formatted in a code fence for the Generator.
    #[serde(default)]
    pub contains_code: bool,
    /// Chunk holds display math; formatted in a math fence for the Generator.
    #[serde(default)]
    pub contains_math: bool,
}

/// A retrievable unit of lecture content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextChunk {
    /// Unique within the content index.
    pub chunk_id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: ChunkMetadata,
}

impl ContextChunk {
    /// Convenience constructor for plain-text chunks.
    pub fn text_chunk(chunk_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chunk_id: chunk_id.into(),
            text: text.into(),
            metadata: ChunkMetadata::default(),
        }
    }
}
