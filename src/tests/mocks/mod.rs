//! Mock Collaborators
//!
//! Hand-written stand-ins for the two external collaborators, used by the
//! property and service-flow tests: a keyword-scored in-memory content
//! index and a scripted Generator.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::llm::{Generator, GeneratorError, Result as GenResult};
use crate::core::search::{ContentIndex, ContextChunk, Result as SearchResult, SearchError};

// ============================================================================
// Static Index
// ============================================================================

/// In-memory content index over a fixed chunk set. Relevance is a naive
/// shared-word count — enough to make query order observable in tests.
pub struct StaticIndex {
    chunks: Vec<ContextChunk>,
    fail: bool,
}

impl StaticIndex {
    pub fn new(chunks: Vec<ContextChunk>) -> Self {
        Self { chunks, fail: false }
    }

    /// An index that errors on every query, for failure-path tests.
    pub fn unavailable() -> Self {
        Self {
            chunks: vec![],
            fail: true,
        }
    }

    fn score(query: &str, text: &str) -> usize {
        let text = text.to_lowercase();
        query
            .to_lowercase()
            .split_whitespace()
            .filter(|w| text.contains(w))
            .count()
    }
}

#[async_trait]
impl ContentIndex for StaticIndex {
    async fn search(
        &self,
        query: &str,
        k: usize,
        document_ids: Option<&[String]>,
    ) -> SearchResult<Vec<ContextChunk>> {
        if self.fail {
            return Err(SearchError::Unavailable("mock index offline".to_string()));
        }

        let mut scored: Vec<(usize, &ContextChunk)> = self
            .chunks
            .iter()
            .filter(|c| match document_ids {
                Some(ids) => ids.iter().any(|id| *id == c.metadata.source_id),
                None => true,
            })
            .map(|c| (Self::score(query, &c.text), c))
            .filter(|(score, _)| *score > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(scored.into_iter().take(k).map(|(_, c)| c.clone()).collect())
    }
}

// ============================================================================
// Scripted Generator
// ============================================================================

/// Generator returning scripted responses in order; the last response
/// repeats once the script runs out.
pub struct ScriptedGenerator {
    responses: Mutex<VecDeque<String>>,
    last: String,
}

impl ScriptedGenerator {
    pub fn new(responses: &[&str]) -> Self {
        let last = responses.last().map(|s| s.to_string()).unwrap_or_default();
        Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            last,
        }
    }
}

#[async_trait]
impl Generator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> GenResult<String> {
        let mut queue = self.responses.lock().expect("script lock poisoned");
        Ok(queue.pop_front().unwrap_or_else(|| self.last.clone()))
    }
}

/// Generator that always reports itself unavailable.
pub struct UnavailableGenerator;

#[async_trait]
impl Generator for UnavailableGenerator {
    async fn generate(&self, _prompt: &str) -> GenResult<String> {
        Err(GeneratorError::Unavailable("mock generator offline".to_string()))
    }
}
