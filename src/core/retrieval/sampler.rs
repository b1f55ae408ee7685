//! Diverse Context Sampler
//!
//! Issues one or more queries against the content index and merges the
//! results under a dedup/budget contract. Guarantee: the returned list
//! never contains two chunks with the same `chunk_id` when deduplication
//! is on. A query returning fewer chunks than asked for is fine — the
//! shortfall is not compensated from other queries.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::core::search::{ContentIndex, ContextChunk, Result};

/// Canonical broad queries used when the caller supplies no topics, so a
/// quiz or plan draws on the whole breadth of the material rather than
/// whatever happens to rank first for a single query.
pub const DIVERSE_QUERIES: &[&str] = &[
    "algorithm complexity analysis",
    "sorting algorithms",
    "data structures",
    "algorithm design techniques",
    "mathematical concepts",
    "pseudocode and implementation",
    "problem solving strategies",
];

/// Sample up to `total_budget` chunks across `queries`.
///
/// Each query retrieves up to `per_query_k` chunks in the index's own
/// relevance order; results are concatenated in query order, deduplicated
/// by `chunk_id` (first occurrence wins) when `dedupe` is set, optionally
/// shuffled to vary repeated generations, and truncated to the budget.
pub async fn sample(
    queries: &[String],
    index: &dyn ContentIndex,
    document_ids: Option<&[String]>,
    per_query_k: usize,
    total_budget: usize,
    dedupe: bool,
    shuffle: bool,
) -> Result<Vec<ContextChunk>> {
    let mut merged: Vec<ContextChunk> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for query in queries {
        let chunks = index.search(query, per_query_k, document_ids).await?;
        log::debug!("Query {query:?} returned {} chunk(s)", chunks.len());

        for chunk in chunks {
            if dedupe && !seen.insert(chunk.chunk_id.clone()) {
                continue;
            }
            merged.push(chunk);
        }
    }

    if shuffle {
        merged.shuffle(&mut rand::thread_rng());
    }

    merged.truncate(total_budget);
    Ok(merged)
}

/// Sample with topical diversity: the supplied topics become the queries,
/// or the canonical [`DIVERSE_QUERIES`] when none are given. The per-query
/// budget is the total budget split evenly across queries, at least 1.
pub async fn sample_diverse(
    topics: &[String],
    index: &dyn ContentIndex,
    document_ids: Option<&[String]>,
    total_budget: usize,
    shuffle: bool,
) -> Result<Vec<ContextChunk>> {
    let queries: Vec<String> = if topics.is_empty() {
        DIVERSE_QUERIES.iter().map(|q| q.to_string()).collect()
    } else {
        topics.to_vec()
    };

    let per_query_k = std::cmp::max(1, total_budget / queries.len());
    sample(&queries, index, document_ids, per_query_k, total_budget, true, shuffle).await
}
