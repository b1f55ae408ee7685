//! Property-based tests for the Diverse Context Sampler
//!
//! Tests invariants:
//! - A deduplicated sample never contains two chunks with the same id,
//!   for any query list, any budget, with or without shuffling
//! - The total budget is never exceeded

use proptest::prelude::*;
use tokio::runtime::Runtime;

use crate::core::retrieval::sample;
use crate::core::search::ContextChunk;
use crate::tests::mocks::StaticIndex;

/// A word pool the keyword-scored mock index can match on.
const WORDS: &[&str] = &[
    "sorting", "graphs", "heaps", "hashing", "recursion", "complexity", "greedy", "dynamic",
];

fn arb_chunks() -> impl Strategy<Value = Vec<ContextChunk>> {
    prop::collection::vec(
        (0usize..WORDS.len(), 0usize..WORDS.len()),
        1..30,
    )
    .prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (a, b))| {
                ContextChunk::text_chunk(
                    format!("chunk_{i}"),
                    format!("{} relates to {}", WORDS[a], WORDS[b]),
                )
            })
            .collect()
    })
}

fn arb_queries() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(WORDS.to_vec()).prop_map(|w| w.to_string()),
        1..6,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn dedupe_guarantees_unique_chunk_ids(
        chunks in arb_chunks(),
        queries in arb_queries(),
        per_query_k in 1usize..10,
        budget in 1usize..25,
        shuffle in any::<bool>(),
    ) {
        let rt = Runtime::new().expect("tokio runtime");
        let index = StaticIndex::new(chunks);

        let out = rt
            .block_on(sample(&queries, &index, None, per_query_k, budget, true, shuffle))
            .expect("static index never fails");

        let mut ids: Vec<&str> = out.iter().map(|c| c.chunk_id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(before, ids.len());
    }

    #[test]
    fn budget_is_never_exceeded(
        chunks in arb_chunks(),
        queries in arb_queries(),
        per_query_k in 1usize..10,
        budget in 1usize..25,
    ) {
        let rt = Runtime::new().expect("tokio runtime");
        let index = StaticIndex::new(chunks);

        let out = rt
            .block_on(sample(&queries, &index, None, per_query_k, budget, true, false))
            .expect("static index never fails");
        prop_assert!(out.len() <= budget);
    }
}
