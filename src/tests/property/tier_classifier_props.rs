//! Property-based tests for the Retrieval Tier Classifier
//!
//! Tests invariants:
//! - Total on any input
//! - Tie-break determinism: a comprehensive keyword anywhere in the
//!   question wins over any comparison/complex keywords also present
//! - Case changes never alter the classification

use proptest::prelude::*;

use crate::core::retrieval::{classify, RetrievalTier};

fn arb_comprehensive_keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "all topics",
        "list topics",
        "list all",
        "what topics",
        "table of contents",
        "overview",
        "summary of",
        "everything about",
        "all algorithms",
        "complete list",
        "full list",
    ])
}

fn arb_comparison_keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "compare",
        "difference between",
        " vs ",
        "versus",
        "contrast",
        "similarities",
        "which is better",
    ])
}

/// Filler that cannot accidentally contain a keyword.
fn arb_filler() -> impl Strategy<Value = String> {
    "[bdfgjkmpqxz]{0,12}"
}

proptest! {
    #[test]
    fn classifier_is_total(question in any::<String>()) {
        let _ = classify(&question);
    }

    #[test]
    fn comprehensive_always_wins(
        comp in arb_comprehensive_keyword(),
        cmp in arb_comparison_keyword(),
        head in arb_filler(),
        tail in arb_filler(),
    ) {
        // Both keyword families present, in either order.
        let q1 = format!("{head} {comp} {cmp} {tail}");
        let q2 = format!("{head} {cmp} {comp} {tail}");
        prop_assert_eq!(classify(&q1), RetrievalTier::Comprehensive);
        prop_assert_eq!(classify(&q2), RetrievalTier::Comprehensive);
    }

    #[test]
    fn classification_is_case_insensitive(
        comp in arb_comprehensive_keyword(),
        head in arb_filler(),
    ) {
        let q = format!("{head} {comp}");
        prop_assert_eq!(classify(&q), classify(&q.to_uppercase()));
    }

    #[test]
    fn filler_alone_is_simple(head in arb_filler(), tail in arb_filler()) {
        let q = format!("{head} {tail}");
        prop_assert_eq!(classify(&q), RetrievalTier::Simple);
    }
}
