//! Retrieval Tier Classifier
//!
//! Maps a natural-language question to a retrieval breadth tier — the
//! number of chunks worth pulling from the content index. Implemented as
//! an ordered rule table evaluated top-down with first-match-wins
//! semantics, so precedence is explicit and easy to extend.

use serde::{Deserialize, Serialize};

// ============================================================================
// Tiers
// ============================================================================

/// A named retrieval breadth level with an associated chunk budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalTier {
    /// Direct factual questions.
    Simple,
    /// Detailed explanations and walkthroughs.
    Complex,
    /// Questions contrasting two or more things.
    Comparison,
    /// Broad coverage questions (topic lists, overviews).
    Comprehensive,
}

impl RetrievalTier {
    /// Number of chunks to retrieve at this tier.
    pub fn chunk_budget(&self) -> usize {
        match self {
            Self::Simple => 5,
            Self::Complex => 8,
            Self::Comparison => 10,
            Self::Comprehensive => 20,
        }
    }
}

impl std::fmt::Display for RetrievalTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Simple => "simple",
            Self::Complex => "complex",
            Self::Comparison => "comparison",
            Self::Comprehensive => "comprehensive",
        };
        write!(f, "{name} (k={})", self.chunk_budget())
    }
}

// ============================================================================
// Rule Table
// ============================================================================

const COMPREHENSIVE_KEYWORDS: &[&str] = &[
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
];

const COMPARISON_KEYWORDS: &[&str] = &[
    "compare",
    "difference between",
    " vs ",
    "versus",
    "contrast",
    "similarities",
    "which is better",
];

const COMPLEX_KEYWORDS: &[&str] = &[
    "explain in detail",
    "walk me through",
    "step by step",
    "how does",
    "why does",
    "analyze",
];

/// Ordered (keyword-set, tier) rules. First match wins: a question hitting
/// both comprehensive and comparison keywords is always comprehensive.
const TIER_RULES: &[(&[&str], RetrievalTier)] = &[
    (COMPREHENSIVE_KEYWORDS, RetrievalTier::Comprehensive),
    (COMPARISON_KEYWORDS, RetrievalTier::Comparison),
    (COMPLEX_KEYWORDS, RetrievalTier::Complex),
];

/// Classify a question into its retrieval tier.
///
/// Case-insensitive substring matching against the rule table; anything
/// unmatched is [`RetrievalTier::Simple`]. Pure and total.
pub fn classify(question: &str) -> RetrievalTier {
    let lower = question.to_lowercase();

    for (keywords, tier) in TIER_RULES {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *tier;
        }
    }

    RetrievalTier::Simple
}
