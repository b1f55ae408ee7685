//! Property-based tests for the Topic Parser
//!
//! Tests invariants:
//! - Total on any string input (no panics, no errors)
//! - Every output topic is trimmed and non-empty
//! - No duplicate topics in the output
//! - Parsing the comma-joined output again is a fixed point

use proptest::prelude::*;
use std::collections::HashSet;

use crate::core::topics::parse;

/// Arbitrary unicode-ish text, including separators and noise.
fn arb_raw_input() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,;/]{0,200}"
}

/// Topic words that cannot collide with the tokenizer: no separators, no
/// standalone "and".
fn arb_topic_word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}".prop_filter("connective is split away", |w| w != "and")
}

proptest! {
    #[test]
    fn parser_is_total(input in any::<String>()) {
        // Must not panic on anything, printable or not.
        let _ = parse(&input);
    }

    #[test]
    fn topics_are_trimmed_and_non_empty(input in arb_raw_input()) {
        for topic in parse(&input) {
            prop_assert!(!topic.is_empty());
            prop_assert_eq!(topic.trim(), topic.as_str());
        }
    }

    #[test]
    fn no_duplicate_topics(input in arb_raw_input()) {
        let topics = parse(&input);
        let unique: HashSet<&String> = topics.iter().collect();
        prop_assert_eq!(unique.len(), topics.len());
    }

    #[test]
    fn joined_output_is_a_fixed_point(words in prop::collection::vec(arb_topic_word(), 0..8)) {
        let first = parse(&words.join(", "));
        let second = parse(&first.join(", "));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn connective_and_comma_agree(a in arb_topic_word(), b in arb_topic_word()) {
        prop_assume!(a != b);
        let with_and = parse(&format!("{a} and {b}"));
        let with_comma = parse(&format!("{a}, {b}"));
        prop_assert_eq!(with_and, with_comma);
    }
}
