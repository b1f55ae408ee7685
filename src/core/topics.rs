//! Topic Parser
//!
//! Normalizes free-form topic strings typed by a student ("bubble sort,
//! merge sort and heaps") into an ordered set of distinct topic strings.
//! The parser is total: any input yields a (possibly empty) topic list,
//! never an error.

use indexmap::IndexSet;

/// Delimiters recognized in the first tokenizer stage.
const DELIMITERS: &[char] = &[',', ';', '/'];

/// Connective word split in the second tokenizer stage. Only standalone
/// tokens are split — "sand and gravel" keeps "sand" intact.
const CONNECTIVE: &str = "and";

/// Sentinel input meaning "no topics" (case-insensitive).
const NONE_SENTINEL: &str = "none";

/// Parse a free-form topic string into distinct topics.
///
/// Stage 1 splits on `,`, `;`, and `/`; stage 2 splits each fragment on the
/// standalone word "and". Fragments are trimmed, empties dropped, and
/// duplicates removed case-sensitively while preserving first-seen order.
///
/// ```
/// use lectern::core::topics::parse;
///
/// assert_eq!(parse("quadratic sorts and merge sort"), vec!["quadratic sorts", "merge sort"]);
/// assert_eq!(parse("a, b; c and d"), vec!["a", "b", "c", "d"]);
/// assert_eq!(parse(""), Vec::<String>::new());
/// ```
pub fn parse(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NONE_SENTINEL) {
        return Vec::new();
    }

    let mut topics: IndexSet<String> = IndexSet::new();

    for fragment in trimmed.split(DELIMITERS) {
        for piece in split_on_connective(fragment) {
            let piece = piece.trim();
            if !piece.is_empty() {
                topics.insert(piece.to_string());
            }
        }
    }

    topics.into_iter().collect()
}

/// Split a fragment on the standalone connective token, keeping words that
/// merely contain it ("android", "sandwich") intact.
fn split_on_connective(fragment: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for word in fragment.split_whitespace() {
        if word.eq_ignore_ascii_case(CONNECTIVE) {
            pieces.push(std::mem::take(&mut current));
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }
    pieces.push(current);
    pieces
}
