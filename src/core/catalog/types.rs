//! Section Catalog Types
//!
//! Data structures for the canonical study-section catalog.

use serde::{Deserialize, Serialize};

// ============================================================================
// Priority
// ============================================================================

/// Pedagogical priority of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must-study material; the fallback plan is built from these.
    Core,
    /// Default priority for unmarked sections.
    #[default]
    Important,
    /// First candidates for compression or omission.
    Optional,
}

impl Priority {
    /// Parse a marker token. Case-insensitive; `None` for unknown tokens.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "core" => Some(Self::Core),
            "important" => Some(Self::Important),
            "optional" => Some(Self::Optional),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Important => "important",
            Self::Optional => "optional",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Section
// ============================================================================

/// One canonical unit of source-document structure.
///
/// `id` is unique and monotonically assigned in document order, starting
/// at 1. Sections are immutable after the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: u32,
    /// Chapter or major topic name.
    pub chapter: String,
    /// Sanitized display title, at most 100 characters.
    pub title: String,
    /// Inclusive `(start, end)` page range.
    pub pages: (u32, u32),
    /// 1 = easiest, 3 = hardest.
    pub difficulty: u8,
    pub priority: Priority,
    /// Estimated study minutes at intermediate level.
    pub estimated_minutes: u32,
}

impl Section {
    /// Case-insensitive check whether a topic names this section.
    pub fn mentions(&self, topic: &str) -> bool {
        let topic = topic.to_lowercase();
        self.title.to_lowercase().contains(&topic) || self.chapter.to_lowercase().contains(&topic)
    }
}
