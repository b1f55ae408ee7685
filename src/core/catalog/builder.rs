//! Section Catalog Builder
//!
//! Parses line-oriented structural text into the canonical section catalog.
//! Blocks are separated by horizontal rules (`---`); marker lines carry
//! page ranges and optional difficulty/priority/time annotations; fenced
//! code and math blocks never contribute a section title.
//!
//! A malformed block (missing page marker, unparsable annotation) is
//! logged and skipped — the build always succeeds for the blocks it can
//! parse.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::types::{Priority, Section};

/// Matches a horizontal-rule block separator on its own line.
static BLOCK_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-{3,}\s*$").expect("Invalid separator regex"));

/// Matches *Pages 12-18* / *Page 7* marker lines; the captured payload is
/// parsed by [`parse_page_range`].
static PAGES_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\*pages?\s+(.+?)\*\s*$").expect("Invalid pages marker regex")
});

/// Matches *Chapter <name>* marker lines.
static CHAPTER_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\*chapter\s+(.+?)\*\s*$").expect("Invalid chapter marker regex")
});

/// Matches *Difficulty N* marker lines.
static DIFFICULTY_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\*difficulty\s+(.+?)\*\s*$").expect("Invalid difficulty marker regex")
});

/// Matches *Priority core|important|optional* marker lines.
static PRIORITY_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\*priority\s+(.+?)\*\s*$").expect("Invalid priority marker regex")
});

/// Matches *Minutes N* marker lines.
static MINUTES_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*\*minutes\s+(.+?)\*\s*$").expect("Invalid minutes marker regex")
});

/// Chapter used when a block carries no chapter marker.
pub const DEFAULT_CHAPTER: &str = "Content";

/// Difficulty used when a block carries no difficulty marker.
pub const DEFAULT_DIFFICULTY: u8 = 2;

/// Estimated minutes used when a block carries no minutes marker.
pub const DEFAULT_SECTION_MINUTES: u32 = 30;

/// Maximum sanitized title length; longer titles are truncated to 97
/// characters plus an ellipsis.
pub const MAX_TITLE_LEN: usize = 100;

/// Minimum length for a line to be picked as a section title outright.
/// Shorter lines are usually stray page numbers or list bullets.
const MIN_TITLE_LINE_LEN: usize = 10;

const ELLIPSIS: &str = "...";

// ============================================================================
// Errors
// ============================================================================

/// Why a single block was rejected during the catalog build.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("block has no page marker")]
    MissingPages,

    #[error("unparsable page range: {0:?}")]
    InvalidPages(String),

    #[error("difficulty must be 1, 2, or 3, got {0:?}")]
    InvalidDifficulty(String),

    #[error("unknown priority token: {0:?}")]
    InvalidPriority(String),

    #[error("minutes must be a positive integer, got {0:?}")]
    InvalidMinutes(String),

    #[error("block has no usable title text")]
    MissingTitle,
}

// ============================================================================
// Builder
// ============================================================================

/// Parses raw structural text into an ordered list of [`Section`]s.
pub struct SectionCatalogBuilder;

impl SectionCatalogBuilder {
    /// Build the catalog. Malformed blocks are logged and skipped; section
    /// ids are assigned sequentially from 1 over the surviving blocks.
    pub fn build(raw: &str) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut next_id: u32 = 1;

        for (block_no, block) in split_blocks(raw).into_iter().enumerate() {
            match parse_block(&block, next_id) {
                Ok(section) => {
                    sections.push(section);
                    next_id += 1;
                }
                Err(e) => {
                    log::warn!("Skipping malformed section block {}: {e}", block_no + 1);
                }
            }
        }

        sections
    }
}

/// Split raw text into blocks on horizontal-rule lines, dropping empties.
fn split_blocks(raw: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in raw.lines() {
        if BLOCK_SEPARATOR.is_match(line) {
            if !current.trim().is_empty() {
                blocks.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    if !current.trim().is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(block: &str, id: u32) -> Result<Section, CatalogError> {
    let mut pages: Option<(u32, u32)> = None;
    let mut chapter = DEFAULT_CHAPTER.to_string();
    let mut difficulty = DEFAULT_DIFFICULTY;
    let mut priority = Priority::default();
    let mut estimated_minutes = DEFAULT_SECTION_MINUTES;
    let mut content_lines: Vec<&str> = Vec::new();

    for line in block.lines() {
        if let Some(caps) = PAGES_MARKER.captures(line) {
            pages = Some(parse_page_range(&caps[1])?);
        } else if let Some(caps) = CHAPTER_MARKER.captures(line) {
            chapter = caps[1].trim().to_string();
        } else if let Some(caps) = DIFFICULTY_MARKER.captures(line) {
            let token = caps[1].trim();
            difficulty = match token.parse::<u8>() {
                Ok(d @ 1..=3) => d,
                _ => return Err(CatalogError::InvalidDifficulty(token.to_string())),
            };
        } else if let Some(caps) = PRIORITY_MARKER.captures(line) {
            let token = caps[1].trim();
            priority =
                Priority::parse(token).ok_or_else(|| CatalogError::InvalidPriority(token.to_string()))?;
        } else if let Some(caps) = MINUTES_MARKER.captures(line) {
            let token = caps[1].trim();
            estimated_minutes = match token.parse::<u32>() {
                Ok(m) if m > 0 => m,
                _ => return Err(CatalogError::InvalidMinutes(token.to_string())),
            };
        } else {
            content_lines.push(line);
        }
    }

    let pages = pages.ok_or(CatalogError::MissingPages)?;
    let title = select_title(&content_lines).ok_or(CatalogError::MissingTitle)?;

    Ok(Section {
        id,
        chapter,
        title,
        pages,
        difficulty,
        priority,
        estimated_minutes,
    })
}

/// Parse the page forms the extraction layer emits: `12`, `12-18`,
/// `12,13,14`, `[12, 13, 18]`. Lists collapse to their min/max.
fn parse_page_range(payload: &str) -> Result<(u32, u32), CatalogError> {
    let s = payload.trim();
    let invalid = || CatalogError::InvalidPages(s.to_string());

    let inner = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);

    if let Some((start, end)) = inner.split_once('-') {
        let start: u32 = start.trim().parse().map_err(|_| invalid())?;
        let end: u32 = end.trim().parse().map_err(|_| invalid())?;
        if start == 0 || end < start {
            return Err(invalid());
        }
        return Ok((start, end));
    }

    let nums: Vec<u32> = inner
        .split(',')
        .map(|n| n.trim().parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;

    match (nums.iter().min(), nums.iter().max()) {
        (Some(&min), Some(&max)) if min > 0 => Ok((min, max)),
        _ => Err(invalid()),
    }
}

/// Pick the display title: the first non-blank line outside any fenced
/// region that is long enough to be meaningful, falling back to the
/// block's remaining prose. Fence delimiters and fenced content are never
/// eligible. Residual fence tokens are stripped and whitespace collapsed
/// before truncation.
fn select_title(content_lines: &[&str]) -> Option<String> {
    let prose = prose_lines(content_lines);

    let raw = match prose
        .iter()
        .find(|line| line.chars().count() > MIN_TITLE_LINE_LEN)
    {
        Some(line) => line.to_string(),
        None => {
            let joined = prose.join(" ");
            if joined.is_empty() {
                return None;
            }
            joined
        }
    };

    Some(sanitize_title(&raw))
}

/// Non-blank lines outside code/math fences, trimmed.
fn prose_lines<'a>(content_lines: &[&'a str]) -> Vec<&'a str> {
    let mut in_code = false;
    let mut in_math = false;
    let mut prose = Vec::new();

    for line in content_lines {
        let line = line.trim();
        if line.starts_with("```") {
            in_code = !in_code;
            continue;
        }
        if line.starts_with("$$") {
            // A one-line `$$ ... $$` display equation opens and closes here.
            if !(line.len() > 2 && line.ends_with("$$")) {
                in_math = !in_math;
            }
            continue;
        }
        if line.is_empty() || in_code || in_math {
            continue;
        }
        prose.push(line);
    }

    prose
}

fn sanitize_title(raw: &str) -> String {
    let cleaned = raw
        .replace("```pseudo", "")
        .replace("```", "")
        .replace("$$", "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > MAX_TITLE_LEN {
        let head: String = collapsed.chars().take(MAX_TITLE_LEN - ELLIPSIS.len()).collect();
        format!("{head}{ELLIPSIS}")
    } else {
        collapsed
    }
}
