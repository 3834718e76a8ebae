//! Heading extraction: raw text → ordered heading records.
//!
//! Only ATX-style heading lines are recognised (`#`×N, a space, title).
//! Everything else, including body text under a heading, is ignored. The
//! extractor is lenient by construction: it never fails, and lines that do not
//! qualify simply contribute nothing.

#[cfg(test)]
#[path = "outline_test.rs"]
mod outline_test;

use serde::Serialize;

/// One parsed heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingRecord {
    /// Nesting depth; a single `#` is level 0.
    pub level: usize,
    /// Heading text with the `#` run and surrounding whitespace removed. Never empty.
    pub title: String,
    /// 0-based index of the line in the input.
    pub source_line: usize,
}

/// Extract every heading line from `text`, in document order.
#[must_use]
pub fn parse(text: &str) -> Vec<HeadingRecord> {
    text.lines()
        .enumerate()
        .filter_map(|(source_line, line)| parse_line(line, source_line))
        .collect()
}

/// Parse a single line. Returns `None` for non-headings and for headings with an empty title.
fn parse_line(line: &str, source_line: usize) -> Option<HeadingRecord> {
    let trimmed = line.trim();
    let hashes = trimmed.chars().take_while(|&c| c == '#').count();
    if hashes == 0 {
        return None;
    }

    // '#' is one byte, so the char count is also the byte offset.
    let rest = &trimmed[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }

    let title = rest.trim();
    if title.is_empty() {
        return None;
    }

    Some(HeadingRecord { level: hashes - 1, title: title.to_owned(), source_line })
}
