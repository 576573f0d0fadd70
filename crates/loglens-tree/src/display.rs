#![forbid(unsafe_code)]

//! Per-line display data: timestamp split, message, semantic categories.
//!
//! Harness lines follow the convention `[task 2020-06-01 11:21:14.550Z] rest
//! of the message`. [`display_data`] splits that prefix off when present and
//! attaches the message's [`Category`](crate::classify::Category) slug plus
//! section-level annotations (failing/skipped child markers). Lines that
//! don't match the convention are passed through verbatim with no timestamp
//! and no categories — a malformed line is not an error.

use crate::classify::classify;
use crate::hierarchy::Hierarchy;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Annotation slug for a section owning a failing child.
pub const HAS_FAILING_CHILD: &str = "has-failing-child";
/// Annotation slug for a section owning a skipped child.
pub const HAS_SKIPPED_CHILD: &str = "has-skipped-child";

/// Renderer-facing view of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayData {
    /// Captured timestamp string, absent when the line has no bracket prefix.
    pub time: Option<String>,
    /// Message text after the bracket prefix, or the whole line verbatim.
    pub message: String,
    /// Category slug first, then section annotations. Empty for unmatched lines.
    pub categories: Vec<&'static str>,
}

/// `[<word> <timestamp>] <message>`, with optional leading whitespace.
/// The timestamp charset covers dates, times, and zone suffixes.
fn line_format_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*\[(\w+) ([\d\w\- :.]+)\] (.*)").expect("line format pattern is valid")
    })
}

/// Derive display data for the line at `index`.
///
/// The annotations consult the hierarchy's failing/skipped sets, so a
/// section line surfaces its children's failures without re-scanning them.
#[must_use]
pub fn display_data(line: &str, index: usize, hierarchy: &Hierarchy) -> DisplayData {
    let Some(captures) = line_format_pattern().captures(line) else {
        return DisplayData {
            time: None,
            message: line.to_string(),
            categories: Vec::new(),
        };
    };

    let time = captures[2].to_string();
    let message = captures[3].to_string();

    let mut categories = Vec::new();
    if let Some(category) = classify(&message) {
        categories.push(category.as_str());
    }
    if hierarchy.is_failing_section(index) {
        categories.push(HAS_FAILING_CHILD);
    }
    if hierarchy.is_skipped_section(index) {
        categories.push(HAS_SKIPPED_CHILD);
    }

    DisplayData {
        time: Some(time),
        message,
        categories,
    }
}
