#![forbid(unsafe_code)]

//! Semantic classification of log line messages.
//!
//! Test harness logs tag interesting lines with well-known markers
//! (`INFO - TEST-START`, `PROCESS-CRASH`, ...). [`classify`] maps a line's
//! message text to at most one [`Category`] via an ordered rule list; the
//! first matching rule wins, so more specific markers must be checked before
//! the generic `INFO - TEST-` catch-all.
//!
//! # Example
//! ```
//! use loglens_tree::classify::{Category, classify};
//!
//! assert_eq!(classify("INFO - TEST-START | browser/test.js"), Some(Category::TestStart));
//! assert_eq!(classify("GECKO(1234) | plain output"), None);
//! ```

use regex_lite::Regex;
use std::sync::OnceLock;

/// Marker that opens a new suite section.
pub const SUITE_START_MARKER: &str = "INFO - SUITE-START";
/// Marker that opens a new test section.
pub const TEST_START_MARKER: &str = "INFO - TEST-START";
/// Marker for an unexpected test failure.
pub const UNEXPECTED_FAIL_MARKER: &str = "INFO - TEST-UNEXPECTED-FAIL";
/// Marker for a crashed harness process.
pub const PROCESS_CRASH_MARKER: &str = "PROCESS-CRASH";
/// Marker for a skipped test.
pub const TEST_SKIP_MARKER: &str = "TEST-SKIP";

/// Semantic category of a log line message.
///
/// Slugs (see [`Category::as_str`]) are stable identifiers consumed by the
/// renderer; they carry no styling of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Informational harness output (`TEST-INFO`).
    TestInfo,
    /// Start of an individual test.
    TestStart,
    /// Test completed with OK status.
    TestOk,
    /// Test passed.
    TestPass,
    /// Start of a test suite.
    SuiteStart,
    /// Unexpected test failure.
    TestUnexpectedFail,
    /// Harness process crash.
    ProcessCrash,
    /// Any other `INFO - TEST-` marker.
    TestOther,
    /// Summary tally line at the end of a run.
    TestSummary,
}

impl Category {
    /// Stable slug for this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TestInfo => "test-info",
            Self::TestStart => "test-start",
            Self::TestOk => "test-ok",
            Self::TestPass => "test-pass",
            Self::SuiteStart => "suite-start",
            Self::TestUnexpectedFail => "test-unexpected-fail",
            Self::ProcessCrash => "process-crash",
            Self::TestOther => "test-other",
            Self::TestSummary => "test-summary",
        }
    }
}

/// Tally lines like `INFO - Passed: 3107` or indented `Failed: 0`.
fn summary_tally_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"((INFO -)|(\s+))(Passed|Failed|Todo):").expect("summary tally pattern is valid")
    })
}

/// Classify a message into at most one [`Category`].
///
/// Rule order is semantically significant: `INFO - TEST-` is the fallback
/// for test markers and must only fire after the specific START/OK/PASS/
/// UNEXPECTED-FAIL rules have been tried. Pure function of the message text.
#[must_use]
pub fn classify(message: &str) -> Option<Category> {
    if message.contains("TEST-INFO") {
        return Some(Category::TestInfo);
    }
    if message.contains(TEST_START_MARKER) {
        return Some(Category::TestStart);
    }
    if message.contains("INFO - TEST-OK") {
        return Some(Category::TestOk);
    }
    if message.contains("INFO - TEST-PASS") {
        return Some(Category::TestPass);
    }
    if message.contains(SUITE_START_MARKER) {
        return Some(Category::SuiteStart);
    }
    if message.contains(UNEXPECTED_FAIL_MARKER) {
        return Some(Category::TestUnexpectedFail);
    }
    if message.contains(PROCESS_CRASH_MARKER) {
        return Some(Category::ProcessCrash);
    }
    if message.contains("INFO - TEST-") {
        return Some(Category::TestOther);
    }
    if message.contains("Browser Chrome Test Summary") {
        return Some(Category::TestSummary);
    }
    if summary_tally_pattern().is_match(message) {
        return Some(Category::TestSummary);
    }
    None
}
