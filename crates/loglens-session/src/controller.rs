#![forbid(unsafe_code)]

//! Interaction state machine for one loaded log.
//!
//! A [`Session`] owns its [`LogTree`] together with the mutable view state:
//! the highlighted line, the set of expanded sections, and the find cursor.
//! Every user action is a named transition; transitions run synchronously
//! and atomically, so there is never a half-applied state. The session is
//! discarded wholesale when a new log replaces it — no state migrates
//! between trees.
//!
//! # Example
//! ```
//! use loglens_session::{Direction, Session};
//! use loglens_tree::LogTree;
//!
//! let tree = LogTree::from_text(
//!     "[a 1] INFO - TEST-START | one.js\n\
//!      [a 2] INFO - TEST-UNEXPECTED-FAIL | one.js",
//! );
//! let mut session = Session::new(tree);
//! // The first failing section is selected up front.
//! assert_eq!(session.selection(), Some(0));
//!
//! session.set_query("fail");
//! assert_eq!(session.selection(), Some(1));
//! session.advance_match(Direction::Next); // wraps around
//! assert_eq!(session.selection(), Some(1));
//! ```

use loglens_tree::LogTree;
use rustc_hash::FxHashSet;
use tracing::trace;

/// Direction for find-cursor navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the next match (Enter).
    Next,
    /// Move to the previous match (Shift+Enter).
    Prev,
}

/// One live pairing of a log tree with mutable selection/search state.
#[derive(Debug, Clone)]
pub struct Session {
    tree: LogTree,
    selection: Option<usize>,
    expanded: FxHashSet<usize>,
    matches: Vec<usize>,
    match_cursor: usize,
}

impl Session {
    /// Create a session over a freshly built tree.
    ///
    /// The initial selection is the smallest failing section, so the first
    /// failure is surfaced without the user having to search for it.
    #[must_use]
    pub fn new(tree: LogTree) -> Self {
        let selection = tree.first_failing_section();
        Self {
            tree,
            selection,
            expanded: FxHashSet::default(),
            matches: Vec::new(),
            match_cursor: 0,
        }
    }

    /// The tree this session navigates.
    #[must_use]
    pub fn tree(&self) -> &LogTree {
        &self.tree
    }

    /// Currently highlighted line, absent for an empty or failure-free log
    /// before any navigation.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Sections currently expanded for display.
    #[must_use]
    pub fn expanded(&self) -> &FxHashSet<usize> {
        &self.expanded
    }

    /// Whether a section is expanded.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Match set of the last non-empty search, ascending.
    #[must_use]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Cursor position within [`Self::matches`].
    #[must_use]
    pub fn match_cursor(&self) -> usize {
        self.match_cursor
    }

    /// Highlight a line, expanding its owning section so it is visible.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_node(&mut self, index: usize) {
        if index >= self.tree.len() {
            return;
        }
        trace!(index, "select node");
        self.selection = Some(index);
        self.reveal(index);
    }

    /// Recompute the match set for a changed query.
    ///
    /// An empty result set leaves the whole state untouched, stale matches
    /// included, matching live-search expectations: a query with no hits
    /// keeps showing the last useful position. Otherwise the cursor lands on
    /// the first match at or after the current selection, wrapping to the
    /// first match when none qualifies.
    pub fn set_query(&mut self, query: &str) {
        let matches = self.tree.search(query);
        if matches.is_empty() {
            return;
        }
        let cursor = self
            .selection
            .and_then(|selection| matches.iter().position(|&index| index >= selection))
            .unwrap_or(0);
        trace!(hits = matches.len(), cursor, "query changed");
        self.matches = matches;
        self.match_cursor = cursor;
        let selection = self.matches[self.match_cursor];
        self.selection = Some(selection);
        self.reveal(selection);
    }

    /// Step the find cursor with wraparound; no-op without matches.
    pub fn advance_match(&mut self, direction: Direction) {
        if self.matches.is_empty() {
            return;
        }
        let len = self.matches.len();
        self.match_cursor = match direction {
            Direction::Next => (self.match_cursor + 1) % len,
            Direction::Prev => (self.match_cursor + len - 1) % len,
        };
        let selection = self.matches[self.match_cursor];
        trace!(cursor = self.match_cursor, selection, "advance match");
        self.selection = Some(selection);
        self.reveal(selection);
    }

    /// Toggle a section's expansion; selection and matches are unaffected.
    pub fn toggle_expanded(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    /// Expand the owning section of `index`, if it has one.
    fn reveal(&mut self, index: usize) {
        if let Some(parent) = self.tree.parent(index) {
            self.expanded.insert(parent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_matches_at_2_5_9() -> LogTree {
        // Ten lines; "needle" appears at indices 2, 5, and 9.
        let lines: Vec<String> = (0..10)
            .map(|i| match i {
                2 | 5 | 9 => format!("line {i} needle"),
                _ => format!("line {i}"),
            })
            .collect();
        LogTree::new(lines)
    }

    #[test]
    fn initial_selection_is_first_failing_section() {
        let tree = LogTree::from_text(
            "boot\n\
             [a 1] INFO - TEST-START | one\n\
             [a 2] INFO - TEST-OK | one\n\
             [a 3] INFO - TEST-START | two\n\
             [a 4] INFO - TEST-UNEXPECTED-FAIL | two",
        );
        let session = Session::new(tree);
        assert_eq!(session.selection(), Some(3));
        assert!(session.expanded().is_empty());
        assert!(session.matches().is_empty());
        assert_eq!(session.match_cursor(), 0);
    }

    #[test]
    fn initial_selection_is_absent_without_failures() {
        let tree = LogTree::from_text("[a 1] INFO - TEST-START | one\n[a 2] INFO - TEST-OK | one");
        let session = Session::new(tree);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn initial_selection_is_absent_for_empty_tree() {
        let session = Session::new(LogTree::from_text(""));
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn select_node_expands_parent() {
        let tree = LogTree::from_text("[a 1] INFO - TEST-START | one\n[a 2] output");
        let mut session = Session::new(tree);
        session.select_node(1);
        assert_eq!(session.selection(), Some(1));
        assert!(session.is_expanded(0));
    }

    #[test]
    fn select_node_ignores_out_of_range() {
        let tree = LogTree::from_text("only line");
        let mut session = Session::new(tree);
        session.select_node(10);
        assert_eq!(session.selection(), None);
    }

    #[test]
    fn query_cursor_starts_at_or_after_selection() {
        let mut session = Session::new(tree_with_matches_at_2_5_9());
        session.select_node(4);
        session.set_query("needle");
        assert_eq!(session.matches(), &[2, 5, 9]);
        assert_eq!(session.match_cursor(), 1);
        assert_eq!(session.selection(), Some(5));
    }

    #[test]
    fn query_without_selection_starts_at_first_match() {
        let mut session = Session::new(tree_with_matches_at_2_5_9());
        assert_eq!(session.selection(), None);
        session.set_query("needle");
        assert_eq!(session.match_cursor(), 0);
        assert_eq!(session.selection(), Some(2));
    }

    #[test]
    fn query_past_all_matches_wraps_to_first() {
        // A selection past the last match has no qualifying position.
        let lines: Vec<String> = (0..12)
            .map(|i| match i {
                2 | 5 => format!("line {i} needle"),
                _ => format!("line {i}"),
            })
            .collect();
        let mut session = Session::new(LogTree::new(lines));
        session.select_node(9);
        session.set_query("needle");
        assert_eq!(session.match_cursor(), 0);
        assert_eq!(session.selection(), Some(2));
    }

    #[test]
    fn empty_result_set_retains_stale_state() {
        let mut session = Session::new(tree_with_matches_at_2_5_9());
        session.set_query("needle");
        assert_eq!(session.selection(), Some(2));

        session.set_query("no such text");
        // Matches, cursor, and selection all survive untouched.
        assert_eq!(session.matches(), &[2, 5, 9]);
        assert_eq!(session.match_cursor(), 0);
        assert_eq!(session.selection(), Some(2));
    }

    #[test]
    fn empty_query_is_a_no_op() {
        let mut session = Session::new(tree_with_matches_at_2_5_9());
        session.set_query("needle");
        session.set_query("");
        assert_eq!(session.matches(), &[2, 5, 9]);
    }

    #[test]
    fn advance_match_wraps_both_ways() {
        let mut session = Session::new(tree_with_matches_at_2_5_9());
        session.select_node(9);
        session.set_query("needle");
        assert_eq!(session.match_cursor(), 2);
        assert_eq!(session.selection(), Some(9));

        session.advance_match(Direction::Next);
        assert_eq!(session.match_cursor(), 0);
        assert_eq!(session.selection(), Some(2));

        session.advance_match(Direction::Prev);
        assert_eq!(session.match_cursor(), 2);
        assert_eq!(session.selection(), Some(9));
    }

    #[test]
    fn advance_match_without_matches_is_a_no_op() {
        let mut session = Session::new(tree_with_matches_at_2_5_9());
        session.advance_match(Direction::Next);
        assert_eq!(session.selection(), None);
        assert_eq!(session.match_cursor(), 0);
    }

    #[test]
    fn toggle_expanded_only_touches_expansion() {
        let mut session = Session::new(tree_with_matches_at_2_5_9());
        session.set_query("needle");
        let selection = session.selection();

        session.toggle_expanded(0);
        assert!(session.is_expanded(0));
        assert_eq!(session.selection(), selection);
        assert_eq!(session.matches(), &[2, 5, 9]);

        session.toggle_expanded(0);
        assert!(!session.is_expanded(0));
    }

    #[test]
    fn search_selection_expands_owning_section() {
        let tree = LogTree::from_text(
            "[a 1] INFO - TEST-START | one\n\
             [a 2] deep needle output",
        );
        let mut session = Session::new(tree);
        session.set_query("needle");
        assert_eq!(session.selection(), Some(1));
        assert!(session.is_expanded(0));
    }
}
