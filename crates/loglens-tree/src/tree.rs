#![forbid(unsafe_code)]

//! The queryable log aggregate.
//!
//! [`LogTree`] bundles the raw line sequence, the reconstructed
//! [`Hierarchy`], and the [`SearchIndex`] into one immutable structure. It is
//! built exactly once per loaded log and never mutated; a new log produces a
//! wholly new tree. All navigation is by line index — the index a line holds
//! in the original sequence is its identity everywhere.
//!
//! # Example
//! ```
//! use loglens_tree::LogTree;
//!
//! let tree = LogTree::from_text("[a 1] INFO - SUITE-START run\n[a 2] plain output");
//! assert_eq!(tree.roots(), &[0]);
//! assert_eq!(tree.children(Some(0)), &[1]);
//! assert_eq!(tree.search("suite"), vec![0]);
//! ```

use crate::display::{DisplayData, display_data};
use crate::hierarchy::Hierarchy;
use crate::search::SearchIndex;
use tracing::debug;

/// Immutable, queryable view of one loaded log.
#[derive(Debug, Clone, Default)]
pub struct LogTree {
    lines: Vec<String>,
    hierarchy: Hierarchy,
    index: SearchIndex,
}

impl LogTree {
    /// Build from pre-split lines.
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        let hierarchy = Hierarchy::build(&lines);
        let index = SearchIndex::build(&lines);
        debug!(
            lines = lines.len(),
            roots = hierarchy.roots().len(),
            failing = hierarchy.failing_count(),
            "built log tree"
        );
        Self {
            lines,
            hierarchy,
            index,
        }
    }

    /// Build from raw log text, split on newlines.
    ///
    /// Empty text yields an empty tree rather than a single empty line.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self::new(text.split('\n').map(str::to_string).collect())
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the tree holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Raw text of the line at `index`.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Top-level section indices.
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        self.hierarchy.roots()
    }

    /// Children of a section, or the root list when `parent` is `None`.
    #[must_use]
    pub fn children(&self, parent: Option<usize>) -> &[usize] {
        match parent {
            None => self.hierarchy.roots(),
            Some(index) => self.hierarchy.children(index),
        }
    }

    /// Whether the line at `index` owns any children.
    #[must_use]
    pub fn has_children(&self, index: usize) -> bool {
        self.hierarchy.has_children(index)
    }

    /// Owning section of `index`, or `None` for roots.
    #[must_use]
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.hierarchy.parent(index)
    }

    /// Smallest failing section index, if any.
    #[must_use]
    pub fn first_failing_section(&self) -> Option<usize> {
        self.hierarchy.first_failing_section()
    }

    /// Case-insensitive substring search; ascending indices.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<usize> {
        self.index.search(query)
    }

    /// Display data for the line at `index`, or `None` out of range.
    #[must_use]
    pub fn display_data(&self, index: usize) -> Option<DisplayData> {
        self.lines
            .get(index)
            .map(|line| display_data(line, index, &self.hierarchy))
    }

    /// The underlying hierarchy.
    #[must_use]
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }
}
