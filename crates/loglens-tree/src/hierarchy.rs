#![forbid(unsafe_code)]

//! Two-level section hierarchy reconstructed from a flat line sequence.
//!
//! Harness logs have an implicit structure: a suite- or test-start marker
//! opens a section, and every following line belongs to it until the next
//! marker. [`Hierarchy::build`] recovers that structure in a single pass and
//! represents it as flat index maps (arena-of-indices) rather than linked
//! node objects — a line's position in the original sequence is its only
//! identity.
//!
//! The hierarchy is exactly two levels deep: every index is either a root or
//! a direct child of exactly one root. Failure and skip signals propagate
//! one level, from a child line to its owning section.
//!
//! # Example
//! ```
//! use loglens_tree::hierarchy::Hierarchy;
//!
//! let lines = [
//!     "[task 1] SUITE-START run".to_string(),
//!     "[task 2] INFO - TEST-START x".to_string(),
//!     "[task 3] INFO - TEST-UNEXPECTED-FAIL x".to_string(),
//! ];
//! let hierarchy = Hierarchy::build(&lines);
//! assert_eq!(hierarchy.roots(), &[0, 1]);
//! assert_eq!(hierarchy.children(1), &[2]);
//! assert!(hierarchy.is_failing_section(1));
//! ```

use crate::classify::{
    PROCESS_CRASH_MARKER, SUITE_START_MARKER, TEST_SKIP_MARKER, TEST_START_MARKER,
    UNEXPECTED_FAIL_MARKER,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Section/child relationships for one log, keyed by line index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    roots: Vec<usize>,
    parent_to_children: FxHashMap<usize, Vec<usize>>,
    child_to_parent: FxHashMap<usize, usize>,
    failing_sections: FxHashSet<usize>,
    skipped_sections: FxHashSet<usize>,
}

impl Hierarchy {
    /// Build the hierarchy from the full ordered line sequence.
    ///
    /// Single O(n) fold with a rolling current-section accumulator. Section
    /// detection is a raw substring check on the line text; it does not go
    /// through the message classifier. The very first line always opens a
    /// section regardless of content.
    #[must_use]
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut hierarchy = Self::default();
        // None means the next non-section line would have no parent; only
        // possible before the first line is seen, since index 0 is a section.
        let mut current_parent: Option<usize> = None;

        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let is_new_section = index == 0
                || line.contains(SUITE_START_MARKER)
                || line.contains(TEST_START_MARKER);

            if is_new_section {
                // A section line is always a root, never a child of the
                // section in progress.
                current_parent = None;
            }

            match current_parent {
                None => hierarchy.roots.push(index),
                Some(parent) => {
                    hierarchy
                        .parent_to_children
                        .entry(parent)
                        .or_default()
                        .push(index);
                    hierarchy.child_to_parent.insert(index, parent);

                    if line.contains(UNEXPECTED_FAIL_MARKER) || line.contains(PROCESS_CRASH_MARKER)
                    {
                        hierarchy.failing_sections.insert(parent);
                    }
                    if line.contains(TEST_SKIP_MARKER) {
                        hierarchy.skipped_sections.insert(parent);
                    }
                }
            }

            if is_new_section {
                // Nest the following lines under this section.
                current_parent = Some(index);
            }
        }

        hierarchy
    }

    /// Top-level section indices, in first-seen order.
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Lines nested directly under `index`, in original order.
    #[must_use]
    pub fn children(&self, index: usize) -> &[usize] {
        self.parent_to_children
            .get(&index)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether `index` owns any child lines.
    #[must_use]
    pub fn has_children(&self, index: usize) -> bool {
        self.parent_to_children.contains_key(&index)
    }

    /// Owning section of `index`, or `None` for roots.
    #[must_use]
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.child_to_parent.get(&index).copied()
    }

    /// Whether `index` is a section owning an unexpected failure or crash.
    #[must_use]
    pub fn is_failing_section(&self, index: usize) -> bool {
        self.failing_sections.contains(&index)
    }

    /// Whether `index` is a section owning a skipped test.
    #[must_use]
    pub fn is_skipped_section(&self, index: usize) -> bool {
        self.skipped_sections.contains(&index)
    }

    /// Smallest failing section index, if any section failed.
    #[must_use]
    pub fn first_failing_section(&self) -> Option<usize> {
        self.failing_sections.iter().copied().min()
    }

    /// All failing section indices, unordered.
    pub fn failing_sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.failing_sections.iter().copied()
    }

    /// All skipped section indices, unordered.
    pub fn skipped_sections(&self) -> impl Iterator<Item = usize> + '_ {
        self.skipped_sections.iter().copied()
    }

    /// Number of failing sections.
    #[must_use]
    pub fn failing_count(&self) -> usize {
        self.failing_sections.len()
    }
}
