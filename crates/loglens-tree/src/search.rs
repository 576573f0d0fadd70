#![forbid(unsafe_code)]

//! Case-insensitive substring index over the line sequence.
//!
//! A parallel lowercased copy of every line, built once alongside the
//! hierarchy. Queries are plain substring containment — no pattern syntax,
//! so regex-significant characters in the query need no escaping. O(n·m)
//! per query is acceptable: logs are bounded and queries are user-paced.
//!
//! # Example
//! ```
//! use loglens_tree::search::SearchIndex;
//!
//! let index = SearchIndex::build(&["TEST-UNEXPECTED-FAIL".to_string(), "ok".to_string()]);
//! assert_eq!(index.search("fail"), vec![0]);
//! assert_eq!(index.search(""), Vec::<usize>::new());
//! ```

/// Lowercased copy of the log, keyed by the same line indices.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    lowered: Vec<String>,
}

impl SearchIndex {
    /// Build the index from the full ordered line sequence.
    #[must_use]
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            lowered: lines.iter().map(|line| line.as_ref().to_lowercase()).collect(),
        }
    }

    /// Number of indexed lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lowered.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }

    /// Indices of lines containing `query`, case-insensitively, ascending.
    ///
    /// An empty query matches nothing, not everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.lowered
            .iter()
            .enumerate()
            .filter(|(_, line)| line.contains(&needle))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(texts: &[&str]) -> SearchIndex {
        let lines: Vec<String> = texts.iter().map(|t| (*t).to_string()).collect();
        SearchIndex::build(&lines)
    }

    #[test]
    fn empty_query_matches_nothing() {
        let index = index(&["a", "b", "c"]);
        assert!(index.search("").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_both_ways() {
        let index = index(&["TEST-UNEXPECTED-FAIL | x", "all ok", "soft fail"]);
        assert_eq!(index.search("fail"), vec![0, 2]);
        assert_eq!(index.search("FAIL"), index.search("fail"));
        assert_eq!(index.search("Fail"), index.search("fail"));
    }

    #[test]
    fn results_are_ascending_original_indices() {
        let index = index(&["x", "needle", "x", "needle", "needle"]);
        assert_eq!(index.search("needle"), vec![1, 3, 4]);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let index = index(&["a.*b", "axb", "(paren)"]);
        assert_eq!(index.search("a.*b"), vec![0]);
        assert_eq!(index.search("(paren"), vec![2]);
    }

    #[test]
    fn no_match_returns_empty() {
        let index = index(&["one", "two"]);
        assert!(index.search("three").is_empty());
    }
}
