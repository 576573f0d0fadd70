#![forbid(unsafe_code)]

//! Immutable log model for LogLens.
//!
//! This crate turns a raw CI build/test log into a queryable structure:
//! - [`classify`](classify::classify) - ordered-rule semantic classification
//!   of one message
//! - [`Hierarchy`] - two-level section/child structure as flat index maps
//! - [`SearchIndex`] - case-insensitive substring index over the lines
//! - [`DisplayData`] - timestamp split plus category/annotation slugs
//! - [`LogTree`] - the aggregate bundling all of the above
//!
//! Everything here is built exactly once from the full line sequence and is
//! read-only afterward; mutable per-session state (selection, expansion,
//! search cursor) lives in `loglens-session`.
//!
//! # Example
//! ```
//! use loglens_tree::LogTree;
//!
//! let tree = LogTree::from_text(
//!     "[task 1] INFO - TEST-START | one.js\n\
//!      [task 2] INFO - TEST-UNEXPECTED-FAIL | one.js | oops",
//! );
//! assert_eq!(tree.first_failing_section(), Some(0));
//! assert_eq!(tree.search("OOPS"), vec![1]);
//! ```

pub mod classify;
pub mod display;
pub mod hierarchy;
pub mod search;
pub mod tree;

pub use classify::{Category, classify};
pub use display::{DisplayData, HAS_FAILING_CHILD, HAS_SKIPPED_CHILD, display_data};
pub use hierarchy::Hierarchy;
pub use search::SearchIndex;
pub use tree::LogTree;
