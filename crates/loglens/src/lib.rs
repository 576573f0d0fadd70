#![forbid(unsafe_code)]

//! LogLens public facade crate.
//!
//! This crate provides the stable surface area for users. It re-exports the
//! log model and session types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use loglens::prelude::*;
//!
//! let mut host = SessionHost::new();
//! let token = host.begin_load();
//! host.finish_load(token, Ok("[a 1] INFO - TEST-START | x\n[a 2] output".to_string()));
//!
//! let session = host.session_mut().unwrap();
//! session.set_query("output");
//! assert_eq!(session.selection(), Some(1));
//! ```

use std::fmt;

// --- Log model re-exports --------------------------------------------------

pub use loglens_tree::classify::{Category, classify};
pub use loglens_tree::display::{DisplayData, HAS_FAILING_CHILD, HAS_SKIPPED_CHILD};
pub use loglens_tree::hierarchy::Hierarchy;
pub use loglens_tree::search::SearchIndex;
pub use loglens_tree::tree::LogTree;

// --- Session re-exports ----------------------------------------------------

pub use loglens_session::{Direction, LoadError, LoadOutcome, LoadToken, Session, SessionHost};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for loglens users.
#[derive(Debug)]
pub enum Error {
    /// The log could not be loaded.
    Load(LoadError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<LoadError> for Error {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}

/// Standard result type for loglens APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Category, Direction, DisplayData, Error, LoadError, LoadOutcome, LoadToken, LogTree,
        Result, Session, SessionHost,
    };
}
