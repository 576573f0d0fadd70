#![forbid(unsafe_code)]

//! Session replacement discipline for asynchronously fetched logs.
//!
//! Fetching the raw log text is the one suspending operation around the
//! engine; everything downstream is synchronous. [`SessionHost`] owns the
//! current [`Session`] and a load generation counter: starting a load bumps
//! the generation, and a result only installs if its [`LoadToken`] still
//! carries the current generation. A slower, older fetch that completes
//! after a newer load began is reported as [`LoadOutcome::Stale`] and leaves
//! the newer state untouched.
//!
//! Retry and backoff belong to the fetch collaborator; a transport failure
//! is terminal for its session here.
//!
//! # Example
//! ```
//! use loglens_session::{LoadOutcome, SessionHost};
//!
//! let mut host = SessionHost::new();
//! let stale = host.begin_load();
//! let current = host.begin_load();
//!
//! assert_eq!(host.finish_load(current, Ok("line one".to_string())), LoadOutcome::Installed);
//! // The older fetch arrives late and is discarded.
//! assert_eq!(host.finish_load(stale, Ok("other log".to_string())), LoadOutcome::Stale);
//! assert_eq!(host.session().unwrap().tree().line(0), Some("line one"));
//! ```

use crate::controller::Session;
use loglens_tree::LogTree;
use std::fmt;
use tracing::debug;

/// Why a log could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The fetch collaborator failed or the log was unreachable.
    Transport(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "unable to load the log: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Handle identifying one in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
}

/// Result of completing a load against the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetched log replaced the current session.
    Installed,
    /// The current-generation fetch failed; the session is gone and
    /// [`SessionHost::last_error`] holds the reason.
    Failed,
    /// The result belonged to a superseded load and was discarded.
    Stale,
}

/// Owner of the current session and the load generation counter.
#[derive(Debug, Default)]
pub struct SessionHost {
    generation: u64,
    session: Option<Session>,
    last_error: Option<LoadError>,
}

impl SessionHost {
    /// Create a host with no session loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        debug!(generation = self.generation, "load started");
        LoadToken {
            generation: self.generation,
        }
    }

    /// Complete a load with the fetch result.
    ///
    /// Stale tokens never mutate the host. A successful current-generation
    /// result builds a fresh tree and session, discarding the previous one;
    /// a failed one drops the session and records the error.
    pub fn finish_load(
        &mut self,
        token: LoadToken,
        result: Result<String, LoadError>,
    ) -> LoadOutcome {
        if token.generation != self.generation {
            debug!(
                stale = token.generation,
                current = self.generation,
                "discarding stale load result"
            );
            return LoadOutcome::Stale;
        }
        match result {
            Ok(text) => {
                self.session = Some(Session::new(LogTree::from_text(&text)));
                self.last_error = None;
                LoadOutcome::Installed
            }
            Err(error) => {
                debug!(%error, "load failed");
                self.session = None;
                self.last_error = Some(error);
                LoadOutcome::Failed
            }
        }
    }

    /// The current session, if a log is loaded.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Mutable access for driving interaction transitions.
    #[must_use]
    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// The error from the last failed current-generation load.
    #[must_use]
    pub fn last_error(&self) -> Option<&LoadError> {
        self.last_error.as_ref()
    }
}
