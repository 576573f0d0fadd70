#![forbid(unsafe_code)]

//! Per-log interaction session for LogLens.
//!
//! This crate owns everything mutable about viewing one log:
//! - [`Session`] - selection, expanded sections, and the find cursor,
//!   driven by named synchronous transitions
//! - [`SessionHost`] - load lifecycle with a stale-response guard, so a
//!   superseded fetch can never overwrite newer state
//! - [`LoadError`] - the terminal "unable to load" condition
//!
//! The immutable log model lives in `loglens-tree`; a session owns its tree
//! and both are discarded together when a new log is loaded.

pub mod controller;
pub mod loader;

pub use controller::{Direction, Session};
pub use loader::{LoadError, LoadOutcome, LoadToken, SessionHost};
