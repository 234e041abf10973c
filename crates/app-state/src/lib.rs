//! Application state for the phone login flow
//!
//! This crate provides the shared login session that outlives
//! individual screens and is reset only by logout.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod session;

pub use session::{Session, SessionStore};
