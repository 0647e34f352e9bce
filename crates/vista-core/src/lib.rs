//! Vista Core
//!
//! This crate contains the shared plumbing for the Vista UI crates: hash collections,
//! logging setup and profiling scopes.

pub mod alloc;
pub mod logging;
pub mod profiling;
