//! Collection aliases used across Vista.
//!
//! Re-exports the AHash based collections so every crate hashes the same way.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
