//! Storage layer for Trove
//!
//! Provides [`KeySpace`], the process-wide map from string keys to typed
//! entries. All higher layers (primitives, facade) delegate here for
//! entry lookup, kind enforcement, and per-key mutual exclusion.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keyspace;

pub use keyspace::KeySpace;
