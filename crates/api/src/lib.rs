//! Store facade for Trove
//!
//! The facade is the single entry point for callers. It composes the
//! scalar, list, and set primitives over one shared key space and
//! exposes them behind Redis-familiar operation names, plus bound-key
//! handles that capture a key once and reuse it.
//!
//! The facade adds no semantics of its own: every method desugars to
//! exactly one primitive call, and all kind checking happens in the key
//! space below.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bound;
pub mod store;

pub use bound::{BoundList, BoundSet};
pub use store::Store;
