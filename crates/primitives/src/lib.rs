//! Primitives layer for Trove
//!
//! Provides the typed operation modules as stateless facades over the
//! key space:
//! - **ScalarStore**: get/set of a single payload under a key
//! - **ListStore**: double-ended sequence operations (push, pop, range, len)
//! - **SetStore**: unique-membership operations (add, len, algebra, random member)
//!
//! ## Design Principle: Stateless Facades
//!
//! Each primitive holds only an `Arc<KeySpace>` reference and a phantom
//! payload type. All state lives in the key space, so:
//!
//! - Multiple primitive instances over the same key space are safe
//! - Cloning a primitive is cheap and shares the underlying data
//! - A primitive for payload `T` and one for payload `U` can coexist on
//!   disjoint keys of the same key space
//!
//! ## Typed boundary
//!
//! Payloads cross into storage only as canonical JSON bytes. The
//! primitives own the encode/decode calls; the key space below them
//! never sees a decoded payload.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod list;
pub mod scalar;
pub mod set;

pub use list::ListStore;
pub use scalar::ScalarStore;
pub use set::SetStore;
