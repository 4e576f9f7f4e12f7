//! # navicue-catalog
//!
//! The cue catalog: an already-loaded, validated sequence of `CueDefinition`s.
//! Read-only after construction, so it can be shared across selector calls
//! behind an `Arc` without locking.

mod catalog;
mod fingerprint;

pub use catalog::Catalog;
pub use fingerprint::fingerprint;
