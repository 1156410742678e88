//! Hash collection aliases used across ProtoCol.
//!
//! Widget ids are small integers, so the default SipHash is wasted work.
//! Everything keyed by id goes through these AHash-backed aliases instead.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
