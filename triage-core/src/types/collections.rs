//! Hash collections keyed by the fast, non-cryptographic FxHasher.

pub use rustc_hash::{FxHashMap, FxHashSet};
