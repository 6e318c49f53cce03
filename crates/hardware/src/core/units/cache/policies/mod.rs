//! Cache Replacement Policies.
//!
//! A policy tracks the recency order of the tags resident in each row and
//! chooses which tag to evict when a full row must take a new block.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used.

/// Least Recently Used replacement policy.
pub mod lru;

pub use lru::LruPolicy;

/// Trait for cache replacement policies.
///
/// The policy only ever sees row indices and tags; the cache owns the block
/// data and keeps the two in step.
pub trait ReplacementPolicy: Send + Sync + std::fmt::Debug {
    /// Marks `tag` as the most recently used entry of `row`, adding it if absent.
    fn touch(&mut self, row: usize, tag: usize);

    /// Forgets `tag` in `row`.
    fn remove(&mut self, row: usize, tag: usize);

    /// Selects the tag to evict from `row`, or `None` if the row is empty.
    fn victim(&self, row: usize) -> Option<usize>;

    /// Returns the tags of `row` from most to least recently used.
    fn order(&self, row: usize) -> Vec<usize>;
}
