//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the block that has not been accessed for the longest time.
//! It maintains a usage stack of tags for each row. When a block is accessed, its
//! tag is moved to the front (Most Recently Used position). The back of the
//! stack is the Least Recently Used tag.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(A) where A is the associativity
//!   - `victim()`: O(1)
//! - **Space Complexity:** O(R × A) where R is the number of rows

use std::collections::VecDeque;

use super::ReplacementPolicy;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy {
    /// One usage stack per row. Front is MRU, back is LRU.
    usage: Vec<VecDeque<usize>>,
}

impl LruPolicy {
    /// Creates a new LRU policy instance.
    ///
    /// # Arguments
    ///
    /// * `rows` - The number of rows (sets) in the cache.
    pub fn new(rows: usize) -> Self {
        Self {
            usage: vec![VecDeque::new(); rows],
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Moves `tag` to the front of the usage stack, removing any older position.
    fn touch(&mut self, row: usize, tag: usize) {
        let stack = &mut self.usage[row];
        if let Some(pos) = stack.iter().position(|&t| t == tag) {
            let _ = stack.remove(pos);
        }
        stack.push_front(tag);
    }

    fn remove(&mut self, row: usize, tag: usize) {
        self.usage[row].retain(|&t| t != tag);
    }

    /// Returns the tag at the back of the usage stack (LRU position).
    fn victim(&self, row: usize) -> Option<usize> {
        self.usage[row].back().copied()
    }

    fn order(&self, row: usize) -> Vec<usize> {
        self.usage[row].iter().copied().collect()
    }
}
