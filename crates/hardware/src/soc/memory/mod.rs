//! Main Memory.
//!
//! A flat store of [`MEM_SIZE`] 16-bit words. All access goes through
//! [`Addr`], so every index is already reduced modulo the memory size.
//! Memory is the authoritative copy of every word: caches in front of it are
//! write-through and never hold data that memory does not.

use std::ops::Range;

use crate::common::constants::MEM_SIZE;
use crate::common::{Addr, LoadError};

/// The machine's main memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    words: Box<[u16]>,
}

impl Memory {
    /// Creates a zero-filled memory of [`MEM_SIZE`] words.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEM_SIZE].into_boxed_slice(),
        }
    }

    /// Reads the word at `addr`.
    #[inline]
    pub fn read(&self, addr: Addr) -> u16 {
        self.words[addr.index()]
    }

    /// Writes `val` to `addr`.
    #[inline]
    pub fn write(&mut self, addr: Addr, val: u16) {
        self.words[addr.index()] = val;
    }

    /// Copies `len` consecutive words starting at `start`, wrapping at the end of memory.
    ///
    /// Used to fill a cache block.
    pub fn read_block(&self, start: Addr, len: usize) -> Vec<u16> {
        (0..len).map(|i| self.read(start.offset(i))).collect()
    }

    /// Loads a machine-code image starting at address 0.
    ///
    /// # Arguments
    ///
    /// * `image` - Words in address order, as produced by [`crate::sim::loader`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ProgramTooBig`] if the image has more than
    /// [`MEM_SIZE`] words; memory is left untouched in that case.
    pub fn load_image(&mut self, image: &[u16]) -> Result<(), LoadError> {
        if image.len() > MEM_SIZE {
            return Err(LoadError::ProgramTooBig { addr: MEM_SIZE });
        }
        self.words[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns the words in `range`, for reports and tests.
    pub fn slice(&self, range: Range<usize>) -> &[u16] {
        &self.words[range]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        f.debug_struct("Memory")
            .field("size", &self.words.len())
            .field("nonzero_prefix", &&self.words[..used.min(16)])
            .finish()
    }
}
