//! Memory address type.
//!
//! E20 addresses are 13 bits wide, but the machine computes them with 16-bit
//! arithmetic. [`Addr`] is the only way a computed value reaches memory or a
//! cache, and constructing one always reduces the value modulo [`MEM_SIZE`],
//! so no component ever indexes outside main memory.

use std::fmt;

use super::constants::{ADDR_MASK, MEM_SIZE};

/// A word address in main memory, always in `[0, MEM_SIZE)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(u16);

impl Addr {
    /// Creates an address from a raw 16-bit value, reducing it modulo [`MEM_SIZE`].
    ///
    /// # Arguments
    ///
    /// * `raw` - Any 16-bit value produced by address arithmetic.
    ///
    /// # Returns
    ///
    /// The wrapped address.
    #[inline(always)]
    pub const fn wrap(raw: u16) -> Self {
        Self(raw & ADDR_MASK)
    }

    /// Returns the address as a 16-bit word.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Returns the address as a `usize` suitable for indexing memory.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the address `offset` words past this one, wrapping at the end of memory.
    #[inline]
    pub const fn offset(self, offset: usize) -> Self {
        Self(((self.0 as usize + offset) % MEM_SIZE) as u16)
    }
}

impl From<u16> for Addr {
    fn from(raw: u16) -> Self {
        Self::wrap(raw)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
