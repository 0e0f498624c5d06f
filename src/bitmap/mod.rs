//! Fixed-size membership bitmap over the byte domain
//!
//! One bit per possible value: 256 bits, 32 bytes of storage.
//! Bits are only ever set, never cleared - consumption is monotonic.

use bitvec::prelude::*;

/// Number of distinct byte values tracked by the bitmap.
pub const VALUE_COUNT: usize = 256;

/// Backing storage: one bit per byte value, 32 bytes total.
type Bits = BitArr!(for VALUE_COUNT, in u8);

/// Membership bitmap recording, per byte value, whether it has been
/// produced or excluded.
///
/// Index `i` maps to byte value `i`. The structure is monotonic: once a
/// bit is set it is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBitmap {
    bits: Bits,
}

impl ByteBitmap {
    /// Create an empty bitmap with no value marked consumed.
    pub fn new() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }

    /// Whether `value` has been marked consumed.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.bits[value as usize]
    }

    /// Mark `value` as consumed.
    ///
    /// Returns `true` when the bit was previously clear, i.e. this call
    /// was the first to consume `value`.
    #[inline]
    pub fn insert(&mut self, value: u8) -> bool {
        let index = value as usize;
        let was_set = self.bits[index];
        self.bits.set(index, true);
        !was_set
    }

    /// Number of values marked consumed.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of values still unconsumed.
    pub fn count_zeros(&self) -> usize {
        self.bits.count_zeros()
    }

    /// Whether every value in the domain has been consumed.
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Ascending iterator over the values whose bit is still clear.
    pub fn iter_missing(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter_zeros().map(|index| index as u8)
    }
}
