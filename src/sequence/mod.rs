//! Randomised draw loop over the byte domain
//!
//! [`RandomByteSeq`] yields each unconsumed byte value exactly once, in an
//! order decided by an injected randomness source. Values supplied at
//! construction are treated as already consumed and are never produced.

use std::iter::FusedIterator;

use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro128Plus;
use thiserror::Error;
use tracing::{debug, trace};

use crate::bitmap::{ByteBitmap, VALUE_COUNT};

/// Errors that can occur while drawing from a [`RandomByteSeq`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// Every byte value has been consumed; no further draw can succeed.
    #[error("sequence has been exhausted")]
    Exhausted,
}

/// Randomised sequence over the byte values 0-255, yielding each value at
/// most once.
///
/// The generator owns a 256-bit membership bitmap and a count of values
/// not yet produced. Each successful draw samples uniform bytes from the
/// randomness source, rejecting already-consumed candidates, then marks
/// the drawn value consumed. Once every value is consumed the sequence is
/// exhausted, permanently.
///
/// All mutation goes through `&mut self` and there is no internal
/// synchronization: the type is built for single-owner, single-thread use.
/// It is `Send` whenever the randomness source is.
#[derive(Debug, Clone)]
pub struct RandomByteSeq<R = Xoshiro128Plus> {
    /// Membership bitmap: bit `i` set means value `i` was produced or
    /// excluded.
    consumed: ByteBitmap,

    /// Count of clear bits; always equals `256 - consumed.count_ones()`.
    remaining: usize,

    /// Injected randomness source.
    rng: R,
}

impl RandomByteSeq<Xoshiro128Plus> {
    /// Create a generator seeded from the thread-local entropy source.
    ///
    /// Each value in `excluded` is treated as already consumed and will
    /// never be produced. Duplicates are permitted and harmless; the byte
    /// domain is enforced by the element type.
    pub fn new(excluded: &[u8]) -> Self {
        Self::with_rng(excluded, Xoshiro128Plus::from_rng(&mut rand::rng()))
    }

    /// Create a generator with a fixed seed, for reproducible sequences.
    pub fn seeded(excluded: &[u8], seed: u64) -> Self {
        Self::with_rng(excluded, Xoshiro128Plus::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomByteSeq<R> {
    /// Create a generator drawing randomness from `rng`.
    ///
    /// Each value in `excluded` is treated as already consumed and will
    /// never be produced. Duplicates are permitted and harmless: a value
    /// counts against the remaining total only the first time it is seen.
    pub fn with_rng(excluded: &[u8], rng: R) -> Self {
        let mut consumed = ByteBitmap::new();
        let mut remaining = VALUE_COUNT;

        for &value in excluded {
            if consumed.insert(value) {
                remaining -= 1;
            }
        }
        debug!(
            excluded = VALUE_COUNT - remaining,
            remaining, "created byte sequence"
        );

        Self {
            consumed,
            remaining,
            rng,
        }
    }

    /// Whether any unconsumed values remain.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.remaining > 0
    }

    /// Number of values that can still be drawn.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Whether `value` has already been produced or was excluded at
    /// construction.
    #[inline]
    pub fn is_consumed(&self, value: u8) -> bool {
        self.consumed.contains(value)
    }

    /// Draw the next byte value.
    ///
    /// Samples uniformly from the full domain, rejecting values already
    /// consumed, until an unconsumed value is found; that value is marked
    /// consumed and returned. Expected work is 256/remaining trials, so
    /// draws get more expensive as the sequence approaches exhaustion.
    /// There is no retry cap: a cap could report exhaustion while values
    /// remain.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Exhausted`] once every value has been
    /// consumed. The failure has no side effect and is permanent.
    pub fn next_value(&mut self) -> Result<u8, SequenceError> {
        if self.remaining == 0 {
            return Err(SequenceError::Exhausted);
        }

        let mut attempts = 1u32;
        loop {
            let value = self.rng.random::<u8>();
            if self.consumed.insert(value) {
                self.remaining -= 1;
                trace!(value, attempts, remaining = self.remaining, "drew byte");
                return Ok(value);
            }
            attempts += 1;
        }
    }
}

impl<R: RngCore> Iterator for RandomByteSeq<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_value().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: RngCore> ExactSizeIterator for RandomByteSeq<R> {}

impl<R: RngCore> FusedIterator for RandomByteSeq<R> {}
