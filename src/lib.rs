//! # Randomised unique byte sequences
//!
//! This library yields the byte values 0-255 in randomised order, returning
//! each value at most once. Values can be marked as already consumed at
//! construction time, which excludes them from the sequence entirely.
//!
//! ## Core design
//!
//! 1. **Membership bitmap**: one bit per possible value (256 bits, 32 bytes)
//! 2. **Rejection sampling**: draw uniform bytes until one is unconsumed
//! 3. **Injected randomness**: any [`rand::RngCore`] source, seedable for
//!    deterministic tests
//!
//! Expected work per draw is 256/remaining trials; the result is uniform
//! among the remaining values whenever the underlying source is uniform.
//!
//! ## Usage Example
//!
//! ```
//! use byteseq::RandomByteSeq;
//!
//! let mut seq = RandomByteSeq::seeded(&[0x00, 0xFF], 42);
//! while seq.has_more() {
//!     let value = seq.next_value()?;
//!     assert!(value != 0x00 && value != 0xFF);
//! }
//! # Ok::<(), byteseq::SequenceError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one half of the generator
pub mod bitmap;   // 256-bit membership bitmap
pub mod sequence; // randomised draw loop and error type

// Re-exports for convenience
pub use bitmap::ByteBitmap;
pub use sequence::{RandomByteSeq, SequenceError};
