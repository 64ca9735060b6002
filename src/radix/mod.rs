//! Building blocks for radix conversion in bases 2 through 36.
//!
//! A radix converter splits a multi-word integer into chunks
//! of [`RadixRoot::exponent`] digits by repeatedly dividing by
//! [`RadixRoot::power`], then spells each chunk with a
//! [`RadixAlphabet`].

mod alphabet;
mod root;

pub use alphabet::RadixAlphabet;
pub use root::{RadixRoot, WordSize};

/// The smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// The largest supported radix.
pub const MAX_RADIX: u32 = 36;
