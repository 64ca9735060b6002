//! The capability set every half of a composite must provide.

use core::{fmt, hash::Hash, ops::Not};

mod private {
    use core::fmt;

    /// Word-level hooks shared by every [`Limb`][super::Limb].
    pub trait Sealed {
        /// Writes the integer into `dst`, least significant
        /// word first.
        ///
        /// Panics if `dst.len()` is not `WORDS`.
        fn write_words(self, dst: &mut [u64]);

        /// Reads the integer from `src`, least significant word
        /// first.
        ///
        /// Panics if `src.len()` is not `WORDS`.
        fn read_words(src: &[u64]) -> Self;

        /// Returns the least significant 64-bit word.
        fn low_word(self) -> u64;

        /// Writes every bit as zero-padded lowercase
        /// hexadecimal.
        fn fmt_hex(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    }
}
pub(crate) use private::Sealed;

/// A fixed-width integer that can be one half of a
/// [`Wide`][crate::Wide].
///
/// The trait is implemented for `u64`, `i64` and every
/// composite exported by this crate. It is sealed.
///
/// Everything here operates on the two's complement bit
/// pattern. Signedness only matters for [`is_negative`],
/// [`MIN`] and [`MAX`].
///
/// [`is_negative`]: Limb::is_negative
/// [`MIN`]: Limb::MIN
/// [`MAX`]: Limb::MAX
pub trait Limb:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + Not<Output = Self> + Sealed
{
    /// The number of bits in the integer.
    const BITS: u32;
    /// The number of 64-bit words in the integer.
    const WORDS: usize;
    /// Whether the integer is signed.
    const IS_SIGNED: bool;
    /// Zero.
    const ZERO: Self;
    /// The smallest value that can be represented by this type.
    const MIN: Self;
    /// The largest value that can be represented by this type.
    const MAX: Self;

    /// The 64-bit word view, least significant word first.
    type Words: Copy + Default + AsRef<[u64]> + AsMut<[u64]>;
    /// The 32-bit word view, least significant word first.
    type Words32: Copy + Default + AsRef<[u32]> + AsMut<[u32]>;

    /// Computes `self + rhs + carry` over the bit pattern,
    /// returning the carry out of the most significant bit.
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool);

    /// Computes `self - rhs - borrow` over the bit pattern,
    /// returning the borrow out of the most significant bit.
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool);

    /// Reports whether the integer is less than zero.
    ///
    /// Always false for unsigned integers.
    fn is_negative(self) -> bool;

    /// Returns all ones if `negative` is true, or zero
    /// otherwise.
    fn sign_fill(negative: bool) -> Self;

    /// Zero extends `v`, truncating if `Self` is narrower.
    fn from_u64(v: u64) -> Self;

    /// Sign extends `v`, truncating if `Self` is narrower.
    fn from_i64(v: i64) -> Self;

    /// Zero extends `v`, truncating if `Self` is narrower.
    fn from_u128(v: u128) -> Self;

    /// Sign extends `v`, truncating if `Self` is narrower.
    fn from_i128(v: i128) -> Self;

    /// Returns the 64-bit word view.
    fn to_words(self) -> Self::Words {
        let mut words = Self::Words::default();
        self.write_words(words.as_mut());
        words
    }

    /// Creates the integer from its 64-bit word view.
    fn from_words(words: Self::Words) -> Self {
        Self::read_words(words.as_ref())
    }

    /// Returns the 32-bit word view.
    fn to_words32(self) -> Self::Words32 {
        let mut out = Self::Words32::default();
        for (pair, w) in out
            .as_mut()
            .chunks_exact_mut(2)
            .zip(self.to_words().as_ref())
        {
            pair.copy_from_slice(&split(*w));
        }
        out
    }

    /// Creates the integer from its 32-bit word view.
    fn from_words32(words: Self::Words32) -> Self {
        let mut out = Self::Words::default();
        for (w, pair) in out
            .as_mut()
            .iter_mut()
            .zip(words.as_ref().chunks_exact(2))
        {
            *w = join(pair);
        }
        Self::from_words(out)
    }
}

/// Splits `w` into `[lo, hi]`.
const fn split(w: u64) -> [u32; 2] {
    [w as u32, (w >> 32) as u32]
}

/// Joins `[lo, hi]` into one word.
fn join(pair: &[u32]) -> u64 {
    pair.iter()
        .rev()
        .fold(0, |acc, &half| (acc << 32) | u64::from(half))
}

impl Limb for u64 {
    const BITS: u32 = u64::BITS;
    const WORDS: usize = 1;
    const IS_SIGNED: bool = false;
    const ZERO: Self = 0;
    const MIN: Self = u64::MIN;
    const MAX: Self = u64::MAX;

    type Words = [u64; 1];
    type Words32 = [u32; 2];

    #[inline]
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (sum, c0) = self.overflowing_add(rhs);
        let (sum, c1) = sum.overflowing_add(u64::from(carry));
        (sum, c0 | c1)
    }

    #[inline]
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (diff, b0) = self.overflowing_sub(rhs);
        let (diff, b1) = diff.overflowing_sub(u64::from(borrow));
        (diff, b0 | b1)
    }

    #[inline]
    fn is_negative(self) -> bool {
        false
    }

    #[inline]
    fn sign_fill(negative: bool) -> Self {
        if negative {
            u64::MAX
        } else {
            0
        }
    }

    #[inline]
    fn from_u64(v: u64) -> Self {
        v
    }

    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn from_i64(v: i64) -> Self {
        v as u64
    }

    #[inline]
    fn from_u128(v: u128) -> Self {
        v as u64
    }

    #[inline]
    #[allow(clippy::cast_sign_loss)]
    fn from_i128(v: i128) -> Self {
        v as u64
    }

}

impl Sealed for u64 {
    #[inline]
    fn write_words(self, dst: &mut [u64]) {
        dst.copy_from_slice(&[self]);
    }

    #[inline]
    fn read_words(src: &[u64]) -> Self {
        let mut w = [0];
        w.copy_from_slice(src);
        let [w] = w;
        w
    }

    #[inline]
    fn low_word(self) -> u64 {
        self
    }

    fn fmt_hex(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:016x}")
    }
}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
impl Limb for i64 {
    const BITS: u32 = i64::BITS;
    const WORDS: usize = 1;
    const IS_SIGNED: bool = true;
    const ZERO: Self = 0;
    const MIN: Self = i64::MIN;
    const MAX: Self = i64::MAX;

    type Words = [u64; 1];
    type Words32 = [u32; 2];

    #[inline]
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (sum, c) = <u64 as Limb>::carrying_add(self as u64, rhs as u64, carry);
        (sum as i64, c)
    }

    #[inline]
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (diff, b) = <u64 as Limb>::borrowing_sub(self as u64, rhs as u64, borrow);
        (diff as i64, b)
    }

    #[inline]
    fn is_negative(self) -> bool {
        self < 0
    }

    #[inline]
    fn sign_fill(negative: bool) -> Self {
        -i64::from(negative)
    }

    #[inline]
    fn from_u64(v: u64) -> Self {
        v as i64
    }

    #[inline]
    fn from_i64(v: i64) -> Self {
        v
    }

    #[inline]
    fn from_u128(v: u128) -> Self {
        v as i64
    }

    #[inline]
    fn from_i128(v: i128) -> Self {
        v as i64
    }

}

#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
impl Sealed for i64 {
    #[inline]
    fn write_words(self, dst: &mut [u64]) {
        (self as u64).write_words(dst);
    }

    #[inline]
    fn read_words(src: &[u64]) -> Self {
        u64::read_words(src) as i64
    }

    #[inline]
    fn low_word(self) -> u64 {
        self as u64
    }

    fn fmt_hex(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:016x}")
    }
}
