use core::fmt;

#[cfg(any(feature = "rand", test))]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::limb::Limb;

/// A double-width integer made of two limbs.
///
/// `High` decides the signedness of the whole. `Low` is
/// always unsigned and exactly as wide as `High`, so a signed
/// composite is the two's complement decomposition
///
/// ```text
/// value = high * 2^bits(Low) + low
/// ```
///
/// Use the aliases ([`U256`][crate::U256],
/// [`I512`][crate::I512], ...) rather than naming `Wide`
/// directly.
#[derive(Copy, Clone, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Wide<High, Low> {
    // Field order matters: the derived `Ord` compares `high`
    // (which carries the sign) before `low`.
    high: High,
    low: Low,
}

impl<H: Limb, L: Limb> Wide<H, L> {
    /// The number of bits in the integer.
    pub const BITS: u32 = H::BITS + L::BITS;
    /// The number of 64-bit words in the integer.
    pub const WORDS: usize = H::WORDS + L::WORDS;
    /// Whether the integer is signed.
    pub const IS_SIGNED: bool = H::IS_SIGNED;

    /// Zero.
    pub const ZERO: Self = Self {
        high: H::ZERO,
        low: L::ZERO,
    };
    /// The smallest value that can be represented by this type.
    ///
    /// For signed integers only the sign bit is set.
    pub const MIN: Self = Self {
        high: H::MIN,
        low: L::MIN,
    };
    /// The largest value that can be represented by this type.
    ///
    /// This is always `!MIN`.
    pub const MAX: Self = Self {
        high: H::MAX,
        low: L::MAX,
    };

    /// Creates an integer from its high and low halves.
    pub const fn new(high: H, low: L) -> Self {
        Self { high, low }
    }

    /// Creates an integer from `(low, high)`.
    pub const fn from_ascending((low, high): (L, H)) -> Self {
        Self { high, low }
    }

    /// Creates an integer from `(high, low)`.
    pub const fn from_descending((high, low): (H, L)) -> Self {
        Self { high, low }
    }

    /// Returns the most significant half.
    pub const fn high(self) -> H {
        self.high
    }

    /// Returns the least significant half.
    pub const fn low(self) -> L {
        self.low
    }

    /// Returns `(low, high)`.
    pub const fn into_ascending(self) -> (L, H) {
        (self.low, self.high)
    }

    /// Returns `(high, low)`.
    pub const fn into_descending(self) -> (H, L) {
        (self.high, self.low)
    }

    /// Reports whether the integer is zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Reports whether the integer is less than zero.
    ///
    /// Always false for unsigned integers.
    pub fn is_negative(self) -> bool {
        self.high.is_negative()
    }

    /// Creates an integer from a `u64`, zero extending it.
    pub fn from_u64(v: u64) -> Self {
        Self {
            high: H::ZERO,
            low: L::from_u64(v),
        }
    }

    /// Creates an integer from an `i64`, sign extending it.
    ///
    /// For unsigned integers a negative `v` wraps modulo
    /// `2^BITS`.
    pub fn from_i64(v: i64) -> Self {
        Self {
            high: H::sign_fill(v < 0),
            low: L::from_i64(v),
        }
    }

    /// Creates an integer from a `u128`, zero extending it.
    ///
    /// Truncates if the integer is narrower than 128 bits,
    /// which none of the exported aliases are.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u128(v: u128) -> Self {
        if L::BITS >= u128::BITS {
            Self {
                high: H::ZERO,
                low: L::from_u128(v),
            }
        } else {
            Self {
                high: H::from_u128(v >> L::BITS),
                low: L::from_u64(v as u64),
            }
        }
    }

    /// Creates an integer from an `i128`, sign extending it.
    ///
    /// For unsigned integers a negative `v` wraps modulo
    /// `2^BITS`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_i128(v: i128) -> Self {
        if L::BITS >= u128::BITS {
            Self {
                high: H::sign_fill(v < 0),
                low: L::from_i128(v),
            }
        } else {
            Self {
                high: H::from_i128(v >> L::BITS),
                low: L::from_u64(v as u64),
            }
        }
    }

    /// Returns the least significant 64-bit word.
    pub fn low_word(self) -> u64 {
        self.low.low_word()
    }

    /// Returns the value as an `i64` if it is in range.
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_i64(self) -> Option<i64> {
        let n = self.low_word() as i64;
        // For unsigned integers `from_i64(-1) == MAX`.
        if Self::from_i64(n) == self && (n < 0) == self.is_negative() {
            Some(n)
        } else {
            None
        }
    }

    /// Returns the value as a `u64` if it is in range.
    pub fn to_u64(self) -> Option<u64> {
        let n = self.low_word();
        if Self::from_u64(n) == self {
            Some(n)
        } else {
            None
        }
    }

    pub(crate) fn write_words_impl(self, dst: &mut [u64]) {
        let (lo, hi) = dst.split_at_mut(L::WORDS);
        self.low.write_words(lo);
        self.high.write_words(hi);
    }

    pub(crate) fn read_words_impl(src: &[u64]) -> Self {
        let (lo, hi) = src.split_at(L::WORDS);
        Self {
            high: H::read_words(hi),
            low: L::read_words(lo),
        }
    }

    pub(crate) fn fmt_hex_impl(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.high.fmt_hex(f)?;
        self.low.fmt_hex(f)
    }
}

impl<H: Limb, L: Limb> Wide<H, L>
where
    Self: Limb,
{
    /// Returns the 64-bit word view, least significant word
    /// first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wideint::U256;
    ///
    /// let x = U256::from_words([1, 2, 3, 4]);
    /// assert_eq!(x.to_words(), [1, 2, 3, 4]);
    /// assert_eq!(x.high().to_words(), [3, 4]);
    /// ```
    pub fn to_words(self) -> <Self as Limb>::Words {
        <Self as Limb>::to_words(self)
    }

    /// Creates an integer from its 64-bit word view, least
    /// significant word first.
    pub fn from_words(words: <Self as Limb>::Words) -> Self {
        <Self as Limb>::from_words(words)
    }

    /// Returns the 32-bit word view, least significant word
    /// first.
    pub fn to_words32(self) -> <Self as Limb>::Words32 {
        <Self as Limb>::to_words32(self)
    }

    /// Creates an integer from its 32-bit word view, least
    /// significant word first.
    pub fn from_words32(words: <Self as Limb>::Words32) -> Self {
        <Self as Limb>::from_words32(words)
    }

    /// Creates an integer from a slice of 64-bit words, least
    /// significant word first.
    ///
    /// # Panics
    ///
    /// Panics if `words.len()` is not `BITS / 64`.
    #[track_caller]
    pub fn from_word_slice(words: &[u64]) -> Self {
        assert!(
            words.len() == Self::WORDS,
            "expected {} 64-bit words, got {}",
            Self::WORDS,
            words.len()
        );
        Self::read_words_impl(words)
    }

    /// Creates an integer from a slice of 32-bit words, least
    /// significant word first.
    ///
    /// # Panics
    ///
    /// Panics if `words.len()` is not `BITS / 32`.
    #[track_caller]
    pub fn from_word_slice32(words: &[u32]) -> Self {
        let mut buf = <Self as Limb>::Words32::default();
        assert!(
            words.len() == buf.as_ref().len(),
            "expected {} 32-bit words, got {}",
            buf.as_ref().len(),
            words.len()
        );
        buf.as_mut().copy_from_slice(words);
        Self::from_words32(buf)
    }
}

impl<H: Limb, L: Limb> fmt::Debug for Wide<H, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        self.fmt_hex_impl(f)
    }
}

impl<H: Limb, L: Limb> fmt::LowerHex for Wide<H, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        self.fmt_hex_impl(f)
    }
}

impl<H: Limb, L: Limb> fmt::UpperHex for Wide<H, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        let mut buf = HexUpper { inner: f };
        fmt::write(&mut buf, format_args!("{self:x}"))
    }
}

/// Uppercases ASCII hex digits on their way to the inner
/// formatter.
struct HexUpper<'a, 'b> {
    inner: &'a mut fmt::Formatter<'b>,
}

impl fmt::Write for HexUpper<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            fmt::Write::write_char(self.inner, c.to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(any(feature = "rand", test))]
impl<H, L> Distribution<Wide<H, L>> for Standard
where
    Standard: Distribution<H> + Distribution<L>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Wide<H, L> {
        Wide {
            high: rng.gen(),
            low: rng.gen(),
        }
    }
}
