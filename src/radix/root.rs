use super::{MAX_RADIX, MIN_RADIX};

/// The machine word a [`RadixRoot`] is sized for.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum WordSize {
    /// 64-bit words.
    #[default]
    X64,
    /// 32-bit words.
    X32,
}

impl WordSize {
    /// Returns the number of bits in the word.
    pub const fn bits(self) -> u32 {
        match self {
            Self::X64 => u64::BITS,
            Self::X32 => u32::BITS,
        }
    }

    /// Returns the largest value the word can hold.
    #[allow(clippy::cast_lossless)]
    pub const fn max(self) -> u64 {
        match self {
            Self::X64 => u64::MAX,
            Self::X32 => u32::MAX as u64,
        }
    }
}

/// The largest power of a radix that fits in one machine
/// word.
///
/// ```text
/// power = radix^exponent <= WORD_MAX < radix^(exponent+1)
/// ```
///
/// # Examples
///
/// ```rust
/// use wideint::radix::RadixRoot;
///
/// let root = RadixRoot::new(10);
/// assert_eq!(root.power(), 10_000_000_000_000_000_000);
/// assert_eq!(root.exponent(), 19);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RadixRoot {
    power: u64,
    exponent: u32,
}

impl RadixRoot {
    /// Returns the root of `radix` for 64-bit words.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `[2, 36]`.
    #[track_caller]
    pub const fn new(radix: u32) -> Self {
        #[allow(clippy::indexing_slicing)]
        const TABLE: [RadixRoot; MAX_RADIX as usize + 1] = {
            let mut table = [RadixRoot {
                power: 0,
                exponent: 0,
            }; MAX_RADIX as usize + 1];
            let mut r = MIN_RADIX;
            while r <= MAX_RADIX {
                table[r as usize] = RadixRoot::with_word_size(r, WordSize::X64);
                r += 1;
            }
            table
        };

        check_radix(radix);
        #[allow(
            clippy::indexing_slicing,
            reason = "`radix` was checked above"
        )]
        let root = TABLE[radix as usize];
        root
    }

    /// Returns the root of `radix` for the given word size.
    ///
    /// Powers of two take [`power_of_two`][Self::power_of_two],
    /// everything else [`general`][Self::general].
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `[2, 36]`.
    #[track_caller]
    pub const fn with_word_size(radix: u32, word: WordSize) -> Self {
        if radix.is_power_of_two() {
            Self::power_of_two(radix, word)
        } else {
            Self::general(radix, word)
        }
    }

    /// Computes the root by repeated multiplication.
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not in `[2, 36]`.
    #[track_caller]
    #[allow(clippy::cast_lossless)]
    pub const fn general(radix: u32, word: WordSize) -> Self {
        check_radix(radix);

        let r = radix as u64;
        let max = word.max();
        let mut power = 1u64;
        let mut exponent = 0;
        // `power <= max / r` iff `power * r <= max`.
        while power <= max / r {
            power *= r;
            exponent += 1;
        }
        Self { power, exponent }
    }

    /// Computes the root of a power-of-two radix with shifts.
    ///
    /// For `radix = 2^b` the exponent is the largest `k` with
    /// `b*k < bits`, so the result always equals
    /// [`general`][Self::general]. It is not `bits / b`: for
    /// radix 2, 4 and 16 that would make `power` equal to
    /// `2^bits`, which does not fit in the word. So radix 16
    /// chunks 15 digits per 64-bit word, not 16.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wideint::radix::{RadixRoot, WordSize};
    ///
    /// let root = RadixRoot::power_of_two(16, WordSize::X64);
    /// assert_eq!(root.exponent(), 15);
    /// assert_eq!(root.power(), 1 << 60);
    /// assert_eq!(root, RadixRoot::general(16, WordSize::X64));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `radix` is not a power of two in `[2, 36]`.
    #[track_caller]
    pub const fn power_of_two(radix: u32, word: WordSize) -> Self {
        check_radix(radix);
        assert!(radix.is_power_of_two(), "radix is not a power of two");

        let b = radix.trailing_zeros();
        let exponent = (word.bits() - 1) / b;
        Self {
            power: 1 << (b * exponent),
            exponent,
        }
    }

    /// Returns `radix^exponent`.
    pub const fn power(self) -> u64 {
        self.power
    }

    /// Returns the number of digits that `power` spans.
    pub const fn exponent(self) -> u32 {
        self.exponent
    }
}

#[track_caller]
const fn check_radix(radix: u32) {
    assert!(
        radix >= MIN_RADIX && radix <= MAX_RADIX,
        "radix must be in [2, 36]"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_two_agrees() {
        for word in [WordSize::X64, WordSize::X32] {
            for radix in (MIN_RADIX..=MAX_RADIX).filter(|r| r.is_power_of_two()) {
                let fast = RadixRoot::power_of_two(radix, word);
                let slow = RadixRoot::general(radix, word);
                assert_eq!(fast, slow, "{radix} ({word:?})");
            }
        }
    }

    #[test]
    fn test_general() {
        for word in [WordSize::X64, WordSize::X32] {
            for radix in MIN_RADIX..=MAX_RADIX {
                let root = RadixRoot::with_word_size(radix, word);
                let want = u64::from(radix).pow(root.exponent());
                assert_eq!(root.power(), want, "{radix} ({word:?})");
                assert!(root.power() <= word.max(), "{radix} ({word:?})");
                let next = u128::from(root.power()) * u128::from(radix);
                assert!(next > u128::from(word.max()), "{radix} ({word:?})");
            }
        }
    }

    #[test]
    fn test_known() {
        let tests = [
            (2, WordSize::X64, 1 << 63, 63),
            (10, WordSize::X64, 10u64.pow(19), 19),
            (16, WordSize::X64, 1 << 60, 15),
            (36, WordSize::X64, 36u64.pow(12), 12),
            (2, WordSize::X32, 1 << 31, 31),
            (10, WordSize::X32, 10u64.pow(9), 9),
            (16, WordSize::X32, 1 << 28, 7),
        ];
        for (i, (radix, word, power, exponent)) in tests.into_iter().enumerate() {
            let root = RadixRoot::with_word_size(radix, word);
            assert_eq!(root.power(), power, "#{i}");
            assert_eq!(root.exponent(), exponent, "#{i}");
        }
    }

    #[test]
    fn test_power_of_two_fits_word() {
        let tests = [
            (2, WordSize::X64, 63),
            (4, WordSize::X64, 31),
            (16, WordSize::X64, 15),
            (2, WordSize::X32, 31),
            (4, WordSize::X32, 15),
            (16, WordSize::X32, 7),
        ];
        for (i, (radix, word, exponent)) in tests.into_iter().enumerate() {
            let root = RadixRoot::power_of_two(radix, word);
            assert_eq!(root.exponent(), exponent, "#{i}");
            assert_eq!(root.power(), 1 << (radix.trailing_zeros() * exponent), "#{i}");
            assert!(root.power() <= word.max(), "#{i}");
        }
    }

    #[test]
    fn test_table() {
        for radix in MIN_RADIX..=MAX_RADIX {
            assert_eq!(
                RadixRoot::new(radix),
                RadixRoot::general(radix, WordSize::X64),
                "{radix}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "radix must be in [2, 36]")]
    fn test_radix_too_large() {
        let _ = RadixRoot::new(37);
    }

    #[test]
    #[should_panic(expected = "radix must be in [2, 36]")]
    fn test_radix_too_small() {
        let _ = RadixRoot::general(1, WordSize::X64);
    }

    #[test]
    #[should_panic(expected = "radix is not a power of two")]
    fn test_power_of_two_rejects() {
        let _ = RadixRoot::power_of_two(10, WordSize::X64);
    }
}
