//! Bit rotation over the word view.

use crate::{limb::Limb, wide::Wide};

/// Rotates `words` (least significant first) left by `count`
/// bits.
///
/// `count` must be less than `64 * words.len()`.
pub(crate) fn rotate_words_left(words: &mut [u64], count: u32) {
    debug_assert!(!words.is_empty());
    debug_assert!((count as usize) < 64 * words.len());

    // Whole words move toward the most significant end, which
    // is the end of the slice.
    words.rotate_right((count / 64) as usize);

    let s = count % 64;
    if s == 0 {
        return;
    }
    // Each word takes its own low bits shifted up and the next
    // lower word's high bits shifted down. The top word wraps
    // into word 0.
    let mut carry = words.last().map_or(0, |w| w >> (64 - s));
    for w in words.iter_mut() {
        let next = *w >> (64 - s);
        *w = (*w << s) | carry;
        carry = next;
    }
}

impl<H: Limb, L: Limb> Wide<H, L>
where
    Self: Limb,
{
    /// Rotates the bit pattern left by `count` bits.
    ///
    /// `count` is taken modulo `BITS`, so negative counts
    /// rotate right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wideint::U256;
    ///
    /// let x = U256::from_words([1, 2, 3, 4]);
    /// assert_eq!(x.rotate_left(64).to_words(), [4, 1, 2, 3]);
    /// assert_eq!(x.rotate_left(-64).to_words(), [2, 3, 4, 1]);
    /// ```
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn rotate_left(self, count: i64) -> Self {
        let mut words = self.to_words();
        rotate_words_left(words.as_mut(), Self::normalize(count));
        Self::from_words(words)
    }

    /// Rotates the bit pattern right by `count` bits.
    ///
    /// `count` is taken modulo `BITS`, so negative counts
    /// rotate left.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn rotate_right(self, count: i64) -> Self {
        let n = Self::normalize(count);
        let mut words = self.to_words();
        rotate_words_left(words.as_mut(), (Self::BITS - n) % Self::BITS);
        Self::from_words(words)
    }

    /// Reduces `count` to `[0, BITS)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn normalize(count: i64) -> u32 {
        // `rem_euclid` is never negative and `BITS` fits in a
        // `u32`.
        count.rem_euclid(i64::from(Self::BITS)) as u32
    }
}
