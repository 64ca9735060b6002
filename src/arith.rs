//! Overflow-exact arithmetic.
//!
//! Every primitive comes in the same shapes:
//!
//! - `overflowing_*` returns `(partial_value, overflow)`.
//! - `wrapping_*` returns only the partial value.
//! - `checked_*` returns `None` on overflow.
//! - `*_assign` mutates the receiver and returns the overflow
//!   flag (or nothing, for the wrapping form).
//!
//! The partial value is always the exact result modulo
//! `2^BITS`, so all forms agree bit for bit.

use crate::{limb::Limb, wide::Wide};

impl<H: Limb, L: Limb> Wide<H, L> {
    /// Computes `self + rhs + carry` over the bit pattern,
    /// returning the carry out of the most significant bit.
    ///
    /// The carry is the unsigned overflow regardless of the
    /// integer's signedness.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
        let (low, carry) = self.low().carrying_add(rhs.low(), carry);
        let (high, carry) = self.high().carrying_add(rhs.high(), carry);
        (Self::new(high, low), carry)
    }

    /// Computes `self - rhs - borrow` over the bit pattern,
    /// returning the borrow out of the most significant bit.
    ///
    /// The borrow is the unsigned overflow regardless of the
    /// integer's signedness.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
        let (low, borrow) = self.low().borrowing_sub(rhs.low(), borrow);
        let (high, borrow) = self.high().borrowing_sub(rhs.high(), borrow);
        (Self::new(high, low), borrow)
    }

    /// Computes `self + rhs`, reporting whether the exact sum
    /// is out of range.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (sum, carry) = self.carrying_add(rhs, false);
        let overflow = if Self::IS_SIGNED {
            // Only operands with the same sign can overflow, and
            // then the sum has the other sign.
            self.is_negative() == rhs.is_negative() && sum.is_negative() != self.is_negative()
        } else {
            carry
        };
        (sum, overflow)
    }

    /// Computes `self - rhs`, reporting whether the exact
    /// difference is out of range.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (diff, borrow) = self.borrowing_sub(rhs, false);
        let overflow = if Self::IS_SIGNED {
            self.is_negative() != rhs.is_negative() && diff.is_negative() != self.is_negative()
        } else {
            borrow
        };
        (diff, overflow)
    }

    /// Computes `self + rhs`, wrapping modulo `2^BITS`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.carrying_add(rhs, false).0
    }

    /// Computes `self - rhs`, wrapping modulo `2^BITS`.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.borrowing_sub(rhs, false).0
    }

    /// Computes `self + rhs`, returning `None` if the sum
    /// overflows.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            (_, true) => None,
        }
    }

    /// Computes `self - rhs`, returning `None` if the
    /// difference overflows.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            (_, true) => None,
        }
    }

    /// Sets `self = self + rhs`, returning whether the sum
    /// overflowed.
    pub fn overflowing_add_assign(&mut self, rhs: Self) -> bool {
        let (sum, overflow) = self.overflowing_add(rhs);
        *self = sum;
        overflow
    }

    /// Sets `self = self - rhs`, returning whether the
    /// difference overflowed.
    pub fn overflowing_sub_assign(&mut self, rhs: Self) -> bool {
        let (diff, overflow) = self.overflowing_sub(rhs);
        *self = diff;
        overflow
    }

    /// Computes `-self`, reporting whether the negation is out
    /// of range.
    ///
    /// For signed integers only `MIN` overflows, and its
    /// partial value is `MIN` itself. For unsigned integers
    /// every non-zero value overflows and wraps to
    /// `2^BITS - self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wideint::{I256, U256};
    ///
    /// assert_eq!(I256::MIN.overflowing_neg(), (I256::MIN, true));
    /// assert_eq!(I256::MAX.overflowing_neg().1, false);
    /// assert_eq!(U256::ZERO.overflowing_neg(), (U256::ZERO, false));
    /// assert_eq!(U256::from_u64(1).overflowing_neg(), (U256::MAX, true));
    /// ```
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn overflowing_neg(self) -> (Self, bool) {
        Self::ZERO.overflowing_sub(self)
    }

    /// Computes `-self`, wrapping modulo `2^BITS`.
    ///
    /// This is total: the signed `MIN` negates to itself.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn wrapping_neg(self) -> Self {
        self.overflowing_neg().0
    }

    /// Computes `-self`, returning `None` if the negation
    /// overflows.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn checked_neg(self) -> Option<Self> {
        match self.overflowing_neg() {
            (v, false) => Some(v),
            (_, true) => None,
        }
    }

    /// Sets `self = -self`, wrapping modulo `2^BITS`.
    pub fn wrapping_neg_assign(&mut self) {
        *self = self.wrapping_neg();
    }

    /// Sets `self = -self`, returning whether the negation
    /// overflowed.
    ///
    /// On overflow `self` holds the partial value, exactly as
    /// [`overflowing_neg`][Self::overflowing_neg] would return.
    pub fn overflowing_neg_assign(&mut self) -> bool {
        let (v, overflow) = self.overflowing_neg();
        *self = v;
        overflow
    }
}
