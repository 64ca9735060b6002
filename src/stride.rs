//! Using wide integers as index-like values.
//!
//! Offsets and distances are native `i64`s. For any `x` and
//! `n` where `x.advanced_by(n)` does not overflow,
//!
//! ```text
//! x.distance_to(x.advanced_by(n)) == n
//! ```

use core::{cmp::Ordering, iter::FusedIterator};

use crate::{limb::Limb, wide::Wide};

/// A value that can be offset by, and measured in, `i64`s.
pub trait Strideable: Copy + Ord {
    /// Returns `self + n`, or `None` if the result is out of
    /// range.
    fn checked_advanced_by(self, n: i64) -> Option<Self>;

    /// Returns `other - self`, or `None` if the distance does
    /// not fit in an `i64`.
    fn checked_distance_to(self, other: Self) -> Option<i64>;

    /// Returns `self + n`.
    ///
    /// # Panics
    ///
    /// Panics if the result is out of range.
    #[track_caller]
    #[allow(clippy::panic)]
    fn advanced_by(self, n: i64) -> Self {
        match self.checked_advanced_by(n) {
            Some(v) => v,
            None => panic!("attempt to advance with overflow"),
        }
    }

    /// Returns `other - self`.
    ///
    /// # Panics
    ///
    /// Panics if the distance does not fit in an `i64`. The
    /// result is never truncated.
    #[track_caller]
    #[allow(clippy::panic)]
    fn distance_to(self, other: Self) -> i64 {
        match self.checked_distance_to(other) {
            Some(d) => d,
            None => panic!("distance does not fit in an i64"),
        }
    }
}

impl<H: Limb, L: Limb> Wide<H, L> {
    /// Computes `self + n`, reporting whether the exact result
    /// is out of range.
    ///
    /// `n` is sign extended to `BITS` bits before the add.
    #[must_use = "this returns the result of the operation \
                      without modifying the original"]
    pub fn overflowing_advanced_by(self, n: i64) -> (Self, bool) {
        let offset = Self::from_i64(n);
        if Self::IS_SIGNED {
            self.overflowing_add(offset)
        } else {
            // A negative `n` was added as `2^BITS + n`, so a
            // carry out means the result did not go below zero.
            let (sum, carry) = self.carrying_add(offset, false);
            (sum, carry != (n < 0))
        }
    }
}

impl<H: Limb, L: Limb> Strideable for Wide<H, L> {
    fn checked_advanced_by(self, n: i64) -> Option<Self> {
        match self.overflowing_advanced_by(n) {
            (v, false) => Some(v),
            (_, true) => None,
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn checked_distance_to(self, other: Self) -> Option<i64> {
        let (diff, overflow) = other.overflowing_sub(self);
        let negative = if Self::IS_SIGNED {
            if overflow {
                // The exact difference needs BITS+1 bits, which
                // is always wider than an i64.
                return None;
            }
            diff.is_negative()
        } else {
            overflow
        };
        let n = diff.low_word() as i64;
        if diff == Self::from_i64(n) && (n < 0) == negative {
            Some(n)
        } else {
            None
        }
    }
}

/// Returns an iterator from `start` up to, but not including,
/// `end`, stepping by `step`.
///
/// # Panics
///
/// Panics if `step` is zero.
#[track_caller]
pub fn stride_to<T: Strideable>(start: T, end: T, step: i64) -> StrideTo<T> {
    assert!(step != 0, "stride must not be zero");
    StrideTo {
        next: Some(start),
        end,
        step,
    }
}

/// Returns an iterator from `start` up to and including `end`
/// (if it is reached), stepping by `step`.
///
/// # Panics
///
/// Panics if `step` is zero.
#[track_caller]
pub fn stride_through<T: Strideable>(start: T, end: T, step: i64) -> StrideThrough<T> {
    assert!(step != 0, "stride must not be zero");
    StrideThrough {
        next: Some(start),
        end,
        step,
    }
}

/// An iterator returned by [`stride_to`].
#[derive(Copy, Clone, Debug)]
pub struct StrideTo<T> {
    next: Option<T>,
    end: T,
    step: i64,
}

impl<T: Strideable> Iterator for StrideTo<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let cur = self.next?;
        let before_end = match cur.cmp(&self.end) {
            Ordering::Less => self.step > 0,
            Ordering::Greater => self.step < 0,
            Ordering::Equal => false,
        };
        if !before_end {
            self.next = None;
            return None;
        }
        // Running off the end of the type also ends the stride.
        self.next = cur.checked_advanced_by(self.step);
        Some(cur)
    }
}

impl<T: Strideable> FusedIterator for StrideTo<T> {}

/// An iterator returned by [`stride_through`].
#[derive(Copy, Clone, Debug)]
pub struct StrideThrough<T> {
    next: Option<T>,
    end: T,
    step: i64,
}

impl<T: Strideable> Iterator for StrideThrough<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let cur = self.next?;
        let in_range = match cur.cmp(&self.end) {
            Ordering::Less => self.step > 0,
            Ordering::Greater => self.step < 0,
            Ordering::Equal => true,
        };
        if !in_range {
            self.next = None;
            return None;
        }
        self.next = if cur == self.end {
            None
        } else {
            cur.checked_advanced_by(self.step)
        };
        Some(cur)
    }
}

impl<T: Strideable> FusedIterator for StrideThrough<T> {}
