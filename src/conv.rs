//! Conversions between composites and the primitive integers.

use core::fmt;

/// The error returned when a composite does not fit in the
/// target primitive integer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TryFromWideError(());

impl TryFromWideError {
    pub(crate) const fn new() -> Self {
        Self(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TryFromWideError {}

impl fmt::Display for TryFromWideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("out of range integral type conversion attempted")
    }
}

/// Implements lossless `From<primitive>` for a composite.
///
/// Each primitive is paired with the constructor that widens
/// it.
macro_rules! from_impl {
    ($t:ty => $($from:ty: $ctor:ident),+ $(,)?) => {
        $(
            impl From<$from> for $t {
                #[inline]
                fn from(v: $from) -> Self {
                    <$t>::$ctor(v.into())
                }
            }
        )+
    };
}
pub(crate) use from_impl;

/// Implements `TryFrom<composite>` for `i64`, `u64`, `i128`
/// and `u128`.
macro_rules! try_from_impl {
    ($t:ty) => {
        impl TryFrom<$t> for i64 {
            type Error = $crate::conv::TryFromWideError;

            #[inline]
            fn try_from(v: $t) -> Result<Self, Self::Error> {
                v.to_i64().ok_or($crate::conv::TryFromWideError::new())
            }
        }

        impl TryFrom<$t> for u64 {
            type Error = $crate::conv::TryFromWideError;

            #[inline]
            fn try_from(v: $t) -> Result<Self, Self::Error> {
                v.to_u64().ok_or($crate::conv::TryFromWideError::new())
            }
        }

        impl TryFrom<$t> for u128 {
            type Error = $crate::conv::TryFromWideError;

            #[inline]
            fn try_from(v: $t) -> Result<Self, Self::Error> {
                let [lo, hi, ..] = v.to_words();
                let n = (u128::from(hi) << 64) | u128::from(lo);
                if <$t>::from_u128(n) == v && !v.is_negative() {
                    Ok(n)
                } else {
                    Err($crate::conv::TryFromWideError::new())
                }
            }
        }

        impl TryFrom<$t> for i128 {
            type Error = $crate::conv::TryFromWideError;

            #[inline]
            #[allow(clippy::cast_possible_wrap)]
            fn try_from(v: $t) -> Result<Self, Self::Error> {
                let [lo, hi, ..] = v.to_words();
                let n = ((u128::from(hi) << 64) | u128::from(lo)) as i128;
                if <$t>::from_i128(n) == v && (n < 0) == v.is_negative() {
                    Ok(n)
                } else {
                    Err($crate::conv::TryFromWideError::new())
                }
            }
        }
    };
}
pub(crate) use try_from_impl;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{I1024, I128, I256, U1024, U128, U256};

    #[test]
    fn test_from() {
        assert_eq!(U256::from(7u64), U256::from_u64(7));
        assert_eq!(I256::from(-7i64), I256::from_i64(-7));
        assert_eq!(U128::from(u128::MAX), U128::MAX);
        assert_eq!(I128::from(i128::MIN), I128::MIN);
        assert_eq!(I128::from(i128::MAX), I128::MAX);
        assert_eq!(I128::from(u64::MAX).to_words(), [u64::MAX, 0]);
        assert_eq!(I256::from(u128::MAX).to_words(), [u64::MAX, u64::MAX, 0, 0]);
        assert_eq!(U256::from(7u8), U256::from_u64(7));
        assert_eq!(I256::from(-7i8), I256::from_i64(-7));
    }

    #[test]
    fn test_try_from_i64() {
        let tests = [
            (I256::from_i64(i64::MIN), Ok(i64::MIN)),
            (I256::from_i64(i64::MAX), Ok(i64::MAX)),
            (I256::from_u64(1 << 63), Err(TryFromWideError::new())),
            (I256::MIN, Err(TryFromWideError::new())),
        ];
        for (i, (x, want)) in tests.into_iter().enumerate() {
            assert_eq!(i64::try_from(x), want, "#{i}");
        }
        assert_eq!(i64::try_from(U256::MAX), Err(TryFromWideError::new()));
    }

    #[test]
    fn test_try_from_128() {
        assert_eq!(u128::try_from(U256::from_u128(u128::MAX)), Ok(u128::MAX));
        assert!(u128::try_from(U256::MAX).is_err());
        assert!(u128::try_from(I256::from_i64(-1)).is_err());
        assert_eq!(i128::try_from(I256::from_i128(i128::MIN)), Ok(i128::MIN));
        assert!(i128::try_from(I256::from_u128(u128::MAX)).is_err());
        assert!(i128::try_from(U128::MAX).is_err());
        assert_eq!(i128::try_from(I128::MIN), Ok(i128::MIN));
        assert_eq!(u128::try_from(U128::MAX), Ok(u128::MAX));
        assert_eq!(i128::try_from(I1024::from_i64(-3)), Ok(-3));
        assert_eq!(u128::try_from(U1024::from_words([1; 16])), Err(TryFromWideError::new()));
        let x = (3u128 << 64) | 7;
        assert_eq!(u128::try_from(U1024::from_u128(x)), Ok(x));
        assert_eq!(u64::try_from(U128::from_u64(9)), Ok(9));
        assert!(u64::try_from(I128::from_i64(-9)).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TryFromWideError::new().to_string(),
            "out of range integral type conversion attempted"
        );
    }
}
