// implements the unary operator "op &T"
// based on "op T" where T is expected to be `Copy`able
macro_rules! forward_ref_unop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl ::core::ops::$imp for &$t {
            type Output = <$t as ::core::ops::$imp>::Output;

            #[inline]
            fn $method(self) -> <$t as ::core::ops::$imp>::Output {
                ::core::ops::$imp::$method(*self)
            }
        }
    };
}
pub(crate) use forward_ref_unop;

// implements binary operators "&T op U", "T op &U", "&T op &U"
// based on "T op U" where T and U are expected to be `Copy`able
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl<'a> ::core::ops::$imp<$u> for &'a $t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, other: $u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(*self, other)
            }
        }

        impl ::core::ops::$imp<&$u> for $t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, other: &$u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(self, *other)
            }
        }

        impl ::core::ops::$imp<&$u> for &$t {
            type Output = <$t as ::core::ops::$imp<$u>>::Output;

            #[inline]
            #[track_caller]
            fn $method(self, other: &$u) -> <$t as ::core::ops::$imp<$u>>::Output {
                ::core::ops::$imp::$method(*self, *other)
            }
        }
    };
}
pub(crate) use forward_ref_binop;

// implements "T op= &U", based on "T op= U"
// where U is expected to be `Copy`able
macro_rules! forward_ref_op_assign {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty) => {
        impl ::core::ops::$imp<&$u> for $t {
            #[inline]
            #[track_caller]
            fn $method(&mut self, other: &$u) {
                ::core::ops::$imp::$method(self, *other);
            }
        }
    };
}
pub(crate) use forward_ref_op_assign;

// Overflow panics with debug assertions and wraps otherwise,
// like the primitive integers.
macro_rules! add_impl {
    ($($t:ty)*) => ($(
        impl ::core::ops::Add for $t {
            type Output = $t;

            #[inline]
            #[track_caller]
            #[allow(clippy::panic)]
            fn add(self, other: $t) -> $t {
                if cfg!(debug_assertions) {
                    match self.checked_add(other) {
                        Some(v) => v,
                        None => panic!("attempt to add with overflow"),
                    }
                } else {
                    self.wrapping_add(other)
                }
            }
        }

        $crate::macros::forward_ref_binop! { impl Add, add for $t, $t }
    )*)
}
pub(crate) use add_impl;

macro_rules! sub_impl {
    ($($t:ty)*) => ($(
        impl ::core::ops::Sub for $t {
            type Output = $t;

            #[inline]
            #[track_caller]
            #[allow(clippy::panic)]
            fn sub(self, other: $t) -> $t {
                if cfg!(debug_assertions) {
                    match self.checked_sub(other) {
                        Some(v) => v,
                        None => panic!("attempt to subtract with overflow"),
                    }
                } else {
                    self.wrapping_sub(other)
                }
            }
        }

        $crate::macros::forward_ref_binop! { impl Sub, sub for $t, $t }
    )*)
}
pub(crate) use sub_impl;

macro_rules! not_impl {
    ($($t:ty)*) => ($(
        impl ::core::ops::Not for $t {
            type Output = $t;

            #[inline]
            fn not(self) -> $t {
                <$t>::new(!self.high(), !self.low())
            }
        }

        $crate::macros::forward_ref_unop! { impl Not, not for $t }
    )*)
}
pub(crate) use not_impl;

macro_rules! add_assign_impl {
    ($($t:ty)+) => ($(
        impl ::core::ops::AddAssign for $t {
            #[inline]
            #[track_caller]
            fn add_assign(&mut self, other: $t) {
                *self = *self + other;
            }
        }

        $crate::macros::forward_ref_op_assign! { impl AddAssign, add_assign for $t, $t }
    )+)
}
pub(crate) use add_assign_impl;

macro_rules! sub_assign_impl {
    ($($t:ty)+) => ($(
        impl ::core::ops::SubAssign for $t {
            #[inline]
            #[track_caller]
            fn sub_assign(&mut self, other: $t) {
                *self = *self - other;
            }
        }

        $crate::macros::forward_ref_op_assign! { impl SubAssign, sub_assign for $t, $t }
    )+)
}
pub(crate) use sub_assign_impl;

/// Declares a concrete composite: the alias, its [`Limb`]
/// impl (so it can be half of the next width) and its
/// operators.
///
/// [`Limb`]: crate::Limb
macro_rules! wide_int {
    (
        $(#[$meta:meta])*
        $name:ident = Wide<$high:ty, $low:ty>, words = $words:literal
    ) => {
        $(#[$meta])*
        pub type $name = $crate::wide::Wide<$high, $low>;

        $crate::util::const_assert!(<$low as $crate::limb::Limb>::BITS == <$high as $crate::limb::Limb>::BITS);
        $crate::util::const_assert!(!<$low as $crate::limb::Limb>::IS_SIGNED);
        $crate::util::const_assert!($name::WORDS == $words);

        impl $crate::limb::Sealed for $name {
            #[inline]
            fn write_words(self, dst: &mut [u64]) {
                self.write_words_impl(dst)
            }

            #[inline]
            fn read_words(src: &[u64]) -> Self {
                Self::read_words_impl(src)
            }

            #[inline]
            fn low_word(self) -> u64 {
                <$name>::low_word(self)
            }

            fn fmt_hex(self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                self.fmt_hex_impl(f)
            }
        }

        impl $crate::limb::Limb for $name {
            const BITS: u32 = <$name>::BITS;
            const WORDS: usize = $words;
            const IS_SIGNED: bool = <$name>::IS_SIGNED;
            const ZERO: Self = <$name>::ZERO;
            const MIN: Self = <$name>::MIN;
            const MAX: Self = <$name>::MAX;

            type Words = [u64; $words];
            type Words32 = [u32; 2 * $words];

            #[inline]
            fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                <$name>::carrying_add(self, rhs, carry)
            }

            #[inline]
            fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                <$name>::borrowing_sub(self, rhs, borrow)
            }

            #[inline]
            fn is_negative(self) -> bool {
                <$name>::is_negative(self)
            }

            #[inline]
            fn sign_fill(negative: bool) -> Self {
                <$name>::new(
                    <$high as $crate::limb::Limb>::sign_fill(negative),
                    <$low as $crate::limb::Limb>::sign_fill(negative),
                )
            }

            #[inline]
            fn from_u64(v: u64) -> Self {
                <$name>::from_u64(v)
            }

            #[inline]
            fn from_i64(v: i64) -> Self {
                <$name>::from_i64(v)
            }

            #[inline]
            fn from_u128(v: u128) -> Self {
                <$name>::from_u128(v)
            }

            #[inline]
            fn from_i128(v: i128) -> Self {
                <$name>::from_i128(v)
            }

        }

        $crate::macros::add_impl! { $name }
        $crate::macros::sub_impl! { $name }
        $crate::macros::not_impl! { $name }
        $crate::macros::add_assign_impl! { $name }
        $crate::macros::sub_assign_impl! { $name }
        $crate::conv::try_from_impl! { $name }
    };
}
pub(crate) use wide_int;
