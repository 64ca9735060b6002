//! `wideint` is a pure Rust, no-std implementation of
//! fixed-width integers wider than a machine word.
//!
//! Every integer is a [`Wide`] made of a high and a low limb,
//! each half as wide as the whole. The 128-bit types are
//! pairs of 64-bit words, the 256-bit types are pairs of
//! 128-bit types, and so on.
//!
//! # Features
//!
//! - Construction from halves, from 64- or 32-bit word views
//!   (least significant word first) and from native integers.
//! - Overflow-exact negation, addition and subtraction in
//!   `overflowing_*`, `wrapping_*`, `checked_*` and `*_assign`
//!   forms.
//! - Whole-width bit rotation.
//! - [`Strideable`]: offsetting by and measuring distances in
//!   `i64`.
//! - [`radix`]: the digit alphabet and per-radix word chunking
//!   used by radix conversion.
//!
//! # Cargo Features
//!
//! - `alloc`: Include [`alloc`] support. This is currently
//! unused, but may be used in the future.
//!
//! - `rand`: Enable [`rand`] support.
//!
//! - `std`: Include [`std`] support. Implies the `alloc`
//! feature.
//!
//! [`alloc`]: https://doc.rust-lang.org/alloc/
//! [`rand`]: https://crates.io/crates/rand
//! [`std`]: https://doc.rust-lang.org/std/

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::transmute_ptr_to_ptr)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]
#![forbid(unsafe_code)]

mod arith;
mod conv;
mod limb;
mod macros;
pub mod radix;
mod rotate;
mod stride;
mod util;
#[cfg(test)]
mod vectors;
mod wide;

pub use conv::TryFromWideError;
pub use limb::Limb;
pub use stride::{stride_through, stride_to, StrideThrough, StrideTo, Strideable};
pub use wide::Wide;

use conv::from_impl;
use macros::wide_int;

wide_int! {
    /// An unsigned 128-bit integer.
    U128 = Wide<u64, u64>, words = 2
}
wide_int! {
    /// A signed 128-bit integer.
    I128 = Wide<i64, u64>, words = 2
}
wide_int! {
    /// An unsigned 256-bit integer.
    U256 = Wide<U128, U128>, words = 4
}
wide_int! {
    /// A signed 256-bit integer.
    I256 = Wide<I128, U128>, words = 4
}
wide_int! {
    /// An unsigned 512-bit integer.
    U512 = Wide<U256, U256>, words = 8
}
wide_int! {
    /// A signed 512-bit integer.
    I512 = Wide<I256, U256>, words = 8
}
wide_int! {
    /// An unsigned 1024-bit integer.
    U1024 = Wide<U512, U512>, words = 16
}
wide_int! {
    /// A signed 1024-bit integer.
    I1024 = Wide<I512, U512>, words = 16
}

from_impl!(U128 => u8: from_u64, u16: from_u64, u32: from_u64, u64: from_u64, u128: from_u128);
from_impl!(U256 => u8: from_u64, u16: from_u64, u32: from_u64, u64: from_u64, u128: from_u128);
from_impl!(U512 => u8: from_u64, u16: from_u64, u32: from_u64, u64: from_u64, u128: from_u128);
from_impl!(U1024 => u8: from_u64, u16: from_u64, u32: from_u64, u64: from_u64, u128: from_u128);
from_impl!(I128 => i8: from_i64, i16: from_i64, i32: from_i64, i64: from_i64, i128: from_i128);
from_impl!(I256 => i8: from_i64, i16: from_i64, i32: from_i64, i64: from_i64, i128: from_i128);
from_impl!(I512 => i8: from_i64, i16: from_i64, i32: from_i64, i64: from_i64, i128: from_i128);
from_impl!(I1024 => i8: from_i64, i16: from_i64, i32: from_i64, i64: from_i64, i128: from_i128);
from_impl!(I128 => u8: from_u64, u16: from_u64, u32: from_u64, u64: from_u64);
from_impl!(I256 => u8: from_u64, u16: from_u64, u32: from_u64, u64: from_u64, u128: from_u128);
from_impl!(I512 => u8: from_u64, u16: from_u64, u32: from_u64, u64: from_u64, u128: from_u128);
from_impl!(I1024 => u8: from_u64, u16: from_u64, u32: from_u64, u64: from_u64, u128: from_u128);

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{Limb, Strideable, I1024, I128, I256, I512, U1024, U128, U256, U512};
}
