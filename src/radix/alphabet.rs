use core::ops::Index;

use super::MAX_RADIX;

const LOWER: &[u8; MAX_RADIX as usize] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8; MAX_RADIX as usize] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maps digit values in `[0, 36)` to ASCII.
///
/// # Examples
///
/// ```rust
/// use wideint::radix::RadixAlphabet;
///
/// assert_eq!(RadixAlphabet::LOWER.encode(11), b'b');
/// assert_eq!(RadixAlphabet::UPPER[35], b'Z');
/// assert_eq!(RadixAlphabet::decode(b'Z'), Some(35));
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RadixAlphabet {
    uppercase: bool,
}

impl RadixAlphabet {
    /// Digits, then `a` through `z`.
    pub const LOWER: Self = Self::new(false);
    /// Digits, then `A` through `Z`.
    pub const UPPER: Self = Self::new(true);

    /// Creates an alphabet.
    pub const fn new(uppercase: bool) -> Self {
        Self { uppercase }
    }

    /// Reports whether letters are uppercase.
    pub const fn is_uppercase(self) -> bool {
        self.uppercase
    }

    /// Returns the ASCII symbols, indexed by digit value.
    pub const fn symbols(self) -> &'static [u8; MAX_RADIX as usize] {
        if self.uppercase {
            UPPER
        } else {
            LOWER
        }
    }

    /// Returns the ASCII symbol for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit >= 36`.
    #[track_caller]
    pub const fn encode(self, digit: u32) -> u8 {
        assert!(digit < MAX_RADIX, "digit out of range for radix 36");
        #[allow(
            clippy::indexing_slicing,
            reason = "`digit` was checked above"
        )]
        let b = self.symbols()[digit as usize];
        b
    }

    /// Returns the digit value for the ASCII symbol `b`, or
    /// `None` if `b` is not a digit in any radix up to 36.
    ///
    /// Letters are accepted in either case, so this inverts
    /// both [`LOWER`][Self::LOWER] and [`UPPER`][Self::UPPER].
    #[allow(clippy::cast_lossless)]
    pub const fn decode(b: u8) -> Option<u32> {
        let d = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'z' => b - b'a' + 10,
            b'A'..=b'Z' => b - b'A' + 10,
            _ => return None,
        };
        Some(d as u32)
    }
}

impl Index<usize> for RadixAlphabet {
    type Output = u8;

    /// # Panics
    ///
    /// Panics if `digit >= 36`.
    #[track_caller]
    fn index(&self, digit: usize) -> &u8 {
        assert!(
            digit < MAX_RADIX as usize,
            "digit out of range for radix 36"
        );
        #[allow(
            clippy::indexing_slicing,
            reason = "`digit` was checked above"
        )]
        let b = &self.symbols()[digit];
        b
    }
}
