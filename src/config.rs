// ============================================================================
// Word Width Configuration
// Build-time selection of the native integer behind the default Bcd type
// ============================================================================
//
// Cargo features `word-8`, `word-16`, `word-32`, `word-64` pick the width.
// With none enabled the width is 32 bits. Features are additive, so when
// several are enabled the widest one wins.

use crate::interfaces::Word;
use crate::numeric::Bcd;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "word-64")]
/// Word selected at build time.
pub type DefaultWord = u64;

#[cfg(all(
    not(feature = "word-64"),
    any(feature = "word-32", not(any(feature = "word-8", feature = "word-16")))
))]
/// Word selected at build time.
pub type DefaultWord = u32;

#[cfg(all(feature = "word-16", not(any(feature = "word-32", feature = "word-64"))))]
/// Word selected at build time.
pub type DefaultWord = u16;

#[cfg(all(
    feature = "word-8",
    not(any(feature = "word-16", feature = "word-32", feature = "word-64"))
))]
/// Word selected at build time.
pub type DefaultWord = u8;

/// Plain binary counterpart of a default-width BCD; same type as the word.
pub type Binary = DefaultWord;

/// Bits in one BCD digit.
pub const BCD_BITS: usize = crate::numeric::BCD_BITS as usize;

/// Digit capacity of the default-width BCD.
pub const MAX_BCD_DIGITS: usize = Bcd::<DefaultWord>::MAX_DIGITS;

/// Buffer size (including the NUL terminator) needed to format any
/// default-width BCD.
pub const BCD_BUF_SIZE: usize = MAX_BCD_DIGITS + 1;

// ============================================================================
// Width Descriptor
// ============================================================================

/// Supported word widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Width {
    /// 8-bit word, 2 digits
    W8,
    /// 16-bit word, 4 digits
    W16,
    /// 32-bit word, 8 digits
    W32,
    /// 64-bit word, 16 digits
    W64,
}

impl Width {
    /// Width selected at build time.
    #[inline]
    pub fn current() -> Self {
        Self::of::<DefaultWord>()
    }

    /// Width of a word type.
    #[inline]
    pub fn of<W: Word>() -> Self {
        match W::BITS {
            8 => Width::W8,
            16 => Width::W16,
            32 => Width::W32,
            _ => Width::W64,
        }
    }

    /// Bits in the word.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Decimal digits the word can hold.
    #[inline]
    pub const fn max_digits(self) -> usize {
        self.bits() as usize / BCD_BITS
    }

    /// Formatting buffer size including the NUL terminator.
    #[inline]
    pub const fn buf_size(self) -> usize {
        self.max_digits() + 1
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
