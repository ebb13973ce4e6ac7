// ============================================================================
// Word Trait
// Abstract interface over the native unsigned integer holding a BCD value
// ============================================================================

use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Native unsigned integer used to carry both packed BCD and plain binary
/// values.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The trait is sealed: the
/// digit arithmetic widens every word to `u64` internally, so wider
/// integers cannot be supported without changing that representation.
///
/// # Thread Safety
/// All implementations are `Send + Sync` plain values, so BCD operations
/// can run concurrently without synchronization.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::LowerHex
    + fmt::UpperHex
    + Send
    + Sync
    + 'static
{
    /// Width of the word in bits.
    const BITS: u32;

    /// The all-zero word.
    const ZERO: Self;

    /// Rust name of the primitive, used in `Debug` output and logs.
    const NAME: &'static str;

    /// Lossless widening to `u64`.
    fn to_u64(self) -> u64;

    /// Narrowing from `u64`, discarding bits above `BITS`.
    fn truncate_from(value: u64) -> Self;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn truncate_from(value: u64) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64);
