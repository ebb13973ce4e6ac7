// ============================================================================
// Numeric Module
// Packed BCD arithmetic over fixed-width native integers
// ============================================================================
//
// This module provides:
// - Bcd<W>: packed BCD value over a u8/u16/u32/u64 word
// - BcdError / ParseBcdError: error kinds
// - Checked<T>: computed value plus the error detected while computing it
//
// Design principles:
// - Every operation completes and returns a best-effort value, even on error
// - Errors are reported, never silently corrected, and never panic
// - Every nibble is scanned; validation never stops at the first bad digit
// - One digit primitive (digits.rs) shared by all operations

mod bcd;
mod digits;
mod errors;

pub use bcd::{Bcd, Bcd16, Bcd32, Bcd64, Bcd8};
pub(crate) use digits::BCD_BITS;
pub use errors::{BcdError, BcdResult, Checked, ParseBcdError};
