// ============================================================================
// BCD Codec Library
// Packed binary-coded decimal conversion and arithmetic on native words
// ============================================================================

//! # BCD Codec
//!
//! Conversion and arithmetic for Binary-Coded Decimal values packed into a
//! fixed-width unsigned integer, one decimal digit per 4-bit nibble.
//!
//! ## Features
//!
//! - **Binary <-> BCD conversion** with overflow detection
//! - **String parsing and formatting** without leading zeros, into
//!   caller-owned buffers
//! - **Digit-wise addition and multiplication** with decimal carry
//! - **Invalid-digit detection** on every nibble, never silently corrected
//! - **Build-time word width** (`word-8`, `word-16`, `word-32`, `word-64`
//!   features), with every width also usable explicitly as `Bcd<u8>` …
//!   `Bcd<u64>`
//!
//! Operations never panic and always produce a value. Errors travel next
//! to the value in a [`Checked`](numeric::Checked), which callers may
//! inspect, fold into an error slot, or ignore.
//!
//! ## Example
//!
//! ```rust
//! use bcd_codec::prelude::*;
//!
//! let mut error = None;
//!
//! let x = binary_to_bcd(12).report(&mut error);
//! assert_eq!(x.raw(), 0x12);
//!
//! let sum = bcd_add(x, Bcd::from_raw(0x09)).report(&mut error);
//! assert_eq!(sum.raw(), 0x21);
//!
//! let mut buf = [0u8; BCD_BUF_SIZE];
//! let len = bcd_to_str(sum, &mut buf).report(&mut error);
//! assert_eq!(&buf[..len], b"21");
//!
//! assert_eq!(error, None);
//! ```

pub mod codec;
pub mod config;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        bcd_add, bcd_multiply, bcd_to_binary, bcd_to_str, binary_to_bcd, str_to_bcd,
    };
    pub use crate::config::{
        Binary, DefaultWord, Width, BCD_BITS, BCD_BUF_SIZE, MAX_BCD_DIGITS,
    };
    pub use crate::interfaces::Word;
    pub use crate::numeric::{
        Bcd, Bcd16, Bcd32, Bcd64, Bcd8, BcdError, BcdResult, Checked, ParseBcdError,
    };
}
