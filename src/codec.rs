// ============================================================================
// BCD Codec
// Flat conversion and arithmetic API over the build-time word width
// ============================================================================
//
// Each function returns a Checked<T>: the result is always computed, and the
// error (if any) rides alongside it. Discard it with `into_value()`, or
// collect it into a caller-owned slot with `report(&mut slot)`, which never
// clears an error left there by an earlier call.

use crate::config::{Binary, DefaultWord};
use crate::numeric::{Bcd, Checked};

/// Return the BCD encoding of a binary value.
///
/// Reports `Overflow` when `value` has more than `MAX_BCD_DIGITS` decimal
/// digits; the low digits are kept.
///
/// # Example
/// ```
/// use bcd_codec::codec::binary_to_bcd;
///
/// assert_eq!(binary_to_bcd(0xC).into_value().raw(), 0x12);
/// assert_eq!(binary_to_bcd(0xFF).into_value().raw(), 0x255);
/// ```
#[inline]
pub fn binary_to_bcd(value: Binary) -> Checked<Bcd<DefaultWord>> {
    Bcd::from_binary(value)
}

/// Return the binary value of a BCD.
///
/// Reports `InvalidDigit` if any nibble exceeds 9. Never overflows.
#[inline]
pub fn bcd_to_binary(bcd: Bcd<DefaultWord>) -> Checked<Binary> {
    bcd.to_binary()
}

/// Parse the leading decimal digits of `s`, returning the value and the
/// remainder of `s` starting at the first non-digit.
///
/// Reports `Overflow` when the digit run does not fit.
#[inline]
pub fn str_to_bcd(s: &str) -> Checked<(Bcd<DefaultWord>, &str)> {
    Bcd::parse_prefix(s)
}

/// Format `bcd` into `buf` as a NUL-terminated decimal string without
/// leading zeros, returning the character count excluding the terminator.
///
/// Reports `InvalidDigit` for a nibble above 9, and `Overflow` if
/// `buf.len()` is below `BCD_BUF_SIZE`. Never writes past `buf.len()`.
#[inline]
pub fn bcd_to_str(bcd: Bcd<DefaultWord>, buf: &mut [u8]) -> Checked<usize> {
    bcd.write_to(buf)
}

/// Return the BCD sum of `x` and `y`.
///
/// Reports `InvalidDigit` for a nibble above 9 in either operand, otherwise
/// `Overflow` when a carry leaves the top digit.
#[inline]
pub fn bcd_add(x: Bcd<DefaultWord>, y: Bcd<DefaultWord>) -> Checked<Bcd<DefaultWord>> {
    x.checked_add(y)
}

/// Return the BCD product of `x` and `y`.
///
/// Reports `InvalidDigit` for a nibble above 9 in either operand, otherwise
/// `Overflow` when the product needs more than `MAX_BCD_DIGITS` digits.
#[inline]
pub fn bcd_multiply(x: Bcd<DefaultWord>, y: Bcd<DefaultWord>) -> Checked<Bcd<DefaultWord>> {
    x.checked_mul(y)
}
