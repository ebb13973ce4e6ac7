// ============================================================================
// Packed BCD
// Fixed-width binary-coded decimal with digit-wise carry arithmetic
// ============================================================================

use super::digits::{
    decimal_digits, has_invalid, nibble, nibble_char, nibble_mask, pack, pow10,
    significant_positions, unpack, DigitVec, BCD_BITS, MAX_WORD_DIGITS,
};
use super::errors::{BcdError, BcdResult, Checked, ParseBcdError};
use crate::config::DefaultWord;
use crate::interfaces::Word;
use arrayvec::{ArrayString, ArrayVec};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Packed binary-coded decimal value.
///
/// Each 4-bit nibble of the underlying word holds one decimal digit, the
/// least significant digit in the lowest nibble. A `Bcd<u32>` holds up to
/// eight digits: `0x255` is the decimal number 255.
///
/// Any bit pattern can be wrapped with [`Bcd::from_raw`]; nibbles in
/// `10..=15` are invalid digits and are reported by every operation that
/// reads them rather than being corrected.
///
/// # Type Parameter
/// - `W`: the native word (`u8`, `u16`, `u32`, `u64`). Defaults to the
///   width selected at build time, see [`crate::config`].
///
/// # Example
/// ```
/// use bcd_codec::numeric::Bcd32;
///
/// let x = Bcd32::from_binary(12).into_value();
/// assert_eq!(x.raw(), 0x12);
///
/// let product = x.checked_mul(Bcd32::from_raw(0x03));
/// assert!(product.is_ok());
/// assert_eq!(product.into_value().to_string(), "36");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Bcd<W: Word = DefaultWord>(W);

impl<W: Word> Bcd<W> {
    /// Digit positions in the word.
    pub const MAX_DIGITS: usize = W::BITS as usize / BCD_BITS as usize;

    /// Buffer size, including the NUL terminator, that [`Bcd::write_to`]
    /// requires.
    pub const BUF_SIZE: usize = Self::MAX_DIGITS + 1;

    /// Zero value
    pub const ZERO: Self = Self(W::ZERO);

    /// Smallest binary value without an encoding (10^MAX_DIGITS).
    const LIMIT: u64 = pow10(Self::MAX_DIGITS);

    const MASK: u64 = nibble_mask(Self::MAX_DIGITS);

    /// Smallest binary value that has no encoding at this width.
    #[inline]
    pub fn limit() -> u64 {
        Self::LIMIT
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a raw packed word without validating its nibbles.
    #[inline]
    pub fn from_raw(raw: W) -> Self {
        Self(raw)
    }

    /// Largest representable value (every digit 9).
    #[inline]
    pub fn max_value() -> Self {
        Self(W::truncate_from(0x9999_9999_9999_9999 & Self::MASK))
    }

    /// Encode a plain binary integer.
    ///
    /// Digits are produced by repeated division by 10. If `value` has more
    /// decimal digits than `MAX_DIGITS`, reports `Overflow` and keeps the
    /// low `MAX_DIGITS` digits (`value mod 10^MAX_DIGITS`).
    pub fn from_binary(value: W) -> Checked<Self> {
        let decimal = decimal_digits(value.to_u64());
        let overflow = decimal.len() > Self::MAX_DIGITS;
        let kept = &decimal[..decimal.len().min(Self::MAX_DIGITS)];
        Checked::new(
            Self(W::truncate_from(pack(kept))),
            BcdError::select(false, overflow),
            "binary_to_bcd",
        )
    }

    /// Parse the run of leading ASCII digits of `s`.
    ///
    /// Returns the value together with the unparsed remainder of `s`, which
    /// starts at the first non-digit character. Each digit is shifted in as
    /// a new low nibble. An input without leading digits yields zero and
    /// the whole of `s` as remainder.
    ///
    /// If the digit run does not fit, reports `Overflow`, consumes the
    /// whole run anyway and keeps its last `MAX_DIGITS` digits.
    pub fn parse_prefix(s: &str) -> Checked<(Self, &str)> {
        let bytes = s.as_bytes();
        let end = bytes
            .iter()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(bytes.len());

        let top = Self::MAX_DIGITS - 1;
        let mut raw = 0u64;
        let mut overflow = false;
        for &b in &bytes[..end] {
            // A non-zero top digit would be shifted out
            if nibble(raw, top) != 0 {
                overflow = true;
            }
            raw = ((raw << BCD_BITS) | u64::from(b - b'0')) & Self::MASK;
        }

        Checked::new(
            (Self(W::truncate_from(raw)), &s[end..]),
            BcdError::select(false, overflow),
            "str_to_bcd",
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw packed word.
    #[inline]
    pub fn raw(self) -> W {
        self.0
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == W::ZERO
    }

    /// True if every nibble is a decimal digit.
    #[inline]
    pub fn is_valid(self) -> bool {
        !has_invalid(self.0.to_u64(), Self::MAX_DIGITS)
    }

    /// Return `self` if every nibble is a decimal digit.
    ///
    /// # Errors
    /// Returns `InvalidDigit` otherwise.
    #[inline]
    pub fn validate(self) -> BcdResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(BcdError::InvalidDigit)
        }
    }

    /// The nibble at `position` (0 = least significant), unvalidated.
    #[inline]
    pub fn digit(self, position: usize) -> Option<u8> {
        (position < Self::MAX_DIGITS).then(|| nibble(self.0.to_u64(), position))
    }

    /// Number of digits without leading zeros; zero has one digit.
    #[inline]
    pub fn significant_digits(self) -> usize {
        significant_positions(self.0.to_u64(), Self::MAX_DIGITS)
    }

    /// Significant nibbles, most significant first.
    pub fn digits(self) -> ArrayVec<u8, MAX_WORD_DIGITS> {
        let raw = self.0.to_u64();
        (0..self.significant_digits())
            .rev()
            .map(|position| nibble(raw, position))
            .collect()
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Decode into a plain binary integer.
    ///
    /// Every nibble is checked; invalid ones report `InvalidDigit` and
    /// contribute 0. Cannot overflow: `MAX_DIGITS` nines always fit in the
    /// word as a binary number.
    pub fn to_binary(self) -> Checked<W> {
        let unpacked = unpack(self.0.to_u64(), Self::MAX_DIGITS);
        let binary = unpacked
            .digits
            .iter()
            .rev()
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d));
        Checked::new(
            W::truncate_from(binary),
            BcdError::select(unpacked.invalid, false),
            "bcd_to_binary",
        )
    }

    /// Write the decimal string into `buf`, NUL-terminated, without
    /// leading zeros (zero is written as `"0"`).
    ///
    /// Returns the count of characters written, excluding the terminator.
    /// Never writes past `buf.len()`.
    ///
    /// Reports `Overflow` when `buf` is shorter than [`Bcd::BUF_SIZE`], even
    /// if this particular value would fit; as many leading digits as fit are
    /// still written, followed by the terminator. Reports `InvalidDigit`
    /// when a nibble is not a decimal digit; such nibbles are written as
    /// `A`..=`F`.
    pub fn write_to(self, buf: &mut [u8]) -> Checked<usize> {
        let raw = self.0.to_u64();
        let invalid = has_invalid(raw, Self::MAX_DIGITS);
        let too_small = buf.len() < Self::BUF_SIZE;

        let written = match buf.len().checked_sub(1) {
            None => 0,
            Some(room) => {
                let significant = significant_positions(raw, Self::MAX_DIGITS);
                let count = significant.min(room);
                for (slot, position) in buf.iter_mut().zip((0..significant).rev()).take(count) {
                    *slot = nibble_char(nibble(raw, position));
                }
                buf[count] = 0;
                count
            },
        };

        Checked::new(
            written,
            BcdError::select(invalid, too_small),
            "bcd_to_str",
        )
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `InvalidDigit` if any nibble is not a decimal digit.
    pub fn to_decimal(self) -> BcdResult<Decimal> {
        self.to_binary()
            .into_result()
            .map(|binary| Decimal::from(binary.to_u64()))
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Digit-wise addition with decimal carry.
    ///
    /// Reports `InvalidDigit` if any nibble of either operand is invalid
    /// (those digits count as 0) and `Overflow` if a carry leaves the most
    /// significant position; the sum is then `(x + y) mod 10^MAX_DIGITS`.
    pub fn checked_add(self, rhs: Self) -> Checked<Self> {
        let x = unpack(self.0.to_u64(), Self::MAX_DIGITS);
        let y = unpack(rhs.0.to_u64(), Self::MAX_DIGITS);

        let mut sum = DigitVec::new();
        let mut carry = 0u8;
        for (&a, &b) in x.digits.iter().zip(&y.digits) {
            let total = a + b + carry;
            sum.push(total % 10);
            carry = total / 10;
        }

        Checked::new(
            Self(W::truncate_from(pack(&sum))),
            BcdError::select(x.invalid || y.invalid, carry != 0),
            "bcd_add",
        )
    }

    /// Long multiplication over decimal digits.
    ///
    /// The full double-width product is formed before truncation, so
    /// `Overflow` is reported exactly when the product needs more than
    /// `MAX_DIGITS` digits; the value is then the low `MAX_DIGITS` digits.
    /// Invalid digits are handled as in [`Bcd::checked_add`].
    pub fn checked_mul(self, rhs: Self) -> Checked<Self> {
        let x = unpack(self.0.to_u64(), Self::MAX_DIGITS);
        let y = unpack(rhs.0.to_u64(), Self::MAX_DIGITS);

        // Column sums stay below 16 * 81 + carry, well inside u32
        let mut columns = [0u32; 2 * MAX_WORD_DIGITS];
        for (i, &a) in x.digits.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in y.digits.iter().enumerate() {
                columns[i + j] += u32::from(a) * u32::from(b);
            }
        }

        let mut carry = 0u32;
        for column in columns.iter_mut() {
            let total = *column + carry;
            *column = total % 10;
            carry = total / 10;
        }

        let overflow = columns[Self::MAX_DIGITS..].iter().any(|&d| d != 0);
        let low: DigitVec = columns[..Self::MAX_DIGITS]
            .iter()
            .map(|&d| d as u8)
            .collect();

        Checked::new(
            Self(W::truncate_from(pack(&low))),
            BcdError::select(x.invalid || y.invalid, overflow),
            "bcd_multiply",
        )
    }

    /// Significant digits as text (invalid nibbles as `A`..=`F`).
    fn render(self) -> ArrayString<MAX_WORD_DIGITS> {
        let mut text = ArrayString::new();
        for d in self.digits() {
            text.push(char::from(nibble_char(d)));
        }
        text
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<W: Word> fmt::Debug for Bcd<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bcd<{}>({:#x})", W::NAME, self.0)
    }
}

impl<W: Word> fmt::Display for Bcd<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.render())
    }
}

impl<W: Word> fmt::LowerHex for Bcd<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<W: Word> fmt::UpperHex for Bcd<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

// ============================================================================
// Strict Parsing and Decimal Interop
// ============================================================================

impl<W: Word> FromStr for Bcd<W> {
    type Err = ParseBcdError;

    /// Parse a string made only of decimal digits.
    ///
    /// Unlike [`Bcd::parse_prefix`], trailing characters and empty input
    /// are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBcdError::Empty);
        }
        if let Some((index, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBcdError::InvalidCharacter { index, found });
        }

        Self::parse_prefix(s)
            .into_result()
            .map(|(bcd, _)| bcd)
            .map_err(|_| ParseBcdError::Overflow)
    }
}

impl<W: Word> TryFrom<Decimal> for Bcd<W> {
    type Error = ParseBcdError;

    /// Convert a non-negative integral `Decimal`.
    fn try_from(d: Decimal) -> Result<Self, Self::Error> {
        if d.is_zero() {
            return Ok(Self::ZERO);
        }
        if d.is_sign_negative() {
            return Err(ParseBcdError::Negative);
        }
        if !d.fract().is_zero() {
            return Err(ParseBcdError::Fractional);
        }

        let binary = d.to_u64().ok_or(ParseBcdError::Overflow)?;
        if binary >= Self::LIMIT {
            return Err(ParseBcdError::Overflow);
        }
        Ok(Self::from_binary(W::truncate_from(binary)).into_value())
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
impl<W: Word> serde::Serialize for Bcd<W> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, W: Word> serde::Deserialize<'de> for Bcd<W> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Type Aliases for Each Width
// ============================================================================

/// Two-digit BCD
pub type Bcd8 = Bcd<u8>;

/// Four-digit BCD
pub type Bcd16 = Bcd<u16>;

/// Eight-digit BCD
pub type Bcd32 = Bcd<u32>;

/// Sixteen-digit BCD
pub type Bcd64 = Bcd<u64>;

// ============================================================================
// Tests
// ============================================================================
