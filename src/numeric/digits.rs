// ============================================================================
// Digit Primitives
// Nibble extraction and packing shared by every BCD operation
// ============================================================================
//
// All helpers work on u64 words; callers widen their Word first and pass
// the number of digit positions the original width provides.

use arrayvec::ArrayVec;

/// Bits in one BCD digit.
pub const BCD_BITS: u32 = 4;

/// Digit positions in the widest supported word (u64).
pub(crate) const MAX_WORD_DIGITS: usize = 16;

/// Decimal digits needed for any u64 value (18_446_744_073_709_551_615).
pub(crate) const MAX_BINARY_DIGITS: usize = 20;

const NIBBLE_MASK: u64 = 0xF;

/// Digits in little-endian order (index 0 is the least significant).
pub(crate) type DigitVec = ArrayVec<u8, MAX_WORD_DIGITS>;

/// Compute 10^n at compile time
pub(crate) const fn pow10(n: usize) -> u64 {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Mask keeping the low `positions` nibbles.
#[inline]
pub(crate) const fn nibble_mask(positions: usize) -> u64 {
    if positions >= MAX_WORD_DIGITS {
        u64::MAX
    } else {
        (1u64 << (positions as u32 * BCD_BITS)) - 1
    }
}

/// Nibble at `position` (0 = least significant).
#[inline]
pub(crate) const fn nibble(raw: u64, position: usize) -> u8 {
    ((raw >> (position as u32 * BCD_BITS)) & NIBBLE_MASK) as u8
}

#[inline]
pub(crate) const fn is_digit(nibble: u8) -> bool {
    nibble <= 9
}

/// Result of unpacking a word into digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Unpacked {
    /// Little-endian digits; invalid nibbles are replaced by 0
    pub digits: DigitVec,
    /// True if any nibble was outside 0..=9
    pub invalid: bool,
}

/// Split `raw` into `positions` digits, scanning every nibble.
///
/// Invalid nibbles contribute 0 so callers can still produce a best-effort
/// result; the scan never stops early so every bad nibble is seen.
pub(crate) fn unpack(raw: u64, positions: usize) -> Unpacked {
    let mut digits = DigitVec::new();
    let mut invalid = false;
    for position in 0..positions {
        let d = nibble(raw, position);
        if is_digit(d) {
            digits.push(d);
        } else {
            tracing::trace!(position, nibble = d, "invalid BCD nibble");
            invalid = true;
            digits.push(0);
        }
    }
    Unpacked { digits, invalid }
}

/// True if any of the low `positions` nibbles is outside 0..=9.
#[inline]
pub(crate) fn has_invalid(raw: u64, positions: usize) -> bool {
    (0..positions).any(|position| !is_digit(nibble(raw, position)))
}

/// Pack little-endian digits into nibbles. Digits past the slice are zero.
#[inline]
pub(crate) fn pack(digits: &[u8]) -> u64 {
    digits
        .iter()
        .enumerate()
        .fold(0u64, |acc, (position, &d)| {
            acc | ((d as u64 & NIBBLE_MASK) << (position as u32 * BCD_BITS))
        })
}

/// Decimal digits of a binary value, little-endian, without leading zeros
/// (zero yields a single `0`).
pub(crate) fn decimal_digits(mut value: u64) -> ArrayVec<u8, MAX_BINARY_DIGITS> {
    let mut digits = ArrayVec::new();
    loop {
        digits.push((value % 10) as u8);
        value /= 10;
        if value == 0 {
            return digits;
        }
    }
}

/// Count of significant nibbles: the position of the highest non-zero
/// nibble plus one, or 1 when every nibble is zero.
#[inline]
pub(crate) fn significant_positions(raw: u64, positions: usize) -> usize {
    (0..positions)
        .rev()
        .find(|&position| nibble(raw, position) != 0)
        .map_or(1, |position| position + 1)
}

/// ASCII character for a nibble; invalid nibbles render as `A`..=`F`.
#[inline]
pub(crate) const fn nibble_char(nibble: u8) -> u8 {
    if nibble <= 9 {
        b'0' + nibble
    } else {
        b'A' + (nibble - 10)
    }
}
