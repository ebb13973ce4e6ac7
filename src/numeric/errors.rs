// ============================================================================
// BCD Errors
// Error kinds and the value-plus-error carrier returned by BCD operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors reported by BCD conversion and arithmetic.
///
/// When one call detects both kinds, `InvalidDigit` is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BcdError {
    /// A nibble holds 10..=15, which is not a decimal digit
    InvalidDigit,
    /// The result needs more digit positions than the word provides
    Overflow,
}

impl BcdError {
    /// Pick the error to report when both conditions were evaluated.
    #[inline]
    pub(crate) fn select(invalid_digit: bool, overflow: bool) -> Option<Self> {
        if invalid_digit {
            Some(BcdError::InvalidDigit)
        } else if overflow {
            Some(BcdError::Overflow)
        } else {
            None
        }
    }
}

impl fmt::Display for BcdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BcdError::InvalidDigit => write!(f, "invalid BCD digit: nibble greater than 9"),
            BcdError::Overflow => {
                write!(f, "BCD overflow: result exceeds the digit capacity")
            },
        }
    }
}

impl std::error::Error for BcdError {}

/// Result type alias for BCD operations
pub type BcdResult<T> = Result<T, BcdError>;

/// Errors from strict conversions at API boundaries (`FromStr`, `Decimal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseBcdError {
    /// Input contained no digits
    Empty,
    /// A character other than `0`..=`9` at byte `index`
    InvalidCharacter { index: usize, found: char },
    /// Value needs more digits than the word provides
    Overflow,
    /// BCD has no sign
    Negative,
    /// BCD has no fractional part
    Fractional,
}

impl fmt::Display for ParseBcdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBcdError::Empty => write!(f, "cannot parse BCD from empty input"),
            ParseBcdError::InvalidCharacter { index, found } => {
                write!(f, "invalid character {:?} at index {}", found, index)
            },
            ParseBcdError::Overflow => write!(f, "value exceeds the BCD digit capacity"),
            ParseBcdError::Negative => write!(f, "negative values have no BCD encoding"),
            ParseBcdError::Fractional => {
                write!(f, "fractional values have no BCD encoding")
            },
        }
    }
}

impl std::error::Error for ParseBcdError {}

// ============================================================================
// Checked Result
// ============================================================================

/// The outcome of a BCD operation: the computed value plus the error, if any.
///
/// Every operation completes its computation even when it detects an error,
/// so the value is always present. Callers that do not care about errors
/// take [`Checked::into_value`]; callers that accumulate errors across
/// several calls use [`Checked::report`], which only ever writes the slot
/// when this call detected something.
///
/// # Example
/// ```
/// use bcd_codec::numeric::{Bcd32, BcdError};
///
/// let mut error = None;
/// let sum = Bcd32::from_raw(0x12).checked_add(Bcd32::from_raw(0x09)).report(&mut error);
/// assert_eq!(sum.raw(), 0x21);
/// assert_eq!(error, None);
///
/// let bad = Bcd32::from_raw(0x1A).checked_add(Bcd32::ZERO).report(&mut error);
/// assert_eq!(error, Some(BcdError::InvalidDigit));
/// # let _ = bad;
/// ```
#[must_use = "a BCD operation may have detected an error"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checked<T> {
    value: T,
    error: Option<BcdError>,
}

impl<T> Checked<T> {
    /// Wrap a value computed without errors.
    #[inline]
    pub fn ok(value: T) -> Self {
        Self { value, error: None }
    }

    /// Wrap a value together with the error detected while computing it.
    ///
    /// `op` names the operation in the debug event emitted on error.
    #[inline]
    pub(crate) fn new(value: T, error: Option<BcdError>, op: &'static str) -> Self {
        if let Some(error) = error {
            tracing::debug!(op, %error, "BCD operation reported an error");
        }
        Self { value, error }
    }

    /// The error detected by this call, if any.
    #[inline]
    pub fn error(&self) -> Option<BcdError> {
        self.error
    }

    /// True when no error was detected.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Borrow the computed value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Take the computed value and drop the error detail.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split into the value and the error.
    #[inline]
    pub fn into_parts(self) -> (T, Option<BcdError>) {
        (self.value, self.error)
    }

    /// Convert into a `Result`, discarding the best-effort value on error.
    #[inline]
    pub fn into_result(self) -> BcdResult<T> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }

    /// Take the value, writing `slot` only if this call detected an error.
    ///
    /// An error already in `slot` is left alone when this call succeeded.
    #[inline]
    pub fn report(self, slot: &mut Option<BcdError>) -> T {
        if let Some(err) = self.error {
            *slot = Some(err);
        }
        self.value
    }

    /// Transform the value, keeping the error.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Checked<U> {
        Checked {
            value: f(self.value),
            error: self.error,
        }
    }
}
