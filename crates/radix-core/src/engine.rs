//! # Conversion Engine
//!
//! The single entry point tying validation, positional parsing, and the
//! Roman codec together.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  convert(raw, source)                                                   │
//! │                                                                         │
//! │  trim ──► empty? ──────────────────────────────► Err(EmptyInput)       │
//! │              │                                                          │
//! │              ▼                                                          │
//! │  Roman?  ──► roman::decode ── None ────────────► Err(InvalidRoman)     │
//! │  else    ──► validate_digits + parse ── None ──► Err(InvalidDigit)     │
//! │              │                                                          │
//! │              ▼  canonical value (i64)                                   │
//! │  render decimal / binary / octal / hexadecimal  (always)               │
//! │  render roman                                   (sentinel if outside   │
//! │              │                                   1..=3999)              │
//! │              ▼                                                          │
//! │  Ok(ConversionResult)  -  all five fields populated, never partial     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is independent: no state survives between invocations, so
//! concurrent callers need no synchronization.

use crate::error::{ConversionError, RadixResult};
use crate::radix::{format_radix, parse_decimal, parse_radix};
use crate::roman;
use crate::types::{ConversionResult, Notation};
use crate::validation::validate_digits;

/// Converts `raw`, read in `source` notation, into every supported notation.
///
/// ## Example
/// ```rust
/// use radix_core::{convert, Notation};
///
/// let result = convert("XIV", Notation::Roman).unwrap();
/// assert_eq!(result.decimal, "14");
/// assert_eq!(result.hexadecimal, "E");
///
/// let err = convert("9", Notation::Octal).unwrap_err();
/// assert_eq!(err.notation(), Some(Notation::Octal));
/// ```
pub fn convert(raw: &str, source: Notation) -> RadixResult<ConversionResult> {
    let input = raw.trim();

    if input.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    let value = match source {
        Notation::Roman => roman::decode(input).ok_or(ConversionError::InvalidRoman)?,
        _ => {
            validate_digits(input, source)?;
            parse_positional(input, source)
                .ok_or(ConversionError::InvalidDigit { notation: source })?
        }
    };

    Ok(ConversionResult {
        decimal: format_radix(value, 10),
        binary: format_radix(value, 2),
        octal: format_radix(value, 8),
        hexadecimal: format_radix(value, 16),
        roman: roman::encode(value),
    })
}

/// Parses a validated string in a positional notation.
fn parse_positional(input: &str, notation: Notation) -> Option<i64> {
    match notation.base()? {
        10 => parse_decimal(input),
        base => parse_radix(input, base),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
