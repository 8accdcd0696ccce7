//! # Validation Module
//!
//! Character-grammar checks, run before any numeric interpretation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation (CLI flags)                                     │
//! │  ├── Base selector parsing (Notation::from_str)                        │
//! │  └── Immediate usage errors                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - digit grammar per notation                     │
//! │  ├── Binary      [0-1]+                                                │
//! │  ├── Octal       [0-7]+                                                │
//! │  ├── Hexadecimal [0-9A-Fa-f]+                                          │
//! │  ├── Decimal     no check - numeric parse decides (see below)          │
//! │  └── Roman       delegated to the roman codec's grammar                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Numeric parsing (radix / roman modules)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Decimal is the deliberate odd one out: it skips the character check and
//! lets the permissive numeric parse accept a sign and fractional part. The
//! other three bases reject anything outside their digit class outright.

use crate::error::{ConversionError, RadixResult};
use crate::types::Notation;

/// Checks `raw` against the digit grammar of `notation`.
///
/// ## Rules
/// - Empty or whitespace-only input fails with `EmptyInput` for every
///   notation.
/// - Binary/Octal/Hexadecimal: the whole string must sit inside the base's
///   digit class, case-insensitively. No sign, no fractional point, no
///   grouping separators.
/// - Decimal: passes through; the numeric parse is the authority.
/// - Roman: passes through; the structural grammar lives in
///   [`crate::roman::decode`] and is not pre-filtered here.
///
/// ## Example
/// ```rust
/// use radix_core::validation::validate_digits;
/// use radix_core::Notation;
///
/// assert!(validate_digits("1010", Notation::Binary).is_ok());
/// assert!(validate_digits("ff", Notation::Hexadecimal).is_ok());
/// assert!(validate_digits("9", Notation::Octal).is_err());
/// ```
pub fn validate_digits(raw: &str, notation: Notation) -> RadixResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ConversionError::EmptyInput);
    }

    match notation {
        // The numeric parse decides; signs and fractions are tolerated there.
        Notation::Decimal => Ok(()),

        // Structural grammar is the codec's job.
        Notation::Roman => Ok(()),

        Notation::Binary | Notation::Octal | Notation::Hexadecimal => {
            if raw.chars().all(|c| is_valid_digit(c, notation)) {
                Ok(())
            } else {
                Err(ConversionError::InvalidDigit { notation })
            }
        }
    }
}

/// Whether `c` belongs to the digit class of a positional notation.
fn is_valid_digit(c: char, notation: Notation) -> bool {
    match notation {
        Notation::Binary => matches!(c, '0'..='1'),
        Notation::Octal => matches!(c, '0'..='7'),
        Notation::Hexadecimal => c.is_ascii_hexdigit(),
        Notation::Decimal => c.is_ascii_digit(),
        Notation::Roman => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_empty_input_any_notation() {
        for notation in Notation::ALL {
            let err = validate_digits("", notation).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyInput);
            let err = validate_digits("   ", notation).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::EmptyInput);
        }
    }

    #[test]
    fn test_binary_digits() {
        assert!(validate_digits("0", Notation::Binary).is_ok());
        assert!(validate_digits("101101", Notation::Binary).is_ok());

        assert!(validate_digits("102", Notation::Binary).is_err());
        assert!(validate_digits("-101", Notation::Binary).is_err());
        assert!(validate_digits("1.0", Notation::Binary).is_err());
    }

    #[test]
    fn test_octal_digits() {
        assert!(validate_digits("755", Notation::Octal).is_ok());
        assert!(validate_digits("01234567", Notation::Octal).is_ok());

        assert!(validate_digits("9", Notation::Octal).is_err());
        assert!(validate_digits("778", Notation::Octal).is_err());
    }

    #[test]
    fn test_hexadecimal_digits_case_insensitive() {
        assert!(validate_digits("FF", Notation::Hexadecimal).is_ok());
        assert!(validate_digits("ff", Notation::Hexadecimal).is_ok());
        assert!(validate_digits("DeadBeef", Notation::Hexadecimal).is_ok());

        assert!(validate_digits("G", Notation::Hexadecimal).is_err());
        assert!(validate_digits("0x1F", Notation::Hexadecimal).is_err());
    }

    #[test]
    fn test_no_sign_or_separator_in_strict_bases() {
        assert!(validate_digits("+101", Notation::Binary).is_err());
        assert!(validate_digits("1_000", Notation::Octal).is_err());
        assert!(validate_digits("-FF", Notation::Hexadecimal).is_err());
    }

    #[test]
    fn test_decimal_passes_through() {
        // Permissive on purpose; the numeric parse is the authority.
        assert!(validate_digits("42", Notation::Decimal).is_ok());
        assert!(validate_digits("-3.7", Notation::Decimal).is_ok());
        assert!(validate_digits("totally not a number", Notation::Decimal).is_ok());
    }

    #[test]
    fn test_roman_passes_through() {
        // The codec's grammar is the authority, including for junk.
        assert!(validate_digits("XIV", Notation::Roman).is_ok());
        assert!(validate_digits("XYZ", Notation::Roman).is_ok());
    }
}
