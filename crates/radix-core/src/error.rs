//! # Error Types
//!
//! The conversion error taxonomy for radix-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  validation / codecs            engine                 presentation     │
//! │  ───────────────────            ──────                 ────────────     │
//! │                                                                         │
//! │  Option::None ────────────► ConversionError ────────► user message     │
//! │  (failed check/parse)       (typed, with the          (mapped from     │
//! │                              triggering notation)      kind())         │
//! │                                                                         │
//! │  Roman value out of range on encode is NOT an error:                   │
//! │  it renders as the range sentinel inside a successful result.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants carrying the triggering notation, never String
//! 3. Expected validation failures are returned values; panics are reserved
//!    for internal faults (none are anticipated in this crate)

use serde::Serialize;
use thiserror::Error;

use crate::types::Notation;

// =============================================================================
// Conversion Error
// =============================================================================

/// A conversion request that could not produce a canonical value.
///
/// These are ordinary typed failures. The presentation layer maps each
/// variant to display prose via [`ConversionError::kind`] and
/// [`ConversionError::notation`]; the `Display` impl is debugging text,
/// not UI copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Input was empty or whitespace-only, for any notation.
    #[error("input is empty")]
    EmptyInput,

    /// A character fell outside the notation's digit grammar, or a decimal
    /// string contained no parsable leading numeral.
    #[error("not a valid {notation} number")]
    InvalidDigit { notation: Notation },

    /// The string failed the Roman numeral structural grammar.
    #[error("not a valid Roman numeral")]
    InvalidRoman,
}

impl ConversionError {
    /// The machine-readable failure category.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::EmptyInput => ErrorKind::EmptyInput,
            ConversionError::InvalidDigit { .. } => ErrorKind::InvalidDigit,
            ConversionError::InvalidRoman => ErrorKind::InvalidRoman,
        }
    }

    /// Which input notation triggered the failure, when one did.
    ///
    /// `None` for [`ConversionError::EmptyInput`] (no notation is at fault)
    /// and for [`ConversionError::InvalidRoman`] (the variant itself names
    /// the notation).
    #[inline]
    pub const fn notation(&self) -> Option<Notation> {
        match self {
            ConversionError::InvalidDigit { notation } => Some(*notation),
            ConversionError::EmptyInput | ConversionError::InvalidRoman => None,
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Failure categories for machine consumers.
///
/// Serialized SCREAMING_SNAKE_CASE, which is what a front end switches on:
/// ```json
/// { "kind": "INVALID_DIGIT", "notation": "octal" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Blank or whitespace-only input.
    EmptyInput,

    /// Character outside the notation's grammar, or unparsable decimal.
    InvalidDigit,

    /// Failed Roman structural grammar match.
    InvalidRoman,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConversionError.
pub type RadixResult<T> = Result<T, ConversionError>;

// =============================================================================
// Unit Tests
// =============================================================================
