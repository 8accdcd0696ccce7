//! # Domain Types
//!
//! Core domain types used throughout Radix.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────────────────────┐        │
//! │  │    Notation     │        │       ConversionResult          │        │
//! │  │  ─────────────  │        │  ─────────────────────────────  │        │
//! │  │  Binary    (2)  │        │  decimal:     "255"             │        │
//! │  │  Octal     (8)  │  ───►  │  binary:      "11111111"        │        │
//! │  │  Decimal  (10)  │        │  octal:       "377"             │        │
//! │  │  Hexadecimal(16)│        │  hexadecimal: "FF"              │        │
//! │  │  Roman          │        │  roman:       "CCLV"            │        │
//! │  └─────────────────┘        └─────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Canonical Value Pattern
//! Every conversion flows through a single `i64`: the source notation is
//! parsed into it, and every field of [`ConversionResult`] is rendered from
//! it. The canonical value itself never leaves the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Notation
// =============================================================================

/// One of the five supported textual numeral systems.
///
/// The four positional variants carry their numeric base; Roman is the odd
/// one out with its own grammar and bounded domain (see [`crate::roman`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Base 2, digits `0-1`.
    Binary,
    /// Base 8, digits `0-7`.
    Octal,
    /// Base 10. Parsing is deliberately permissive (sign, fraction).
    Decimal,
    /// Base 16, digits `0-9A-F`, case-insensitive on input.
    Hexadecimal,
    /// Roman numerals `I V X L C D M` with subtractive pairs.
    Roman,
}

impl Notation {
    /// Every notation, in display order.
    ///
    /// Presentation layers iterate this to render a full result.
    pub const ALL: [Notation; 5] = [
        Notation::Decimal,
        Notation::Binary,
        Notation::Octal,
        Notation::Hexadecimal,
        Notation::Roman,
    ];

    /// The numeric base of a positional notation, `None` for Roman.
    ///
    /// ## Example
    /// ```rust
    /// use radix_core::Notation;
    ///
    /// assert_eq!(Notation::Hexadecimal.base(), Some(16));
    /// assert_eq!(Notation::Roman.base(), None);
    /// ```
    #[inline]
    pub const fn base(&self) -> Option<u32> {
        match self {
            Notation::Binary => Some(2),
            Notation::Octal => Some(8),
            Notation::Decimal => Some(10),
            Notation::Hexadecimal => Some(16),
            Notation::Roman => None,
        }
    }

    /// Human-readable name, suitable for error prose ("Invalid Binary number").
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Notation::Binary => "Binary",
            Notation::Octal => "Octal",
            Notation::Decimal => "Decimal",
            Notation::Hexadecimal => "Hexadecimal",
            Notation::Roman => "Roman",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The base selector could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown base '{0}', expected 2, 8, 10, 16, or roman")]
pub struct UnknownNotation(String);

/// Parses the selector tokens a front end hands us.
///
/// Accepts the numeric bases as digits (`"2"`, `"8"`, `"10"`, `"16"`), the
/// word `"roman"`, and the spelled-out base names, all case-insensitively.
///
/// ## Example
/// ```rust
/// use radix_core::Notation;
///
/// assert_eq!("16".parse::<Notation>().unwrap(), Notation::Hexadecimal);
/// assert_eq!("roman".parse::<Notation>().unwrap(), Notation::Roman);
/// assert!("12".parse::<Notation>().is_err());
/// ```
impl FromStr for Notation {
    type Err = UnknownNotation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2" | "bin" | "binary" => Ok(Notation::Binary),
            "8" | "oct" | "octal" => Ok(Notation::Octal),
            "10" | "dec" | "decimal" => Ok(Notation::Decimal),
            "16" | "hex" | "hexadecimal" => Ok(Notation::Hexadecimal),
            "roman" => Ok(Notation::Roman),
            other => Err(UnknownNotation(other.to_string())),
        }
    }
}

// =============================================================================
// Conversion Result
// =============================================================================

/// A fully rendered conversion: the canonical value in every notation.
///
/// ## Invariants
/// - All five fields are always populated; the engine never returns a
///   partially filled result.
/// - The four positional fields hold real digit strings regardless of the
///   value's magnitude.
/// - `roman` holds either a numeral or [`crate::ROMAN_RANGE_SENTINEL`] when
///   the value falls outside 1..=3999.
///
/// ## Serialization
/// Serializes with lowercase field names, which is what machine consumers
/// (e.g. `radix --json`) receive:
/// ```json
/// {
///   "decimal": "255",
///   "binary": "11111111",
///   "octal": "377",
///   "hexadecimal": "FF",
///   "roman": "CCLV"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Base-10 rendering.
    pub decimal: String,

    /// Base-2 rendering.
    pub binary: String,

    /// Base-8 rendering.
    pub octal: String,

    /// Base-16 rendering, uppercase `A-F`.
    pub hexadecimal: String,

    /// Roman numeral, or the out-of-range sentinel.
    pub roman: String,
}

impl ConversionResult {
    /// Returns the rendering for a given notation.
    ///
    /// ## Example
    /// ```rust
    /// use radix_core::{convert, Notation};
    ///
    /// let result = convert("FF", Notation::Hexadecimal).unwrap();
    /// assert_eq!(result.get(Notation::Decimal), "255");
    /// ```
    pub fn get(&self, notation: Notation) -> &str {
        match notation {
            Notation::Binary => &self.binary,
            Notation::Octal => &self.octal,
            Notation::Decimal => &self.decimal,
            Notation::Hexadecimal => &self.hexadecimal,
            Notation::Roman => &self.roman,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base() {
        assert_eq!(Notation::Binary.base(), Some(2));
        assert_eq!(Notation::Octal.base(), Some(8));
        assert_eq!(Notation::Decimal.base(), Some(10));
        assert_eq!(Notation::Hexadecimal.base(), Some(16));
        assert_eq!(Notation::Roman.base(), None);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Notation::Binary.to_string(), "Binary");
        assert_eq!(Notation::Roman.to_string(), "Roman");
    }

    #[test]
    fn test_from_str_selector_tokens() {
        assert_eq!("2".parse::<Notation>().unwrap(), Notation::Binary);
        assert_eq!("8".parse::<Notation>().unwrap(), Notation::Octal);
        assert_eq!("10".parse::<Notation>().unwrap(), Notation::Decimal);
        assert_eq!("16".parse::<Notation>().unwrap(), Notation::Hexadecimal);
        assert_eq!("roman".parse::<Notation>().unwrap(), Notation::Roman);
    }

    #[test]
    fn test_from_str_names_and_case() {
        assert_eq!("Binary".parse::<Notation>().unwrap(), Notation::Binary);
        assert_eq!("HEX".parse::<Notation>().unwrap(), Notation::Hexadecimal);
        assert_eq!("Roman".parse::<Notation>().unwrap(), Notation::Roman);
        assert_eq!(" dec ".parse::<Notation>().unwrap(), Notation::Decimal);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("12".parse::<Notation>().is_err());
        assert!("".parse::<Notation>().is_err());
        assert!("base64".parse::<Notation>().is_err());
    }

    #[test]
    fn test_result_get() {
        let result = ConversionResult {
            decimal: "255".to_string(),
            binary: "11111111".to_string(),
            octal: "377".to_string(),
            hexadecimal: "FF".to_string(),
            roman: "CCLV".to_string(),
        };
        assert_eq!(result.get(Notation::Decimal), "255");
        assert_eq!(result.get(Notation::Binary), "11111111");
        assert_eq!(result.get(Notation::Octal), "377");
        assert_eq!(result.get(Notation::Hexadecimal), "FF");
        assert_eq!(result.get(Notation::Roman), "CCLV");
    }

    #[test]
    fn test_result_json_field_names() {
        let result = ConversionResult {
            decimal: "14".to_string(),
            binary: "1110".to_string(),
            octal: "16".to_string(),
            hexadecimal: "E".to_string(),
            roman: "XIV".to_string(),
        };
        let json = serde_json::to_value(&result).expect("serializes");
        assert_eq!(json["decimal"], "14");
        assert_eq!(json["binary"], "1110");
        assert_eq!(json["octal"], "16");
        assert_eq!(json["hexadecimal"], "E");
        assert_eq!(json["roman"], "XIV");
    }
}
