//! # radix-core: Pure Conversion Logic for Radix
//!
//! This crate is the **heart** of Radix. It contains the whole numeral
//! conversion engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Radix Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (apps/cli)                   │   │
//! │  │     flag parsing ──► convert() ──► rendered output / message    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ radix-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   radix   │  │   roman   │  │ validation│  │   │
//! │  │   │ Notation  │  │ parse/fmt │  │  decode   │  │  digit    │  │   │
//! │  │   │  Result   │  │ base 2-16 │  │  encode   │  │  grammars │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                        ┌───────────┐                           │   │
//! │  │                        │  engine   │  orchestrates the above   │   │
//! │  │                        └───────────┘                           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • NO SHARED STATE • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`Notation`], [`ConversionResult`])
//! - [`error`] - The conversion error taxonomy
//! - [`validation`] - Character-grammar checks per notation
//! - [`radix`] - Positional (base 2/8/10/16) parsing and formatting
//! - [`roman`] - Roman numeral codec with subtractive notation
//! - [`engine`] - The single [`convert`] entry point
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Terminal, file, and network access is FORBIDDEN here
//! 3. **Explicit Errors**: Expected validation failures are typed values, never panics
//! 4. **One Canonical Value**: All notations convert through a single integer
//!
//! ## Example Usage
//!
//! ```rust
//! use radix_core::{convert, Notation};
//!
//! let result = convert("255", Notation::Decimal).unwrap();
//!
//! assert_eq!(result.binary, "11111111");
//! assert_eq!(result.octal, "377");
//! assert_eq!(result.hexadecimal, "FF");
//! assert_eq!(result.roman, "CCLV");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod radix;
pub mod roman;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use radix_core::Notation` instead of
// `use radix_core::types::Notation`

pub use engine::convert;
pub use error::{ConversionError, ErrorKind};
pub use types::{ConversionResult, Notation};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest value expressible as a Roman numeral.
///
/// Roman notation has no zero and no negative numbers; encoding starts at I.
pub const ROMAN_MIN: i64 = 1;

/// Largest value the Roman encoder will produce (MMMCMXCIX).
///
/// The conventional additive/subtractive notation tops out at 3999. Note that
/// *decoding* is slightly looser: the accepted grammar allows a fourth
/// thousands symbol, so `MMMM` decodes to 4000 even though 4000 can never be
/// encoded. See [`roman`] for the full story.
pub const ROMAN_MAX: i64 = 3999;

/// Rendered in place of a Roman numeral when the value falls outside
/// [`ROMAN_MIN`]..=[`ROMAN_MAX`].
///
/// This is a *successful* rendering, not an error: the canonical value exists
/// and every positional notation still gets a real digit string.
pub const ROMAN_RANGE_SENTINEL: &str = "Out of range (1-3999)";
