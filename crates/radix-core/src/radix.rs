//! # Radix Module
//!
//! Positional (base 2/8/10/16) parsing and formatting.
//!
//! ## Two Parsing Regimes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STRICT vs PERMISSIVE PARSING                                           │
//! │                                                                         │
//! │  Binary / Octal / Hexadecimal (strict):                                 │
//! │    "11111111" ──► 255        "FF" ──► 255                               │
//! │    The digit grammar already ran; the whole string must parse.          │
//! │                                                                         │
//! │  Decimal (permissive):                                                  │
//! │    "-3.7"  ──► -4   (floored, toward negative infinity)                 │
//! │    "12abc" ──► 12   (longest valid leading numeral wins)                │
//! │    "abc"   ──► None (no leading numeral at all)                         │
//! │                                                                         │
//! │  Decimal accepts what the strict bases reject. That asymmetry is        │
//! │  intentional and load-bearing for callers.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Parsing
// =============================================================================

/// Parses a strict base-N digit string into the canonical value.
///
/// Assumes the string already passed [`crate::validation::validate_digits`]
/// for `base`: every character is a digit of the base, with no sign or
/// separators. Returns `None` when the value overflows the native integer
/// range (arbitrary precision is out of scope).
///
/// ## Example
/// ```rust
/// use radix_core::radix::parse_radix;
///
/// assert_eq!(parse_radix("11111111", 2), Some(255));
/// assert_eq!(parse_radix("377", 8), Some(255));
/// assert_eq!(parse_radix("ff", 16), Some(255));
/// ```
pub fn parse_radix(value: &str, base: u32) -> Option<i64> {
    i64::from_str_radix(value, base).ok()
}

/// Parses a decimal string the permissive way: longest valid leading
/// numeral, optional sign, optional fractional part, optional exponent,
/// **floored** toward negative infinity.
///
/// Returns `None` when the string contains no valid leading numeral, or the
/// result does not fit the native integer range.
///
/// ## Rules
/// - `"42"`, `"+42"` parse as expected
/// - `"3.99"` → 3 and `"-3.7"` → -4 (floor, not truncation toward zero)
/// - `"12abc"` → 12 (trailing text after the numeral is ignored)
/// - `"abc"`, `"."`, `"+"` → `None`
///
/// ## Example
/// ```rust
/// use radix_core::radix::parse_decimal;
///
/// assert_eq!(parse_decimal("255"), Some(255));
/// assert_eq!(parse_decimal("-3.7"), Some(-4));
/// assert_eq!(parse_decimal("nope"), None);
/// ```
pub fn parse_decimal(value: &str) -> Option<i64> {
    let prefix = leading_numeral(value.trim_start())?;
    let parsed: f64 = prefix.parse().ok()?;

    // Exponents can push past anything representable; a value whose floor
    // does not fit the native integer range has no canonical value, same
    // as an overflowing strict parse.
    let floored = parsed.floor();
    if !floored.is_finite() || floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return None;
    }

    Some(floored as i64)
}

/// Finds the longest prefix of `s` that reads as a signed decimal numeral:
/// `[+-]? digits [. digits]? [eE [+-]? digits]?`, where at least one digit
/// must appear around the point.
fn leading_numeral(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(&(b'+' | b'-'))) {
        end = 1;
    }

    let mut digits = 0;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        digits += 1;
    }

    // Fractional part: the point only counts when a digit flanks it,
    // so "12." and ".5" qualify but "." alone does not.
    if bytes.get(end) == Some(&b'.') {
        let mut frac_end = end + 1;
        let mut frac_digits = 0;
        while bytes.get(frac_end).is_some_and(|b| b.is_ascii_digit()) {
            frac_end += 1;
            frac_digits += 1;
        }
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent: only consumed when complete ("1e" stays "1").
    if matches!(bytes.get(end), Some(&(b'e' | b'E'))) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(&(b'+' | b'-'))) {
            exp_end += 1;
        }
        let mut exp_digits = 0;
        while bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
            exp_digits += 1;
        }
        if exp_digits > 0 {
            end = exp_end;
        }
    }

    Some(&s[..end])
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats the canonical value in a positional base.
///
/// Supported bases are 2, 8, 10, and 16. Renderings carry no leading zeros
/// and base 16 uses uppercase `A-F`. The documented contract is unsigned;
/// a negative value (decimal's permissive sign can produce one) renders as
/// `-` followed by the magnitude.
///
/// ## Example
/// ```rust
/// use radix_core::radix::format_radix;
///
/// assert_eq!(format_radix(255, 2), "11111111");
/// assert_eq!(format_radix(255, 8), "377");
/// assert_eq!(format_radix(255, 10), "255");
/// assert_eq!(format_radix(255, 16), "FF");
/// ```
pub fn format_radix(value: i64, base: u32) -> String {
    let magnitude = value.unsigned_abs();
    let digits = match base {
        2 => format!("{magnitude:b}"),
        8 => format!("{magnitude:o}"),
        16 => format!("{magnitude:X}"),
        // 10, the remaining supported base
        _ => magnitude.to_string(),
    };

    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_radix_strict_bases() {
        assert_eq!(parse_radix("11111111", 2), Some(255));
        assert_eq!(parse_radix("377", 8), Some(255));
        assert_eq!(parse_radix("FF", 16), Some(255));
        assert_eq!(parse_radix("ff", 16), Some(255));
        assert_eq!(parse_radix("0", 2), Some(0));
        assert_eq!(parse_radix("0000101", 2), Some(5));
    }

    #[test]
    fn test_parse_radix_overflow_is_none() {
        // Sixteen F's is 2^64 - 1, far past the canonical range.
        assert_eq!(parse_radix("FFFFFFFFFFFFFFFF", 16), None);
        assert_eq!(parse_radix(&"1".repeat(100), 2), None);
    }

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("0"), Some(0));
        assert_eq!(parse_decimal("42"), Some(42));
        assert_eq!(parse_decimal("+42"), Some(42));
        assert_eq!(parse_decimal("-42"), Some(-42));
        assert_eq!(parse_decimal("007"), Some(7));
    }

    #[test]
    fn test_parse_decimal_floors_toward_negative_infinity() {
        assert_eq!(parse_decimal("3.99"), Some(3));
        assert_eq!(parse_decimal("-3.1"), Some(-4));
        assert_eq!(parse_decimal("-3.7"), Some(-4));
        assert_eq!(parse_decimal(".5"), Some(0));
        assert_eq!(parse_decimal("-.5"), Some(-1));
        assert_eq!(parse_decimal("5."), Some(5));
    }

    #[test]
    fn test_parse_decimal_longest_leading_numeral() {
        assert_eq!(parse_decimal("12abc"), Some(12));
        assert_eq!(parse_decimal("3.5px"), Some(3));
        assert_eq!(parse_decimal("12.5.3"), Some(12));
        // An incomplete exponent is trailing text, not part of the numeral.
        assert_eq!(parse_decimal("1e"), Some(1));
        assert_eq!(parse_decimal("1e+"), Some(1));
    }

    #[test]
    fn test_parse_decimal_exponents() {
        assert_eq!(parse_decimal("1e3"), Some(1000));
        assert_eq!(parse_decimal("2.5E2"), Some(250));
        assert_eq!(parse_decimal("1e-2"), Some(0));
        assert_eq!(parse_decimal("-1e-2"), Some(-1));
    }

    #[test]
    fn test_parse_decimal_overflow_is_none() {
        assert_eq!(parse_decimal("1e300"), None);
        assert_eq!(parse_decimal("-1e300"), None);
        assert_eq!(parse_decimal(&format!("{}0", i64::MAX)), None);
    }

    #[test]
    fn test_parse_decimal_no_leading_numeral_is_none() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("+"), None);
        assert_eq!(parse_decimal("-"), None);
        assert_eq!(parse_decimal("e5"), None);
        assert_eq!(parse_decimal("+."), None);
    }

    #[test]
    fn test_format_radix_canonical_forms() {
        assert_eq!(format_radix(255, 2), "11111111");
        assert_eq!(format_radix(255, 8), "377");
        assert_eq!(format_radix(255, 10), "255");
        assert_eq!(format_radix(255, 16), "FF");
        assert_eq!(format_radix(4000, 16), "FA0");
    }

    #[test]
    fn test_format_radix_zero() {
        assert_eq!(format_radix(0, 2), "0");
        assert_eq!(format_radix(0, 8), "0");
        assert_eq!(format_radix(0, 10), "0");
        assert_eq!(format_radix(0, 16), "0");
    }

    #[test]
    fn test_format_radix_negative_renders_sign_plus_magnitude() {
        assert_eq!(format_radix(-255, 16), "-FF");
        assert_eq!(format_radix(-5, 2), "-101");
        assert_eq!(format_radix(-42, 10), "-42");
    }

    #[test]
    fn test_parse_then_format_round_trip() {
        // format(parse(s)) yields the canonical form: leading zeros
        // stripped, hex uppercased.
        for (input, base, canonical) in [
            ("0101", 2, "101"),
            ("000377", 8, "377"),
            ("00ff", 16, "FF"),
            ("deadbeef", 16, "DEADBEEF"),
        ] {
            let value = parse_radix(input, base).expect("valid digits");
            assert_eq!(format_radix(value, base), canonical);
        }
    }
}
