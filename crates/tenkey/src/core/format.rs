//! Conversion between display numerals and floating-point values.
//!
//! The formatting rules here are part of the observable contract: fixed
//! significant-digit rounding, fixed plain/exponential notation thresholds,
//! and trailing-zero stripping. They are implemented explicitly rather than
//! leaning on whatever the runtime's default float-to-string conversion
//! happens to do.

/// Significant decimal digits kept by [`round`].
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Smallest nonzero magnitude rendered in plain decimal notation.
pub const PLAIN_NOTATION_MIN: f64 = 1e-9;

/// Magnitude at and above which [`render`] switches to exponential notation.
pub const PLAIN_NOTATION_MAX: f64 = 1e12;

/// Mantissa fraction digits used in exponential notation.
pub const EXPONENT_FRACTION_DIGITS: usize = 6;

/// Maximum character count [`truncate_for_view`] lets through unclipped.
pub const VIEW_LIMIT: usize = 18;

/// Literal shown in place of a non-finite value.
pub const ERROR_TEXT: &str = "Error";

/// Parses a display numeral into a value.
///
/// Parsing never fails: anything that is not a finite decimal numeral
/// (a lone `"-"` or `"."`, the empty string, the `"Error"` literal)
/// degrades to `0.0`. Partial numerals such as `"5."` and `".5"` parse
/// as numbers.
#[must_use]
pub fn parse(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Produces the canonical display string for a value.
///
/// Non-finite values render as [`ERROR_TEXT`]. Zero and magnitudes in
/// `[PLAIN_NOTATION_MIN, PLAIN_NOTATION_MAX)` render in plain decimal
/// notation with trailing zeros and a trailing bare point stripped;
/// everything else renders in exponential notation with
/// [`EXPONENT_FRACTION_DIGITS`] mantissa fraction digits, which is never
/// post-processed.
#[must_use]
pub fn render(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }
    if value == 0.0 {
        // Collapses -0.0 as well.
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (PLAIN_NOTATION_MIN..PLAIN_NOTATION_MAX).contains(&magnitude) {
        strip_trailing_zeros(format!("{value}"))
    } else {
        format!("{:.*e}", EXPONENT_FRACTION_DIGITS, value)
    }
}

/// Rounds a value to [`SIGNIFICANT_DIGITS`] significant decimal digits.
///
/// Non-finite inputs pass through unchanged. Every binary arithmetic
/// result goes through this before it is stored or displayed.
#[must_use]
pub fn round(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Caps a rendered string at [`VIEW_LIMIT`] characters for presentation,
/// appending a single ellipsis when clipped.
///
/// Presentation-only: the result is handed to the renderer, never stored
/// back into session state.
#[must_use]
pub fn truncate_for_view(text: &str) -> String {
    if text.chars().count() <= VIEW_LIMIT {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(VIEW_LIMIT).collect();
        clipped.push('\u{2026}');
        clipped
    }
}

fn strip_trailing_zeros(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== parse tests =====

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse("42"), 42.0);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse("3.14"), 3.14);
    }

    #[test]
    fn test_parse_negative() {
        assert_eq!(parse("-2.5"), -2.5);
    }

    #[test]
    fn test_parse_partial_numerals() {
        assert_eq!(parse("5."), 5.0);
        assert_eq!(parse(".5"), 0.5);
        assert_eq!(parse("-5."), -5.0);
        assert_eq!(parse("0."), 0.0);
    }

    #[test]
    fn test_parse_invalid_degrades_to_zero() {
        assert_eq!(parse("-"), 0.0);
        assert_eq!(parse("."), 0.0);
        assert_eq!(parse(""), 0.0);
        assert_eq!(parse("Error"), 0.0);
    }

    #[test]
    fn test_parse_non_finite_degrades_to_zero() {
        assert_eq!(parse("inf"), 0.0);
        assert_eq!(parse("NaN"), 0.0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse(" 7 "), 7.0);
    }

    // ===== render tests =====

    #[test]
    fn test_render_non_finite_is_error() {
        assert_eq!(render(f64::NAN), "Error");
        assert_eq!(render(f64::INFINITY), "Error");
        assert_eq!(render(f64::NEG_INFINITY), "Error");
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(render(0.0), "0");
        assert_eq!(render(-0.0), "0");
    }

    #[test]
    fn test_render_plain_integers() {
        assert_eq!(render(42.0), "42");
        assert_eq!(render(-7.0), "-7");
    }

    #[test]
    fn test_render_plain_decimals() {
        assert_eq!(render(0.3), "0.3");
        assert_eq!(render(-2.5), "-2.5");
        assert_eq!(render(0.125), "0.125");
    }

    #[test]
    fn test_render_plain_range_boundaries() {
        // 1e-9 and just below 1e12 stay plain.
        assert_eq!(render(1e-9), "0.000000001");
        assert_eq!(render(999_999_999_999.0), "999999999999");
    }

    #[test]
    fn test_render_exponential_above_threshold() {
        assert_eq!(render(1e12), "1.000000e12");
        assert_eq!(render(-3.5e15), "-3.500000e15");
    }

    #[test]
    fn test_render_exponential_below_threshold() {
        assert_eq!(render(1e-10), "1.000000e-10");
    }

    #[test]
    fn test_render_no_trailing_zeros() {
        assert_eq!(render(1.5), "1.5");
        assert_eq!(render(round(2.500)), "2.5");
    }

    #[test]
    fn test_render_rounded_artifact() {
        assert_eq!(render(round(0.1 + 0.2)), "0.3");
    }

    // ===== round tests =====

    #[test]
    fn test_round_suppresses_artifacts() {
        assert_eq!(round(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_round_twelve_significant_digits() {
        assert_eq!(round(1.0 / 3.0), 0.333_333_333_333);
    }

    #[test]
    fn test_round_large_value() {
        assert_eq!(round(123_456_789_012_345.0), 1.234_567_890_12e14);
    }

    #[test]
    fn test_round_preserves_exact_values() {
        assert_eq!(round(42.0), 42.0);
        assert_eq!(round(-0.5), -0.5);
        assert_eq!(round(0.0), 0.0);
    }

    #[test]
    fn test_round_non_finite_passes_through() {
        assert!(round(f64::NAN).is_nan());
        assert_eq!(round(f64::INFINITY), f64::INFINITY);
        assert_eq!(round(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    // ===== truncate_for_view tests =====

    #[test]
    fn test_truncate_short_passes_through() {
        assert_eq!(truncate_for_view("0.3"), "0.3");
    }

    #[test]
    fn test_truncate_at_limit_passes_through() {
        let exactly_18 = "123456789012345678";
        assert_eq!(truncate_for_view(exactly_18), exactly_18);
    }

    #[test]
    fn test_truncate_over_limit_clips_with_ellipsis() {
        let long = "1234567890123456789";
        assert_eq!(truncate_for_view(long), "123456789012345678…");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let clipped = truncate_for_view("12345678901234567890");
        assert_eq!(clipped.chars().count(), VIEW_LIMIT + 1);
    }
}
