//! Scalar attribute parsers
//!
//! The permissive entry points never fail: the null literal and malformed
//! input both resolve to the type's zero value, with an optional
//! diagnostic. The strict fast path ([`parse_int_unsafe`]) is the one
//! exception, for callers that must tell a parse failure apart from a
//! valid zero.

use crate::diagnostics_enabled;
use crate::error::{ParseError, Result};
use crate::types::{DisplayMetrics, ANCHOR_TRUE, NULL_LITERAL};

/// Parse an integer attribute, defaulting to 0.
pub fn parse_int(attribute_value: &str) -> i32 {
    if attribute_value == NULL_LITERAL {
        return 0;
    }
    match attribute_value.parse::<i32>() {
        Ok(number) => number,
        Err(e) => {
            if diagnostics_enabled() {
                log::error!("{} is not a number: {}", attribute_value, e);
            }
            0
        }
    }
}

/// Parse a float attribute, defaulting to 0.
pub fn parse_float(attribute_value: &str) -> f32 {
    if attribute_value == NULL_LITERAL {
        return 0.0;
    }
    match attribute_value.parse::<f32>() {
        Ok(number) => number,
        Err(e) => {
            if diagnostics_enabled() {
                log::error!("{} is not a number: {}", attribute_value, e);
            }
            0.0
        }
    }
}

/// Parse a double attribute, defaulting to 0.
pub fn parse_double(attribute_value: &str) -> f64 {
    if attribute_value == NULL_LITERAL {
        return 0.0;
    }
    match attribute_value.parse::<f64>() {
        Ok(number) => number,
        Err(e) => {
            if diagnostics_enabled() {
                log::error!("{} is not a number: {}", attribute_value, e);
            }
            0.0
        }
    }
}

/// Fast path for strictly-digit, non-negative integers.
///
/// No null-literal handling and no defaulting: anything but a non-empty
/// ASCII digit sequence is an error, surfaced as a value rather than by
/// falling back to zero. Accumulation wraps, so the caller guarantees the
/// value fits in an `i32`. Must not be fed signed input.
pub fn parse_int_unsafe(value: Option<&str>) -> Result<i32> {
    let s = value.ok_or(ParseError::NullString)?;
    if s.is_empty() {
        return Err(ParseError::malformed_int(s));
    }

    let mut num: i32 = 0;
    for byte in s.bytes() {
        let d = byte.wrapping_sub(b'0');
        if d > 9 {
            return Err(ParseError::malformed_int(s));
        }
        num = num.wrapping_mul(10).wrapping_add(d as i32);
    }
    Ok(num)
}

/// Parse a plain (non-reference) identifier attribute.
///
/// The null literal means "no id", which is distinct from a present id
/// of zero; anything else non-numeric also resolves to no id.
pub fn parse_id(id: &str) -> Option<i32> {
    if id == NULL_LITERAL {
        return None;
    }
    match id.parse::<i32>() {
        Ok(number) => Some(number),
        Err(_) => {
            if diagnostics_enabled() {
                log::error!("{} is not a valid resource id", id);
            }
            None
        }
    }
}

/// Unit-suffixed dimension conversion, owned by an external collaborator.
pub trait DimensionConverter {
    /// Resolve a raw dimension string against the given display metrics.
    fn resolve(&self, raw: &str, metrics: &DisplayMetrics) -> f32;
}

/// Resolve a dimension attribute to a length on the target display.
pub fn parse_dimension(
    dimension: &str,
    converter: &dyn DimensionConverter,
    metrics: &DisplayMetrics,
) -> f32 {
    converter.resolve(dimension, metrics)
}

/// Density-independent units to physical pixels.
pub fn dp_to_px(dp: f32, metrics: &DisplayMetrics) -> i32 {
    (dp * metrics.density) as i32
}

/// Physical pixels to density-independent units.
pub fn px_to_dp(px: i32, metrics: &DisplayMetrics) -> f32 {
    px as f32 / metrics.density
}

/// Map a boolean anchor rule onto its native encoding.
pub fn parse_anchor_rule(value: bool) -> i32 {
    if value {
        ANCHOR_TRUE
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedConverter(f32);

    impl DimensionConverter for FixedConverter {
        fn resolve(&self, _raw: &str, metrics: &DisplayMetrics) -> f32 {
            self.0 * metrics.density
        }
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("-7"), -7);
        assert_eq!(parse_int("0"), 0);
        assert_eq!(parse_int(NULL_LITERAL), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("12px"), 0);
        assert_eq!(parse_int("four"), 0);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("1.5"), 1.5);
        assert_eq!(parse_float("-0.25"), -0.25);
        assert_eq!(parse_float(NULL_LITERAL), 0.0);
        assert_eq!(parse_float("abc"), 0.0);
    }

    #[test]
    fn test_parse_double() {
        assert_eq!(parse_double("2.5"), 2.5);
        assert_eq!(parse_double(NULL_LITERAL), 0.0);
        assert_eq!(parse_double("NaNN"), 0.0);
    }

    #[test]
    fn test_parse_int_unsafe_valid() {
        assert_eq!(parse_int_unsafe(Some("0")), Ok(0));
        assert_eq!(parse_int_unsafe(Some("7")), Ok(7));
        assert_eq!(parse_int_unsafe(Some("12345")), Ok(12345));
        assert_eq!(parse_int_unsafe(Some("007")), Ok(7));
    }

    #[test]
    fn test_parse_int_unsafe_rejects() {
        assert_eq!(parse_int_unsafe(None), Err(ParseError::NullString));
        assert!(parse_int_unsafe(Some("")).is_err());
        assert!(parse_int_unsafe(Some("-1")).is_err());
        assert!(parse_int_unsafe(Some("+1")).is_err());
        assert!(parse_int_unsafe(Some("1.5")).is_err());
        assert!(parse_int_unsafe(Some("12a")).is_err());
        assert!(parse_int_unsafe(Some(" 12")).is_err());
    }

    #[test]
    fn test_parse_int_unsafe_error_is_value_not_default() {
        // A failure must stay distinguishable from a parsed zero.
        let err = parse_int_unsafe(Some("x0")).unwrap_err();
        assert_eq!(err, ParseError::malformed_int("x0"));
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id(NULL_LITERAL), None);
        assert_eq!(parse_id("@id/header"), None);
    }

    #[test]
    fn test_density_conversions() {
        let metrics = DisplayMetrics {
            density: 2.0,
            scaled_density: 2.0,
        };
        assert_eq!(dp_to_px(8.0, &metrics), 16);
        assert_eq!(px_to_dp(16, &metrics), 8.0);
        assert_eq!(dp_to_px(5.0, &DisplayMetrics::default()), 5);
    }

    #[test]
    fn test_parse_dimension_delegates() {
        let metrics = DisplayMetrics {
            density: 3.0,
            scaled_density: 3.0,
        };
        assert_eq!(parse_dimension("16dp", &FixedConverter(16.0), &metrics), 48.0);
    }

    #[test]
    fn test_parse_anchor_rule() {
        assert_eq!(parse_anchor_rule(true), ANCHOR_TRUE);
        assert_eq!(parse_anchor_rule(false), 0);
    }
}
