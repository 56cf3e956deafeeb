//! # Input Validation
//!
//! Keeps form input numerically sane. The policy is clamp-on-edit: anything
//! that does not read as a number becomes zero and is then raised to the
//! field minimum, so a dimension edit never fails. The one hard check is
//! garage door header clearance, enforced by the door registry.

use tracing::debug;

use crate::building::Dimension;

/// Parse the leading numeric prefix of `raw`, the way an HTML number field
/// reports it: `"14ft"` reads as 14, `"  9.5"` as 9.5, `"abc"` as nothing.
///
/// Returns `None` when there is no numeric prefix or the value is not finite.
pub fn parse_lenient_f64(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        end = j;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it carries digits ("2e" reads as 2)
    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut j = end + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Raise `value` to the field minimum. Non-finite values become the minimum.
pub fn clamp_dimension(field: Dimension, value: f64) -> f64 {
    let min = field.minimum_ft();
    if value.is_finite() {
        value.max(min)
    } else {
        min
    }
}

/// Turn raw form input into a usable dimension in feet.
///
/// Never fails: garbage, empty, negative and NaN input all come back as the
/// field minimum. There is no upper bound.
///
/// # Example
///
/// ```rust
/// use quote_core::building::Dimension;
/// use quote_core::validation::normalize_dimension;
///
/// assert_eq!(normalize_dimension(Dimension::Width, "40"), 40.0);
/// assert_eq!(normalize_dimension(Dimension::Width, "5"), 12.0);
/// assert_eq!(normalize_dimension(Dimension::Length, "nope"), 20.0);
/// ```
pub fn normalize_dimension(field: Dimension, raw: &str) -> f64 {
    let parsed = parse_lenient_f64(raw).unwrap_or(0.0);
    let value = clamp_dimension(field, parsed);
    if value != parsed {
        debug!(field = field.key(), raw, value, "dimension clamped to minimum");
    }
    value
}

/// Garage doors need `header_clearance_ft` of wall above the opening.
///
/// Walk doors are not subject to this check.
pub fn can_add_garage_door(sidewall_height_ft: f64, door_height_ft: f64, header_clearance_ft: f64) -> bool {
    sidewall_height_ft >= door_height_ft + header_clearance_ft
}

/// Rise of an "N/12" roof pitch label. Unreadable labels count as flat (0).
pub fn pitch_numerator(label: &str) -> f64 {
    label
        .split('/')
        .next()
        .and_then(parse_lenient_f64)
        .unwrap_or(0.0)
}

/// Rise per foot of run for an "N/12" pitch label.
pub fn pitch_ratio(label: &str) -> f64 {
    pitch_numerator(label) / 12.0
}
