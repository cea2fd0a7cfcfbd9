//! Conversions between results and display text.

/// Decimal places kept in every displayed result.
pub const RESULT_DECIMAL_PLACES: i32 = 11;

/// Text shown instead of a quotient when dividing by zero.
pub const UNDEFINED: &str = "undefined";

/// Round `value` to `places` decimal places.
///
/// Hides binary representation noise such as `0.1 + 0.2` producing
/// `0.30000000000000004`. Non-finite values are returned unchanged.
pub fn round_decimal(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }

    scaled.round() / scale
}

/// Format a number for a display buffer.
///
/// Whole numbers have no decimal point, negative zero shows as `0` and
/// infinities as `Infinity` / `-Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let msg = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        msg.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Read a display buffer back as a number.
///
/// Anything that is not a number, including [`UNDEFINED`], reads as `NaN`.
pub fn parse_display(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
