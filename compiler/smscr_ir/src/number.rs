//! Canonical text form of floating-point numbers.
//!
//! Doubles render the same way everywhere they surface: echoed output,
//! serialized templates, and token dumps. The form always carries a decimal
//! point or an exponent so that re-lexing a rendered double yields a double
//! again rather than an integer.
//!
//! - `|x|` in `[1e-3, 1e7)`: plain decimal, shortest round-trip digits,
//!   at least one fractional digit (`3.0`, `0.125`, `1234567.5`).
//! - otherwise: `<mantissa>E<exponent>` with at least one fractional digit
//!   in the mantissa (`1.0E7`, `1.25E-5`).
//! - zero: `0.0` / `-0.0`; non-finite: `NaN`, `Infinity`, `-Infinity`.

/// Render `value` in canonical double form.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        };
    }
    if value == 0.0 {
        return if value.is_sign_negative() {
            "-0.0".to_owned()
        } else {
            "0.0".to_owned()
        };
    }

    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        let mut text = value.to_string();
        if !text.contains('.') {
            text.push_str(".0");
        }
        return text;
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

#[cfg(test)]
mod tests;
