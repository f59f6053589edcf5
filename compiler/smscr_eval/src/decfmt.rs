//! Decimal number formatting for `@decfmt`.
//!
//! Supports the common subset of `DecimalFormat`-style patterns:
//!
//! ```text
//! [prefix] integer-digits [ "." fraction-digits ] [suffix]
//! ```
//!
//! - integer digits: `0` (always shown) and `#` (shown when significant),
//!   with optional `,` grouping; the group size is the number of digits
//!   after the last `,`
//! - fraction digits: `0` (always shown) and `#` (trailing zeros dropped)
//! - prefix and suffix are copied literally; a `%` in either multiplies the
//!   value by 100
//!
//! Exponents (`E`), negative subpatterns (`;`), and `'` quoting are not
//! supported. A pattern using them, or with placeholders outside the single
//! digit section, is rejected.
//!
//! Rounding is half-to-even on the exact binary value.

/// A parsed decimal pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecimalPattern {
    prefix: String,
    suffix: String,
    min_integer: usize,
    grouping: Option<usize>,
    min_fraction: usize,
    max_fraction: usize,
    percent: bool,
}

fn is_pattern_char(c: char) -> bool {
    matches!(c, '0' | '#' | ',' | '.')
}

/// Characters that may not appear in a literal prefix or suffix.
fn is_reserved_char(c: char) -> bool {
    is_pattern_char(c) || matches!(c, ';' | '\'' | 'E')
}

impl DecimalPattern {
    /// Parse `pattern`, or `None` if it has no digit placeholders or a
    /// malformed digit section.
    pub fn parse(pattern: &str) -> Option<Self> {
        let body_start = pattern.find(is_pattern_char)?;
        let (prefix, rest) = pattern.split_at(body_start);
        let body_len = rest.find(|c| !is_pattern_char(c)).unwrap_or(rest.len());
        let (body, suffix) = rest.split_at(body_len);
        if prefix.contains(is_reserved_char) || suffix.contains(is_reserved_char) {
            return None;
        }

        let (integer, fraction) = match body.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (body, ""),
        };
        if fraction.contains(['.', ',']) {
            return None;
        }
        if !integer.contains(['0', '#']) && !fraction.contains(['0', '#']) {
            return None;
        }

        let grouping = match integer.rfind(',') {
            Some(at) => {
                let size = integer[at + 1..].len();
                if size == 0 {
                    return None;
                }
                Some(size)
            }
            None => None,
        };

        Some(DecimalPattern {
            prefix: prefix.to_owned(),
            suffix: suffix.to_owned(),
            min_integer: integer.matches('0').count(),
            grouping,
            min_fraction: fraction.matches('0').count(),
            max_fraction: fraction.len(),
            percent: prefix.contains('%') || suffix.contains('%'),
        })
    }

    pub fn format(&self, value: f64) -> String {
        let scaled = if self.percent { value * 100.0 } else { value };
        let sign = if scaled < 0.0 { "-" } else { "" };

        let digits = if scaled.is_nan() {
            return format!("{}NaN{}", self.prefix, self.suffix);
        } else if scaled.is_infinite() {
            "\u{221e}".to_owned()
        } else {
            self.format_digits(scaled.abs())
        };
        format!("{sign}{}{digits}{}", self.prefix, self.suffix)
    }

    fn format_digits(&self, magnitude: f64) -> String {
        let fixed = format!("{magnitude:.*}", self.max_fraction);
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut fraction = fraction.to_owned();
        while fraction.len() > self.min_fraction && fraction.ends_with('0') {
            fraction.pop();
        }

        let significant = integer.trim_start_matches('0');
        let mut integer = "0".repeat(self.min_integer.saturating_sub(significant.len()));
        integer.push_str(significant);
        if integer.is_empty() && fraction.is_empty() {
            integer.push('0');
        }
        if let Some(size) = self.grouping {
            integer = group(&integer, size);
        }

        if fraction.is_empty() {
            integer
        } else {
            format!("{integer}.{fraction}")
        }
    }
}

/// Insert `,` every `size` digits from the right.
fn group(digits: &str, size: usize) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % size == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format `value` with `pattern`; `None` if the pattern is invalid.
pub fn format_decimal(value: f64, pattern: &str) -> Option<String> {
    DecimalPattern::parse(pattern).map(|pattern| pattern.format(value))
}
