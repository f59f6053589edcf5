//! Dynamic runtime values and in-place arithmetic.
//!
//! [`DynValue`] is the plain value passed around by the interpreter.
//! [`ValueCell`] owns one and is the only thing arithmetic mutates; the
//! argument of every operation is borrowed and never changed.
//!
//! Both operands are normalized before combining:
//! - `Empty` becomes `Int(0)`
//! - `Str` parses as an integer, else as a double, else fails
//! - `Int` and `Double` pass through
//!
//! If either normalized operand is a double the operation runs in floating
//! point and stores a `Double`; otherwise it runs in (wrapping) integer
//! arithmetic and stores an `Int`.

use std::cmp::Ordering;
use std::fmt;

use smscr_ir::{format_double, Operator};

use crate::errors::ArithmeticError;

/// A runtime value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DynValue {
    Int(i64),
    Double(f64),
    Str(String),
    /// Absent operand; counts as `Int(0)` in arithmetic.
    #[default]
    Empty,
}

/// A normalized numeric operand.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Number {
    Int(i64),
    Double(f64),
}

impl Number {
    #[allow(
        clippy::cast_precision_loss,
        reason = "promotion to double is the defined semantics"
    )]
    fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Double(value) => value,
        }
    }
}

impl From<Number> for DynValue {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(value) => DynValue::Int(value),
            Number::Double(value) => DynValue::Double(value),
        }
    }
}

impl DynValue {
    fn to_number(&self) -> Result<Number, ArithmeticError> {
        match self {
            DynValue::Int(value) => Ok(Number::Int(*value)),
            DynValue::Double(value) => Ok(Number::Double(*value)),
            DynValue::Empty => Ok(Number::Int(0)),
            DynValue::Str(text) => parse_number(text).ok_or_else(|| {
                ArithmeticError::InvalidOperand {
                    value: text.clone(),
                }
            }),
        }
    }

    /// The value as a double, after normalization.
    pub fn to_f64(&self) -> Result<f64, ArithmeticError> {
        self.to_number().map(Number::as_f64)
    }

    /// Normalize to `Int` or `Double`, parsing strings.
    pub fn to_numeric(&self) -> Result<DynValue, ArithmeticError> {
        self.to_number().map(DynValue::from)
    }

    /// Short kind name used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DynValue::Int(_) => "int",
            DynValue::Double(_) => "double",
            DynValue::Str(_) => "string",
            DynValue::Empty => "empty",
        }
    }
}

/// Integer first, then double.
fn parse_number(text: &str) -> Option<Number> {
    if let Ok(value) = text.parse::<i64>() {
        return Some(Number::Int(value));
    }
    parse_double(text).map(Number::Double)
}

/// Decimal double in the `Double.parseDouble` dialect.
///
/// Leading and trailing whitespace and control characters are trimmed
/// (integers get no such trimming, so `" 2"` is the double `2.0`). A
/// trailing `d`/`D`/`f`/`F` type suffix is accepted. The only non-finite
/// spellings are `NaN` and `Infinity`, optionally signed; `inf`, `infinity`
/// and other case variants are rejected. Hexadecimal floats are not
/// supported.
fn parse_double(text: &str) -> Option<f64> {
    let text = text.trim_matches(|c: char| c <= ' ');
    let negative = text.starts_with('-');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);

    let magnitude = match unsigned {
        "NaN" => return Some(f64::NAN),
        "Infinity" => f64::INFINITY,
        _ => {
            let digits = unsigned
                .strip_suffix(['d', 'D', 'f', 'F'])
                .unwrap_or(unsigned);
            let well_formed = digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
                && digits
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
            if !well_formed {
                return None;
            }
            digits.parse::<f64>().ok()?
        }
    };
    Some(if negative { -magnitude } else { magnitude })
}

impl fmt::Display for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynValue::Int(value) => write!(f, "{value}"),
            DynValue::Double(value) => f.write_str(&format_double(*value)),
            DynValue::Str(text) => f.write_str(text),
            DynValue::Empty => Ok(()),
        }
    }
}

impl From<i64> for DynValue {
    fn from(value: i64) -> Self {
        DynValue::Int(value)
    }
}

impl From<f64> for DynValue {
    fn from(value: f64) -> Self {
        DynValue::Double(value)
    }
}

impl From<String> for DynValue {
    fn from(value: String) -> Self {
        DynValue::Str(value)
    }
}

impl From<&str> for DynValue {
    fn from(value: &str) -> Self {
        DynValue::Str(value.to_owned())
    }
}

/// An owned, mutable holder for a [`DynValue`].
///
/// Loop variables live in cells, and binary operators compute into a fresh
/// cell holding their first operand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueCell {
    value: DynValue,
}

impl ValueCell {
    pub fn new(value: impl Into<DynValue>) -> Self {
        ValueCell {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &DynValue {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<DynValue>) {
        self.value = value.into();
    }

    pub fn into_value(self) -> DynValue {
        self.value
    }

    pub fn add(&mut self, other: &DynValue) -> Result<(), ArithmeticError> {
        self.combine(other, i64::wrapping_add, |a, b| a + b)
    }

    pub fn subtract(&mut self, other: &DynValue) -> Result<(), ArithmeticError> {
        self.combine(other, i64::wrapping_sub, |a, b| a - b)
    }

    pub fn multiply(&mut self, other: &DynValue) -> Result<(), ArithmeticError> {
        self.combine(other, i64::wrapping_mul, |a, b| a * b)
    }

    /// Divide in place. Integer division by zero fails; floating division by
    /// zero yields an infinity or NaN.
    pub fn divide(&mut self, other: &DynValue) -> Result<(), ArithmeticError> {
        let (lhs, rhs) = (self.value.to_number()?, other.to_number()?);
        self.value = match (lhs, rhs) {
            (Number::Int(_), Number::Int(0)) => return Err(ArithmeticError::DivideByZero),
            (Number::Int(a), Number::Int(b)) => DynValue::Int(a.wrapping_div(b)),
            (a, b) => DynValue::Double(a.as_f64() / b.as_f64()),
        };
        Ok(())
    }

    /// Three-way comparison with `other`: `-1`, `0` or `1`.
    ///
    /// Does not modify the cell. Doubles compare with IEEE total ordering,
    /// so NaN sorts above every number.
    pub fn compare(&self, other: &DynValue) -> Result<i32, ArithmeticError> {
        let ordering = match (self.value.to_number()?, other.to_number()?) {
            (Number::Int(a), Number::Int(b)) => a.cmp(&b),
            (a, b) => a.as_f64().total_cmp(&b.as_f64()),
        };
        Ok(match ordering {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        })
    }

    /// Apply a binary operator in place: `self = self OP other`.
    pub fn apply(&mut self, op: Operator, other: &DynValue) -> Result<(), ArithmeticError> {
        match op {
            Operator::Add => self.add(other),
            Operator::Sub => self.subtract(other),
            Operator::Mul => self.multiply(other),
            Operator::Div => self.divide(other),
            Operator::Pow => Err(ArithmeticError::UnsupportedOperator(op)),
        }
    }

    fn combine(
        &mut self,
        other: &DynValue,
        int_op: fn(i64, i64) -> i64,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<(), ArithmeticError> {
        let (lhs, rhs) = (self.value.to_number()?, other.to_number()?);
        self.value = match (lhs, rhs) {
            (Number::Int(a), Number::Int(b)) => DynValue::Int(int_op(a, b)),
            (a, b) => DynValue::Double(float_op(a.as_f64(), b.as_f64())),
        };
        Ok(())
    }
}

impl From<DynValue> for ValueCell {
    fn from(value: DynValue) -> Self {
        ValueCell { value }
    }
}
