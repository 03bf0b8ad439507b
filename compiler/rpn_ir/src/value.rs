//! Runtime values produced and consumed by operators.

use std::fmt;

/// A value on the evaluator stack.
///
/// Integers come from decimal literals without a fraction and from `0x`
/// literals; floats from literals with a fraction (or integers too large for
/// `i64`) and from operators that leave the integer domain. `Literal` is an
/// opaque postfix operand that only extension operators know how to read.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Literal(String),
}

impl Value {
    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Literal(_) => "literal",
        }
    }

    /// Returns `true` for `Int` and `Float`.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Numeric view of the value, widening integers to `f64`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "integers above 2^53 lose precision when mixed with floats, matching IEEE semantics"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Literal(_) => None,
        }
    }

    /// Integer view of the value.
    ///
    /// Floats qualify when they are finite, have no fractional part and fit
    /// in `i64`, so `6 / 3 & 1` works even though `/` may produce a float.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "range and fraction are checked before the cast"
    )]
    pub fn as_integral(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f)
                if f.is_finite()
                    && f.fract() == 0.0
                    && *f >= i64::MIN as f64
                    && *f < i64::MAX as f64 =>
            {
                Some(*f as i64)
            }
            Value::Float(_) | Value::Literal(_) => None,
        }
    }

    /// Compare two numbers with an absolute tolerance.
    ///
    /// Literals compare equal only to identical literals.
    pub fn approx_eq(&self, other: &Value, tolerance: f64) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Literal(a), Value::Literal(b)) => a == b,
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) if a.is_nan() || b.is_nan() => a.is_nan() && b.is_nan(),
                (Some(a), Some(b)) if a.is_infinite() || b.is_infinite() => a == b,
                (Some(a), Some(b)) => (a - b).abs() <= tolerance,
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Literal(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}
