//! Numeric literal recognition shared by both scanners.
//!
//! Accepted forms: `0x`/`0X` followed by hex digits (radix 16), and decimal
//! digits with an optional `.` fraction. Decimal integers too large for `i64`
//! become floats; hex literals that overflow are rejected.

use rpn_ir::Value;

/// Outcome of parsing a numeric lexeme.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Numeric {
    Number(Value),
    /// Looks like a number but cannot be represented.
    OutOfRange,
    NotNumeric,
}

/// Length in bytes of the numeric literal at the start of `input`, if any.
pub(crate) fn scan_number(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();

    if let Some(digits) = hex_digits(input) {
        if digits > 0 {
            return Some(2 + digits);
        }
    }

    let int_len = count_digits(bytes);
    if int_len == 0 {
        return None;
    }
    if bytes.get(int_len) == Some(&b'.') {
        let frac_len = count_digits(&bytes[int_len + 1..]);
        if frac_len > 0 {
            return Some(int_len + 1 + frac_len);
        }
    }
    Some(int_len)
}

/// Parse a complete lexeme.
pub(crate) fn parse_numeric(text: &str) -> Numeric {
    if let Some(digits) = hex_digits(text) {
        if digits > 0 && digits + 2 == text.len() {
            return match i64::from_str_radix(&text[2..], 16) {
                Ok(n) => Numeric::Number(Value::Int(n)),
                Err(_) => Numeric::OutOfRange,
            };
        }
    }

    if !text.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Numeric::NotNumeric;
    }
    if let Ok(n) = text.parse::<i64>() {
        return Numeric::Number(Value::Int(n));
    }
    match text.parse::<f64>() {
        Ok(x) if x.is_finite() => Numeric::Number(Value::Float(x)),
        Ok(_) => Numeric::OutOfRange,
        Err(_) => Numeric::NotNumeric,
    }
}

/// Number of hex digits after a `0x`/`0X` prefix, or `None` without a prefix.
fn hex_digits(input: &str) -> Option<usize> {
    let rest = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))?;
    Some(rest.bytes().take_while(u8::is_ascii_hexdigit).count())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
