//! Built-in operator implementations.
//!
//! Integer arithmetic is checked; on overflow the operation is redone in
//! floating point rather than failing. Bitwise operators work on `i64` and
//! accept floats only when they hold a whole number.

use std::sync::Arc;

use crate::operator::{
    precedence, Associativity, OperatorError, OperatorKind, OperatorResult, OperatorSpec,
};
use crate::{OperatorTable, Value};

type Implementation = fn(&[Value]) -> OperatorResult;

/// Register the built-in operators into `table`.
///
/// Existing entries with the same tokens are replaced.
pub fn register_builtins(table: &mut OperatorTable) {
    table.insert(OperatorSpec::bracket("("));
    table.insert(OperatorSpec::bracket(")"));

    prefix(table, "#", "+", plus);
    prefix(table, "_", "-", minus);
    prefix(table, "~", "~", bit_not);

    infix(table, "**", precedence::POWER, Associativity::Right, pow);
    infix(table, "*", precedence::MULTIPLICATIVE, Associativity::Left, mul);
    infix(table, "/", precedence::MULTIPLICATIVE, Associativity::Left, div);
    infix(table, "%", precedence::MULTIPLICATIVE, Associativity::Left, rem);
    infix(table, "+", precedence::ADDITIVE, Associativity::Left, add);
    infix(table, "-", precedence::ADDITIVE, Associativity::Left, sub);
    infix(table, "<<", precedence::SHIFT, Associativity::Left, shl);
    infix(table, ">>", precedence::SHIFT, Associativity::Left, shr);
    infix(table, "&", precedence::BIT_AND, Associativity::Left, bit_and);
    infix(table, "^", precedence::BIT_XOR, Associativity::Left, bit_xor);
    infix(table, "|", precedence::BIT_OR, Associativity::Left, bit_or);
}

fn prefix(table: &mut OperatorTable, token: &str, symbol: &str, f: Implementation) {
    table.insert(OperatorSpec::new(
        token,
        symbol,
        OperatorKind::Prefix,
        precedence::PREFIX,
        1,
        Associativity::Right,
        Arc::new(f),
    ));
}

fn infix(
    table: &mut OperatorTable,
    token: &str,
    precedence: u8,
    associativity: Associativity,
    f: Implementation,
) {
    table.insert(OperatorSpec::new(
        token,
        token,
        OperatorKind::Infix,
        precedence,
        2,
        associativity,
        Arc::new(f),
    ));
}

// Operand helpers

fn operands<const N: usize>(args: &[Value]) -> Result<&[Value; N], OperatorError> {
    args.try_into().map_err(|_| OperatorError::Arity {
        expected: N,
        got: args.len(),
    })
}

fn number(value: &Value) -> Result<f64, OperatorError> {
    value
        .as_f64()
        .ok_or_else(|| OperatorError::argument_type("number", value))
}

fn integer(value: &Value) -> Result<i64, OperatorError> {
    value
        .as_integral()
        .ok_or_else(|| OperatorError::argument_type("integer", value))
}

/// Checked integer op with float fallback; any float operand goes straight to
/// the float op.
#[inline]
fn arith(
    args: &[Value],
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> OperatorResult {
    let [a, b] = operands::<2>(args)?;
    if let (Value::Int(x), Value::Int(y)) = (a, b) {
        if let Some(n) = int_op(*x, *y) {
            return Ok(Some(Value::Int(n)));
        }
    }
    Ok(Some(Value::Float(float_op(number(a)?, number(b)?))))
}

#[inline]
fn bitwise(args: &[Value], op: fn(i64, i64) -> i64) -> OperatorResult {
    let [a, b] = operands::<2>(args)?;
    Ok(Some(Value::Int(op(integer(a)?, integer(b)?))))
}

#[inline]
fn shift(args: &[Value], op: fn(i64, u32) -> Option<i64>) -> OperatorResult {
    let [a, b] = operands::<2>(args)?;
    let value = integer(a)?;
    let amount = integer(b)?;
    u32::try_from(amount)
        .ok()
        .and_then(|amount| op(value, amount))
        .map(|n| Some(Value::Int(n)))
        .ok_or_else(|| OperatorError::failed(format!("shift amount {amount} out of range (0-63)")))
}

// Arithmetic

fn add(args: &[Value]) -> OperatorResult {
    arith(args, i64::checked_add, |a, b| a + b)
}

fn sub(args: &[Value]) -> OperatorResult {
    arith(args, i64::checked_sub, |a, b| a - b)
}

fn mul(args: &[Value]) -> OperatorResult {
    arith(args, i64::checked_mul, |a, b| a * b)
}

/// Exact integer quotients stay integers; everything else is IEEE division.
fn div(args: &[Value]) -> OperatorResult {
    arith(
        args,
        |a, b| match a.checked_rem(b) {
            Some(0) => a.checked_div(b),
            _ => None,
        },
        |a, b| a / b,
    )
}

fn rem(args: &[Value]) -> OperatorResult {
    let [a, b] = operands::<2>(args)?;
    match (a, b) {
        (Value::Int(_), Value::Int(0)) => Err(OperatorError::failed("modulo by zero")),
        // i64::MIN % -1 is 0; wrapping_rem avoids the overflow trap.
        (Value::Int(x), Value::Int(y)) => Ok(Some(Value::Int(x.wrapping_rem(*y)))),
        _ => Ok(Some(Value::Float(number(a)? % number(b)?))),
    }
}

fn pow(args: &[Value]) -> OperatorResult {
    arith(
        args,
        |base, exp| u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp)),
        f64::powf,
    )
}

// Bitwise

fn bit_and(args: &[Value]) -> OperatorResult {
    bitwise(args, |a, b| a & b)
}

fn bit_xor(args: &[Value]) -> OperatorResult {
    bitwise(args, |a, b| a ^ b)
}

fn bit_or(args: &[Value]) -> OperatorResult {
    bitwise(args, |a, b| a | b)
}

fn shl(args: &[Value]) -> OperatorResult {
    shift(args, i64::checked_shl)
}

fn shr(args: &[Value]) -> OperatorResult {
    shift(args, i64::checked_shr)
}

// Prefix

fn plus(args: &[Value]) -> OperatorResult {
    let [a] = operands::<1>(args)?;
    if a.is_number() {
        Ok(Some(a.clone()))
    } else {
        Err(OperatorError::argument_type("number", a))
    }
}

fn minus(args: &[Value]) -> OperatorResult {
    let [a] = operands::<1>(args)?;
    match a {
        Value::Int(n) => match n.checked_neg() {
            Some(negated) => Ok(Some(Value::Int(negated))),
            None => Ok(Some(Value::Float(-number(a)?))),
        },
        Value::Float(x) => Ok(Some(Value::Float(-x))),
        Value::Literal(_) => Err(OperatorError::argument_type("number", a)),
    }
}

fn bit_not(args: &[Value]) -> OperatorResult {
    let [a] = operands::<1>(args)?;
    Ok(Some(Value::Int(!integer(a)?)))
}

#[cfg(test)]
mod tests;
