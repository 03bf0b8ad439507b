#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

fn apply(token: &str, args: &[Value]) -> OperatorResult {
    let table = OperatorTable::with_builtins();
    table.lookup(token).unwrap().apply(args)
}

fn value(token: &str, args: &[Value]) -> Value {
    apply(token, args).unwrap().unwrap()
}

// === Registration ===

#[test]
fn all_builtins_are_registered() {
    let table = OperatorTable::with_builtins();
    for token in [
        "(", ")", "#", "_", "~", "**", "*", "/", "%", "+", "-", "<<", ">>", "&", "^", "|",
    ] {
        assert!(table.contains(token), "missing builtin `{token}`");
    }
    assert_eq!(table.len(), 16);
}

#[test]
fn builtin_precedence_tiers() {
    let table = OperatorTable::with_builtins();
    let tier = |token: &str| table.lookup(token).unwrap().precedence();
    assert_eq!(tier("("), 20);
    assert_eq!(tier(")"), 20);
    assert_eq!(tier("_"), 16);
    assert_eq!(tier("#"), 16);
    assert_eq!(tier("~"), 16);
    assert_eq!(tier("**"), 15);
    assert_eq!(tier("*"), 14);
    assert_eq!(tier("/"), 14);
    assert_eq!(tier("%"), 14);
    assert_eq!(tier("+"), 13);
    assert_eq!(tier("-"), 13);
    assert_eq!(tier("<<"), 12);
    assert_eq!(tier(">>"), 12);
    assert_eq!(tier("&"), 9);
    assert_eq!(tier("^"), 8);
    assert_eq!(tier("|"), 7);
}

#[test]
fn signs_are_prefix_roles_of_plus_and_minus() {
    let table = OperatorTable::with_builtins();
    let minus = table.lookup("_").unwrap();
    assert_eq!(minus.symbol(), "-");
    assert_eq!(minus.kind(), OperatorKind::Prefix);
    assert!(minus.is_right_associative());
    assert_eq!(table.lookup("#").unwrap().symbol(), "+");
    assert!(table.lookup("**").unwrap().is_right_associative());
    assert_eq!(
        table.lookup("-").unwrap().associativity(),
        Associativity::Left
    );
}

// === Arithmetic ===

#[test]
fn integer_arithmetic() {
    assert_eq!(value("+", &[Value::Int(2), Value::Int(3)]), Value::Int(5));
    assert_eq!(value("-", &[Value::Int(2), Value::Int(3)]), Value::Int(-1));
    assert_eq!(value("*", &[Value::Int(4), Value::Int(6)]), Value::Int(24));
    assert_eq!(value("**", &[Value::Int(4), Value::Int(9)]), Value::Int(262_144));
}

#[test]
fn operand_order_is_left_to_right() {
    assert_eq!(value("-", &[Value::Int(10), Value::Int(4)]), Value::Int(6));
    assert_eq!(value("/", &[Value::Int(12), Value::Int(4)]), Value::Int(3));
    assert_eq!(value("<<", &[Value::Int(1), Value::Int(4)]), Value::Int(16));
}

#[test]
fn overflow_falls_back_to_float() {
    assert_eq!(
        value("+", &[Value::Int(i64::MAX), Value::Int(1)]),
        Value::Float(9_223_372_036_854_775_808.0)
    );
    assert_eq!(
        value("**", &[Value::Int(2), Value::Int(64)]),
        Value::Float(18_446_744_073_709_551_616.0)
    );
    assert_eq!(
        value("_", &[Value::Int(i64::MIN)]),
        Value::Float(9_223_372_036_854_775_808.0)
    );
}

#[test]
fn division_stays_integral_only_when_exact() {
    assert_eq!(value("/", &[Value::Int(7), Value::Int(2)]), Value::Float(3.5));
    assert_eq!(value("/", &[Value::Int(-9), Value::Int(3)]), Value::Int(-3));
    assert_eq!(
        value("/", &[Value::Int(1), Value::Int(0)]),
        Value::Float(f64::INFINITY)
    );
}

#[test]
fn negative_exponent_uses_float_power() {
    assert_eq!(value("**", &[Value::Int(2), Value::Int(-1)]), Value::Float(0.5));
    assert_eq!(
        value("**", &[Value::Float(2.0), Value::Int(3)]),
        Value::Float(8.0)
    );
}

#[test]
fn mixed_operands_promote_to_float() {
    assert_eq!(value("+", &[Value::Int(1), Value::Float(0.5)]), Value::Float(1.5));
    assert_eq!(value("*", &[Value::Float(2.0), Value::Int(3)]), Value::Float(6.0));
}

#[test]
fn remainder() {
    assert_eq!(value("%", &[Value::Int(7), Value::Int(3)]), Value::Int(1));
    assert_eq!(value("%", &[Value::Int(-7), Value::Int(3)]), Value::Int(-1));
    assert_eq!(value("%", &[Value::Int(i64::MIN), Value::Int(-1)]), Value::Int(0));
    assert_eq!(value("%", &[Value::Float(7.5), Value::Int(2)]), Value::Float(1.5));
}

#[test]
fn remainder_by_zero_fails() {
    assert_eq!(
        apply("%", &[Value::Int(1), Value::Int(0)]),
        Err(OperatorError::failed("modulo by zero"))
    );
}

// === Bitwise ===

#[test]
fn bitwise_operators() {
    assert_eq!(value("&", &[Value::Int(0b1100), Value::Int(0b1010)]), Value::Int(0b1000));
    assert_eq!(value("|", &[Value::Int(0b1100), Value::Int(0b1010)]), Value::Int(0b1110));
    assert_eq!(value("^", &[Value::Int(0b1100), Value::Int(0b1010)]), Value::Int(0b0110));
    assert_eq!(value(">>", &[Value::Int(-16), Value::Int(2)]), Value::Int(-4));
    assert_eq!(value("~", &[Value::Int(-5)]), Value::Int(4));
}

#[test]
fn bitwise_accepts_whole_floats() {
    assert_eq!(value("&", &[Value::Float(6.0), Value::Int(3)]), Value::Int(2));
}

#[test]
fn bitwise_rejects_fractions() {
    assert_eq!(
        apply("|", &[Value::Float(1.5), Value::Int(1)]),
        Err(OperatorError::ArgumentType {
            expected: "integer",
            got: "float"
        })
    );
}

#[test]
fn shift_out_of_range_fails() {
    assert!(matches!(
        apply("<<", &[Value::Int(1), Value::Int(64)]),
        Err(OperatorError::Failed(_))
    ));
    assert!(matches!(
        apply(">>", &[Value::Int(1), Value::Int(-1)]),
        Err(OperatorError::Failed(_))
    ));
}

// === Prefix ===

#[test]
fn signs() {
    assert_eq!(value("_", &[Value::Int(5)]), Value::Int(-5));
    assert_eq!(value("_", &[Value::Float(0.5)]), Value::Float(-0.5));
    assert_eq!(value("#", &[Value::Int(5)]), Value::Int(5));
}

#[test]
fn literals_are_rejected_by_builtins() {
    let literal = Value::Literal("abc".into());
    assert_eq!(
        apply("+", &[literal.clone(), Value::Int(1)]),
        Err(OperatorError::ArgumentType {
            expected: "number",
            got: "literal"
        })
    );
    assert!(apply("#", &[literal.clone()]).is_err());
    assert!(apply("~", &[literal]).is_err());
}

#[test]
fn brackets_produce_nothing() {
    assert_eq!(apply("(", &[]), Ok(None));
}

#[test]
fn wrong_operand_count_is_reported() {
    assert_eq!(
        apply("+", &[Value::Int(1)]),
        Err(OperatorError::Arity {
            expected: 2,
            got: 1
        })
    );
}
