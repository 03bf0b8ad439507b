//! Integration tests for the rpn engine.
//!
//! These exercise the full pipeline (scan → convert → render, scan → evaluate)
//! through the public `Engine` surface.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use rpnc::{Engine, ErrorKind, OperatorError, Value};

fn generate(expression: &str) -> String {
    Engine::new().generate(expression).unwrap()
}

fn calculate(postfix: &str) -> Value {
    Engine::new().calculate(postfix).unwrap()
}

fn generate_err(expression: &str) -> ErrorKind {
    Engine::new().generate(expression).unwrap_err().kind()
}

fn calculate_err(postfix: &str) -> ErrorKind {
    Engine::new().calculate(postfix).unwrap_err().kind()
}

/// Engine with `sin` registered, taking degrees.
fn with_degree_sin() -> Engine {
    let mut engine = Engine::new();
    engine
        .register_operator("sin", 1, |args| {
            let degrees = args[0]
                .as_f64()
                .ok_or_else(|| OperatorError::argument_type("number", &args[0]))?;
            Ok(Some(Value::Float(degrees.to_radians().sin())))
        })
        .unwrap();
    engine
}

// =============================================================================
// Documented round trips
// =============================================================================

mod round_trips {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bracketed_product() {
        assert_eq!(generate("2*(5+7)"), "2 5 7 + *");
        assert_eq!(calculate("2 5 7 + *"), Value::Int(24));
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(generate("4**3**2"), "4 3 2 ** **");
        assert_eq!(calculate("4 3 2 ** **"), Value::Int(262_144));
    }

    #[test]
    fn signs_hex_and_bitwise_not() {
        let postfix = generate("~-5*4**(0x0f-12)**2");
        assert_eq!(postfix, "5 _ ~ 4 15 12 - 2 ** ** *");
        assert_eq!(calculate(&postfix), Value::Int(1_048_576));
    }

    #[test]
    fn custom_function_in_degrees() {
        let engine = with_degree_sin();
        let postfix = engine.generate("sin(45+45)").unwrap();
        assert_eq!(postfix, "45 45 + sin");
        let value = engine.calculate(&postfix).unwrap();
        assert!(value.approx_eq(&Value::Float(1.0), 1e-12), "{value}");
    }

    #[test]
    fn eval_matches_generate_then_calculate() {
        let engine = with_degree_sin();
        for expression in ["2*(5+7)", "4**3**2", "1<<4|3", "sin(30)*2", "-(3-10)%4"] {
            let via_string = engine
                .calculate(&engine.generate(expression).unwrap())
                .unwrap();
            let direct = engine.eval(expression).unwrap();
            assert!(direct.approx_eq(&via_string, 1e-12), "{expression}");
        }
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_operators() {
        assert_eq!(calculate("7 3 %"), Value::Int(1));
        assert_eq!(calculate("7 3 -"), Value::Int(4));
        assert_eq!(calculate("12 4 /"), Value::Int(3));
        assert_eq!(calculate("3 #"), Value::Int(3));
    }

    #[test]
    fn inexact_division_is_float() {
        assert_eq!(calculate("1 4 /"), Value::Float(0.25));
    }

    #[test]
    fn float_operands() {
        assert_eq!(calculate("1.5 2 *"), Value::Float(3.0));
        assert_eq!(calculate(".5 .25 +"), Value::Float(0.75));
    }

    #[test]
    fn overflow_promotes_to_float() {
        let engine = Engine::new();
        assert_eq!(
            engine.eval("9223372036854775807+1").unwrap(),
            Value::Float(9_223_372_036_854_775_808.0)
        );
    }

    #[test]
    fn bitwise_operators() {
        assert_eq!(calculate("12 10 &"), Value::Int(8));
        assert_eq!(calculate("12 10 ^"), Value::Int(6));
        assert_eq!(calculate("12 10 |"), Value::Int(14));
        assert_eq!(calculate("0 ~"), Value::Int(-1));
        assert_eq!(calculate("256 4 >>"), Value::Int(16));
    }

    #[test]
    fn precedence_tiers() {
        let engine = Engine::new();
        assert_eq!(engine.eval("1|6^3&5").unwrap(), Value::Int(1 | (6 ^ (3 & 5))));
        assert_eq!(engine.eval("1<<2+1").unwrap(), Value::Int(8));
        assert_eq!(engine.eval("2+3*4**2").unwrap(), Value::Int(50));
        assert_eq!(engine.eval("-2**2").unwrap(), Value::Int(4));
    }
}

// =============================================================================
// Failures
// =============================================================================

mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unmatched_brackets() {
        assert_eq!(generate_err("2+(3"), ErrorKind::UnmatchedBracket);
        assert_eq!(generate_err("2+)3"), ErrorKind::UnmatchedBracket);
    }

    #[test]
    fn operand_underflow() {
        assert_eq!(calculate_err("2 +"), ErrorKind::OperandUnderflow);
    }

    #[test]
    fn non_convergence() {
        assert_eq!(calculate_err("2 3"), ErrorKind::NonConvergence);
        assert_eq!(calculate_err(""), ErrorKind::NonConvergence);
    }

    #[test]
    fn unknown_infix_token() {
        let error = Engine::new().generate("2 + $x").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownToken);
        assert_eq!(error.to_string(), "unknown token at offset 4: `$x`");
    }

    #[test]
    fn unknown_postfix_operator() {
        assert_eq!(calculate_err("1 2 =>"), ErrorKind::UnknownOperator);
    }

    #[test]
    fn literal_to_builtin_is_argument_type() {
        assert_eq!(calculate_err("x 1 +"), ErrorKind::ArgumentType);
        assert_eq!(calculate_err("1.5 1 &"), ErrorKind::ArgumentType);
    }

    #[test]
    fn domain_failures() {
        assert_eq!(calculate_err("1 0 %"), ErrorKind::OperatorFailed);
        assert_eq!(calculate_err("1 64 <<"), ErrorKind::OperatorFailed);
    }

    #[test]
    fn oversized_hex_literal() {
        assert_eq!(generate_err("0x10000000000000000"), ErrorKind::InvalidNumber);
    }

    #[test]
    fn malformed_input_never_yields_partial_output() {
        let engine = Engine::new();
        for expression in ["(1+2", "1+2)", "1+(2*(3)", "1 + ?"] {
            assert!(engine.generate(expression).is_err(), "{expression}");
            assert!(engine.eval(expression).is_err(), "{expression}");
        }
    }
}

// =============================================================================
// Registry
// =============================================================================

mod registry {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reregistration_replaces_implementation() {
        let mut engine = Engine::new();
        engine
            .register_operator("f", 1, |_| Ok(Some(Value::Int(1))))
            .unwrap();
        assert_eq!(engine.calculate("0 f").unwrap(), Value::Int(1));

        engine
            .register_operator("f", 1, |_| Ok(Some(Value::Int(2))))
            .unwrap();
        assert_eq!(engine.calculate("0 f").unwrap(), Value::Int(2));
        assert_eq!(engine.eval("f(0)").unwrap(), Value::Int(2));
    }

    #[test]
    fn compiled_postfix_keeps_its_operators() {
        let mut engine = Engine::new();
        engine
            .register_operator("f", 1, |_| Ok(Some(Value::Int(1))))
            .unwrap();
        let compiled = engine.compile("f(0)").unwrap();
        engine
            .register_operator("f", 1, |_| Ok(Some(Value::Int(2))))
            .unwrap();
        assert_eq!(engine.evaluate(&compiled).unwrap(), Value::Int(1));
    }

    #[test]
    fn adjacent_functions_without_brackets() {
        let mut engine = Engine::new();
        engine
            .register_operator("neg", 1, |args| {
                let n = args[0]
                    .as_integral()
                    .ok_or_else(|| OperatorError::argument_type("integer", &args[0]))?;
                Ok(Some(Value::Int(-n)))
            })
            .unwrap();
        assert_eq!(engine.generate("neg neg 3").unwrap(), "3 neg neg");
        assert_eq!(engine.eval("neg neg 3").unwrap(), Value::Int(3));
        assert_eq!(engine.eval("neg neg neg 3+1").unwrap(), Value::Int(-2));
    }

    #[test]
    fn multi_argument_function() {
        let mut engine = Engine::new();
        engine
            .register_operator("max", 2, |args| {
                let [a, b] = [&args[0], &args[1]].map(|v| v.as_f64().unwrap_or(f64::NAN));
                Ok(Some(Value::Float(a.max(b))))
            })
            .unwrap();
        assert_eq!(engine.generate("max(1+2, -3)").unwrap(), "1 2 + 3 _ max");
        assert_eq!(engine.eval("max(1+2, -3)*2").unwrap(), Value::Float(6.0));
    }

    #[test]
    fn overriding_unary_minus() {
        let mut engine = Engine::new();
        engine
            .register_operator("_", 1, |_| Ok(Some(Value::Int(0))))
            .unwrap();
        assert_eq!(engine.calculate("5 _").unwrap(), Value::Int(0));
        // `-` keeps only its binary role, so a leading sign reads as subtraction.
        assert_eq!(engine.generate("3-1").unwrap(), "3 1 -");
        assert_eq!(engine.eval("-1").unwrap_err().kind(), ErrorKind::OperandUnderflow);
    }
}
