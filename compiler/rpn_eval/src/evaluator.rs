//! Postfix stack machine.

use rpn_ir::{OperatorSpec, OperatorTable, Postfix, PostfixToken, Value};
use rpn_lexer::tokenize_postfix;
use tracing::{debug, trace, warn};

use crate::EvalError;

/// Value stack for one evaluation.
///
/// Tokens are fed front to back through [`Evaluator::step`]; nothing is ever
/// revisited. [`Evaluator::finish`] yields the result once the input is
/// exhausted.
#[derive(Debug, Default)]
pub struct Evaluator {
    stack: Vec<Value>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values currently on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Consume one token.
    pub fn step(&mut self, token: &PostfixToken) -> Result<(), EvalError> {
        match token {
            PostfixToken::Number(value) => self.stack.push(value.clone()),
            PostfixToken::Literal(text) => self.stack.push(Value::Literal(text.clone())),
            PostfixToken::Operator(spec) if spec.is_bracket() => {
                warn!(token = spec.token(), "bracket in postfix input, skipped");
            }
            PostfixToken::Operator(spec) => self.apply(spec)?,
        }
        Ok(())
    }

    fn apply(&mut self, spec: &OperatorSpec) -> Result<(), EvalError> {
        let arity = spec.arity();
        let available = self.stack.len();
        if available < arity {
            return Err(EvalError::OperandUnderflow {
                token: spec.token().to_owned(),
                arity,
                available,
            });
        }

        // split_off keeps the operands in push order: leftmost first.
        let args = self.stack.split_off(available - arity);
        let result = spec
            .apply(&args)
            .map_err(|error| EvalError::from_operator(spec.token(), error))?;
        trace!(token = spec.token(), ?args, ?result, "apply");

        if let Some(value) = result {
            self.stack.push(value);
        }
        Ok(())
    }

    /// The single value left on the stack.
    pub fn finish(mut self) -> Result<Value, EvalError> {
        match self.stack.pop() {
            Some(value) if self.stack.is_empty() => Ok(value),
            popped => Err(EvalError::NonConvergence {
                stack_size: self.stack.len() + usize::from(popped.is_some()),
            }),
        }
    }
}

/// Evaluate a compiled postfix sequence.
#[tracing::instrument(level = "debug", skip(postfix), fields(tokens = postfix.len()))]
pub fn evaluate(postfix: &Postfix) -> Result<Value, EvalError> {
    let mut evaluator = Evaluator::new();
    for token in postfix {
        evaluator.step(token)?;
    }
    let value = evaluator.finish()?;
    debug!(%value, "evaluated");
    Ok(value)
}

/// Scan `input` as postfix against `table` and evaluate it.
pub fn calculate(input: &str, table: &OperatorTable) -> Result<Value, EvalError> {
    let postfix = tokenize_postfix(input, table)?;
    evaluate(&postfix)
}
