//! Evaluation error types.

use rpn_ir::OperatorError;
use rpn_lexer::LexError;
use thiserror::Error;

/// Why a postfix expression produced no value.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// An operator needed more operands than the stack held.
    #[error("operator `{token}` needs {arity} operands, {available} available")]
    OperandUnderflow {
        token: String,
        arity: usize,
        available: usize,
    },

    /// Input ran out with a stack size other than one.
    #[error("expression left {stack_size} values on the stack, expected exactly 1")]
    NonConvergence { stack_size: usize },

    /// An operand had the wrong type for the operator.
    #[error("operator `{token}` expected {expected} operand, got {got}")]
    ArgumentType {
        token: String,
        expected: &'static str,
        got: &'static str,
    },

    /// The operator implementation rejected its operands.
    #[error("operator `{token}` failed: {message}")]
    OperatorFailed { token: String, message: String },
}

impl EvalError {
    /// Attach the failing operator's token to an implementation error.
    pub(crate) fn from_operator(token: &str, error: OperatorError) -> Self {
        match error {
            OperatorError::ArgumentType { expected, got } => EvalError::ArgumentType {
                token: token.to_owned(),
                expected,
                got,
            },
            OperatorError::Arity { .. } | OperatorError::Failed(_) => EvalError::OperatorFailed {
                token: token.to_owned(),
                message: error.to_string(),
            },
        }
    }
}
