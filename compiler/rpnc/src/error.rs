//! Engine errors.

use rpn_eval::EvalError;
use rpn_ir::RegistryError;
use rpn_lexer::LexError;
use rpn_parse::ParseError;
use thiserror::Error;

/// Anything an [`Engine`](crate::Engine) call can fail with.
///
/// Use [`Error::kind`] to branch on the failure without matching the
/// per-stage enums.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Postfix input longer than the configured maximum.
    #[error("input is {len} bytes long, the limit is {max}")]
    InputTooLong { len: usize, max: usize },
}

/// Failure categories callers can branch on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operator received an operand of the wrong type.
    ArgumentType,
    /// Infix text that is neither a number nor a registered operator.
    UnknownToken,
    /// A numeric literal outside the value model.
    InvalidNumber,
    /// `)` without `(`, or input ending inside a bracket.
    UnmatchedBracket,
    /// Postfix operator glyphs that are not registered.
    UnknownOperator,
    /// An operator needed more operands than were available.
    OperandUnderflow,
    /// Evaluation ended with a stack size other than one.
    NonConvergence,
    /// An operator implementation rejected its operands.
    OperatorFailed,
    /// Input too long or nested too deep.
    LimitExceeded,
    /// A token that cannot be registered.
    InvalidRegistration,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(error) => match error {
                ParseError::Lex(error) => lex_kind(error),
                ParseError::UnmatchedClose { .. } | ParseError::UnclosedOpen { .. } => {
                    ErrorKind::UnmatchedBracket
                }
                ParseError::TooLong { .. } | ParseError::TooDeep { .. } => {
                    ErrorKind::LimitExceeded
                }
            },
            Error::Eval(error) => match error {
                EvalError::Lex(error) => lex_kind(error),
                EvalError::OperandUnderflow { .. } => ErrorKind::OperandUnderflow,
                EvalError::NonConvergence { .. } => ErrorKind::NonConvergence,
                EvalError::ArgumentType { .. } => ErrorKind::ArgumentType,
                EvalError::OperatorFailed { .. } => ErrorKind::OperatorFailed,
            },
            Error::Registry(_) => ErrorKind::InvalidRegistration,
            Error::InputTooLong { .. } => ErrorKind::LimitExceeded,
        }
    }
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Error::Eval(EvalError::Lex(error))
    }
}

fn lex_kind(error: &LexError) -> ErrorKind {
    match error {
        LexError::UnknownToken { .. } => ErrorKind::UnknownToken,
        LexError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
        LexError::UnknownOperator { .. } => ErrorKind::UnknownOperator,
    }
}
