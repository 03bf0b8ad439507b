//! Parse error types.

use rpn_lexer::LexError;
use thiserror::Error;

/// Why an infix expression could not be converted.
///
/// No partial postfix is ever returned alongside one of these.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// `)` with no matching `(`.
    #[error("unmatched `)` at offset {offset}")]
    UnmatchedClose { offset: usize },

    /// Input ended inside `depth` open brackets.
    #[error("input ended with {depth} unclosed `(`")]
    UnclosedOpen { depth: usize },

    /// Input longer than the configured maximum.
    #[error("expression is {len} bytes long, the limit is {max}")]
    TooLong { len: usize, max: usize },

    /// Brackets nested deeper than the configured maximum.
    #[error("brackets nested deeper than {max} at offset {offset}")]
    TooDeep { max: usize, offset: usize },
}
