//! Lexer error types.

use thiserror::Error;

/// Maximum number of characters of unmatched input kept for diagnostics.
pub(crate) const PREVIEW_CHARS: usize = 10;

/// A scanning failure. Offsets are byte offsets into the scanned string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// Neither a number nor a registered operator starts here.
    #[error("unknown token at offset {offset}: `{preview}`")]
    UnknownToken { preview: String, offset: usize },

    /// A numeric literal that does not fit the value model.
    #[error("invalid numeric literal `{literal}` at offset {offset}")]
    InvalidNumber { literal: String, offset: usize },

    /// A postfix token made of operator glyphs that is not registered.
    #[error("unknown operator `{token}` at offset {offset}")]
    UnknownOperator { token: String, offset: usize },
}

impl LexError {
    pub(crate) fn unknown_token(rest: &str, offset: usize) -> Self {
        LexError::UnknownToken {
            preview: rest.chars().take(PREVIEW_CHARS).collect(),
            offset,
        }
    }

    /// Byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnknownToken { offset, .. }
            | LexError::InvalidNumber { offset, .. }
            | LexError::UnknownOperator { offset, .. } => *offset,
        }
    }
}
