//! rpn lexer - turns text into tokens.
//!
//! Two scanners share the operator registry:
//!
//! - [`InfixScanner`]: incremental, one token per call, tracks whether the
//!   next `+`/`-` is a sign or a binary operator.
//! - [`tokenize_postfix`]: splits a postfix string into a [`Postfix`]
//!   sequence, finding operator glyphs even when they are not separated from
//!   their operands.
//!
//! Both try operators longest-first through [`OperatorTable`], so `**` is
//! never read as two `*`.
//!
//! [`Postfix`]: rpn_ir::Postfix
//! [`OperatorTable`]: rpn_ir::OperatorTable

mod error;
mod infix;
mod number;
mod postfix;

pub use error::LexError;
pub use infix::{InfixScanner, InfixToken, InfixTokenKind};
pub use postfix::tokenize_postfix;

/// Whitespace and commas separate tokens in both notations.
#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}
