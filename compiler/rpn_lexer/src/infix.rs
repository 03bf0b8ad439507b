//! Incremental infix scanner.
//!
//! Produces one token per [`InfixScanner::next_token`] call. The scanner owns
//! the unary-context flag: it is set at the start of input, after `(`, after
//! a comma and after any operator that takes operands. It is cleared after a
//! number, a `)` or a nullary operator. In unary context a symbol with a
//! prefix role (`+`, `-`) resolves to that role.
//!
//! Whitespace is skipped. Commas are consumed too, but reported as
//! [`InfixTokenKind::Separator`] so function arguments can be delimited.

use std::sync::Arc;

use rpn_ir::{OperatorSpec, OperatorTable, Value};
use tracing::trace;

use crate::number::{parse_numeric, scan_number, Numeric};
use crate::LexError;

/// What an infix token is.
#[derive(Clone, Debug, PartialEq)]
pub enum InfixTokenKind {
    Number(Value),
    /// A non-bracket operator with its role already resolved.
    Operator(Arc<OperatorSpec>),
    OpenBracket,
    CloseBracket,
    /// `,` between function arguments.
    Separator,
}

/// An infix token and the byte offset it starts at.
#[derive(Clone, Debug, PartialEq)]
pub struct InfixToken {
    pub kind: InfixTokenKind,
    pub offset: usize,
}

/// Scanner over infix text.
pub struct InfixScanner<'a> {
    source: &'a str,
    pos: usize,
    unary: bool,
    table: &'a OperatorTable,
}

impl<'a> InfixScanner<'a> {
    pub fn new(source: &'a str, table: &'a OperatorTable) -> Self {
        InfixScanner {
            source,
            pos: 0,
            unary: true,
            table,
        }
    }

    /// Byte offset of the next unread character.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether a `+`/`-` read next would be a sign.
    pub fn in_unary_context(&self) -> bool {
        self.unary
    }

    /// Whether all input has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Scan the next token. `Ok(None)` means the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<InfixToken>, LexError> {
        self.skip_whitespace();
        let source = self.source;
        let rest = &source[self.pos..];
        if rest.is_empty() {
            return Ok(None);
        }
        let offset = self.pos;

        if rest.starts_with(',') {
            self.pos += 1;
            self.unary = true;
            trace!(offset, "separator");
            return Ok(Some(InfixToken {
                kind: InfixTokenKind::Separator,
                offset,
            }));
        }

        if let Some(len) = scan_number(rest) {
            let lexeme = &rest[..len];
            let value = match parse_numeric(lexeme) {
                Numeric::Number(value) => value,
                Numeric::OutOfRange | Numeric::NotNumeric => {
                    return Err(LexError::InvalidNumber {
                        literal: lexeme.to_owned(),
                        offset,
                    });
                }
            };
            self.pos += len;
            self.unary = false;
            trace!(offset, %value, "number");
            return Ok(Some(InfixToken {
                kind: InfixTokenKind::Number(value),
                offset,
            }));
        }

        let table = self.table;
        let Some(symbol) = table.longest_symbol_at(rest) else {
            return Err(LexError::unknown_token(rest, offset));
        };
        let Some(spec) = table.resolve_symbol(symbol, self.unary) else {
            return Err(LexError::unknown_token(rest, offset));
        };
        self.pos += symbol.len();

        let kind = if spec.is_bracket() && symbol == "(" {
            self.unary = true;
            InfixTokenKind::OpenBracket
        } else if spec.is_bracket() {
            self.unary = false;
            InfixTokenKind::CloseBracket
        } else {
            // A sign or operator may itself be followed by a sign. A nullary
            // operator stands for a value.
            self.unary = spec.arity() > 0;
            InfixTokenKind::Operator(Arc::clone(spec))
        };
        trace!(offset, symbol, token = spec.token(), "operator");
        Ok(Some(InfixToken { kind, offset }))
    }

    fn skip_whitespace(&mut self) {
        let source = self.source;
        let rest = &source[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }
}

impl Iterator for InfixScanner<'_> {
    type Item = Result<InfixToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
