//! Postfix tokenizer.
//!
//! The input is split on whitespace and commas. A chunk that is exactly a
//! registered token is an operator. Any other chunk is scanned once, left to
//! right: at each position the longest registered token starting there is
//! emitted as an operator, and the text between matches becomes operands.
//! So `2 3+` and `2,3 +` both read as `2 3 +`.
//!
//! Operands are numbers when they parse as one (`0x` prefixes are radix 16),
//! otherwise opaque literals. A chunk made only of ASCII punctuation is
//! clearly meant as an operator, so an unregistered one is an error rather
//! than a literal.

use std::sync::Arc;

use rpn_ir::{OperatorTable, Postfix, PostfixToken};
use tracing::trace;

use crate::number::{parse_numeric, Numeric};
use crate::{is_separator, LexError};

/// Split `input` into postfix tokens resolved against `table`.
pub fn tokenize_postfix(input: &str, table: &OperatorTable) -> Result<Postfix, LexError> {
    let mut out = Postfix::new();
    for (offset, chunk) in chunks(input) {
        if let Some(spec) = table.lookup(chunk) {
            trace!(offset, token = chunk, "operator");
            out.push(PostfixToken::Operator(Arc::clone(spec)));
        } else {
            scan_chunk(chunk, offset, table, &mut out)?;
        }
    }
    Ok(out)
}

/// Non-empty separator-delimited chunks with their byte offsets.
fn chunks(input: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    let mut pos = 0;
    std::iter::from_fn(move || {
        let rest = &input[pos..];
        let start = pos + (rest.len() - rest.trim_start_matches(is_separator).len());
        let tail = &input[start..];
        if tail.is_empty() {
            pos = input.len();
            return None;
        }
        let len = tail.find(is_separator).unwrap_or(tail.len());
        pos = start + len;
        Some((start, &tail[..len]))
    })
}

/// Emit the operators embedded in `chunk` and the operands between them.
fn scan_chunk(
    chunk: &str,
    offset: usize,
    table: &OperatorTable,
    out: &mut Postfix,
) -> Result<(), LexError> {
    let mut operand_start = 0;
    let mut pos = 0;

    while pos < chunk.len() {
        let rest = &chunk[pos..];
        if let Some(spec) = table.longest_token_at(rest) {
            if pos > operand_start {
                out.push(operand(&chunk[operand_start..pos], offset + operand_start)?);
            }
            trace!(offset = offset + pos, token = spec.token(), "embedded operator");
            out.push(PostfixToken::Operator(Arc::clone(spec)));
            pos += spec.token().len();
            operand_start = pos;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    if operand_start < chunk.len() {
        out.push(operand(&chunk[operand_start..], offset + operand_start)?);
    }
    Ok(())
}

fn operand(text: &str, offset: usize) -> Result<PostfixToken, LexError> {
    match parse_numeric(text) {
        Numeric::Number(value) => {
            trace!(offset, %value, "number");
            Ok(PostfixToken::Number(value))
        }
        Numeric::OutOfRange => Err(LexError::InvalidNumber {
            literal: text.to_owned(),
            offset,
        }),
        Numeric::NotNumeric if text.chars().all(|c| c.is_ascii_punctuation()) => {
            Err(LexError::UnknownOperator {
                token: text.to_owned(),
                offset,
            })
        }
        Numeric::NotNumeric => {
            trace!(offset, literal = text, "literal");
            Ok(PostfixToken::Literal(text.to_owned()))
        }
    }
}
