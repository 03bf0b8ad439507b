//! Postfix token sequences.
//!
//! A [`Postfix`] is what the converter produces and what the evaluator
//! consumes. Operator tokens hold the spec they were resolved to, so a
//! compiled expression keeps working after the registry changes.

use std::fmt;
use std::sync::Arc;

use crate::{OperatorSpec, Value};

/// One token of a postfix expression.
///
/// Operators compare by canonical token.
#[derive(Clone, Debug, PartialEq)]
pub enum PostfixToken {
    Number(Value),
    /// Non-numeric operand passed through to operators untouched.
    Literal(String),
    Operator(Arc<OperatorSpec>),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixToken::Number(value) => write!(f, "{value}"),
            PostfixToken::Literal(text) => f.write_str(text),
            PostfixToken::Operator(spec) => f.write_str(spec.token()),
        }
    }
}

/// An ordered postfix expression.
///
/// `Display` renders the canonical postfix string: tokens separated by single
/// spaces, numbers in decimal form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: PostfixToken) {
        self.tokens.push(token);
    }

    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostfixToken> {
        self.tokens.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl FromIterator<PostfixToken> for Postfix {
    fn from_iter<I: IntoIterator<Item = PostfixToken>>(iter: I) -> Self {
        Postfix {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Extend<PostfixToken> for Postfix {
    fn extend<I: IntoIterator<Item = PostfixToken>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl IntoIterator for Postfix {
    type Item = PostfixToken;
    type IntoIter = std::vec::IntoIter<PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a PostfixToken;
    type IntoIter = std::slice::Iter<'a, PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
