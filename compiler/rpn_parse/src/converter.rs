//! Shunting-yard converter.

use std::sync::Arc;

use rpn_ir::{OperatorSpec, OperatorTable, Postfix, PostfixToken};
use rpn_lexer::{InfixScanner, InfixTokenKind};
use tracing::{debug, trace};

use crate::ParseError;

/// Bounds on untrusted input.
///
/// Scanning tries every registered token at each position, so cost grows
/// with input length; nesting depth bounds the per-depth stack array.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_expression_len: usize,
    pub max_bracket_depth: usize,
}

impl Limits {
    pub const UNBOUNDED: Limits = Limits {
        max_expression_len: usize::MAX,
        max_bracket_depth: usize::MAX,
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Converts infix expressions to postfix against one operator table.
#[derive(Clone, Debug)]
pub struct Converter<'a> {
    table: &'a OperatorTable,
    limits: Limits,
}

impl<'a> Converter<'a> {
    pub fn new(table: &'a OperatorTable) -> Self {
        Converter {
            table,
            limits: Limits::UNBOUNDED,
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Convert `expression` to postfix.
    ///
    /// Fails on the first scanning error, on a `)` without a matching `(`,
    /// and on input that ends inside a bracket.
    #[tracing::instrument(level = "debug", skip(self), fields(len = expression.len()))]
    pub fn convert(&self, expression: &str) -> Result<Postfix, ParseError> {
        if expression.len() > self.limits.max_expression_len {
            return Err(ParseError::TooLong {
                len: expression.len(),
                max: self.limits.max_expression_len,
            });
        }

        let mut scanner = InfixScanner::new(expression, self.table);
        let mut state = ConverterState::new();

        while let Some(token) = scanner.next_token()? {
            match token.kind {
                InfixTokenKind::Number(value) => state.output.push(PostfixToken::Number(value)),
                InfixTokenKind::Operator(spec) => state.push_operator(spec),
                InfixTokenKind::OpenBracket => {
                    if state.depth >= self.limits.max_bracket_depth {
                        return Err(ParseError::TooDeep {
                            max: self.limits.max_bracket_depth,
                            offset: token.offset,
                        });
                    }
                    state.open();
                }
                InfixTokenKind::CloseBracket => state.close(token.offset)?,
                InfixTokenKind::Separator => state.drain_current(),
            }
        }

        let postfix = state.finish()?;
        debug!(%postfix, "converted");
        Ok(postfix)
    }
}

/// Convert `expression` with no input limits.
pub fn to_postfix(expression: &str, table: &OperatorTable) -> Result<Postfix, ParseError> {
    Converter::new(table).convert(expression)
}

/// Per-call conversion state.
///
/// `stacks[depth]` is the operator stack for the current bracket depth.
/// Every depth's stack is drained before the depth is left, so the stacks
/// above `depth` are always empty.
struct ConverterState {
    stacks: Vec<Vec<Arc<OperatorSpec>>>,
    depth: usize,
    output: Postfix,
}

impl ConverterState {
    fn new() -> Self {
        ConverterState {
            stacks: vec![Vec::new()],
            depth: 0,
            output: Postfix::new(),
        }
    }

    /// Shunting-yard push.
    ///
    /// Prefix operators and functions have no left operand, so they never
    /// pop: `sin cos 0` is `0 cos sin`. Otherwise everything that binds at
    /// least as tightly is moved to the output first, except that an
    /// equal-precedence right-associative operator stays on the stack: that
    /// is what makes `**` chains group right to left.
    fn push_operator(&mut self, spec: Arc<OperatorSpec>) {
        let stack = &mut self.stacks[self.depth];
        if !spec.is_leading() {
            while stack.last().is_some_and(|top| yields_to(top, &spec)) {
                let Some(top) = stack.pop() else { break };
                trace!(token = top.token(), "pop");
                self.output.push(PostfixToken::Operator(top));
            }
        }
        trace!(token = spec.token(), depth = self.depth, "push");
        stack.push(spec);
    }

    fn open(&mut self) {
        self.depth += 1;
        if self.stacks.len() <= self.depth {
            self.stacks.push(Vec::new());
        }
    }

    fn close(&mut self, offset: usize) -> Result<(), ParseError> {
        if self.depth == 0 {
            return Err(ParseError::UnmatchedClose { offset });
        }
        self.drain_current();
        self.depth -= 1;
        Ok(())
    }

    /// Move every operator at the current depth to the output, top first.
    fn drain_current(&mut self) {
        let stack = &mut self.stacks[self.depth];
        self.output
            .extend(stack.drain(..).rev().map(PostfixToken::Operator));
    }

    fn finish(mut self) -> Result<Postfix, ParseError> {
        if self.depth != 0 {
            return Err(ParseError::UnclosedOpen { depth: self.depth });
        }
        self.drain_current();
        Ok(self.output)
    }
}

/// Whether `top` must leave the stack before `incoming` is pushed.
fn yields_to(top: &OperatorSpec, incoming: &OperatorSpec) -> bool {
    top.precedence() > incoming.precedence()
        || (top.precedence() == incoming.precedence() && !incoming.is_right_associative())
}
