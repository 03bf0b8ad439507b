//! Operator specifications.
//!
//! Every token the engine understands is described by an [`OperatorSpec`]:
//! how tightly it binds, how many operands it takes, which way ties group,
//! what role it plays in infix text, and the function that evaluates it.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::Value;

/// Result of applying an operator: `None` means the operator produced no value.
pub type OperatorResult = Result<Option<Value>, OperatorError>;

/// Pluggable evaluation strategy.
///
/// Receives exactly `arity` operands, leftmost first.
pub type OperatorFn = Arc<dyn Fn(&[Value]) -> OperatorResult + Send + Sync>;

/// Precedence tiers. Higher binds tighter.
///
/// These numbers are part of the engine's compatibility surface; postfix
/// produced by other implementations depends on them.
pub mod precedence {
    pub const BRACKET: u8 = 20;
    pub const FUNCTION: u8 = 18;
    pub const PREFIX: u8 = 16;
    pub const POWER: u8 = 15;
    pub const MULTIPLICATIVE: u8 = 14;
    pub const ADDITIVE: u8 = 13;
    pub const SHIFT: u8 = 12;
    pub const BIT_AND: u8 = 9;
    pub const BIT_XOR: u8 = 8;
    pub const BIT_OR: u8 = 7;
}

/// Role an operator plays when it appears in infix text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// `(` and `)`: structure only, never evaluated.
    Bracket,
    /// Unary operator written before its operand (`-x`, `~x`).
    Prefix,
    /// Binary operator written between its operands.
    Infix,
    /// User-registered operator, written like a function call.
    Function,
}

/// Tie-break direction for operators of equal precedence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Associativity {
    None,
    Left,
    Right,
}

/// Failure reported by an operator implementation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OperatorError {
    /// An operand had the wrong type for this operator.
    #[error("expected {expected} operand, got {got}")]
    ArgumentType {
        expected: &'static str,
        got: &'static str,
    },
    /// The implementation was handed the wrong number of operands.
    #[error("expected {expected} operands, got {got}")]
    Arity { expected: usize, got: usize },
    /// Domain failure (modulo by zero, shift out of range, ...).
    #[error("{0}")]
    Failed(String),
}

impl OperatorError {
    /// Shorthand for [`OperatorError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        OperatorError::Failed(message.into())
    }

    /// Type error for `value` where `expected` was required.
    pub fn argument_type(expected: &'static str, value: &Value) -> Self {
        OperatorError::ArgumentType {
            expected,
            got: value.type_name(),
        }
    }
}

/// Everything the scanners, converter and evaluator need to know about a token.
#[derive(Clone)]
pub struct OperatorSpec {
    token: String,
    symbol: String,
    precedence: u8,
    arity: usize,
    associativity: Associativity,
    kind: OperatorKind,
    implementation: OperatorFn,
}

impl OperatorSpec {
    /// Create a spec whose infix symbol differs from its postfix token.
    ///
    /// Used for the sign operators, which are written `+`/`-` in infix text
    /// and `#`/`_` in postfix.
    pub fn new(
        token: impl Into<String>,
        symbol: impl Into<String>,
        kind: OperatorKind,
        precedence: u8,
        arity: usize,
        associativity: Associativity,
        implementation: OperatorFn,
    ) -> Self {
        OperatorSpec {
            token: token.into(),
            symbol: symbol.into(),
            precedence,
            arity,
            associativity,
            kind,
            implementation,
        }
    }

    /// A bracket. Evaluating it produces nothing.
    pub fn bracket(token: &str) -> Self {
        Self::new(
            token,
            token,
            OperatorKind::Bracket,
            precedence::BRACKET,
            0,
            Associativity::None,
            Arc::new(|_| Ok(None)),
        )
    }

    /// A user-registered operator at the function tier.
    pub fn function(token: impl Into<String>, arity: usize, implementation: OperatorFn) -> Self {
        let token = token.into();
        Self::new(
            token.clone(),
            token,
            OperatorKind::Function,
            precedence::FUNCTION,
            arity,
            Associativity::Left,
            implementation,
        )
    }

    /// Canonical token, as written in postfix.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Glyph matched in infix text.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn kind(&self) -> OperatorKind {
        self.kind
    }

    pub fn is_bracket(&self) -> bool {
        self.kind == OperatorKind::Bracket
    }

    pub fn is_prefix(&self) -> bool {
        self.kind == OperatorKind::Prefix
    }

    pub fn is_right_associative(&self) -> bool {
        self.associativity == Associativity::Right
    }

    /// Written before its operands in infix text (`-x`, `sin(x)`).
    pub fn is_leading(&self) -> bool {
        matches!(self.kind, OperatorKind::Prefix | OperatorKind::Function)
    }

    /// Evaluate the operator on `args`, which must hold exactly `arity` values.
    pub fn apply(&self, args: &[Value]) -> OperatorResult {
        if args.len() != self.arity {
            return Err(OperatorError::Arity {
                expected: self.arity,
                got: args.len(),
            });
        }
        (self.implementation)(args)
    }
}

/// Specs compare by canonical token.
impl PartialEq for OperatorSpec {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl fmt::Debug for OperatorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorSpec")
            .field("token", &self.token)
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .field("arity", &self.arity)
            .field("associativity", &self.associativity)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
