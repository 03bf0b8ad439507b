//! Engine configuration.

use rpn_parse::Limits;

/// Default maximum input length, in bytes.
pub const MAX_EXPRESSION_LEN: usize = 65_536;

/// Default maximum bracket nesting.
pub const MAX_BRACKET_DEPTH: usize = 256;

/// Bounds applied to every input an [`Engine`](crate::Engine) accepts.
///
/// Scanning cost grows with input length times the number of registered
/// operators, so engines fed untrusted text should keep these finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Longest accepted input, infix or postfix.
    pub max_expression_len: usize,
    /// Deepest accepted bracket nesting in infix input.
    pub max_bracket_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_expression_len: MAX_EXPRESSION_LEN,
            max_bracket_depth: MAX_BRACKET_DEPTH,
        }
    }
}

impl EngineConfig {
    /// No limits at all.
    pub fn unbounded() -> Self {
        Self {
            max_expression_len: usize::MAX,
            max_bracket_depth: usize::MAX,
        }
    }

    #[must_use]
    pub fn with_max_expression_len(mut self, len: usize) -> Self {
        self.max_expression_len = len;
        self
    }

    #[must_use]
    pub fn with_max_bracket_depth(mut self, depth: usize) -> Self {
        self.max_bracket_depth = depth;
        self
    }

    pub(crate) fn limits(&self) -> Limits {
        Limits {
            max_expression_len: self.max_expression_len,
            max_bracket_depth: self.max_bracket_depth,
        }
    }
}
