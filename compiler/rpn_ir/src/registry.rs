//! Operator registry.
//!
//! Maps canonical tokens to [`OperatorSpec`]s and answers the longest-match
//! questions both scanners ask. Two candidate lists are kept, one of infix
//! symbols and one of postfix tokens, each sorted by descending length so the
//! first hit is always the longest. Insertion order never matters.

use std::cmp::Reverse;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::operator::{OperatorFn, OperatorSpec};

/// Rejected registration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("cannot register operator `{token}`: {reason}")]
    InvalidToken { token: String, reason: &'static str },
}

/// Roles registered for one infix symbol.
///
/// Only `+` and `-` carry both: the sign operators and the binary ones.
#[derive(Clone, Debug, Default)]
struct SymbolRoles {
    prefix: Option<Arc<OperatorSpec>>,
    other: Option<Arc<OperatorSpec>>,
}

/// The operator registry.
#[derive(Clone, Debug, Default)]
pub struct OperatorTable {
    by_token: FxHashMap<String, Arc<OperatorSpec>>,
    by_symbol: FxHashMap<String, SymbolRoles>,
    /// Canonical tokens, longest first.
    tokens: Vec<String>,
    /// Infix symbols, longest first.
    symbols: Vec<String>,
}

impl OperatorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the built-in operators.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        crate::register_builtins(&mut table);
        table
    }

    /// Insert `spec`, replacing any entry with the same token.
    ///
    /// Returns the replaced spec. Specs already handed out stay valid; they
    /// just stop being returned by lookups.
    pub fn insert(&mut self, spec: OperatorSpec) -> Option<Arc<OperatorSpec>> {
        let spec = Arc::new(spec);
        let previous = self.by_token.insert(spec.token().to_owned(), spec);
        self.rebuild_indices();
        previous
    }

    /// Register a function-tier operator under `token`.
    ///
    /// Later registrations of the same token win. Returns `self` so calls can
    /// be chained.
    pub fn register(
        &mut self,
        token: &str,
        arity: usize,
        implementation: OperatorFn,
    ) -> Result<&mut Self, RegistryError> {
        validate_token(token)?;
        let replaced = self
            .insert(OperatorSpec::function(token, arity, implementation))
            .is_some();
        tracing::debug!(token, arity, replaced, "registered operator");
        Ok(self)
    }

    /// Look up a spec by its canonical (postfix) token.
    pub fn lookup(&self, token: &str) -> Option<&Arc<OperatorSpec>> {
        self.by_token.get(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.by_token.contains_key(token)
    }

    /// Longest registered postfix token that prefixes `input`.
    pub fn longest_token_at(&self, input: &str) -> Option<&Arc<OperatorSpec>> {
        self.tokens
            .iter()
            .find(|token| input.starts_with(token.as_str()))
            .and_then(|token| self.by_token.get(token))
    }

    /// Longest registered infix symbol that prefixes `input`.
    pub fn longest_symbol_at(&self, input: &str) -> Option<&str> {
        self.symbols
            .iter()
            .find(|symbol| input.starts_with(symbol.as_str()))
            .map(String::as_str)
    }

    /// Pick the spec an infix `symbol` stands for.
    ///
    /// In unary context a prefix role wins when one exists; otherwise the
    /// non-prefix role does. A symbol with a single role resolves to it
    /// either way.
    pub fn resolve_symbol(&self, symbol: &str, unary: bool) -> Option<&Arc<OperatorSpec>> {
        let roles = self.by_symbol.get(symbol)?;
        let (preferred, fallback) = if unary {
            (&roles.prefix, &roles.other)
        } else {
            (&roles.other, &roles.prefix)
        };
        preferred.as_ref().or(fallback.as_ref())
    }

    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }

    /// All registered specs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<OperatorSpec>> + '_ {
        self.by_token.values()
    }

    fn rebuild_indices(&mut self) {
        self.by_symbol.clear();
        for spec in self.by_token.values() {
            let roles = self.by_symbol.entry(spec.symbol().to_owned()).or_default();
            if spec.is_prefix() {
                roles.prefix = Some(Arc::clone(spec));
            } else {
                roles.other = Some(Arc::clone(spec));
            }
        }

        self.tokens = self.by_token.keys().cloned().collect();
        sort_longest_first(&mut self.tokens);
        self.symbols = self.by_symbol.keys().cloned().collect();
        sort_longest_first(&mut self.symbols);
    }
}

/// Descending byte length, ties broken lexicographically.
fn sort_longest_first(candidates: &mut [String]) {
    candidates.sort_by(|a, b| (Reverse(a.len()), a).cmp(&(Reverse(b.len()), b)));
}

fn validate_token(token: &str) -> Result<(), RegistryError> {
    let reason = if token.is_empty() {
        Some("token is empty")
    } else if token == "(" || token == ")" {
        Some("brackets are reserved")
    } else if token.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        Some("token would be read as a number")
    } else if token.contains(|c: char| c.is_whitespace() || c == ',') {
        Some("token contains a separator")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RegistryError::InvalidToken {
            token: token.to_owned(),
            reason,
        }),
        None => Ok(()),
    }
}
