//! The expression engine.

use std::sync::Arc;

use rpn_eval::evaluate;
use rpn_ir::{OperatorResult, OperatorTable, Postfix, Value};
use rpn_parse::Converter;
use tracing::debug;

use crate::{EngineConfig, Error};

/// An operator registry plus the limits applied to input.
///
/// Each engine owns its registry: operators registered on one engine are
/// invisible to every other. Conversion and evaluation borrow the engine
/// immutably, so a `&Engine` can be shared across threads once setup is
/// done; see [`SharedEngine`](crate::SharedEngine) for registering while
/// other threads evaluate.
#[derive(Clone, Debug)]
pub struct Engine {
    table: OperatorTable,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine with the built-in operators and default limits.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        debug!(?config, "engine created");
        Engine {
            table: OperatorTable::with_builtins(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The operator registry.
    pub fn operators(&self) -> &OperatorTable {
        &self.table
    }

    /// Register `token` as a function-tier operator taking `arity` operands.
    ///
    /// Re-registering a token replaces it for every later call. `Postfix`
    /// values compiled earlier keep the implementation they were built with.
    pub fn register_operator<F>(
        &mut self,
        token: &str,
        arity: usize,
        implementation: F,
    ) -> Result<&mut Self, Error>
    where
        F: Fn(&[Value]) -> OperatorResult + Send + Sync + 'static,
    {
        self.table.register(token, arity, Arc::new(implementation))?;
        Ok(self)
    }

    /// Convert infix to a postfix token sequence.
    pub fn compile(&self, expression: &str) -> Result<Postfix, Error> {
        let postfix = Converter::new(&self.table)
            .with_limits(self.config.limits())
            .convert(expression)?;
        Ok(postfix)
    }

    /// Convert infix to its canonical postfix string.
    pub fn generate(&self, expression: &str) -> Result<String, Error> {
        self.compile(expression).map(|postfix| postfix.to_string())
    }

    /// Scan a postfix string into tokens.
    pub fn tokenize_postfix(&self, input: &str) -> Result<Postfix, Error> {
        if input.len() > self.config.max_expression_len {
            return Err(Error::InputTooLong {
                len: input.len(),
                max: self.config.max_expression_len,
            });
        }
        Ok(rpn_lexer::tokenize_postfix(input, &self.table)?)
    }

    /// Evaluate an already scanned or compiled postfix sequence.
    #[expect(
        clippy::unused_self,
        reason = "compiled postfix carries its operators; kept a method for symmetry"
    )]
    pub fn evaluate(&self, postfix: &Postfix) -> Result<Value, Error> {
        Ok(evaluate(postfix)?)
    }

    /// Evaluate a postfix string.
    pub fn calculate(&self, input: &str) -> Result<Value, Error> {
        let postfix = self.tokenize_postfix(input)?;
        self.evaluate(&postfix)
    }

    /// Evaluate infix directly, without rendering the postfix string.
    pub fn eval(&self, expression: &str) -> Result<Value, Error> {
        let postfix = self.compile(expression)?;
        self.evaluate(&postfix)
    }
}
