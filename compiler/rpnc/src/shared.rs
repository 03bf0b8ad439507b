//! Engine behind a read-write lock.

use std::sync::Arc;

use parking_lot::RwLock;
use rpn_ir::{OperatorResult, Value};

use crate::{Engine, Error};

/// A cloneable handle to one engine, safe to use from many threads.
///
/// Conversion and evaluation take a read lock, registration a write lock, so
/// a registration waits for in-flight calls and every later call sees it.
/// Clones share the same registry.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        SharedEngine {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn generate(&self, expression: &str) -> Result<String, Error> {
        self.inner.read().generate(expression)
    }

    pub fn calculate(&self, input: &str) -> Result<Value, Error> {
        self.inner.read().calculate(input)
    }

    pub fn eval(&self, expression: &str) -> Result<Value, Error> {
        self.inner.read().eval(expression)
    }

    /// Register an operator; see [`Engine::register_operator`].
    pub fn register_operator<F>(
        &self,
        token: &str,
        arity: usize,
        implementation: F,
    ) -> Result<&Self, Error>
    where
        F: Fn(&[Value]) -> OperatorResult + Send + Sync + 'static,
    {
        self.inner
            .write()
            .register_operator(token, arity, implementation)?;
        Ok(self)
    }

    /// Run `f` with shared access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&Engine) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<Engine> for SharedEngine {
    fn from(engine: Engine) -> Self {
        Self::new(engine)
    }
}
