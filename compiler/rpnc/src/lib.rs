//! rpnc - embeddable infix/postfix expression engine.
//!
//! Converts infix arithmetic and bitwise expressions to postfix and evaluates
//! postfix against an extensible operator registry.
//!
//! # Architecture
//!
//! ```text
//! infix ──► InfixScanner ──► Converter ──► Postfix ──► "2 5 7 + *"
//!                                             │
//! "2 5 7 + *" ──► tokenize_postfix ──────────►│
//!                                             ▼
//!                                         Evaluator ──► Value
//! ```
//!
//! Every stage reads the [`Engine`]'s own [`OperatorTable`]; registering an
//! operator is the only mutation.
//!
//! # Usage
//!
//! ```
//! use rpnc::{Engine, OperatorError, Value};
//!
//! # fn main() -> Result<(), rpnc::Error> {
//! let mut engine = Engine::new();
//! engine.register_operator("double", 1, |args| {
//!     let n = args[0]
//!         .as_integral()
//!         .ok_or_else(|| OperatorError::argument_type("integer", &args[0]))?;
//!     Ok(Some(Value::Int(n * 2)))
//! })?;
//! assert_eq!(engine.generate("double(45+45)")?, "45 45 + double");
//! assert_eq!(engine.eval("double(45+45)")?, Value::Int(180));
//! assert_eq!(engine.calculate("2 5 7 + *")?, Value::Int(24));
//! # Ok(())
//! # }
//! ```

mod config;
mod engine;
mod error;
mod shared;
mod tracing_setup;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{Error, ErrorKind};
pub use shared::SharedEngine;
pub use tracing_setup::init_tracing;

// The value and operator types callers need to write extension operators.
pub use rpn_ir::{
    precedence, OperatorError, OperatorFn, OperatorKind, OperatorResult, OperatorSpec,
    OperatorTable, Postfix, PostfixToken, Value,
};
