//! rpn IR - shared types for the expression engine.
//!
//! This crate contains the data every stage of the pipeline agrees on:
//! - [`Value`]: numbers and pass-through literals
//! - [`OperatorSpec`]: precedence, arity, associativity, kind and implementation
//! - [`OperatorTable`]: the operator registry with longest-match queries
//! - [`Postfix`]: an ordered postfix token sequence and its canonical rendering
//!
//! # Design Philosophy
//!
//! - **One registry per engine**: no process-wide operator table.
//! - **Typed roles**: unary signs are `Prefix` operators that share the `+`/`-`
//!   glyph with their infix counterparts; the scanner picks a role, it never
//!   rewrites text.
//! - **Deterministic matching**: tokens are tried longest first, so `**` is
//!   never split into two `*`.

mod builtins;
mod operator;
mod postfix;
mod registry;
mod value;

pub use builtins::register_builtins;
pub use operator::{
    precedence, Associativity, OperatorError, OperatorFn, OperatorKind, OperatorResult,
    OperatorSpec,
};
pub use postfix::{Postfix, PostfixToken};
pub use registry::{OperatorTable, RegistryError};
pub use value::Value;
