//! rpn eval - postfix evaluation.
//!
//! A single-pass stack machine: operands are pushed, operators pop exactly
//! their arity, and the run succeeds only if one value is left.
//!
//! # Architecture
//!
//! - [`Evaluator`]: the stack machine over a compiled [`Postfix`]
//! - [`calculate`]: scans a postfix string and evaluates it
//! - [`EvalError`]: structural failures plus operator failures tagged with
//!   the token that raised them
//!
//! [`Postfix`]: rpn_ir::Postfix

mod error;
mod evaluator;

pub use error::EvalError;
pub use evaluator::{calculate, evaluate, Evaluator};
