//! rpn parse - infix to postfix conversion.
//!
//! Implements the shunting-yard algorithm with one operator stack per
//! bracket depth. Opening a bracket starts a fresh stack; closing it drains
//! that stack into the output. Brackets themselves never reach the output.
//!
//! # Usage
//!
//! ```
//! use rpn_ir::OperatorTable;
//! use rpn_parse::Converter;
//!
//! # fn main() -> Result<(), rpn_parse::ParseError> {
//! let table = OperatorTable::with_builtins();
//! let postfix = Converter::new(&table).convert("2*(5+7)")?;
//! assert_eq!(postfix.to_string(), "2 5 7 + *");
//! # Ok(())
//! # }
//! ```

mod converter;
mod error;

pub use converter::{to_postfix, Converter, Limits};
pub use error::ParseError;
