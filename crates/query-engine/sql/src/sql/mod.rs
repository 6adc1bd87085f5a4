//! SQL AST, the low-level SQL string representation, and the conversion between them.

pub mod ast;
pub mod convert;
pub mod helpers;
pub mod string;
