//! Translate an incoming filter tree to a SQL predicate AST.

pub mod error;
pub mod filtering;
pub mod helpers;
pub mod operators;
pub mod values;
