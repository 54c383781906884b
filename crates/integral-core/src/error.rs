// File: crates/integral-core/src/error.rs
// Summary: Errors raised while compiling a user expression.

use thiserror::Error;

use crate::expr::builtins::Arity;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExprError {
    #[error("expression is empty")]
    Empty,
    #[error("syntax error at column {column}: unexpected `{near}`")]
    Syntax { column: usize, near: String },
    #[error("unknown name `{0}`")]
    UnknownName(String),
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },
    #[error("expression is longer than {limit} bytes")]
    TooLong { limit: usize },
    #[error("`{name}` takes {expected} argument(s), got {got}")]
    Arity { name: String, expected: Arity, got: usize },
}
