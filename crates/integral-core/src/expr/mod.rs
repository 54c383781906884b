// File: crates/integral-core/src/expr/mod.rs
// Summary: Sandboxed user expressions: parse once, evaluate at many x without running host code.

pub mod ast;
pub mod builtins;
pub mod eval;
pub mod parse;

use std::fmt;
use std::str::FromStr;

use crate::error::ExprError;
use eval::Node;

/// Longest accepted source text, in bytes.
pub const MAX_SOURCE_LEN: usize = 1024;

/// A compiled expression in the single variable `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    source: String,
    program: Node,
}

impl Expression {
    pub fn parse(source: &str) -> Result<Self, ExprError> {
        if source.trim().is_empty() {
            return Err(ExprError::Empty);
        }
        // bounds the depth of long operator chains, which are walked recursively
        if source.len() > MAX_SOURCE_LEN {
            return Err(ExprError::TooLong { limit: MAX_SOURCE_LEN });
        }
        let tree = match parse::parse_complete(source) {
            Ok((_, tree)) => tree,
            Err(nom::Err::Failure(e)) if e.code == nom::error::ErrorKind::TooLarge => {
                return Err(ExprError::TooDeep { limit: parse::MAX_NESTING });
            }
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                return Err(syntax_error(source, e.input));
            }
            Err(nom::Err::Incomplete(_)) => return Err(syntax_error(source, "")),
        };
        let program = eval::resolve(&tree)?;
        Ok(Self { source: source.to_string(), program })
    }

    /// Evaluate at `x`. Any non-finite result, or reading an absent `x`, yields `None`.
    pub fn evaluate(&self, x: Option<f64>) -> Option<f64> {
        self.program.value(x).filter(|v| v.is_finite())
    }

    pub fn eval_at(&self, x: f64) -> Option<f64> { self.evaluate(Some(x)) }

    /// True when the expression reads the variable `x`.
    pub fn uses_x(&self) -> bool { self.program.uses_x() }

    pub fn source(&self) -> &str { &self.source }
}

impl FromStr for Expression {
    type Err = ExprError;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.source) }
}

fn syntax_error(source: &str, rest: &str) -> ExprError {
    let offset = source.len().saturating_sub(rest.len());
    let near: String = rest.trim_start().chars().take(12).collect();
    let near = if near.is_empty() { "end of input".to_string() } else { near };
    ExprError::Syntax { column: source[..offset].chars().count() + 1, near }
}
