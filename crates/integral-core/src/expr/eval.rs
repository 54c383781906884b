// File: crates/integral-core/src/expr/eval.rs
// Summary: Name resolution of the syntax tree and evaluation of the resolved program.

use crate::error::ExprError;

use super::ast::{BinOp, Expr};
use super::builtins::{constant, Func};

/// Resolved expression: every name is either the variable `x`, a constant
/// (folded into `Number`) or a whitelisted function.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Number(f64),
    X,
    Neg(Box<Node>),
    Binary(BinOp, Box<Node>, Box<Node>),
    Call(Func, Vec<Node>),
}

pub fn resolve(expr: &Expr) -> Result<Node, ExprError> {
    Ok(match expr {
        Expr::Number(n) => Node::Number(*n),
        Expr::Name(name) if name == "x" => Node::X,
        Expr::Name(name) => {
            Node::Number(constant(name).ok_or_else(|| ExprError::UnknownName(name.clone()))?)
        }
        Expr::Neg(e) => Node::Neg(Box::new(resolve(e)?)),
        Expr::Binary(op, a, b) => Node::Binary(*op, Box::new(resolve(a)?), Box::new(resolve(b)?)),
        Expr::Call(name, args) => {
            let func = Func::from_name(name).ok_or_else(|| ExprError::UnknownFunction(name.clone()))?;
            if !func.arity().accepts(args.len()) {
                return Err(ExprError::Arity { name: name.clone(), expected: func.arity(), got: args.len() });
            }
            Node::Call(func, args.iter().map(resolve).collect::<Result<_, _>>()?)
        }
    })
}

impl Node {
    /// Raw value; `None` only when the program reads `x` and it is absent.
    /// Intermediate infinities and NaNs are carried through like any float.
    pub fn value(&self, x: Option<f64>) -> Option<f64> {
        Some(match self {
            Node::Number(n) => *n,
            Node::X => x?,
            Node::Neg(e) => -e.value(x)?,
            Node::Binary(op, a, b) => op.apply(a.value(x)?, b.value(x)?),
            Node::Call(func, args) => {
                let vals = args.iter().map(|a| a.value(x)).collect::<Option<Vec<_>>>()?;
                func.apply(&vals)
            }
        })
    }

    pub fn uses_x(&self) -> bool {
        match self {
            Node::Number(_) => false,
            Node::X => true,
            Node::Neg(e) => e.uses_x(),
            Node::Binary(_, a, b) => a.uses_x() || b.uses_x(),
            Node::Call(_, args) => args.iter().any(Node::uses_x),
        }
    }
}
