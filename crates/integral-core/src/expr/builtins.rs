// File: crates/integral-core/src/expr/builtins.rs
// Summary: Whitelisted functions and constants an expression may reference.

use std::f64::consts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exactly(k) => n == k,
            Arity::AtLeast(k) => n >= k,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arity::Exactly(k) => write!(f, "{k}"),
            Arity::AtLeast(k) => write!(f, "at least {k}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Func {
    Sin, Cos, Tan, Asin, Acos, Atan,
    Sinh, Cosh, Tanh, Asinh, Acosh, Atanh,
    Exp, Ln, Log10, Log2, Sqrt, Cbrt,
    Abs, Floor, Ceil, Round, Trunc, Sign,
    Pow, Atan2, Hypot, Min, Max,
}

impl Func {
    /// Look up a function by name. `log` is the natural logarithm.
    pub fn from_name(name: &str) -> Option<Self> {
        let f = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "asinh" => Func::Asinh,
            "acosh" => Func::Acosh,
            "atanh" => Func::Atanh,
            "exp" => Func::Exp,
            "ln" | "log" => Func::Ln,
            "log10" => Func::Log10,
            "log2" => Func::Log2,
            "sqrt" => Func::Sqrt,
            "cbrt" => Func::Cbrt,
            "abs" => Func::Abs,
            "floor" => Func::Floor,
            "ceil" => Func::Ceil,
            "round" => Func::Round,
            "trunc" => Func::Trunc,
            "sign" => Func::Sign,
            "pow" => Func::Pow,
            "atan2" => Func::Atan2,
            "hypot" => Func::Hypot,
            "min" => Func::Min,
            "max" => Func::Max,
            _ => return None,
        };
        Some(f)
    }

    pub fn arity(self) -> Arity {
        match self {
            Func::Pow | Func::Atan2 => Arity::Exactly(2),
            Func::Hypot | Func::Min | Func::Max => Arity::AtLeast(1),
            _ => Arity::Exactly(1),
        }
    }

    /// Apply to already evaluated arguments; the arity was checked at resolve time.
    pub fn apply(self, args: &[f64]) -> f64 {
        let a = args.first().copied().unwrap_or(f64::NAN);
        let b = args.get(1).copied().unwrap_or(f64::NAN);
        match self {
            Func::Sin => a.sin(),
            Func::Cos => a.cos(),
            Func::Tan => a.tan(),
            Func::Asin => a.asin(),
            Func::Acos => a.acos(),
            Func::Atan => a.atan(),
            Func::Sinh => a.sinh(),
            Func::Cosh => a.cosh(),
            Func::Tanh => a.tanh(),
            Func::Asinh => a.asinh(),
            Func::Acosh => a.acosh(),
            Func::Atanh => a.atanh(),
            Func::Exp => a.exp(),
            Func::Ln => a.ln(),
            Func::Log10 => a.log10(),
            Func::Log2 => a.log2(),
            Func::Sqrt => a.sqrt(),
            Func::Cbrt => a.cbrt(),
            Func::Abs => a.abs(),
            Func::Floor => a.floor(),
            // halves round toward +inf
            Func::Round => (a + 0.5).floor(),
            Func::Ceil => a.ceil(),
            Func::Trunc => a.trunc(),
            Func::Sign => {
                if a.is_nan() || a == 0.0 { a } else { a.signum() }
            }
            Func::Pow => a.powf(b),
            Func::Atan2 => a.atan2(b),
            Func::Hypot => args.iter().map(|v| v * v).sum::<f64>().sqrt(),
            Func::Min => args.iter().copied().fold(f64::INFINITY, nan_min),
            Func::Max => args.iter().copied().fold(f64::NEG_INFINITY, nan_max),
        }
    }
}

// NaN-propagating min/max: any NaN argument makes the result NaN.
fn nan_min(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() { f64::NAN } else { acc.min(v) }
}

fn nan_max(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() { f64::NAN } else { acc.max(v) }
}

/// Named constants. Both `pi`/`PI` and `e`/`E` are accepted.
pub fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" | "PI" => Some(consts::PI),
        "e" | "E" => Some(consts::E),
        "tau" | "TAU" => Some(consts::TAU),
        "SQRT2" => Some(consts::SQRT_2),
        "LN2" => Some(consts::LN_2),
        "LN10" => Some(consts::LN_10),
        _ => None,
    }
}
