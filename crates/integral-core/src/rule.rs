// File: crates/integral-core/src/rule.rs
// Summary: Quadrature rules selecting where each slice samples the function.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureRule {
    #[default]
    Left,
    Right,
    Midpoint,
    Trapezoidal,
}

impl QuadratureRule {
    pub const ALL: [QuadratureRule; 4] = [
        QuadratureRule::Left,
        QuadratureRule::Right,
        QuadratureRule::Midpoint,
        QuadratureRule::Trapezoidal,
    ];

    /// Positions within `[x, x + dx]` where the rule samples the function.
    pub fn nodes(self, x: f64, dx: f64) -> (f64, Option<f64>) {
        match self {
            QuadratureRule::Left => (x, None),
            QuadratureRule::Right => (x + dx, None),
            QuadratureRule::Midpoint => (x + dx / 2.0, None),
            QuadratureRule::Trapezoidal => (x, Some(x + dx)),
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Left => "Left Hand Rule",
            Self::Right => "Right Hand Rule",
            Self::Midpoint => "Midpoint Rule",
            Self::Trapezoidal => "Trapezoidal Rule",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule `{0}` (expected left, right, midpoint or trapezoidal)")]
pub struct UnknownRule(pub String);

impl FromStr for QuadratureRule {
    type Err = UnknownRule;

    /// Accepts the short names (`left`, `mid`, `trap`, ...) and the display names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let key = key.trim_end_matches(" rule").trim_end_matches(" hand");
        match key {
            "left" | "l" | "lhr" => Ok(Self::Left),
            "right" | "r" | "rhr" => Ok(Self::Right),
            "midpoint" | "mid" | "m" => Ok(Self::Midpoint),
            "trapezoidal" | "trapezoid" | "trap" | "t" => Ok(Self::Trapezoidal),
            _ => Err(UnknownRule(s.to_string())),
        }
    }
}
