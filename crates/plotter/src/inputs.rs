// File: crates/plotter/src/inputs.rs
// Summary: User inputs as typed, `key = value` edits, and resolution into integration parameters.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use integral_core::{clamp_sample_count, Expression, QuadratureRule};
use log::warn;
use plot_core::{LockedRange, Range};
use serde::Deserialize;

pub const DEFAULT_MIN_X: f64 = 0.0;
pub const DEFAULT_MAX_X: f64 = 10.0;
pub const DEFAULT_SAMPLE_COUNT: usize = 10;

/// The editable inputs, kept as raw text the way a user typed them. Bounds are
/// expressions too (`pi/2`, `-e`), but may not read `x`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Inputs {
    pub function: String,
    pub rule: QuadratureRule,
    pub min_x: String,
    pub max_x: String,
    pub min_y: String,
    pub max_y: String,
    pub n: String,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            function: "x".to_string(),
            rule: QuadratureRule::Left,
            min_x: "0".to_string(),
            max_x: "10".to_string(),
            min_y: String::new(),
            max_y: String::new(),
            n: "10".to_string(),
        }
    }
}

/// One editable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKey {
    Function,
    Rule,
    MinX,
    MaxX,
    MinY,
    MaxY,
    N,
}

impl FromStr for InputKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "function" | "f" => InputKey::Function,
            "rule" => InputKey::Rule,
            "min_x" => InputKey::MinX,
            "max_x" => InputKey::MaxX,
            "min_y" => InputKey::MinY,
            "max_y" => InputKey::MaxY,
            "n" => InputKey::N,
            other => bail!("unknown input '{other}'"),
        };
        Ok(key)
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InputKey::Function => "function",
            InputKey::Rule => "rule",
            InputKey::MinX => "min_x",
            InputKey::MaxX => "max_x",
            InputKey::MinY => "min_y",
            InputKey::MaxY => "max_y",
            InputKey::N => "n",
        })
    }
}

/// An input-change event: `key = value`. The value may be empty, which
/// clears a bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputChange {
    pub key: InputKey,
    pub value: String,
}

impl FromStr for InputChange {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| anyhow!("expected `key = value`, got '{}'", line.trim()))?;
        Ok(Self { key: key.parse()?, value: value.trim().to_string() })
    }
}

impl Inputs {
    /// Apply an edit. Only the rule is validated here; every other field
    /// accepts any text and is resolved leniently later.
    pub fn apply(&mut self, change: &InputChange) -> Result<()> {
        let value = change.value.clone();
        match change.key {
            InputKey::Function => self.function = value,
            InputKey::Rule => {
                self.rule = value.parse().with_context(|| format!("rule = {value}"))?;
            }
            InputKey::MinX => self.min_x = value,
            InputKey::MaxX => self.max_x = value,
            InputKey::MinY => self.min_y = value,
            InputKey::MaxY => self.max_y = value,
            InputKey::N => self.n = value,
        }
        Ok(())
    }

    /// Turn the raw text into numbers. Never fails: each field that cannot be
    /// used falls back to its default and is logged.
    pub fn resolve(&self) -> Parameters {
        let min_x = resolve_bound("min_x", &self.min_x).unwrap_or(DEFAULT_MIN_X);
        let max_x = resolve_bound("max_x", &self.max_x).unwrap_or(DEFAULT_MAX_X);
        Parameters {
            function: UserFunction::compile(&self.function),
            x_range: Range::new(min_x, max_x),
            y_lock: LockedRange::new(resolve_bound("min_y", &self.min_y), resolve_bound("max_y", &self.max_y)),
            sample_count: resolve_sample_count(&self.n),
            rule: self.rule,
        }
    }
}

/// Inputs after resolution; everything one update cycle needs.
#[derive(Clone, Debug)]
pub struct Parameters {
    pub function: UserFunction,
    /// Already normalized (`max > min`).
    pub x_range: Range,
    pub y_lock: LockedRange,
    pub sample_count: usize,
    pub rule: QuadratureRule,
}

/// The user's function. One that does not compile is absent everywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct UserFunction {
    expr: Option<Expression>,
}

impl UserFunction {
    pub fn compile(source: &str) -> Self {
        match Expression::parse(source) {
            Ok(expr) => Self { expr: Some(expr) },
            Err(e) => {
                warn!("function '{}' is unusable, plotting nothing: {e}", source.trim());
                Self { expr: None }
            }
        }
    }

    pub fn evaluate(&self, x: f64) -> Option<f64> {
        self.expr.as_ref()?.eval_at(x)
    }

    pub fn is_valid(&self) -> bool { self.expr.is_some() }
}

/// Evaluate a bound. Empty means "not set"; anything that does not produce a
/// finite number is logged and also treated as not set.
fn resolve_bound(label: &str, text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    match Expression::parse(text) {
        Ok(expr) => {
            let v = expr.evaluate(None);
            if v.is_none() {
                warn!("{label} = '{}' has no value, ignoring", text.trim());
            }
            v
        }
        Err(e) => {
            warn!("{label} = '{}' ignored: {e}", text.trim());
            None
        }
    }
}

/// Parse the slice count, rounding fractions and clamping into the allowed range.
fn resolve_sample_count(text: &str) -> usize {
    let text = text.trim();
    // a cleared field reads as zero slices, which clamps up
    if text.is_empty() {
        return clamp_sample_count(0);
    }
    match text.parse::<f64>() {
        Ok(n) if !n.is_nan() => {
            // saturating cast: negatives become 0, +inf becomes usize::MAX
            clamp_sample_count(n.round() as usize)
        }
        _ => {
            warn!("n = '{text}' is not a number, using {DEFAULT_SAMPLE_COUNT}");
            DEFAULT_SAMPLE_COUNT
        }
    }
}
