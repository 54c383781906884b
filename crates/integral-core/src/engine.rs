// File: crates/integral-core/src/engine.rs
// Summary: Riemann-sum driver: cumulative integral series plus one slice shape per sampled interval.

use log::debug;
use plot_core::{LockedRange, Range, Sample, Series, Shape};

use crate::rule::QuadratureRule;
use crate::sampling::sample_function;

/// Fewest sub-intervals a computation may use.
pub const MIN_SAMPLES: usize = 1;
/// Most sub-intervals a computation may use.
pub const MAX_SAMPLES: usize = 5000;

/// Clamp a requested slice count into `[MIN_SAMPLES, MAX_SAMPLES]`.
pub fn clamp_sample_count(n: usize) -> usize {
    n.clamp(MIN_SAMPLES, MAX_SAMPLES)
}

/// Output of one integration pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntegralResult {
    /// Final running total.
    pub integral: f64,
    /// `(x.min, 0)` followed by `(right edge, running total)` for every slice.
    pub series: Series,
    /// One shape per slice that contributed, in slice order.
    pub shapes: Vec<Shape>,
}

impl IntegralResult {
    /// The total with five decimals, the way the result is shown to users.
    pub fn formatted(&self) -> String {
        format!("{:.5}", self.integral)
    }
}

/// Approximate the integral of `f` over `x_range` with `sample_count` equal slices.
///
/// A slice whose node(s) evaluate to `None` contributes nothing and gets no
/// shape, but the series still advances to its right edge.
pub fn compute_integral<F>(f: F, x_range: Range, sample_count: usize, rule: QuadratureRule) -> IntegralResult
where
    F: Fn(f64) -> Option<f64>,
{
    let n = clamp_sample_count(sample_count);
    let dx = x_range.span() / n as f64;

    let mut integral = 0.0;
    let mut series = Series::with_capacity(n + 1);
    let mut shapes = Vec::with_capacity(n);
    series.push(Sample::present(x_range.min, 0.0));

    let mut x = x_range.min;
    for _ in 0..n {
        let slice = match rule.nodes(x, dx) {
            (node, None) => f(node).map(|h| (Shape::rect(x, x + dx, h), h * dx)),
            (left, Some(right)) => match (f(left), f(right)) {
                (Some(a), Some(b)) => Some((Shape::trapezoid(x, x + dx, a, b), dx * (0.5 * (a + b)))),
                _ => None,
            },
        };
        if let Some((shape, area)) = slice {
            shapes.push(shape);
            integral += area;
        }

        series.push(Sample::present(x + dx, integral));
        x += dx;
    }

    debug!(
        "{rule}: n={n} dx={dx} integral={integral} ({} of {n} slices sampled)",
        shapes.len()
    );
    IntegralResult { integral, series, shapes }
}

/// Everything one update cycle needs to produce both graphs' data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationRequest {
    pub x_range: Range,
    /// Hides function samples outside the locked y bounds; does not affect the integral.
    pub y_filter: LockedRange,
    pub sample_count: usize,
    pub rule: QuadratureRule,
    /// Sampling stride for the function curve, from the function graph's `pixel_size()`.
    pub pixel_size: f64,
}

/// Function curve plus integral for one request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Computation {
    pub function: Series,
    pub integral: IntegralResult,
}

/// Sample the function curve and integrate it in one pass over the request.
pub fn compute<F>(f: F, req: &IntegrationRequest) -> Computation
where
    F: Fn(f64) -> Option<f64>,
{
    let function = sample_function(&f, req.x_range, req.y_filter, req.pixel_size);
    let integral = compute_integral(&f, req.x_range, req.sample_count, req.rule);
    Computation { function, integral }
}
