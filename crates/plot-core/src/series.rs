// File: crates/plot-core/src/series.rs
// Summary: Line samples (with gaps) and the quadrilateral slice shapes drawn under them.

/// One point of a line. `y == None` marks a hole: the line is broken there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
}

impl Sample {
    pub const fn new(x: f64, y: Option<f64>) -> Self { Self { x, y } }
    pub const fn present(x: f64, y: f64) -> Self { Self { x, y: Some(y) } }
    pub const fn absent(x: f64) -> Self { Self { x, y: None } }
}

/// Ordered samples of a single line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self { Self { samples: Vec::new() } }

    pub fn with_capacity(n: usize) -> Self { Self { samples: Vec::with_capacity(n) } }

    /// Zip parallel x/y columns. Extra entries in the longer column are dropped.
    pub fn from_columns(xs: &[f64], ys: &[Option<f64>]) -> Self {
        Self { samples: xs.iter().zip(ys).map(|(&x, &y)| Sample::new(x, y)).collect() }
    }

    pub fn push(&mut self, sample: Sample) { self.samples.push(sample); }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> { self.samples.iter() }

    /// Present y values in order, skipping holes.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().filter_map(|s| s.y)
    }

    /// Split into runs of consecutive present samples; each run is one subpath.
    pub fn runs(&self) -> Vec<&[Sample]> {
        self.samples
            .split(|s| s.y.is_none())
            .filter(|run| !run.is_empty())
            .collect()
    }

    pub fn last(&self) -> Option<&Sample> { self.samples.last() }
}

impl FromIterator<Sample> for Series {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        Self { samples: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;
    fn into_iter(self) -> Self::IntoIter { self.samples.iter() }
}

/// Quadrilateral slice standing on the y = 0 baseline.
///
/// The top edge runs from `(x.0, y.0)` to `(x.1, y.1)`; a rectangle has
/// `y.0 == y.1`. The pairs are kept as given (no reordering).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Shape {
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self { Self { x, y } }

    /// Flat-topped slice of height `h` over `[x0, x1]`.
    pub const fn rect(x0: f64, x1: f64, h: f64) -> Self { Self { x: (x0, x1), y: (h, h) } }

    pub const fn trapezoid(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x: (x0, x1), y: (y0, y1) }
    }

    pub fn is_rect(&self) -> bool { self.y.0 == self.y.1 }

    /// Signed area between the top edge and the baseline.
    pub fn area(&self) -> f64 { (self.x.1 - self.x.0) * 0.5 * (self.y.0 + self.y.1) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_split_on_holes() {
        let s: Series = vec![
            Sample::present(0.0, 1.0),
            Sample::present(1.0, 2.0),
            Sample::absent(2.0),
            Sample::absent(3.0),
            Sample::present(4.0, 0.0),
        ]
        .into_iter()
        .collect();
        let runs = s.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1][0].x, 4.0);
    }

    #[test]
    fn trapezoid_area() {
        assert_eq!(Shape::trapezoid(0.0, 2.0, 1.0, 3.0).area(), 4.0);
        assert!(Shape::rect(0.0, 1.0, -2.0).is_rect());
    }
}
