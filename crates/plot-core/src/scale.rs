// File: crates/plot-core/src/scale.rs
// Summary: Linear data-to-pixel transforms, one per axis.

use crate::geometry::PlotRect;
use crate::range::Range;

/// Rescale `value` from `[old_min, old_max]` onto `[new_min, new_max]`.
#[inline]
pub fn scale_value(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    ((value - old_min) / (old_max - old_min)) * (new_max - new_min) + new_min
}

/// Maps a data range onto a pixel interval. `px_start` is where `domain.min` lands,
/// so a y scale passes the bottom edge first to flip the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: Range,
    pub px_start: f64,
    pub px_end: f64,
}

impl LinearScale {
    pub const fn new(domain: Range, px_start: f64, px_end: f64) -> Self {
        Self { domain, px_start, px_end }
    }

    /// Horizontal scale: `min` at the left edge, `max` at the right edge.
    pub fn horizontal(domain: Range, rect: &PlotRect) -> Self {
        Self::new(domain, rect.left, rect.right())
    }

    /// Vertical scale: `min` at the bottom edge, greater values higher on screen.
    pub fn vertical(domain: Range, rect: &PlotRect) -> Self {
        Self::new(domain, rect.bottom(), rect.top)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        scale_value(v, self.domain.min, self.domain.max, self.px_start, self.px_end)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        scale_value(px, self.px_start, self.px_end, self.domain.min, self.domain.max)
    }

    /// Data units covered by one logical pixel.
    pub fn units_per_px(&self) -> f64 {
        self.domain.span() / (self.px_end - self.px_start).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_is_inverted() {
        let rect = PlotRect { left: 50.0, top: 15.0, width: 100.0, height: 200.0 };
        let s = LinearScale::vertical(Range::new(-1.0, 1.0), &rect);
        assert_eq!(s.to_px(-1.0), 215.0);
        assert_eq!(s.to_px(1.0), 15.0);
        assert_eq!(s.to_px(0.0), 115.0);
        assert_eq!(s.from_px(115.0), 0.0);
    }

    #[test]
    fn horizontal_units_per_px() {
        let rect = PlotRect { left: 50.0, top: 15.0, width: 100.0, height: 10.0 };
        let s = LinearScale::horizontal(Range::new(0.0, 10.0), &rect);
        assert_eq!(s.to_px(5.0), 100.0);
        assert!((s.units_per_px() - 0.1).abs() < 1e-12);
    }
}
