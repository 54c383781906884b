// File: crates/plot-core/src/range.rs
// Summary: Axis ranges (always min < max), per-bound locking and y autoscale.

/// Fraction of the data span added above and below the autoscaled y range.
pub const DATA_MARGIN: f64 = 0.25;
/// Largest magnitude an autoscaled y bound may take.
pub const MAX_Y_VALUE: f64 = 100_000.0;

/// Closed interval on one axis.
/// Contract: `max > min` for every value built through `new`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Build a range, nudging `max` to `min + 1` when it does not exceed `min`.
    pub fn new(min: f64, max: f64) -> Self {
        let mut r = Self { min, max };
        r.normalize();
        r
    }

    pub(crate) fn normalize(&mut self) {
        // `!(a > b)` also catches NaN bounds
        if !(self.max > self.min) { self.max = self.min + 1.0; }
    }

    #[inline]
    pub fn span(&self) -> f64 { self.max - self.min }

    #[inline]
    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }

    /// Autoscale a y range over the present values.
    ///
    /// Zero is always included, a 25% margin is added on both ends and each
    /// bound is clamped to `±MAX_Y_VALUE`. No values yields `(-1, 1)`.
    pub fn autoscale<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        // no present values (NaN never wins a min/max fold)
        if lo > hi {
            return Self { min: -1.0, max: 1.0 };
        }

        if lo > 0.0 && hi > 0.0 {
            lo = 0.0;
        } else if lo < 0.0 && hi < 0.0 {
            hi = 0.0;
        }

        let margin = (hi - lo) * DATA_MARGIN;
        if margin.is_nan() {
            return Self { min: -MAX_Y_VALUE, max: MAX_Y_VALUE };
        }
        // infinite extremes stay infinite here and meet the clamp below
        let mut min = lo - margin;
        let mut max = hi + margin;
        if min == 0.0 && max == 0.0 {
            min = -1.0;
            max = 1.0;
        }
        Self {
            min: min.max(-MAX_Y_VALUE),
            max: max.min(MAX_Y_VALUE),
        }
    }
}

impl Default for Range {
    fn default() -> Self { Self { min: 0.0, max: 1.0 } }
}

impl From<(f64, f64)> for Range {
    fn from((min, max): (f64, f64)) -> Self { Self::new(min, max) }
}

/// Optional overrides for the two bounds of an autoscaled axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LockedRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LockedRange {
    pub const fn unlocked() -> Self { Self { min: None, max: None } }

    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self { Self { min, max } }

    /// Override the computed bounds with any locked ones, then restore `max > min`.
    pub fn apply(&self, computed: Range) -> Range {
        let mut r = computed;
        if let Some(min) = self.min { r.min = min; }
        if let Some(max) = self.max { r.max = max; }
        r.normalize();
        r
    }

    /// True when `v` lies outside an active bound. Used to hide filtered samples.
    pub fn rejects(&self, v: f64) -> bool {
        self.min.is_some_and(|min| v < min) || self.max.is_some_and(|max| v > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_is_nudged() {
        assert_eq!(Range::new(3.0, 3.0), Range { min: 3.0, max: 4.0 });
        assert_eq!(Range::new(5.0, -2.0), Range { min: 5.0, max: 6.0 });
    }

    #[test]
    fn mixed_sign_data_keeps_both_ends() {
        let r = Range::autoscale([-2.0, 2.0]);
        assert_eq!(r, Range { min: -3.0, max: 3.0 });
    }

    #[test]
    fn infinite_extremes_clamp_instead_of_resetting() {
        assert_eq!(Range::autoscale([0.0, 1e308, f64::INFINITY]), Range { min: -MAX_Y_VALUE, max: MAX_Y_VALUE });
        assert_eq!(Range::autoscale([f64::NEG_INFINITY, -3.0]), Range { min: -MAX_Y_VALUE, max: MAX_Y_VALUE });
        assert_eq!(Range::autoscale([f64::NEG_INFINITY, f64::INFINITY]), Range { min: -MAX_Y_VALUE, max: MAX_Y_VALUE });
    }

    #[test]
    fn constant_zero_data_falls_back_to_unit() {
        assert_eq!(Range::autoscale([0.0, 0.0]), Range { min: -1.0, max: 1.0 });
    }

    #[test]
    fn lock_only_one_side() {
        let lock = LockedRange::new(None, Some(0.5));
        let r = lock.apply(Range { min: -3.0, max: 3.0 });
        assert_eq!(r, Range { min: -3.0, max: 0.5 });
    }

    #[test]
    fn filter_rejects_outside_active_bounds() {
        let lock = LockedRange::new(Some(-1.0), None);
        assert!(lock.rejects(-1.5));
        assert!(!lock.rejects(1e9));
    }
}
