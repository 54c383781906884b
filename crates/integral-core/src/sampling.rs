// File: crates/integral-core/src/sampling.rs
// Summary: Pixel-stride sampling of the function curve, with presentation-only y filtering.

use log::debug;
use plot_core::{LockedRange, Range, Sample, Series};

/// Evaluate `f` from `x_range.min` in steps of `pixel_size` while `x < x_range.max`.
///
/// Samples where `f` is absent or that fall outside an active bound of
/// `y_filter` are stored as holes. A pixel size that is not a positive finite
/// number (the plot has not been laid out yet) produces an empty series.
pub fn sample_function<F>(f: F, x_range: Range, y_filter: LockedRange, pixel_size: f64) -> Series
where
    F: Fn(f64) -> Option<f64>,
{
    if !pixel_size.is_finite() || pixel_size <= 0.0 {
        debug!("skipping function sampling, pixel size {pixel_size}");
        return Series::new();
    }

    let estimate = (x_range.span() / pixel_size).ceil();
    let mut series = Series::with_capacity(if estimate.is_finite() { estimate as usize } else { 0 });
    let mut x = x_range.min;
    while x < x_range.max {
        let y = f(x).filter(|&y| !y_filter.rejects(y));
        series.push(Sample::new(x, y));
        let next = x + pixel_size;
        // stride below float resolution at this magnitude
        if next == x { break; }
        x = next;
    }
    series
}
