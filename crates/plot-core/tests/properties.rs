// File: crates/plot-core/tests/properties.rs
// Purpose: Property checks for range normalization, y clamping, locking and step snapping.

use plot_core::{calc_step_size, LockedRange, PlotSurface, Range, Series};
use proptest::prelude::*;

fn series_of(ys: &[f64]) -> Series {
    let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();
    let ys: Vec<Option<f64>> = ys.iter().copied().map(Some).collect();
    Series::from_columns(&xs, &ys)
}

proptest! {
    #[test]
    fn inverted_x_range_becomes_unit(min in -1e6f64..1e6, back in 0f64..1e6) {
        let mut p = PlotSurface::new();
        p.set_x_range(Range { min, max: min - back });
        prop_assert_eq!(p.x_range().max, min + 1.0);
    }

    #[test]
    fn autoscaled_bounds_stay_clamped(ys in prop::collection::vec(-1e9f64..1e9, 1..50)) {
        let mut p = PlotSurface::new();
        p.set_data(series_of(&ys));
        let r = p.y_range();
        prop_assert!(r.min >= -100_000.0 && r.max <= 100_000.0);
        prop_assert!(r.max > r.min);
        prop_assert!(r.min <= 0.0 && r.max >= 0.0);
    }

    #[test]
    fn locked_bounds_always_win(
        ys in prop::collection::vec(-1e3f64..1e3, 0..20),
        lo in prop::option::of(-1e3f64..0.0),
        hi in prop::option::of(1.0f64..1e3),
    ) {
        let mut p = PlotSurface::new();
        p.set_y_range(LockedRange::new(lo, hi));
        p.set_data(series_of(&ys));
        if let Some(lo) = lo { prop_assert_eq!(p.y_range().min, lo); }
        if let Some(hi) = hi { prop_assert_eq!(p.y_range().max, hi); }
    }

    #[test]
    fn steps_snap_to_one_two_five(span in 1e-3f64..1e6, length in 10f64..4000.0) {
        let range = Range::new(0.0, span);
        let step = calc_step_size(length, 100.0, &range);
        let approx = span / (length / 100.0);
        let base = 10f64.powf(approx.log10().floor());
        let m = step / base;
        prop_assert!(
            [1.0, 2.0, 5.0, 10.0].iter().any(|k| (m - k).abs() < 1e-9),
            "multiplier {} for span {} length {}", m, span, length
        );
    }
}
