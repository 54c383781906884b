// File: crates/integral-core/tests/sampling.rs
// Purpose: Pixel-stride function sampling with holes for absent and filtered values.

use integral_core::{sample_function, Expression};
use plot_core::{LockedRange, Range};

#[test]
fn holes_for_absent_and_filtered_values() {
    let f = Expression::parse("1 / (x - 2)").expect("parses");
    let s = sample_function(|x| f.eval_at(x), Range::new(0.0, 4.0), LockedRange::new(Some(-0.9), None), 0.5);
    let ys: Vec<Option<f64>> = s.iter().map(|p| p.y).collect();
    assert_eq!(
        ys,
        vec![Some(-0.5), Some(-1.0 / 1.5), None, None, None, Some(2.0), Some(1.0), Some(1.0 / 1.5)]
    );
}

#[test]
fn zero_or_negative_stride_is_ignored() {
    assert!(sample_function(Some, Range::new(0.0, 1.0), LockedRange::unlocked(), 0.0).is_empty());
    assert!(sample_function(Some, Range::new(0.0, 1.0), LockedRange::unlocked(), -1.0).is_empty());
}

#[test]
fn runs_until_just_below_max() {
    let s = sample_function(|x| Some(x), Range::new(0.0, 10.0), LockedRange::unlocked(), 0.01);
    let last = s.last().expect("non-empty").x;
    assert!(last < 10.0);
    assert!(s.len() >= 1000 && s.len() <= 1001);
}
