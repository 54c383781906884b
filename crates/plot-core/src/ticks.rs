// File: crates/plot-core/src/ticks.rs
// Summary: "Nice" grid step sizes, tick positions and label cleanup.

use crate::range::Range;
use crate::scale::LinearScale;

/// Target spacing between x gridlines, in logical pixels.
pub const X_TARGET_STEP_PX: f64 = 100.0;
/// Target spacing between y gridlines, in logical pixels.
pub const Y_TARGET_STEP_PX: f64 = 50.0;

/// Multiplier for each rounded leading digit; snaps steps to 1, 2, 5 or 10.
const MULTIPLIER_LOOKUP: [f64; 11] = [0.0, 1.0, 2.0, 2.0, 5.0, 5.0, 5.0, 5.0, 5.0, 10.0, 10.0];

/// Step between gridlines so that roughly one line falls every `target_step_px`.
///
/// The raw step is snapped to 1, 2, 5 or 10 times a power of ten. Degenerate
/// inputs (zero length, zero span) produce a non-finite or zero step, which
/// `tick_values` treats as "no ticks".
pub fn calc_step_size(length_px: f64, target_step_px: f64, range: &Range) -> f64 {
    let step_count = length_px / target_step_px;
    let approx = range.span() / step_count;

    let base = 10f64.powf(approx.log10().floor());
    let idx = (approx / base).round();
    if !idx.is_finite() {
        return f64::NAN;
    }
    base * MULTIPLIER_LOOKUP[idx.clamp(0.0, 10.0) as usize]
}

/// Round to 4 decimal digits (halves toward +inf) and fold `-0` into `0`.
pub fn clean_float(v: f64) -> f64 {
    let out = (v * 10_000.0 + 0.5).floor() / 10_000.0;
    if out == 0.0 { 0.0 } else { out }
}

/// Text for a tick label.
pub fn format_label(v: f64) -> String {
    clean_float(v).to_string()
}

/// Tick positions along `scale`, from the first multiple of `step` at or above
/// the range minimum until the pixel position passes the far edge by more than 1px.
pub fn tick_values(scale: &LinearScale, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let length = (scale.px_end - scale.px_start).abs();
    let mut out = Vec::new();
    let mut pos = clean_float(scale.domain.min / step).ceil() * step;
    loop {
        let offset = (scale.to_px(pos) - scale.px_start).abs();
        if !offset.is_finite() { break; }
        // positions left of the start only happen through rounding; skip them
        let before_start = (pos - scale.domain.min) < 0.0 && offset > 1.0;
        if !before_start {
            if offset > length + 1.0 { break; }
            out.push(pos);
        }
        let next = pos + step;
        if next == pos { break; }
        pos = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_snaps_to_lookup() {
        // 10 steps of 1 across 1000px
        assert_eq!(calc_step_size(1000.0, 100.0, &Range::new(0.0, 10.0)), 1.0);
        // approx 0.3 -> multiplier 2 at base 0.1
        let s = calc_step_size(1000.0, 100.0, &Range::new(0.0, 3.0));
        assert!((s - 0.2).abs() < 1e-12);
    }

    #[test]
    fn clean_float_collapses_negative_zero() {
        let v = clean_float(-0.00001);
        assert_eq!(v, 0.0);
        assert!(v.is_sign_positive());
        assert_eq!(clean_float(0.1 + 0.2), 0.3);
    }

    #[test]
    fn labels_drop_trailing_zeros() {
        assert_eq!(format_label(2.0), "2");
        assert_eq!(format_label(-0.5), "-0.5");
    }

    #[test]
    fn degenerate_step_has_no_ticks() {
        let scale = LinearScale::new(Range::new(0.0, 1.0), 0.0, 100.0);
        assert!(tick_values(&scale, f64::NAN).is_empty());
        assert!(tick_values(&scale, 0.0).is_empty());
    }
}
