// File: crates/plot-core/tests/render.rs
// Purpose: Inspect the drawing commands a render emits: subpaths, slice quads, ticks and labels.

mod common;

use common::{Op, Recorder};
use plot_core::{ContainerSize, PlotSurface, Range, Sample, Series, Shape};

// 470x245 leaves a 400x200 plot area at (50, 15).
const CONTAINER: ContainerSize = ContainerSize::new(470.0, 245.0);

fn sample_surface() -> PlotSurface {
    let mut p = PlotSurface::new();
    p.set_x_range(Range::new(0.0, 4.0));
    p.set_data(
        vec![
            Sample::present(0.0, 0.0),
            Sample::present(1.0, 1.0),
            Sample::absent(2.0),
            Sample::present(3.0, 1.0),
            Sample::present(4.0, 0.0),
        ]
        .into_iter()
        .collect(),
    );
    p.set_shapes(vec![Shape::rect(1.0, 2.0, 1.0)]);
    p
}

#[test]
fn render_is_idempotent() {
    let mut p = sample_surface();
    let mut a = Recorder::new();
    let mut b = Recorder::new();
    p.render(&CONTAINER, &mut a).expect("first render");
    p.render(&CONTAINER, &mut b).expect("second render");
    assert_eq!(a.ops, b.ops);
}

#[test]
fn absent_sample_splits_the_line() {
    let mut p = sample_surface();
    let mut rec = Recorder::new();
    p.render(&CONTAINER, &mut rec).expect("render");
    let paths = rec.paths();

    let first = &paths[0];
    assert_eq!(first.len(), 1);
    let xs: Vec<f64> = first[0].iter().map(|pt| pt.0).collect();
    assert_eq!(xs, vec![50.0, 150.0]);

    let second = &paths[1];
    let xs: Vec<f64> = second[0].iter().map(|pt| pt.0).collect();
    assert_eq!(xs, vec![350.0, 450.0]);
}

#[test]
fn leading_and_repeated_holes_stroke_each_run_once() {
    let mut p = PlotSurface::new();
    p.set_x_range(Range::new(0.0, 4.0));
    let xs = [0.0, 1.0, 2.0, 2.5, 3.0, 4.0, 4.0];
    let ys = [None, Some(1.0), None, None, Some(2.0), Some(3.0), None];
    p.set_data(Series::from_columns(&xs, &ys));

    let mut rec = Recorder::new();
    p.render(&CONTAINER, &mut rec).expect("render");

    // everything before the frame is the line; no shapes were set
    let frame = rec.ops.iter().position(|op| matches!(op, Op::StrokeRect(..))).expect("frame");
    let line = &rec.ops[..frame];
    assert_eq!(line.iter().filter(|op| **op == Op::Stroke).count(), 2);
    assert_eq!(line.iter().filter(|op| **op == Op::BeginPath).count(), 2);

    let paths = rec.paths();
    let xs: Vec<f64> = paths[0][0].iter().map(|pt| pt.0).collect();
    assert_eq!(xs, vec![150.0]);
    let xs: Vec<f64> = paths[1][0].iter().map(|pt| pt.0).collect();
    assert_eq!(xs, vec![350.0, 450.0]);
}

#[test]
fn shape_is_drawn_from_zero_baseline() {
    let mut p = sample_surface();
    let mut rec = Recorder::new();
    p.render(&CONTAINER, &mut rec).expect("render");

    // y range is (-0.25, 1.25) over the 200px tall area ending at 215
    let y_px = |v: f64| 215.0 - (v + 0.25) / 1.5 * 200.0;
    let base = y_px(0.0);
    let top = y_px(1.0);

    let paths = rec.paths();
    let quad = &paths[2][0];
    let want = [(150.0, base), (150.0, top), (250.0, top), (250.0, base), (150.0, base)];
    assert_eq!(quad.len(), want.len());
    for (got, want) in quad.iter().zip(want) {
        assert!((got.0 - want.0).abs() < 1e-9 && (got.1 - want.1).abs() < 1e-9, "{got:?} vs {want:?}");
    }

    // fill at 25% then stroke at full opacity
    let fill_at = rec.ops.iter().position(|op| *op == Op::Fill).expect("fill");
    assert_eq!(rec.ops[fill_at - 1], Op::Alpha(0.25));
    assert_eq!(rec.ops[fill_at + 1], Op::Alpha(1.0));
    assert_eq!(rec.ops[fill_at + 2], Op::Stroke);
}

#[test]
fn labels_follow_nice_steps() {
    let mut p = sample_surface();
    let mut rec = Recorder::new();
    p.render(&CONTAINER, &mut rec).expect("render");
    let texts = rec.texts();

    let x_labels: Vec<&str> = texts.iter().filter(|t| t.2 == 230.0).map(|t| t.0.as_str()).collect();
    assert_eq!(x_labels, vec!["0", "1", "2", "3", "4"]);

    let y_labels: Vec<&str> = texts.iter().filter(|t| t.1 == 35.0).map(|t| t.0.as_str()).collect();
    assert_eq!(y_labels, vec!["0", "0.5", "1"]);
}

#[test]
fn only_zero_gridlines_are_opaque() {
    let mut p = sample_surface();
    let mut rec = Recorder::new();
    p.render(&CONTAINER, &mut rec).expect("render");
    // 4 non-zero x ticks + 2 non-zero y ticks
    let faint = rec.ops.iter().filter(|op| **op == Op::Alpha(0.1)).count();
    assert_eq!(faint, 6);
}

#[test]
fn pixel_size_tracks_plot_width_and_ratio() {
    let mut p = sample_surface();
    let mut rec = Recorder::new();
    p.render(&CONTAINER.with_ratio(2.0), &mut rec).expect("render");
    assert_eq!(p.pixel_size(), 4.0 / 800.0);
}

#[test]
fn zero_size_container_still_renders() {
    let mut p = sample_surface();
    let mut rec = Recorder::new();
    p.render(&ContainerSize::new(0.0, 0.0), &mut rec).expect("render");
    let rect = p.plot_rect().expect("rect");
    assert_eq!((rect.width, rect.height), (1.0, 1.0));
    assert!(p.pixel_size().is_finite());
}
