// File: crates/plot-core/tests/common/mod.rs
// Purpose: Recording drawing surface so render output can be inspected without a raster backend.

#![allow(dead_code)]

use plot_core::{ContainerSize, DrawingSurface, RenderError, TextAlign, TextBaseline};
use skia_safe as skia;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(f64, f64, f64),
    ClearRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke,
    Fill,
    LineWidth(f64),
    Alpha(f64),
    Color(skia::Color),
    Align(TextAlign),
    Baseline(TextBaseline),
    FontSize(f64),
    Text(String, f64, f64),
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    pub fn texts(&self) -> Vec<(String, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(s, x, y) => Some((s.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Paths as lists of subpaths (each a list of points), in the order they were stroked or filled.
    pub fn paths(&self) -> Vec<Vec<Vec<(f64, f64)>>> {
        let mut out = Vec::new();
        let mut current: Vec<Vec<(f64, f64)>> = Vec::new();
        for op in &self.ops {
            match op {
                Op::BeginPath => current.clear(),
                Op::MoveTo(x, y) => current.push(vec![(*x, *y)]),
                Op::LineTo(x, y) => {
                    if let Some(sub) = current.last_mut() { sub.push((*x, *y)); }
                }
                Op::Stroke | Op::Fill => out.push(current.clone()),
                _ => {}
            }
        }
        out
    }
}

impl DrawingSurface for Recorder {
    fn resize(&mut self, size: &ContainerSize) -> Result<(), RenderError> {
        self.ops.clear();
        self.ops.push(Op::Resize(size.width, size.height, size.device_pixel_ratio));
        Ok(())
    }
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push(Op::ClearRect(x, y, w, h)); }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push(Op::FillRect(x, y, w, h)); }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) { self.ops.push(Op::StrokeRect(x, y, w, h)); }
    fn begin_path(&mut self) { self.ops.push(Op::BeginPath); }
    fn move_to(&mut self, x: f64, y: f64) { self.ops.push(Op::MoveTo(x, y)); }
    fn line_to(&mut self, x: f64, y: f64) { self.ops.push(Op::LineTo(x, y)); }
    fn stroke(&mut self) { self.ops.push(Op::Stroke); }
    fn fill(&mut self) { self.ops.push(Op::Fill); }
    fn set_line_width(&mut self, width: f64) { self.ops.push(Op::LineWidth(width)); }
    fn set_alpha(&mut self, alpha: f64) { self.ops.push(Op::Alpha(alpha)); }
    fn set_color(&mut self, color: skia::Color) { self.ops.push(Op::Color(color)); }
    fn set_text_align(&mut self, align: TextAlign) { self.ops.push(Op::Align(align)); }
    fn set_text_baseline(&mut self, baseline: TextBaseline) { self.ops.push(Op::Baseline(baseline)); }
    fn set_font_size(&mut self, px: f64) { self.ops.push(Op::FontSize(px)); }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) { self.ops.push(Op::Text(text.to_string(), x, y)); }
}
