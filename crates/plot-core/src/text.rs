// File: crates/plot-core/src/text.rs
// Summary: Tick label shaping with Skia textlayout, anchored by alignment and baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::canvas::{TextAlign, TextBaseline};

pub struct LabelShaper {
    fonts: FontCollection,
}

impl LabelShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Paint `text` so that `(x, y)` is the anchor named by `align` and `baseline`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        align: TextAlign,
        baseline: TextBaseline,
    ) {
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - w * 0.5,
            TextAlign::Right => x - w,
        };
        let top = match baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - h * 0.5,
            TextBaseline::Alphabetic => y - p.alphabetic_baseline(),
            TextBaseline::Bottom => y - h,
        };
        p.paint(canvas, (left, top));
    }
}

impl Default for LabelShaper {
    fn default() -> Self { Self::new() }
}
