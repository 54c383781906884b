// File: crates/plot-core/src/canvas.rs
// Summary: Drawing surface abstraction (2D-context-style primitives) and the Skia CPU raster backend.

use skia_safe as skia;

use crate::error::RenderError;
use crate::geometry::ContainerSize;
use crate::text::LabelShaper;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

/// Primitive drawing operations a plot needs. Coordinates are logical pixels.
///
/// `resize` sizes the backing buffer for the container (physical pixels) and
/// resets all drawing state, like assigning a canvas element's width.
pub trait DrawingSurface {
    fn resize(&mut self, size: &ContainerSize) -> Result<(), RenderError>;

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_line_width(&mut self, width: f64);
    fn set_alpha(&mut self, alpha: f64);
    fn set_color(&mut self, color: skia::Color);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn set_font_size(&mut self, px: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

#[derive(Clone, Copy, Debug)]
struct DrawState {
    color: skia::Color,
    alpha: f64,
    line_width: f64,
    align: TextAlign,
    baseline: TextBaseline,
    font_size: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            color: skia::Color::BLACK,
            alpha: 1.0,
            line_width: 1.0,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
            font_size: 10.0,
        }
    }
}

/// CPU raster surface backed by Skia.
pub struct SkiaSurface {
    surface: Option<skia::Surface>,
    physical: (i32, i32),
    ratio: f64,
    path: skia::Path,
    state: DrawState,
    shaper: LabelShaper,
}

impl SkiaSurface {
    pub fn new() -> Self {
        Self {
            surface: None,
            physical: (0, 0),
            ratio: 1.0,
            path: skia::Path::new(),
            state: DrawState::default(),
            shaper: LabelShaper::new(),
        }
    }

    /// Physical pixel size of the backing buffer, `(0, 0)` before the first resize.
    pub fn physical_size(&self) -> (i32, i32) { self.physical }

    fn canvas(&mut self) -> Option<&skia::Canvas> {
        self.surface.as_mut().map(|s| s.canvas())
    }

    fn paint(&self, style: skia::paint::Style) -> skia::Paint {
        let c = self.state.color;
        let alpha = (self.state.alpha.clamp(0.0, 1.0) * c.a() as f64).round() as u8;
        let mut p = skia::Paint::default();
        p.set_anti_alias(true);
        p.set_style(style);
        p.set_stroke_width(self.state.line_width as f32);
        p.set_color(c.with_a(alpha));
        p
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> skia::Rect {
        skia::Rect::from_xywh(x as f32, y as f32, w as f32, h as f32)
    }

    /// Copy the pixels out as tightly packed RGBA8.
    /// Returns `(pixels, width, height, row_bytes)`.
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let (w, h) = self.physical;
        let surface = self.surface.as_mut().ok_or(RenderError::NotSized)?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(RenderError::Readback);
        }
        Ok((px, w, h, stride))
    }

    /// Encode the current contents as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, RenderError> {
        let surface = self.surface.as_mut().ok_or(RenderError::NotSized)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode as PNG and write to `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), RenderError> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for SkiaSurface {
    fn default() -> Self { Self::new() }
}

impl DrawingSurface for SkiaSurface {
    fn resize(&mut self, size: &ContainerSize) -> Result<(), RenderError> {
        let (w, h) = size.physical();
        if self.surface.is_none() || self.physical != (w, h) {
            let surface = skia::surfaces::raster_n32_premul((w, h))
                .ok_or(RenderError::SurfaceCreation { width: w, height: h })?;
            self.surface = Some(surface);
            self.physical = (w, h);
        }
        self.ratio = size.ratio();
        self.path = skia::Path::new();
        self.state = DrawState::default();

        let ratio = self.ratio as f32;
        if let Some(canvas) = self.canvas() {
            canvas.reset_matrix();
            canvas.clear(skia::Color::TRANSPARENT);
            canvas.scale((ratio, ratio));
        }
        Ok(())
    }

    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let mut p = skia::Paint::default();
        p.set_blend_mode(skia::BlendMode::Clear);
        if let Some(canvas) = self.canvas() {
            canvas.draw_rect(Self::rect(x, y, w, h), &p);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let p = self.paint(skia::paint::Style::Fill);
        if let Some(canvas) = self.canvas() {
            canvas.draw_rect(Self::rect(x, y, w, h), &p);
        }
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let p = self.paint(skia::paint::Style::Stroke);
        if let Some(canvas) = self.canvas() {
            canvas.draw_rect(Self::rect(x, y, w, h), &p);
        }
    }

    fn begin_path(&mut self) { self.path = skia::Path::new(); }

    fn move_to(&mut self, x: f64, y: f64) { self.path.move_to((x as f32, y as f32)); }

    fn line_to(&mut self, x: f64, y: f64) { self.path.line_to((x as f32, y as f32)); }

    fn stroke(&mut self) {
        let p = self.paint(skia::paint::Style::Stroke);
        let path = self.path.clone();
        if let Some(canvas) = self.canvas() {
            canvas.draw_path(&path, &p);
        }
    }

    fn fill(&mut self) {
        let p = self.paint(skia::paint::Style::Fill);
        let path = self.path.clone();
        if let Some(canvas) = self.canvas() {
            canvas.draw_path(&path, &p);
        }
    }

    fn set_line_width(&mut self, width: f64) { self.state.line_width = width; }
    fn set_alpha(&mut self, alpha: f64) { self.state.alpha = alpha; }
    fn set_color(&mut self, color: skia::Color) { self.state.color = color; }
    fn set_text_align(&mut self, align: TextAlign) { self.state.align = align; }
    fn set_text_baseline(&mut self, baseline: TextBaseline) { self.state.baseline = baseline; }
    fn set_font_size(&mut self, px: f64) { self.state.font_size = px; }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let st = self.state;
        let alpha = (st.alpha.clamp(0.0, 1.0) * st.color.a() as f64).round() as u8;
        let color = st.color.with_a(alpha);
        let Some(surface) = self.surface.as_mut() else { return };
        self.shaper.draw(
            surface.canvas(),
            text,
            x as f32,
            y as f32,
            st.font_size as f32,
            color,
            st.align,
            st.baseline,
        );
    }
}
