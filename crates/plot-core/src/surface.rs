// File: crates/plot-core/src/surface.rs
// Summary: PlotSurface: one Cartesian graph (line + slice shapes) with autoscaled y axis and grid.

use log::trace;
use skia_safe as skia;

use crate::canvas::{DrawingSurface, TextAlign, TextBaseline};
use crate::geometry::{ContainerSize, Margins, PlotRect};
use crate::range::{LockedRange, Range};
use crate::scale::LinearScale;
use crate::series::{Series, Shape};
use crate::theme::Theme;
use crate::ticks::{calc_step_size, clean_float, format_label, tick_values, X_TARGET_STEP_PX, Y_TARGET_STEP_PX};

const LINE_WIDTH: f64 = 2.0;
const SHAPE_FILL_ALPHA: f64 = 0.25;
const GRID_ALPHA: f64 = 0.1;
const TICK_LEN: f64 = 5.0;
const LABEL_GAP: f64 = 15.0;
const LABEL_FONT_PX: f64 = 12.0;

/// A single graph. The x range is always set by the caller; the y range is
/// autoscaled from the data in `set_data` unless a bound is locked.
#[derive(Clone, Debug)]
pub struct PlotSurface {
    margins: Margins,
    theme: Theme,
    color: skia::Color,
    x_range: Range,
    y_range: Range,
    locked_y: LockedRange,
    series: Series,
    shapes: Vec<Shape>,
    /// Geometry of the last render; `None` until the first one.
    rect: Option<PlotRect>,
    device_pixel_ratio: f64,
}

impl PlotSurface {
    pub fn new() -> Self { Self::with_theme(Theme::default()) }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            margins: Margins::default(),
            theme,
            color: theme.function_line,
            x_range: Range::default(),
            y_range: Range::default(),
            locked_y: LockedRange::unlocked(),
            series: Series::new(),
            shapes: Vec::new(),
            rect: None,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn set_x_range(&mut self, range: Range) {
        let mut r = range;
        r.normalize();
        self.x_range = r;
    }

    /// Store the y bound overrides. Takes effect on the next `set_data`.
    pub fn set_y_range(&mut self, locked: LockedRange) { self.locked_y = locked; }

    /// Store the line and recompute the effective y range from it.
    pub fn set_data(&mut self, series: Series) {
        let computed = Range::autoscale(series.values());
        self.y_range = self.locked_y.apply(computed);
        self.series = series;
    }

    pub fn set_shapes(&mut self, shapes: Vec<Shape>) { self.shapes = shapes; }

    pub fn set_color(&mut self, color: skia::Color) { self.color = color; }

    pub fn set_theme(&mut self, theme: Theme) { self.theme = theme; }

    pub fn x_range(&self) -> Range { self.x_range }

    /// The y range used for mapping, after autoscale and locking.
    pub fn y_range(&self) -> Range { self.y_range }

    pub fn locked_y_range(&self) -> LockedRange { self.locked_y }

    pub fn series(&self) -> &Series { &self.series }

    pub fn shapes(&self) -> &[Shape] { &self.shapes }

    pub fn color(&self) -> skia::Color { self.color }

    /// Plot area of the last render.
    pub fn plot_rect(&self) -> Option<PlotRect> { self.rect }

    /// Data-space width of one physical pixel, used to choose a sampling stride.
    /// `INFINITY` until a render has established the plot width.
    pub fn pixel_size(&self) -> f64 {
        match self.rect {
            Some(rect) => self.x_range.span() / (rect.width * self.device_pixel_ratio),
            None => f64::INFINITY,
        }
    }

    /// Draw the current state into `target`, sized for `container`.
    pub fn render<S: DrawingSurface + ?Sized>(
        &mut self,
        container: &ContainerSize,
        target: &mut S,
    ) -> Result<(), crate::RenderError> {
        target.resize(container)?;
        let rect = PlotRect::layout(container, &self.margins);
        self.rect = Some(rect);
        self.device_pixel_ratio = container.ratio();

        let xs = LinearScale::horizontal(self.x_range, &rect);
        let ys = LinearScale::vertical(self.y_range, &rect);

        self.draw_background(target, container);
        self.draw_line(target, &xs, &ys);
        self.draw_shapes(target, &xs, &ys);
        self.draw_frame(target, container, &rect);
        self.draw_x_axis(target, &rect, &xs);
        self.draw_y_axis(target, &rect, &ys);
        trace!(
            "rendered {} samples, {} shapes into {}x{}",
            self.series.len(),
            self.shapes.len(),
            container.width,
            container.height
        );
        Ok(())
    }

    fn draw_background<S: DrawingSurface + ?Sized>(&self, g: &mut S, c: &ContainerSize) {
        g.clear_rect(0.0, 0.0, c.width, c.height);
        g.set_alpha(1.0);
        g.set_color(self.theme.background);
        g.fill_rect(0.0, 0.0, c.width, c.height);
    }

    fn draw_line<S: DrawingSurface + ?Sized>(&self, g: &mut S, xs: &LinearScale, ys: &LinearScale) {
        g.set_alpha(1.0);
        g.set_line_width(LINE_WIDTH);
        g.set_color(self.color);
        for run in self.series.runs() {
            let mut points = run.iter().filter_map(|s| s.y.map(|y| (xs.to_px(s.x), ys.to_px(y))));
            let Some((x0, y0)) = points.next() else { continue };
            g.begin_path();
            g.move_to(x0, y0);
            for (px, py) in points {
                g.line_to(px, py);
            }
            g.stroke();
        }
    }

    fn draw_shapes<S: DrawingSurface + ?Sized>(&self, g: &mut S, xs: &LinearScale, ys: &LinearScale) {
        g.set_color(self.color);
        g.set_line_width(1.0);
        let base = ys.to_px(0.0);
        for shape in &self.shapes {
            let x0 = xs.to_px(shape.x.0);
            let x1 = xs.to_px(shape.x.1);
            let y0 = ys.to_px(shape.y.0);
            let y1 = ys.to_px(shape.y.1);
            g.begin_path();
            g.move_to(x0, base);
            g.line_to(x0, y0);
            g.line_to(x1, y1);
            g.line_to(x1, base);
            g.line_to(x0, base);

            g.set_alpha(SHAPE_FILL_ALPHA);
            g.fill();
            g.set_alpha(1.0);
            g.stroke();
        }
    }

    /// Wipe anything that overflowed into the margins and outline the plot area.
    fn draw_frame<S: DrawingSurface + ?Sized>(&self, g: &mut S, c: &ContainerSize, r: &PlotRect) {
        let bands = [
            (0.0, 0.0, c.width, r.top),
            (0.0, r.bottom(), c.width, c.height - r.bottom()),
            (0.0, r.top, r.left, r.height),
            (r.right(), r.top, c.width - r.right(), r.height),
        ];
        g.set_alpha(1.0);
        g.set_color(self.theme.background);
        for (x, y, w, h) in bands {
            g.clear_rect(x, y, w, h);
            g.fill_rect(x, y, w, h);
        }

        g.set_line_width(1.0);
        g.set_color(self.theme.frame);
        g.stroke_rect(r.left, r.top, r.width, r.height);

        g.set_text_baseline(TextBaseline::Middle);
        g.set_font_size(LABEL_FONT_PX);
    }

    fn draw_x_axis<S: DrawingSurface + ?Sized>(&self, g: &mut S, r: &PlotRect, xs: &LinearScale) {
        let step = calc_step_size(r.width, X_TARGET_STEP_PX, &self.x_range);
        g.set_text_align(TextAlign::Center);
        for v in tick_values(xs, step) {
            let x = xs.to_px(v);
            g.set_alpha(1.0);
            g.fill_text(&format_label(v), x, r.bottom() + LABEL_GAP);
            g.begin_path();
            g.move_to(x, r.bottom());
            g.line_to(x, r.bottom() + TICK_LEN);
            g.stroke();

            // the gridline through x = 0 is the y axis
            g.set_alpha(if clean_float(v) == 0.0 { 1.0 } else { GRID_ALPHA });
            g.begin_path();
            g.move_to(x, r.top);
            g.line_to(x, r.bottom());
            g.stroke();
        }
    }

    fn draw_y_axis<S: DrawingSurface + ?Sized>(&self, g: &mut S, r: &PlotRect, ys: &LinearScale) {
        let step = calc_step_size(r.height, Y_TARGET_STEP_PX, &self.y_range);
        g.set_text_align(TextAlign::Right);
        for v in tick_values(ys, step) {
            let y = ys.to_px(v);
            g.set_alpha(1.0);
            g.fill_text(&format_label(v), r.left - LABEL_GAP, y);
            g.begin_path();
            g.move_to(r.left, y);
            g.line_to(r.left - TICK_LEN, y);
            g.stroke();

            // the gridline through y = 0 is the x axis
            g.set_alpha(if clean_float(v) == 0.0 { 1.0 } else { GRID_ALPHA });
            g.begin_path();
            g.move_to(r.left, y);
            g.line_to(r.right(), y);
            g.stroke();
        }
    }
}

impl Default for PlotSurface {
    fn default() -> Self { Self::new() }
}
