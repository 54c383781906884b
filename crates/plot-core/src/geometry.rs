// File: crates/plot-core/src/geometry.rs
// Summary: Pixel geometry: container size, fixed margins and the derived plot area.

/// Live size of the element a plot is drawn into.
/// Width/height are logical pixels; `device_pixel_ratio` scales them to physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl ContainerSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, device_pixel_ratio: 1.0 }
    }

    pub const fn with_ratio(mut self, device_pixel_ratio: f64) -> Self {
        self.device_pixel_ratio = device_pixel_ratio;
        self
    }

    /// Physical pixel dimensions of the backing buffer (at least 1x1).
    pub fn physical(&self) -> (i32, i32) {
        let ratio = self.ratio();
        let w = (self.width.max(0.0) * ratio).round() as i32;
        let h = (self.height.max(0.0) * ratio).round() as i32;
        (w.max(1), h.max(1))
    }

    /// Device pixel ratio, with non-positive or non-finite values read as 1.
    pub fn ratio(&self) -> f64 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }
}

/// Screen margins around the plot area, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
}

impl Default for Margins {
    /// Room for y labels on the left and x labels underneath.
    fn default() -> Self { Self::new(50.0, 15.0, 20.0, 30.0) }
}

/// Plot area in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    /// Lay out the plot area inside `container`; never smaller than 1x1.
    pub fn layout(container: &ContainerSize, margins: &Margins) -> Self {
        let width = (container.width - margins.left - margins.right).max(1.0);
        let height = (container.height - margins.top - margins.bottom).max(1.0);
        Self { left: margins.left, top: margins.top, width, height }
    }

    #[inline]
    pub fn right(&self) -> f64 { self.left + self.width }

    #[inline]
    pub fn bottom(&self) -> f64 { self.top + self.height }
}
