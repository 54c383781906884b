// File: crates/plot-core/src/lib.rs
// Summary: Plot surface library entry point; exports ranges, series, ticks and the renderer.

pub mod range;
pub mod series;
pub mod geometry;
pub mod scale;
pub mod ticks;
pub mod theme;
pub mod text;
pub mod canvas;
pub mod surface;
pub mod error;

pub use range::{LockedRange, Range};
pub use series::{Sample, Series, Shape};
pub use geometry::{ContainerSize, Margins, PlotRect};
pub use scale::LinearScale;
pub use ticks::{calc_step_size, clean_float, tick_values};
pub use theme::Theme;
pub use canvas::{DrawingSurface, SkiaSurface, TextAlign, TextBaseline};
pub use surface::PlotSurface;
pub use error::RenderError;
