// File: crates/plot-core/src/error.rs
// Summary: Errors raised by the raster backend (surface allocation, readback, encoding).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },
    #[error("surface has not been sized yet; call resize first")]
    NotSized,
    #[error("reading back pixels failed")]
    Readback,
    #[error("encode PNG failed")]
    Encode,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
