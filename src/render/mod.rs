//! Render module: The drawing-surface boundary and the incremental
//! compositor.
//!
//! This module contains:
//! - [`Rgba`]: Parsed color values
//! - [`Bitmap`] and [`DrawSurface`]: The immediate-mode drawing boundary
//! - [`BitmapSurface`]: The in-memory backend used for preview/export
//! - [`Compositor`]: Region-diffing renderer bound to one surface

mod color;
mod compositor;
mod surface;

pub use color::Rgba;
pub use compositor::{Compositor, Redraw, RenderError, RenderStats};
pub use surface::{Bitmap, BitmapSurface, DrawSurface, SurfaceError};
