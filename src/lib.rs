//! # Patchwork
//!
//! The core of a repeating quilt-block designer: a grid editing model and
//! an incremental compositing renderer.
//!
//! ## Core Concepts
//!
//! - **Grid editing with best-effort recovery**: Resizing a block keeps a
//!   backup snapshot, so shrinking and regrowing restores the cells the
//!   shrink discarded
//! - **Pure render plans**: Pixel geometry is derived on every call from
//!   the composition and an injected cell-size strategy
//! - **Region diffing**: The compositor remembers what each surface was
//!   last drawn with and repaints only borders, sash strips or blocks whose
//!   inputs changed
//! - **Keyed raster cache**: Each grid's bitmap is cached against its
//!   content version, pixel size and palette
//!
//! ## Example
//!
//! ```rust
//! use patchwork::{
//!     Border, Compositor, FixedCell, Grid, Quilt, Sash, SashLevel,
//!     BitmapSurface,
//! };
//!
//! let mut quilt = Quilt::new(Grid::new(4), 3, 3);
//! quilt.palette_mut().push("#aa3355").unwrap();
//! quilt.palette_mut().push("#f0e8d8").unwrap();
//! quilt.add_border(Border::new(2, "#442222")).unwrap();
//! quilt.set_sash(Sash::new(SashLevel::Single, "#cccccc", "#999999"));
//!
//! let mut compositor = Compositor::new();
//! let mut surface = BitmapSurface::new();
//! let stats = compositor
//!     .render(&mut quilt, 0, &FixedCell(8), &mut surface)
//!     .unwrap();
//! assert!(stats.full_redraw);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod block;
pub mod layout;
pub mod quilt;
pub mod render;

// Re-exports for convenience
pub use block::{Cell, CellSource, Grid, Quadrant, SeededCells};
pub use layout::{CellSizing, ExportResolution, FitToBounds, FixedCell, Rect, RenderPlan};
pub use quilt::{Border, Limits, Palette, Quilt, QuiltError, Sash, SashLevel};
pub use render::{
    Bitmap, BitmapSurface, Compositor, DrawSurface, Redraw, RenderError, RenderStats, Rgba,
    SurfaceError,
};
