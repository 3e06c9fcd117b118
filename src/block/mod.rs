//! Block module: The editable quilt-block grid and its rasterization.
//!
//! This module contains:
//! - [`Cell`]: The atomic four-quadrant unit and its transforms
//! - [`Quadrant`]: Names for a cell's four triangles
//! - [`Grid`]: A square matrix of cells with resize, roll and paint
//! - [`CellSource`]: Supplier of randomized filler cells
//! - [`raster`]: Cached grid-to-bitmap rasterization

mod cell;
mod grid;
pub mod raster;

pub use cell::{Cell, CellSource, Quadrant, SeededCells};
pub use grid::Grid;
