//! Render plan: Pure derivation of pixel geometry from a composition.
//!
//! A plan is a snapshot for one render call, never stored. The only input
//! beyond the composition is the injected [`CellSizing`] strategy; preview,
//! thumbnail and export renders differ solely in the strategy they pass.

use crate::quilt::Quilt;

/// Round down to the nearest even value.
#[inline]
const fn even_floor(px: u32) -> u32 {
    px & !1
}

/// Round up to the nearest even value.
#[inline]
const fn even_ceil(px: u32) -> u32 {
    px + (px & 1)
}

/// Strategy turning total grid-cell dimensions into a pixel cell size.
///
/// Implementations must return an even value of at least their own floor;
/// every other plan quantity is a multiple of the cell size, so evenness
/// keeps half-cell border arithmetic integral.
pub trait CellSizing {
    /// Pixel size of one quilt cell for a `cells_w x cells_h` canvas.
    fn cell_size(&self, cells_w: u32, cells_h: u32) -> u32;
}

/// Largest even cell that fits the canvas into a bounding box.
///
/// Serves both the main preview (viewport bounds) and the thumbnail
/// (smaller bounds); only the numbers differ.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FitToBounds {
    /// Available width in pixels.
    pub max_width: u32,
    /// Available height in pixels.
    pub max_height: u32,
    /// Smallest acceptable cell size.
    pub min_cell: u32,
}

impl CellSizing for FitToBounds {
    fn cell_size(&self, cells_w: u32, cells_h: u32) -> u32 {
        let fit = (self.max_width / cells_w.max(1)).min(self.max_height / cells_h.max(1));
        even_floor(fit).max(even_ceil(self.min_cell))
    }
}

/// Smallest even cell whose canvas reaches a minimum resolution on its
/// longer axis. The export/download strategy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ExportResolution {
    /// Minimum canvas extent on the longer axis, in pixels.
    pub min_canvas: u32,
    /// Smallest acceptable cell size.
    pub min_cell: u32,
}

impl CellSizing for ExportResolution {
    fn cell_size(&self, cells_w: u32, cells_h: u32) -> u32 {
        let cells = cells_w.max(cells_h).max(1);
        let fit = self.min_canvas.div_ceil(cells);
        even_ceil(fit).max(even_ceil(self.min_cell))
    }
}

/// A fixed cell size (rounded up to even, minimum 2). Handy for tests and
/// exact-scale exports.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FixedCell(pub u32);

impl CellSizing for FixedCell {
    fn cell_size(&self, _cells_w: u32, _cells_h: u32) -> u32 {
        even_ceil(self.0).max(2)
    }
}

/// The layout inputs whose change forces a full redraw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LayoutSignature {
    /// Pixel size of one quilt cell.
    pub cell_size: u32,
    /// Total canvas width in cells.
    pub cells_w: u32,
    /// Total canvas height in cells.
    pub cells_h: u32,
    /// Whether sashing is drawn.
    pub has_sash: bool,
}

/// Concrete pixel geometry for one render call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderPlan {
    /// Pixel size of one quilt cell (even).
    pub cell_size: u32,
    /// Canvas width in cells: blocks, borders and sash gaps included.
    pub cells_w: u32,
    /// Canvas height in cells.
    pub cells_h: u32,
    /// Border padding per edge, in pixels.
    pub pad_size: u32,
    /// Pixel size of one block (`cell_size * block_size`).
    pub block_px: u32,
    /// Gap between adjacent blocks (`cell_size` when sashed, else 0).
    pub sash_gap: u32,
    /// Final canvas width in pixels.
    pub canvas_width: u32,
    /// Final canvas height in pixels.
    pub canvas_height: u32,
    /// Whether sashing is drawn.
    pub has_sash: bool,
}

impl RenderPlan {
    /// Derive the plan for one render call.
    pub fn derive<S: CellSizing>(quilt: &Quilt, sizing: &S) -> Self {
        let border_units: u32 = quilt.borders().iter().map(|b| b.width).sum();
        let has_sash = quilt.sash().is_on();
        let block_size = quilt.block_size() as u32;
        let blocks_w = quilt.blocks_w() as u32;
        let blocks_h = quilt.blocks_h() as u32;

        let sash_cells = |blocks: u32| if has_sash { blocks.saturating_sub(1) } else { 0 };
        let cells_w = block_size * blocks_w + border_units + sash_cells(blocks_w);
        let cells_h = block_size * blocks_h + border_units + sash_cells(blocks_h);

        let cell_size = sizing.cell_size(cells_w, cells_h);
        debug_assert_eq!(cell_size % 2, 0, "cell sizing strategies must return even sizes");

        Self {
            cell_size,
            cells_w,
            cells_h,
            pad_size: cell_size * border_units / 2,
            block_px: cell_size * block_size,
            sash_gap: if has_sash { cell_size } else { 0 },
            canvas_width: cell_size * cells_w,
            canvas_height: cell_size * cells_h,
            has_sash,
        }
    }

    /// The signature the compositor diffs to decide on a full redraw.
    #[inline]
    pub const fn signature(&self) -> LayoutSignature {
        LayoutSignature {
            cell_size: self.cell_size,
            cells_w: self.cells_w,
            cells_h: self.cells_h,
            has_sash: self.has_sash,
        }
    }

    /// Pixel origin of the block at `(row, col)` in block units.
    #[inline]
    pub const fn block_origin(&self, row: u32, col: u32) -> (u32, u32) {
        let step = self.block_px + self.sash_gap;
        (self.pad_size + col * step, self.pad_size + row * step)
    }
}
