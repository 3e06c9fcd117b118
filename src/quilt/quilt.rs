//! Quilt: The full composition a render call consumes.

use super::{Border, Palette, QuiltError, Sash};
use crate::block::Grid;

/// Configured composition limits, enforced at the mutation entry points.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Limits {
    /// Maximum number of border layers.
    pub max_borders: usize,
    /// Maximum number of palette colors.
    pub max_colors: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_borders: 6,
            max_colors: 24,
        }
    }
}

/// A quilt composition: a rectangular map of blocks onto grids, a border
/// stack (outer to inner), a sash configuration and the shared palette.
///
/// Typically one shared [`Grid`] fills every block position; the grid list
/// exists so alternate blocks can be mixed in. All grids share one side
/// length (the composition's block size).
#[derive(Clone, Debug)]
pub struct Quilt {
    /// Block patterns; never empty.
    grids: Vec<Grid>,
    /// Row-major `blocks_h x blocks_w` indices into `grids`.
    block_map: Vec<usize>,
    blocks_w: usize,
    blocks_h: usize,
    /// Border stack, outer to inner.
    borders: Vec<Border>,
    sash: Sash,
    palette: Palette,
    max_borders: usize,
}

impl Quilt {
    /// Create a composition with every block position mapped to `grid`.
    pub fn new(grid: Grid, blocks_w: usize, blocks_h: usize) -> Self {
        Self::with_limits(grid, blocks_w, blocks_h, Limits::default())
    }

    /// Create a composition with explicit limits.
    pub fn with_limits(grid: Grid, blocks_w: usize, blocks_h: usize, limits: Limits) -> Self {
        Self {
            grids: vec![grid],
            block_map: vec![0; blocks_w * blocks_h],
            blocks_w,
            blocks_h,
            borders: Vec::new(),
            sash: Sash::default(),
            palette: Palette::new(limits.max_colors),
            max_borders: limits.max_borders,
        }
    }

    /// Block-map width in block units.
    #[inline]
    pub const fn blocks_w(&self) -> usize {
        self.blocks_w
    }

    /// Block-map height in block units.
    #[inline]
    pub const fn blocks_h(&self) -> usize {
        self.blocks_h
    }

    /// Side length shared by the composition's grids.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.grids[0].size()
    }

    /// The grid list.
    #[inline]
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    /// Mutable access to one grid, or `None` out of range.
    #[inline]
    pub fn grid_mut(&mut self, index: usize) -> Option<&mut Grid> {
        self.grids.get_mut(index)
    }

    /// Add another block pattern, returning its index.
    pub fn push_grid(&mut self, grid: Grid) -> usize {
        self.grids.push(grid);
        self.grids.len() - 1
    }

    /// Row-major block map of grid indices.
    #[inline]
    pub fn block_map(&self) -> &[usize] {
        &self.block_map
    }

    /// Map one block position to a grid. No-op when the position or grid
    /// index is out of range.
    pub fn set_block(&mut self, row: usize, col: usize, grid_index: usize) {
        if row < self.blocks_h && col < self.blocks_w && grid_index < self.grids.len() {
            self.block_map[row * self.blocks_w + col] = grid_index;
        }
    }

    /// Resize the block map, preserving overlapping positions.
    pub fn set_blocks(&mut self, blocks_w: usize, blocks_h: usize) {
        if blocks_w == self.blocks_w && blocks_h == self.blocks_h {
            return;
        }
        let mut map = vec![0; blocks_w * blocks_h];
        for row in 0..blocks_h.min(self.blocks_h) {
            for col in 0..blocks_w.min(self.blocks_w) {
                map[row * blocks_w + col] = self.block_map[row * self.blocks_w + col];
            }
        }
        self.block_map = map;
        self.blocks_w = blocks_w;
        self.blocks_h = blocks_h;
    }

    /// Border stack, outer to inner.
    #[inline]
    pub fn borders(&self) -> &[Border] {
        &self.borders
    }

    /// Append an inner border layer.
    ///
    /// Rejected with [`QuiltError::BorderLimit`] at the limit; the stack is
    /// left unchanged.
    pub fn add_border(&mut self, border: Border) -> Result<(), QuiltError> {
        if self.borders.len() >= self.max_borders {
            return Err(QuiltError::BorderLimit {
                max: self.max_borders,
            });
        }
        self.borders.push(border);
        Ok(())
    }

    /// Replace the border at `index`. Out-of-range indices are a silent
    /// no-op.
    pub fn set_border(&mut self, index: usize, border: Border) {
        if let Some(slot) = self.borders.get_mut(index) {
            *slot = border;
        }
    }

    /// Remove the innermost border layer.
    pub fn pop_border(&mut self) -> Option<Border> {
        self.borders.pop()
    }

    /// Sash configuration.
    #[inline]
    pub const fn sash(&self) -> &Sash {
        &self.sash
    }

    /// Replace the sash configuration.
    pub fn set_sash(&mut self, sash: Sash) {
        self.sash = sash;
    }

    /// The shared palette.
    #[inline]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mutable access to the palette.
    #[inline]
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }
}
