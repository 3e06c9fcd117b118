//! Grid: A square matrix of cells representing one quilt block.
//!
//! Cells are stored in a contiguous `Vec` in row-major order; the length is
//! always a perfect square. The grid carries two pieces of auxiliary state:
//!
//! - A **backup snapshot**, written only by [`Grid::resize`]. Shrinking
//!   snapshots the discarded content; growing reads it back, so a user who
//!   shrinks a block and grows it again without editing recovers the cells
//!   they abandoned.
//! - A **content version**, bumped by every mutation. The rasterizer keys
//!   its bitmap cache on the version instead of a dirty flag, which keeps
//!   cache validity a pure function of its inputs.

use super::cell::{Cell, CellSource, Quadrant};
use super::raster::RasterCache;

/// Snapshot of grid content taken by resize.
#[derive(Clone, Debug, Default)]
struct Backup {
    cells: Vec<Cell>,
    size: usize,
}

impl Backup {
    fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }
}

/// A square grid of [`Cell`]s, row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    /// Contiguous cell storage, `size * size` long.
    cells: Vec<Cell>,
    /// Side length.
    size: usize,
    /// Most recent resize snapshot (empty until the first resize).
    backup: Backup,
    /// Content version, bumped on every mutation.
    version: u64,
    /// Cached rasterization of this grid.
    pub(crate) raster: RasterCache,
}

impl Grid {
    /// Create a grid with every quadrant set to palette index 0.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![Cell::EMPTY; size * size],
            size,
            backup: Backup::default(),
            version: 0,
            raster: RasterCache::default(),
        }
    }

    /// Create a grid filled from a [`CellSource`], each quadrant uniform
    /// over `[0, colors)`.
    pub fn random<S: CellSource>(size: usize, colors: usize, source: &mut S) -> Self {
        let mut grid = Self::new(size);
        for cell in &mut grid.cells {
            *cell = source.next_cell(colors);
        }
        grid
    }

    /// Side length.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The underlying cell slice, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Content version; bumped on every mutation.
    #[inline]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Get the cell at a linear index, or `None` out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Convert (row, col) to a linear index, or `None` out of range.
    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Paint one quadrant of the cell at `index`.
    ///
    /// Out-of-range indices and unchanged colors are silent no-ops: callers
    /// derive indices from the grid's own size, so a miss is not an error.
    pub fn paint(&mut self, index: usize, quadrant: Quadrant, color: u8) {
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };
        if cell.quadrant(quadrant) == color {
            return;
        }
        *cell = cell.with_quadrant(quadrant, color);
        self.version += 1;
    }

    /// Rotate the cell at `index` a quarter turn clockwise. No-op out of range.
    pub fn rotate_cw(&mut self, index: usize) {
        self.transform(index, Cell::rotated_cw);
    }

    /// Rotate the cell at `index` a quarter turn counter-clockwise. No-op out of range.
    pub fn rotate_ccw(&mut self, index: usize) {
        self.transform(index, Cell::rotated_ccw);
    }

    /// Mirror the cell at `index` across the vertical axis. No-op out of range.
    pub fn flip_horiz(&mut self, index: usize) {
        self.transform(index, Cell::flipped_horiz);
    }

    /// Mirror the cell at `index` across the horizontal axis. No-op out of range.
    pub fn flip_vert(&mut self, index: usize) {
        self.transform(index, Cell::flipped_vert);
    }

    fn transform(&mut self, index: usize, op: fn(Cell) -> Cell) {
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };
        *cell = op(*cell);
        self.version += 1;
    }

    /// Resize the grid to side length `to`, preserving as much content as
    /// possible.
    ///
    /// Shrinking keeps the top-left sub-grid and snapshots the full previous
    /// content into the backup. Growing fills each position from the live
    /// grid where it existed, then from the backup (recovering cells a
    /// previous shrink discarded), then from `source`. A shrink followed by
    /// a grow back to the original size with no edits in between restores
    /// the original content exactly.
    pub fn resize<S: CellSource>(&mut self, to: usize, colors: usize, source: &mut S) {
        if to == self.size {
            return;
        }

        // Snapshot. When the backup is already larger than the live grid it
        // still holds cells a previous shrink discarded; overlay the live
        // content onto its upper-left region instead of replacing it.
        if self.backup.size > self.size {
            for row in 0..self.size {
                for col in 0..self.size {
                    self.backup.cells[row * self.backup.size + col] =
                        self.cells[row * self.size + col];
                }
            }
        } else {
            self.backup = Backup {
                cells: self.cells.clone(),
                size: self.size,
            };
        }

        let old = self.size;
        if to > old {
            let mut grown = Vec::with_capacity(to * to);
            for row in 0..to {
                for col in 0..to {
                    let cell = if row < old && col < old {
                        self.cells[row * old + col]
                    } else if let Some(recovered) = self.backup.get(row, col) {
                        recovered
                    } else {
                        source.next_cell(colors)
                    };
                    grown.push(cell);
                }
            }
            self.cells = grown;
            self.size = to;

            // The backup always holds the largest known state.
            if self.backup.size < to {
                self.backup = Backup {
                    cells: self.cells.clone(),
                    size: to,
                };
            }
        } else {
            let mut kept = Vec::with_capacity(to * to);
            for row in 0..to {
                let start = row * old;
                kept.extend_from_slice(&self.cells[start..start + to]);
            }
            self.cells = kept;
            self.size = to;
        }

        self.version += 1;
    }

    /// Shift every column left by one, wrapping the first column around.
    pub fn roll_left(&mut self) {
        self.roll(0, 1);
    }

    /// Shift every column right by one, wrapping the last column around.
    pub fn roll_right(&mut self) {
        self.roll(0, self.size.saturating_sub(1));
    }

    /// Shift every row up by one, wrapping the first row around.
    pub fn roll_up(&mut self) {
        self.roll(1, 0);
    }

    /// Shift every row down by one, wrapping the last row around.
    pub fn roll_down(&mut self) {
        self.roll(self.size.saturating_sub(1), 0);
    }

    /// Rebuild the grid reading each position from `(row + dr, col + dc)`
    /// modulo the side length.
    ///
    /// Rolling invalidates the backup: its positions no longer correspond
    /// to anything recoverable.
    fn roll(&mut self, dr: usize, dc: usize) {
        let n = self.size;
        if n == 0 {
            return;
        }
        let mut rolled = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                rolled.push(self.cells[((row + dr) % n) * n + (col + dc) % n]);
            }
        }
        self.cells = rolled;
        self.backup = Backup::default();
        self.version += 1;
    }
}

impl PartialEq for Grid {
    /// Content equality: same side length and same cells. Backup, version
    /// and raster cache are bookkeeping, not content.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Grid {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::cell::SeededCells;

    fn numbered(size: usize) -> Grid {
        let mut grid = Grid::new(size);
        for i in 0..grid.len() {
            let v = (i % 250) as u8;
            grid.paint(i, Quadrant::Top, v);
            grid.paint(i, Quadrant::Right, v.wrapping_add(1));
        }
        grid
    }

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.len(), 16);
        assert!(grid.cells().iter().all(|c| *c == Cell::EMPTY));
    }

    #[test]
    fn test_grid_random_in_range() {
        let mut source = SeededCells::new(3);
        let grid = Grid::random(5, 4, &mut source);
        assert_eq!(grid.len(), 25);
        for cell in grid.cells() {
            for q in Quadrant::ALL {
                assert!(cell.quadrant(q) < 4);
            }
        }
    }

    #[test]
    fn test_paint_and_version() {
        let mut grid = Grid::new(2);
        let v0 = grid.version();
        grid.paint(1, Quadrant::Left, 3);
        assert_eq!(grid.get(1).unwrap().quadrant(Quadrant::Left), 3);
        assert_eq!(grid.version(), v0 + 1);

        // Unchanged color is a no-op.
        grid.paint(1, Quadrant::Left, 3);
        assert_eq!(grid.version(), v0 + 1);

        // Out of range is a silent no-op.
        grid.paint(99, Quadrant::Top, 1);
        assert_eq!(grid.version(), v0 + 1);
    }

    #[test]
    fn test_transform_in_place() {
        let mut grid = Grid::new(2);
        grid.paint(0, Quadrant::Top, 1);
        grid.paint(0, Quadrant::Right, 2);
        grid.rotate_cw(0);
        assert_eq!(grid.get(0).unwrap(), Cell::new(0, 1, 2, 0));
        grid.rotate_ccw(0);
        assert_eq!(grid.get(0).unwrap(), Cell::new(1, 2, 0, 0));
    }

    #[test]
    fn test_resize_same_size_noop() {
        let mut grid = numbered(4);
        let version = grid.version();
        let mut source = SeededCells::new(1);
        grid.resize(4, 4, &mut source);
        assert_eq!(grid.version(), version);
    }

    #[test]
    fn test_resize_grow_then_shrink_round_trip() {
        let mut source = SeededCells::new(11);
        let mut grid = numbered(4);
        let original = grid.clone();

        grid.resize(6, 8, &mut source);
        assert_eq!(grid.size(), 6);
        grid.resize(4, 8, &mut source);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_resize_shrink_then_grow_round_trip() {
        let mut source = SeededCells::new(11);
        let mut grid = numbered(4);
        let original = grid.clone();

        grid.resize(2, 8, &mut source);
        assert_eq!(grid.size(), 2);
        // Top-left sub-grid survives the shrink.
        assert_eq!(grid.get(0), original.get(0));
        assert_eq!(grid.get(1), original.get(1));
        assert_eq!(grid.get(2), original.get(4));
        assert_eq!(grid.get(3), original.get(5));

        grid.resize(4, 8, &mut source);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_resize_grow_preserves_live_edits_over_backup() {
        let mut source = SeededCells::new(5);
        let mut grid = numbered(4);
        grid.resize(2, 8, &mut source);
        // Edit inside the shrunken grid; the edit must survive regrowth.
        grid.paint(0, Quadrant::Bottom, 9);
        let edited = grid.get(0).unwrap();
        grid.resize(4, 8, &mut source);
        assert_eq!(grid.get(0).unwrap(), edited);
    }

    #[test]
    fn test_resize_grow_beyond_backup_randomizes_rest() {
        let mut source = SeededCells::new(21);
        let mut grid = numbered(2);
        grid.resize(4, 3, &mut source);
        assert_eq!(grid.size(), 4);
        // Everything outside the old 2x2 came from the source, in range.
        for row in 0..4 {
            for col in 0..4 {
                if row < 2 && col < 2 {
                    continue;
                }
                let cell = grid.get(row * 4 + col).unwrap();
                for q in Quadrant::ALL {
                    assert!(cell.quadrant(q) < 3);
                }
            }
        }
    }

    #[test]
    fn test_roll_left_example() {
        // 2x2 grid [A, B, C, D] row-major rolls left to [B, A, D, C].
        let mut grid = Grid::new(2);
        let (a, b, c, d) = (
            Cell::new(1, 0, 0, 0),
            Cell::new(2, 0, 0, 0),
            Cell::new(3, 0, 0, 0),
            Cell::new(4, 0, 0, 0),
        );
        for (i, cell) in [a, b, c, d].into_iter().enumerate() {
            grid.paint(i, Quadrant::Top, cell.quadrant(Quadrant::Top));
        }
        grid.roll_left();
        assert_eq!(grid.get(0), Some(b));
        assert_eq!(grid.get(1), Some(a));
        assert_eq!(grid.get(2), Some(d));
        assert_eq!(grid.get(3), Some(c));
    }

    #[test]
    fn test_roll_n_times_is_identity() {
        let mut source = SeededCells::new(77);
        let original = Grid::random(5, 6, &mut source);

        for op in [
            Grid::roll_left,
            Grid::roll_right,
            Grid::roll_up,
            Grid::roll_down,
        ] {
            let mut grid = original.clone();
            for _ in 0..5 {
                op(&mut grid);
            }
            assert_eq!(grid, original);
        }
    }

    #[test]
    fn test_roll_discards_backup() {
        let mut source = SeededCells::new(13);
        let mut grid = numbered(4);
        let original = grid.clone();
        grid.resize(2, 8, &mut source);
        grid.roll_left();
        grid.roll_right();
        grid.resize(4, 8, &mut source);
        // The rolled grid's top-left corner survives, but the backup is
        // gone, so the regrown region cannot equal the original.
        assert_ne!(grid, original);
    }
}
