//! Grid rasterization with a keyed bitmap cache.
//!
//! A grid rasterizes to one square [`Bitmap`] at a given per-cell pixel
//! size. The result is cached against `(content version, cell px, parsed
//! palette)`, so cache validity is a pure function of its inputs: any edit
//! bumps the version, any palette or zoom change alters the key, and an
//! unchanged grid re-renders for free.

use super::grid::Grid;
use crate::quilt::Palette;
use crate::render::{Bitmap, Rgba};
use crate::layout::Rect;

/// Inputs the cached bitmap was rasterized with.
#[derive(Clone, PartialEq, Eq, Debug)]
struct RasterKey {
    version: u64,
    cell_px: u32,
    palette: Vec<Rgba>,
}

/// Cached rasterization of one grid.
#[derive(Clone, Debug)]
pub struct RasterCache {
    key: Option<RasterKey>,
    bitmap: Bitmap,
    rebuilds: u64,
}

impl Default for RasterCache {
    fn default() -> Self {
        Self {
            key: None,
            bitmap: Bitmap::new(0, 0),
            rebuilds: 0,
        }
    }
}

impl RasterCache {
    /// How many times the cached bitmap has been rebuilt. Diagnostic; lets
    /// callers and tests confirm the cache actually hits.
    #[inline]
    pub const fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

impl Grid {
    /// Rasterize this grid at `cell_px` pixels per cell, reusing the cached
    /// bitmap when the content version, pixel size and palette all match.
    ///
    /// `cell_px` is expected even (the sizing strategies guarantee it).
    /// Quadrant indices past the palette end clamp to the last color;
    /// an empty palette rasterizes fully transparent.
    pub fn rasterize(&mut self, cell_px: u32, palette: &Palette) -> &Bitmap {
        let colors: Vec<Rgba> = palette.colors().iter().map(|c| Rgba::parse_lossy(c)).collect();
        let key = RasterKey {
            version: self.version(),
            cell_px,
            palette: colors,
        };

        if self.raster.key.as_ref() != Some(&key) {
            let bitmap = rasterize_cells(self, cell_px, &key.palette);
            self.raster.bitmap = bitmap;
            self.raster.key = Some(key);
            self.raster.rebuilds += 1;
        }
        &self.raster.bitmap
    }

    /// Diagnostic counter from the raster cache.
    #[inline]
    pub const fn raster_rebuilds(&self) -> u64 {
        self.raster.rebuilds
    }

    /// The cached bitmap as-is, without checking freshness. The compositor
    /// calls this right after a [`rasterize`](Grid::rasterize) pass.
    #[inline]
    pub(crate) const fn cached_raster(&self) -> &Bitmap {
        &self.raster.bitmap
    }
}

/// Clamp a quadrant index into the parsed palette.
#[inline]
fn resolve(colors: &[Rgba], index: u8) -> Rgba {
    let Some(last) = colors.len().checked_sub(1) else {
        return Rgba::TRANSPARENT;
    };
    colors[(index as usize).min(last)]
}

/// Draw every cell of the grid into a fresh bitmap.
///
/// Each cell is two half-rectangles (left and right colors) overlaid by the
/// top and bottom triangles, their apexes meeting at the cell center. The
/// four visible regions are the quarter-square triangles.
fn rasterize_cells(grid: &Grid, cell_px: u32, colors: &[Rgba]) -> Bitmap {
    let n = grid.size() as u32;
    let mut bitmap = Bitmap::new(n * cell_px, n * cell_px);
    let half = cell_px / 2;

    for (index, cell) in grid.cells().iter().enumerate() {
        let [top, right, bottom, left] = cell.as_array();
        let x0 = (index as u32 % n) * cell_px;
        let y0 = (index as u32 / n) * cell_px;

        bitmap.fill_rect(Rect::new(x0, y0, half, cell_px), resolve(colors, left));
        bitmap.fill_rect(Rect::new(x0 + half, y0, half, cell_px), resolve(colors, right));

        // Triangle row spans: at distance d from the nearer horizontal
        // edge the triangle covers columns [d, cell_px - d).
        for d in 0..half {
            let span = Rect::new(x0 + d, y0 + d, cell_px - 2 * d, 1);
            bitmap.fill_rect(span, resolve(colors, top));
            let mirrored = Rect::new(x0 + d, y0 + cell_px - 1 - d, cell_px - 2 * d, 1);
            bitmap.fill_rect(mirrored, resolve(colors, bottom));
        }
    }
    bitmap
}
