//! Incremental compositor: Redraw only the regions whose inputs changed.
//!
//! One compositor is bound to one drawing surface and remembers, in its
//! view state, the inputs each region was last drawn with. A render call
//! walks borders, sash and blocks in order, comparing live composition
//! state against the snapshot and issuing draw calls only where they
//! differ. Regions it skips simply keep the surface's previous pixels.
//!
//! The view state holds owned deep copies, never references into the live
//! composition; cloning at snapshot time is what makes the diff sound.

use super::surface::{DrawSurface, SurfaceError};
use crate::layout::{CellSizing, LayoutSignature, Rect, RenderPlan};
use crate::quilt::{Border, Quilt, Sash, SashLevel};
use bitflags::bitflags;
use thiserror::Error;

/// A render call failed before drawing anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The drawing surface could not be acquired or sized. View state is
    /// untouched; the next call diffs against the last successful render,
    /// or redraws in full if none has succeeded yet.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

bitflags! {
    /// Regions a render call actually redrew.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct Redraw: u8 {
        /// At least one border layer was drawn.
        const BORDERS = 0b0000_0001;
        /// The primary sash lattice was drawn.
        const SASH_PRIMARY = 0b0000_0010;
        /// The secondary sash intersections were drawn.
        const SASH_SECONDARY = 0b0000_0100;
        /// Blocks were rasterized and blitted.
        const BLOCKS = 0b0000_1000;
    }
}

impl std::fmt::Debug for Redraw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Statistics from one render call.
///
/// The counters make the incremental behavior observable: a steady-state
/// re-render reports zeros across the board.
#[derive(Debug, Clone, Default)]
pub struct RenderStats {
    /// Whether this call ran in full-redraw mode.
    pub full_redraw: bool,
    /// Regions redrawn this call.
    pub redrawn: Redraw,
    /// Border frame fills issued.
    pub border_draws: usize,
    /// Sash rectangle fills issued (lattice lines and intersections).
    pub sash_draws: usize,
    /// Block bitmap blits issued.
    pub block_blits: usize,
}

/// Per-surface memory of the last-drawn inputs.
#[derive(Debug, Clone, Default)]
struct ViewState {
    layout: Option<LayoutSignature>,
    borders: Vec<Border>,
    sash: Option<Sash>,
    palette: Vec<String>,
    generation: Option<u64>,
}

/// The incremental compositor bound to one drawing surface.
#[derive(Debug, Clone, Default)]
pub struct Compositor {
    view: ViewState,
}

impl Compositor {
    /// Create a compositor with an uninitialized view; the first render is
    /// always a full redraw.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the view state, forcing the next render to redraw everything.
    ///
    /// Callers use this after drawing on the surface themselves.
    pub fn reset(&mut self) {
        self.view = ViewState::default();
    }

    /// Render `quilt` onto `surface`.
    ///
    /// `generation` is the caller-maintained counter bumped whenever any
    /// grid's visible content changed; the compositor does not compare
    /// block pixels itself. The quilt is borrowed mutably only to reach the
    /// grids' raster caches.
    ///
    /// Returns what was redrawn, or a [`RenderError`] if the surface could
    /// not be prepared (in which case no state was touched).
    pub fn render<Z, S>(
        &mut self,
        quilt: &mut Quilt,
        generation: u64,
        sizing: &Z,
        surface: &mut S,
    ) -> Result<RenderStats, RenderError>
    where
        Z: CellSizing,
        S: DrawSurface,
    {
        let plan = RenderPlan::derive(quilt, sizing);
        surface.prepare(plan.canvas_width, plan.canvas_height)?;

        let signature = plan.signature();
        let full = self.needs_full_redraw(quilt, signature);

        let mut stats = RenderStats {
            full_redraw: full,
            ..RenderStats::default()
        };

        self.draw_borders(quilt, &plan, full, surface, &mut stats);
        self.draw_sash(quilt, &plan, full, surface, &mut stats);
        self.draw_blocks(quilt, &plan, full, generation, surface, &mut stats);

        // Snapshot the inputs just used, as owned copies.
        self.view = ViewState {
            layout: Some(signature),
            borders: quilt.borders().to_vec(),
            sash: Some(quilt.sash().clone()),
            palette: quilt.palette().colors().to_vec(),
            generation: Some(generation),
        };

        Ok(stats)
    }

    /// Whether the whole surface must be repainted.
    ///
    /// Layout changes move every region; palette changes recolor blocks
    /// under the sash; sash color changes repaint strips across the whole
    /// canvas. Any of those invalidates the previous frame wholesale.
    fn needs_full_redraw(&self, quilt: &Quilt, signature: LayoutSignature) -> bool {
        if self.view.layout != Some(signature) {
            return true;
        }
        if self.view.palette != quilt.palette().colors() {
            return true;
        }
        if signature.has_sash {
            let live = quilt.sash();
            return self
                .view
                .sash
                .as_ref()
                .is_none_or(|seen| seen.colors != live.colors);
        }
        false
    }

    /// Walk the border stack outer to inner, drawing the layers that
    /// changed.
    fn draw_borders<S: DrawSurface>(
        &self,
        quilt: &Quilt,
        plan: &RenderPlan,
        full: bool,
        surface: &mut S,
        stats: &mut RenderStats,
    ) {
        let mut rect = Rect::from_size(plan.canvas_width, plan.canvas_height);
        // Once a layer's width changes, the geometry beneath every inner
        // layer has shifted; they must all repaint even if unchanged.
        let mut draw_rest = false;

        for (i, border) in quilt.borders().iter().enumerate() {
            let edge = border.edge_px(plan.cell_size);
            let seen = self.view.borders.get(i);

            if edge > 0 {
                let changed = seen != Some(border);
                if full || draw_rest || changed {
                    surface.fill_frame(rect, rect.inset(edge), &border.color);
                    stats.border_draws += 1;
                    stats.redrawn |= Redraw::BORDERS;
                }
            }
            // A width change shifts the geometry beneath every inner layer
            // even when this layer itself collapsed to zero width and drew
            // nothing.
            if seen.is_none_or(|s| s.width != border.width) {
                draw_rest = true;
            }
            rect = rect.inset(edge);
        }
    }

    /// Draw the sash lattice and, at `Double` level, the intersections.
    fn draw_sash<S: DrawSurface>(
        &self,
        quilt: &Quilt,
        plan: &RenderPlan,
        full: bool,
        surface: &mut S,
        stats: &mut RenderStats,
    ) {
        if !plan.has_sash {
            return;
        }
        let sash = quilt.sash();
        let seen = self.view.sash.as_ref();

        let pad = plan.pad_size;
        let inner_w = plan.canvas_width - 2 * pad;
        let inner_h = plan.canvas_height - 2 * pad;
        let step = plan.block_px + plan.sash_gap;
        let blocks_w = quilt.blocks_w() as u32;
        let blocks_h = quilt.blocks_h() as u32;

        // Lattice x positions of the vertical strips (and symmetrically the
        // y positions of the horizontal strips).
        let strip = |i: u32| pad + i * step - plan.sash_gap;

        let draw_primary = full || seen.is_none_or(|s| s.primary() != sash.primary());
        if draw_primary {
            for i in 1..blocks_w {
                surface.fill_rect(Rect::new(strip(i), pad, plan.sash_gap, inner_h), sash.primary());
                stats.sash_draws += 1;
            }
            for j in 1..blocks_h {
                surface.fill_rect(Rect::new(pad, strip(j), inner_w, plan.sash_gap), sash.primary());
                stats.sash_draws += 1;
            }
            stats.redrawn |= Redraw::SASH_PRIMARY;
        }

        if sash.level == SashLevel::Double {
            // Redrawing the primary lattice paints over the intersections,
            // so a primary redraw forces the secondary pass too.
            let secondary_changed = seen.is_none_or(|s| s.secondary() != sash.secondary());
            if full || draw_primary || secondary_changed {
                for j in 1..blocks_h {
                    for i in 1..blocks_w {
                        let square = Rect::new(strip(i), strip(j), plan.sash_gap, plan.sash_gap);
                        surface.fill_rect(square, sash.secondary());
                        stats.sash_draws += 1;
                    }
                }
                stats.redrawn |= Redraw::SASH_SECONDARY;
            }
        }
    }

    /// Rasterize and blit the blocks when the generation counter moved.
    fn draw_blocks<S: DrawSurface>(
        &self,
        quilt: &mut Quilt,
        plan: &RenderPlan,
        full: bool,
        generation: u64,
        surface: &mut S,
        stats: &mut RenderStats,
    ) {
        if !full && self.view.generation == Some(generation) {
            return;
        }

        // Pre-rasterize each distinct grid once at the plan's block size.
        let palette = quilt.palette().clone();
        let used: Vec<usize> = {
            let mut used: Vec<usize> = quilt.block_map().to_vec();
            used.sort_unstable();
            used.dedup();
            used
        };
        for index in &used {
            if let Some(grid) = quilt.grid_mut(*index) {
                grid.rasterize(plan.cell_size, &palette);
            }
        }

        for row in 0..quilt.blocks_h() {
            for col in 0..quilt.blocks_w() {
                let grid_index = quilt.block_map()[row * quilt.blocks_w() + col];
                let (x, y) = plan.block_origin(row as u32, col as u32);
                surface.blit(quilt.grids()[grid_index].cached_raster(), x, y);
                stats.block_blits += 1;
            }
        }
        stats.redrawn |= Redraw::BLOCKS;
    }
}
