//! Layout module: Pixel geometry derived from abstract grid dimensions.
//!
//! This module contains:
//! - [`Rect`]: A pixel rectangle primitive
//! - [`RenderPlan`]: The pure geometry snapshot for one render call
//! - [`CellSizing`]: The injected cell-size strategy, with the shipped
//!   [`FitToBounds`], [`ExportResolution`] and [`FixedCell`] strategies

mod plan;
mod rect;

pub use plan::{CellSizing, ExportResolution, FitToBounds, FixedCell, LayoutSignature, RenderPlan};
pub use rect::Rect;
