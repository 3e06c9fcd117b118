//! Quilt composition: the block arrangement, border stack, sash and palette
//! that together describe one full quilt.
//!
//! Everything here is plain mutable state driven by UI events. The only
//! fallible operations are the ones that can exceed a configured limit
//! (border count, palette size); those reject at the entry point and leave
//! the composition unchanged.

mod border;
mod palette;
mod sash;
#[allow(clippy::module_inception)]
mod quilt;

pub use border::Border;
pub use palette::Palette;
pub use quilt::{Limits, Quilt};
pub use sash::{Sash, SashLevel};

use thiserror::Error;

/// Rejected composition mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuiltError {
    /// The border stack is at its configured limit.
    #[error("border stack is full ({max} borders)")]
    BorderLimit {
        /// Configured maximum number of borders.
        max: usize,
    },
    /// The palette is at its configured limit.
    #[error("palette is full ({max} colors)")]
    PaletteLimit {
        /// Configured maximum number of colors.
        max: usize,
    },
}
