//! Border: One concentric colored frame around the tiled quilt.

/// A single border layer.
///
/// Width is measured in half-cell units so that a border can be as thin as
/// half a quilt cell; a width of zero keeps the layer in the stack without
/// drawing anything. Layers are stacked outer to inner on the
/// [`Quilt`](crate::quilt::Quilt).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Border {
    /// Width in half-cell units (0 = invisible layer).
    pub width: u32,
    /// Fill color string (hex, e.g. `"#aa3355"`).
    pub color: String,
}

impl Border {
    /// Create a border layer.
    pub fn new(width: u32, color: impl Into<String>) -> Self {
        Self {
            width,
            color: color.into(),
        }
    }

    /// Pixel thickness of this layer per edge, given the plan's cell size.
    ///
    /// One width unit is half a cell, so the per-edge thickness is
    /// `width * cell_size / 2`.
    #[inline]
    pub const fn edge_px(&self, cell_size: u32) -> u32 {
        self.width * cell_size / 2
    }
}
