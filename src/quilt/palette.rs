//! Palette: The shared ordered color list cells index into.
//!
//! Indices are stable identities: colors are edited in place, never
//! reordered or removed, so a cell's quadrant index keeps meaning as the
//! user tweaks colors.

use super::QuiltError;

/// Ordered list of color strings with a configured size limit.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Palette {
    colors: Vec<String>,
    max: usize,
}

impl Palette {
    /// Create an empty palette bounded at `max` colors.
    pub const fn new(max: usize) -> Self {
        Self {
            colors: Vec::new(),
            max,
        }
    }

    /// Create a palette from initial colors, bounded at `max`.
    ///
    /// Fails like repeated [`push`](Self::push) would when the initial set
    /// already exceeds the limit.
    pub fn from_colors<I>(colors: I, max: usize) -> Result<Self, QuiltError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut palette = Self::new(max);
        for color in colors {
            palette.push(color)?;
        }
        Ok(palette)
    }

    /// Number of colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Configured maximum number of colors.
    #[inline]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Get a color by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    /// Append a color, returning its index.
    ///
    /// Rejected with [`QuiltError::PaletteLimit`] at the limit; the palette
    /// is left unchanged.
    pub fn push(&mut self, color: impl Into<String>) -> Result<usize, QuiltError> {
        if self.colors.len() >= self.max {
            return Err(QuiltError::PaletteLimit { max: self.max });
        }
        self.colors.push(color.into());
        Ok(self.colors.len() - 1)
    }

    /// Replace the color at `index` in place. Out-of-range indices are a
    /// silent no-op.
    pub fn set(&mut self, index: usize, color: impl Into<String>) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color.into();
        }
    }

    /// Resolve a cell's quadrant index to a color, clamping out-of-range
    /// indices to the last entry.
    ///
    /// Filler cells generated against a larger palette may carry stale
    /// indices after the palette shrinks between resizes; clamping here
    /// keeps them drawable. Returns `None` only for an empty palette.
    #[inline]
    pub fn resolve(&self, index: u8) -> Option<&str> {
        let last = self.colors.len().checked_sub(1)?;
        self.get((index as usize).min(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut palette = Palette::new(4);
        assert_eq!(palette.push("#ff0000"), Ok(0));
        assert_eq!(palette.push("#00ff00"), Ok(1));
        assert_eq!(palette.get(0), Some("#ff0000"));
        assert_eq!(palette.get(2), None);
    }

    #[test]
    fn test_limit_enforced() {
        let mut palette = Palette::from_colors(["#000", "#111"], 2).unwrap();
        assert_eq!(
            palette.push("#222"),
            Err(QuiltError::PaletteLimit { max: 2 })
        );
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_from_colors_over_limit() {
        let result = Palette::from_colors(["#000", "#111", "#222"], 2);
        assert_eq!(result, Err(QuiltError::PaletteLimit { max: 2 }));
    }

    #[test]
    fn test_set_in_place() {
        let mut palette = Palette::from_colors(["#000", "#111"], 4).unwrap();
        palette.set(1, "#abcdef");
        assert_eq!(palette.get(1), Some("#abcdef"));
        // Out of range is a silent no-op.
        palette.set(9, "#ffffff");
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_resolve_clamps() {
        let palette = Palette::from_colors(["#000", "#111"], 4).unwrap();
        assert_eq!(palette.resolve(0), Some("#000"));
        assert_eq!(palette.resolve(1), Some("#111"));
        assert_eq!(palette.resolve(200), Some("#111"));
        assert_eq!(Palette::new(4).resolve(0), None);
    }
}
