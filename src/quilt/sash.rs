//! Sash: The lattice strips drawn between tiled blocks.

/// How much sashing the quilt preview draws.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum SashLevel {
    /// No sashing; blocks tile edge to edge.
    #[default]
    None,
    /// Lattice lines in the primary color only.
    Single,
    /// Lattice lines plus intersection squares in the secondary color.
    Double,
}

/// Sash configuration: a level and a primary/secondary color pair.
///
/// The secondary color is retained even at `Single` level so toggling back
/// to `Double` restores it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Sash {
    /// Drawing level.
    pub level: SashLevel,
    /// `[primary, secondary]` color strings.
    pub colors: [String; 2],
}

impl Sash {
    /// Create a sash configuration.
    pub fn new(level: SashLevel, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            level,
            colors: [primary.into(), secondary.into()],
        }
    }

    /// Whether any sashing is drawn (level is not `None`).
    #[inline]
    pub fn is_on(&self) -> bool {
        self.level != SashLevel::None
    }

    /// Primary (lattice) color.
    #[inline]
    pub fn primary(&self) -> &str {
        &self.colors[0]
    }

    /// Secondary (intersection) color.
    #[inline]
    pub fn secondary(&self) -> &str {
        &self.colors[1]
    }
}

impl Default for Sash {
    /// No sashing, with a neutral color pair ready for toggling on.
    fn default() -> Self {
        Self::new(SashLevel::None, "#cccccc", "#999999")
    }
}
