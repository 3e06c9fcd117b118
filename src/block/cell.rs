//! Cell: The atomic unit of a quilt block.
//!
//! A cell is a square split into four quadrants (top, right, bottom, left),
//! each holding an index into the shared [`Palette`](crate::quilt::Palette).
//! Drawn, the quadrants form the classic quarter-square look: two half
//! rectangles overlaid by the top and bottom triangles.
//!
//! Cells are plain `Copy` values. They are owned by exactly one grid
//! position at a time; copies, never shared references, cross grid
//! boundaries.

/// One of the four quadrants of a [`Cell`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    /// Top triangle.
    Top,
    /// Right triangle.
    Right,
    /// Bottom triangle.
    Bottom,
    /// Left triangle.
    Left,
}

impl Quadrant {
    /// All quadrants in storage order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Position of this quadrant in a cell's storage tuple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }
}

/// A single quilt cell: four palette indices in `[top, right, bottom, left]`
/// order.
///
/// All transforms are pure and return a new cell, matching the builder style
/// of the rest of the crate. Rotations are cyclic permutations of the tuple,
/// so four rotations in either direction reproduce the original exactly;
/// each flip is its own inverse.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// Palette indices in `[top, right, bottom, left]` order.
    quadrants: [u8; 4],
}

impl Cell {
    /// Create a cell from explicit quadrant indices.
    #[inline]
    pub const fn new(top: u8, right: u8, bottom: u8, left: u8) -> Self {
        Self {
            quadrants: [top, right, bottom, left],
        }
    }

    /// A cell with every quadrant set to palette index 0.
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Get the palette index of a quadrant.
    #[inline]
    pub const fn quadrant(&self, q: Quadrant) -> u8 {
        self.quadrants[q.index()]
    }

    /// Get the raw `[top, right, bottom, left]` tuple.
    #[inline]
    pub const fn as_array(&self) -> [u8; 4] {
        self.quadrants
    }

    /// Set the palette index of a quadrant (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_quadrant(mut self, q: Quadrant, color: u8) -> Self {
        self.quadrants[q.index()] = color;
        self
    }

    /// Rotate a quarter turn clockwise: `[t,r,b,l] -> [l,t,r,b]`.
    #[inline]
    #[must_use]
    pub const fn rotated_cw(self) -> Self {
        let [t, r, b, l] = self.quadrants;
        Self::new(l, t, r, b)
    }

    /// Rotate a quarter turn counter-clockwise: `[t,r,b,l] -> [r,b,l,t]`.
    #[inline]
    #[must_use]
    pub const fn rotated_ccw(self) -> Self {
        let [t, r, b, l] = self.quadrants;
        Self::new(r, b, l, t)
    }

    /// Mirror across the vertical axis: swaps right and left.
    #[inline]
    #[must_use]
    pub const fn flipped_horiz(self) -> Self {
        let [t, r, b, l] = self.quadrants;
        Self::new(t, l, b, r)
    }

    /// Mirror across the horizontal axis: swaps top and bottom.
    #[inline]
    #[must_use]
    pub const fn flipped_vert(self) -> Self {
        let [t, r, b, l] = self.quadrants;
        Self::new(b, r, t, l)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [t, r, b, l] = self.quadrants;
        write!(f, "Cell[{t},{r},{b},{l}]")
    }
}

/// Source of randomized cells.
///
/// Callers feeding input events implement this (or reuse [`SeededCells`]) so
/// that grid growth and `Grid::random` can fill positions with quadrants
/// independently uniform over `[0, colors)`.
pub trait CellSource {
    /// Produce one cell with each quadrant uniform over `[0, colors)`.
    fn next_cell(&mut self, colors: usize) -> Cell;
}

/// Deterministic xorshift64* cell source.
///
/// The crate has no randomness dependency; this small generator is enough
/// for filler cells and keeps tests reproducible from a seed.
#[derive(Clone, Debug)]
pub struct SeededCells {
    state: u64,
}

impl SeededCells {
    /// Create a source from a seed. A zero seed is remapped to a fixed
    /// non-zero constant (xorshift has a fixed point at zero).
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl CellSource for SeededCells {
    fn next_cell(&mut self, colors: usize) -> Cell {
        if colors == 0 {
            return Cell::EMPTY;
        }
        let n = colors as u64;
        let mut q = [0u8; 4];
        for slot in &mut q {
            // Modulo bias is irrelevant at palette sizes (<= 255).
            *slot = (self.next_u64() % n) as u8;
        }
        Cell::new(q[0], q[1], q[2], q[3])
    }
}
