//! Braille cell layout
//!
//! Maps the eight dot positions of a Braille cell onto a glyph box. The cell
//! is a 2 column by 4 row grid, but dots are numbered the historical way:
//!
//! ```text
//! 0 3
//! 1 4
//! 2 5
//! 6 7
//! ```
//!
//! Dots 0-5 make up the original six-dot cell and are numbered down each
//! column; dots 6 and 7 were added later as a fourth row.

use kurbo::Point;
use std::fmt;

/// Number of dot positions in a Braille cell
pub const DOTS_PER_CELL: u8 = 8;

/// One of the eight dot positions of a Braille cell (0..=7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DotIndex(u8);

impl DotIndex {
    /// Create a dot index, returning `None` outside 0..=7
    pub fn new(index: u8) -> Option<Self> {
        (index < DOTS_PER_CELL).then_some(Self(index))
    }

    /// All eight dots in numbering order
    pub fn all() -> impl Iterator<Item = DotIndex> {
        (0..DOTS_PER_CELL).map(Self)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Bit of the pattern index that raises this dot
    pub fn mask(self) -> u8 {
        1 << self.0
    }

    /// Grid row (0 at the top) and column (0 on the left) of this dot
    pub fn row_col(self) -> (u8, u8) {
        if self.0 < 6 {
            (self.0 % 3, self.0 / 3)
        } else {
            (3, self.0 - 6)
        }
    }

    /// Whether this dot is raised in the given pattern index
    pub fn is_raised_in(self, pattern: u8) -> bool {
        pattern & self.mask() != 0
    }
}

impl fmt::Display for DotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dot {}", self.0)
    }
}

/// Iterate the raised dots of a pattern index in numbering order
pub fn raised_dots(pattern: u8) -> impl Iterator<Item = DotIndex> {
    DotIndex::all().filter(move |dot| dot.is_raised_in(pattern))
}

/// Shared box of every glyph in the font (monospaced Braille cell)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    pub width: f64,
    pub ymax: f64,
    pub ymin: f64,
}

impl GlyphBox {
    pub fn new(width: f64, ymax: f64, ymin: f64) -> Self {
        Self { width, ymax, ymin }
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Radii of a dot shape scaled by `ratio`, where 1.0 makes adjacent
    /// dots touch exactly
    pub fn dot_radii(&self, ratio: f64) -> DotRadii {
        DotRadii {
            rx: self.width / 4.0 * ratio,
            ry: self.height() / 8.0 * ratio,
        }
    }
}

/// Half-width and half-height of a single dot shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotRadii {
    pub rx: f64,
    pub ry: f64,
}

/// Center of the cell that holds `dot` within `glyph_box`
pub fn center_of(dot: DotIndex, glyph_box: &GlyphBox) -> Point {
    let (row, col) = dot.row_col();
    let height = glyph_box.height();
    let x0 = glyph_box.width / 4.0;
    let y0 = glyph_box.ymax - height / 8.0;
    Point::new(
        x0 + f64::from(col) * glyph_box.width / 2.0,
        y0 - f64::from(row) * height / 4.0,
    )
}
