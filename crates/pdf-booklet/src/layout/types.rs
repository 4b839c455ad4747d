//! Layout data types for booklet imposition
//!
//! These types sit between page planning and PDF rendering: they describe
//! where each source page lands on a sheet without touching any PDF objects.

use std::fmt;

/// Which half of the landscape sheet a page occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Area shared with another rectangle (zero when they only touch)
    pub fn overlap_area(&self, other: &Rect) -> f32 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.top().min(other.top()) - self.y.max(other.y);
        if w > 0.0 && h > 0.0 { w * h } else { 0.0 }
    }
}

/// Uniform scale followed by a translation, as applied to one source page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl Transform {
    /// PDF matrix `[a b c d e f]` for the `cm` operator
    pub fn matrix(&self) -> [f32; 6] {
        [
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.translate_x,
            self.translate_y,
        ]
    }

    /// Map a point from source page space to sheet space
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * self.scale + self.translate_x,
            y * self.scale + self.translate_y,
        )
    }
}

/// Two source pages printed side by side on one side of a sheet.
///
/// `None` means a blank page is inserted in that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetPair {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl SheetPair {
    pub fn new(left: Option<usize>, right: Option<usize>) -> Self {
        Self { left, right }
    }

    pub fn page(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Number of blank positions in this pair
    pub fn blank_count(&self) -> usize {
        usize::from(self.left.is_none()) + usize::from(self.right.is_none())
    }
}

/// Renders 1-based page numbers, `-` for blanks: `4|1`, `-|5`
impl fmt::Display for SheetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |page: Option<usize>| match page {
            Some(idx) => (idx + 1).to_string(),
            None => "-".to_string(),
        };
        write!(f, "{}|{}", label(self.left), label(self.right))
    }
}

/// Final placement of one half of a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlacement {
    pub side: Side,
    /// Source page index (None = blank page)
    pub source_page: Option<usize>,
    /// Transform from source page space to sheet space
    pub transform: Transform,
    /// Visible region on the sheet; content outside is clipped
    pub clip: Rect,
}

/// Complete geometry of one output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    /// Output page width in points (source page height)
    pub width: f32,
    /// Output page height in points (source page width)
    pub height: f32,
    pub left: HalfPlacement,
    pub right: HalfPlacement,
}

impl SheetLayout {
    pub fn placements(&self) -> [&HalfPlacement; 2] {
        [&self.left, &self.right]
    }
}
