//! Plane coordinates.
//!
//! Locations live in the host's final screen space, so distances are plain
//! Euclidean distances in the same units.  That one number is both the
//! physical length of a railway and its weight during path search.

/// A point on the board.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Shift vertically, e.g. to make room for a header drawn above the board.
    #[inline]
    pub fn offset_y(self, dy: f64) -> Point {
        Point { x: self.x, y: self.y + dy }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
