//! Locations on the board.

use rp_core::{ColorTag, Point};

/// A named point taking part in the network.
///
/// Equality is the attribute tuple `(x, y, name, color)`.  Inside the engine
/// locations are addressed by [`LocationId`](rp_core::LocationId), so
/// structural equality is only used to resolve a `Location` handed in from
/// outside (see [`NetworkGraph::location_id`](crate::NetworkGraph::location_id)).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub point: Point,
    pub name:  String,
    pub color: ColorTag,
}

impl Location {
    pub fn new(x: f64, y: f64, name: impl Into<String>, color: ColorTag) -> Self {
        Self { point: Point::new(x, y), name: name.into(), color }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// Straight-line distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Location) -> f64 {
        self.point.distance(other.point)
    }
}
