//! Nearest-location queries.
//!
//! An R-tree (via `rstar`) over the location points.  The engine does not
//! need it; connection proposers use it to walk a location's neighbours in
//! order of increasing straight-line distance without an O(n²) scan.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use rp_core::{LocationId, Point};

use crate::Location;

/// Entry stored in the R-tree: an `[x, y]` point with its `LocationId`.
#[derive(Clone)]
struct LocationEntry {
    point: [f64; 2],
    id:    LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over a fixed location list.
pub struct LocationIndex {
    tree: RTree<LocationEntry>,
}

impl LocationIndex {
    /// Bulk-load the index.  Ids are positions in `locations`.
    pub fn new(locations: &[Location]) -> Self {
        let entries: Vec<LocationEntry> = locations
            .iter()
            .enumerate()
            .map(|(i, loc)| LocationEntry {
                point: [loc.x(), loc.y()],
                id:    LocationId(i as u32),
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// Every location, ordered by ascending distance from `pos`.
    pub fn nearest_iter(&self, pos: Point) -> impl Iterator<Item = LocationId> + '_ {
        self.tree.nearest_neighbor_iter(&[pos.x, pos.y]).map(|e| e.id)
    }
}
