//! Undirected railway connections.

use rp_core::{ConnectionId, LocationId};

/// An undirected edge between two locations.
///
/// `length` is the Euclidean distance between the endpoints, computed from
/// their coordinates when the connection is inserted.  It is both the build
/// length and the search weight.
///
/// `times_used` counts how many computed shortest paths crossed this
/// connection.  It only ever grows; the graph bumps it in
/// [`NetworkGraph::record_usage`](crate::NetworkGraph::record_usage).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub id:     ConnectionId,
    pub a:      LocationId,
    pub b:      LocationId,
    length:     f64,
    times_used: u32,
}

impl Connection {
    pub(crate) fn new(id: ConnectionId, a: LocationId, b: LocationId, length: f64) -> Self {
        Self { id, a, b, length, times_used: 0 }
    }

    /// Euclidean length of the connection.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn times_used(&self) -> u32 {
        self.times_used
    }

    /// `true` if this connection joins `x` and `y`, in either direction.
    #[inline]
    pub fn joins(&self, x: LocationId, y: LocationId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The endpoint opposite `from`, or `None` if `from` is not an endpoint.
    pub fn other_end(&self, from: LocationId) -> Option<LocationId> {
        if from == self.a {
            Some(self.b)
        } else if from == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn record_use(&mut self) {
        self.times_used = self.times_used.saturating_add(1);
    }
}

/// Symmetric: `(a, b) == (b, a)`.  Usage counts and ids are ignored.
impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.joins(other.a, other.b)
    }
}
