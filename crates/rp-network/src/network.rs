//! The railway network graph.
//!
//! # Data layout
//!
//! Locations are fixed at construction and addressed by `LocationId` (their
//! index in `locations`).  Connections are append-only and addressed by
//! `ConnectionId` (their index in `connections`), so insertion order is build
//! order and the last element is always the most recently built connection.
//!
//! `adjacency[l]` lists `(neighbour, connection)` pairs for location `l` in
//! connection insertion order.  Path search expands neighbours in that
//! order, which keeps equal-cost results reproducible.

use rp_core::{ConnectionId, LocationId};

use crate::router::{Path, Router};
use crate::{Connection, Location, NetworkError, NetworkResult};

/// Locations plus the connections built between them so far.
pub struct NetworkGraph {
    locations:   Vec<Location>,
    connections: Vec<Connection>,
    adjacency:   Vec<Vec<(LocationId, ConnectionId)>>,
}

impl NetworkGraph {
    /// Build a graph with no connections over `locations`.
    ///
    /// Two locations with identical `(x, y, name, color)` cannot be told
    /// apart by callers that resolve locations by value, so they are
    /// rejected with [`NetworkError::DuplicateLocation`].
    pub fn new(locations: Vec<Location>) -> NetworkResult<Self> {
        for (i, loc) in locations.iter().enumerate() {
            if let Some(j) = locations[..i].iter().position(|other| other == loc) {
                return Err(NetworkError::DuplicateLocation {
                    name:   loc.name.clone(),
                    point:  loc.point,
                    first:  LocationId(j as u32),
                    second: LocationId(i as u32),
                });
            }
        }

        let adjacency = vec![Vec::new(); locations.len()];
        Ok(Self { locations, connections: Vec::new(), adjacency })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All connections in build order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn location(&self, id: LocationId) -> NetworkResult<&Location> {
        self.locations.get(id.index()).ok_or(NetworkError::LocationNotFound(id))
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(id.index())
    }

    /// The most recently built connection.
    pub fn last_connection(&self) -> Option<&Connection> {
        self.connections.last()
    }

    /// Resolve a location by attribute tuple.
    ///
    /// Fails closed: a location that is not part of this graph is an error,
    /// never a silent substitution.
    pub fn location_id(&self, location: &Location) -> NetworkResult<LocationId> {
        self.locations
            .iter()
            .position(|l| l == location)
            .map(|i| LocationId(i as u32))
            .ok_or_else(|| NetworkError::UnknownLocation {
                name:  location.name.clone(),
                point: location.point,
            })
    }

    /// `(neighbour, connection)` pairs of `id` in connection insertion order.
    ///
    /// Unknown ids have no neighbours.
    pub fn neighbours(&self, id: LocationId) -> impl Iterator<Item = (LocationId, ConnectionId)> + '_ {
        self.adjacency
            .get(id.index())
            .into_iter()
            .flat_map(|adj| adj.iter().copied())
    }

    /// The connection joining `a` and `b`, if one has been built.
    pub fn find_connection(&self, a: LocationId, b: LocationId) -> Option<ConnectionId> {
        self.neighbours(a).find(|&(n, _)| n == b).map(|(_, c)| c)
    }

    /// Straight-line distance between two locations.
    pub fn straight_line(&self, a: LocationId, b: LocationId) -> NetworkResult<f64> {
        Ok(self.location(a)?.distance_to(self.location(b)?))
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a connection between `a` and `b` and return its id.
    ///
    /// The new connection starts with `times_used == 0`.  Self-connections
    /// and connections that already exist (in either direction) are
    /// rejected; callers that pre-filter their proposals never see these.
    pub fn add_connection(&mut self, a: LocationId, b: LocationId) -> NetworkResult<ConnectionId> {
        let length = self.straight_line(a, b)?;
        if a == b {
            return Err(NetworkError::SelfConnection(a));
        }
        if self.find_connection(a, b).is_some() {
            return Err(NetworkError::DuplicateConnection { a, b });
        }

        let id = ConnectionId(self.connections.len() as u32);
        self.connections.push(Connection::new(id, a, b, length));
        self.adjacency[a.index()].push((b, id));
        self.adjacency[b.index()].push((a, id));

        tracing::debug!(%id, %a, %b, length, "connection added");
        Ok(id)
    }

    /// Find a least-cost path from `start` to `end` and count it as used.
    ///
    /// Returns `Ok(None)` when `end` is unreachable.  On success every
    /// connection on the path has `times_used` bumped by one, so repeated
    /// queries accumulate traffic.  `start == end` yields an empty path.
    pub fn shortest_path<R: Router + ?Sized>(
        &mut self,
        router: &R,
        start:  LocationId,
        end:    LocationId,
    ) -> NetworkResult<Option<Path>> {
        self.location(start)?;
        self.location(end)?;

        let path = router.route(self, start, end);
        if let Some(path) = &path {
            self.record_usage(path);
        }
        Ok(path)
    }

    /// Bump `times_used` on every connection of `path`.
    pub fn record_usage(&mut self, path: &Path) {
        for &id in &path.connections {
            if let Some(conn) = self.connections.get_mut(id.index()) {
                conn.record_use();
            }
        }
    }

    /// Usage counter of every connection, in build order.
    pub fn usage_counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.connections.iter().map(Connection::times_used)
    }
}
