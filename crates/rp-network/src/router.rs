//! Routing trait and the default best-first implementations.
//!
//! # Pluggability
//!
//! [`NetworkGraph::shortest_path`](crate::NetworkGraph::shortest_path) takes
//! any [`Router`], so callers can swap the search without touching the graph.
//! Routers are read-only; recording traffic on the returned path is the
//! graph's job.
//!
//! # Search
//!
//! Both built-in routers run the same best-first search over location
//! indices:
//!
//! - `g[l]` is the best known cost from the start, `f[l] = g[l] + h(l)`.
//! - The frontier is kept in insertion order.  Each step pops the member
//!   with the strictly smallest `f`; ties go to the earliest inserted.
//! - Neighbours are expanded in connection insertion order and re-enter the
//!   frontier whenever their `g` improves.
//! - `came_from[l]` holds the `(predecessor, connection)` that reached `l`.
//!
//! [`AStarRouter`] uses the straight-line distance to the goal as `h`.  Edge
//! weights are Euclidean lengths, so the heuristic never overestimates and
//! the first time the goal is popped its path is optimal.
//! [`DijkstraRouter`] uses `h = 0`.

use rp_core::{ConnectionId, LocationId};

use crate::NetworkGraph;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query: the connections to ride, in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    /// Connections from start to end.
    pub connections: Vec<ConnectionId>,
    /// Length of each hop, parallel to `connections`.
    pub hop_distances: Vec<f64>,
    /// Sum of `hop_distances`.
    pub total_distance: f64,
}

impl Path {
    /// The path from a location to itself.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn hop_count(&self) -> usize {
        self.connections.len()
    }

    /// `true` if the start and end are the same location.
    pub fn is_trivial(&self) -> bool {
        self.connections.is_empty()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path search.
pub trait Router: Send + Sync {
    /// Compute a least-cost path from `from` to `to`.
    ///
    /// Returns `None` if no path exists.  `from == to` is an empty path, not
    /// `None`.  Both ids are expected to belong to `graph`.
    fn route(&self, graph: &NetworkGraph, from: LocationId, to: LocationId) -> Option<Path>;
}

/// A* with the straight-line distance to the goal as heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, graph: &NetworkGraph, from: LocationId, to: LocationId) -> Option<Path> {
        let goal = graph.location(to).ok()?.point;
        best_first(graph, from, to, |l| {
            graph
                .location(l)
                .map(|loc| loc.point.distance(goal))
                .unwrap_or(0.0)
        })
    }
}

/// Uniform-cost search (A* with a zero heuristic).
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &NetworkGraph, from: LocationId, to: LocationId) -> Option<Path> {
        best_first(graph, from, to, |_| 0.0)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

fn best_first(
    graph:     &NetworkGraph,
    from:      LocationId,
    to:        LocationId,
    heuristic: impl Fn(LocationId) -> f64,
) -> Option<Path> {
    if from == to {
        return Some(Path::empty());
    }

    let n = graph.location_count();
    if from.index() >= n || to.index() >= n {
        return None;
    }

    let mut g_score   = vec![f64::INFINITY; n];
    let mut f_score   = vec![f64::INFINITY; n];
    let mut came_from: Vec<Option<(LocationId, ConnectionId)>> = vec![None; n];

    g_score[from.index()] = 0.0;
    f_score[from.index()] = heuristic(from);
    let mut open = vec![from];

    while let Some(pos) = lowest_score(&open, &f_score) {
        let current = open.remove(pos);
        if current == to {
            return Some(reconstruct(graph, &came_from, from, to));
        }

        for (neighbour, conn) in graph.neighbours(current) {
            let Some(edge) = graph.connection(conn) else { continue };
            let tentative = g_score[current.index()] + edge.distance();
            if tentative < g_score[neighbour.index()] {
                came_from[neighbour.index()] = Some((current, conn));
                g_score[neighbour.index()]   = tentative;
                f_score[neighbour.index()]   = tentative + heuristic(neighbour);
                if !open.contains(&neighbour) {
                    open.push(neighbour);
                }
            }
        }
    }

    None
}

/// Position in `open` of the member with the strictly smallest score; the
/// earliest inserted wins ties.
fn lowest_score(open: &[LocationId], scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (pos, id) in open.iter().enumerate() {
        let score = scores[id.index()];
        match best {
            Some((_, lowest)) if score >= lowest => {}
            _ => best = Some((pos, score)),
        }
    }
    best.map(|(pos, _)| pos)
}

fn reconstruct(
    graph:     &NetworkGraph,
    came_from: &[Option<(LocationId, ConnectionId)>],
    from:      LocationId,
    to:        LocationId,
) -> Path {
    let mut connections = Vec::new();
    let mut cur = to;
    while cur != from {
        match came_from[cur.index()] {
            Some((prev, conn)) => {
                connections.push(conn);
                cur = prev;
            }
            None => break,
        }
    }
    connections.reverse();

    let hop_distances: Vec<f64> = connections
        .iter()
        .filter_map(|&c| graph.connection(c).map(|e| e.distance()))
        .collect();
    let total_distance = hop_distances.iter().sum();

    Path { connections, hop_distances, total_distance }
}
