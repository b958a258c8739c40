//! Unit tests for rp-network.
//!
//! All tests use hand-placed locations so expected distances are exact.

#[cfg(test)]
mod helpers {
    use rp_core::{ColorTag, LocationId};

    use crate::{Location, NetworkGraph};

    pub fn loc(x: f64, y: f64, name: &str) -> Location {
        Location::new(x, y, name, ColorTag::Blue)
    }

    /// A(0,0), B(3,0), C(3,4) with A-B and B-C built but no A-C.
    pub fn triangle() -> (NetworkGraph, [LocationId; 3]) {
        let mut g = NetworkGraph::new(vec![
            loc(0.0, 0.0, "A"),
            loc(3.0, 0.0, "B"),
            loc(3.0, 4.0, "C"),
        ])
        .unwrap();
        let [a, b, c] = [LocationId(0), LocationId(1), LocationId(2)];
        g.add_connection(a, b).unwrap();
        g.add_connection(b, c).unwrap();
        (g, [a, b, c])
    }

    /// A 2×3 grid, 10 units apart, with two routes from 0 to 5:
    ///
    /// ```text
    ///   0 ── 1 ── 2
    ///   │         │
    ///   3 ── 4 ── 5
    /// ```
    pub fn ladder() -> (NetworkGraph, [LocationId; 6]) {
        let mut g = NetworkGraph::new(vec![
            loc(0.0, 0.0, "n0"),
            loc(10.0, 0.0, "n1"),
            loc(20.0, 0.0, "n2"),
            loc(0.0, 10.0, "n3"),
            loc(10.0, 10.0, "n4"),
            loc(20.0, 10.0, "n5"),
        ])
        .unwrap();
        let ids = [0, 1, 2, 3, 4, 5].map(LocationId);
        let [n0, n1, n2, n3, n4, n5] = ids;
        g.add_connection(n0, n1).unwrap();
        g.add_connection(n1, n2).unwrap();
        g.add_connection(n2, n5).unwrap();
        g.add_connection(n0, n3).unwrap();
        g.add_connection(n3, n4).unwrap();
        g.add_connection(n4, n5).unwrap();
        (g, ids)
    }
}

// ── Primitives ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod primitives {
    use rp_core::{ColorTag, LocationId};

    use super::helpers::loc;
    use crate::NetworkGraph;

    #[test]
    fn location_equality_is_attribute_tuple() {
        assert_eq!(loc(1.0, 2.0, "X"), loc(1.0, 2.0, "X"));
        assert_ne!(loc(1.0, 2.0, "X"), loc(1.0, 2.0, "Y"));
        let mut other = loc(1.0, 2.0, "X");
        other.color = ColorTag::Red;
        assert_ne!(loc(1.0, 2.0, "X"), other);
    }

    #[test]
    fn connection_equality_is_symmetric() {
        let mut g = NetworkGraph::new(vec![loc(0.0, 0.0, "A"), loc(3.0, 4.0, "B")]).unwrap();
        let id = g.add_connection(LocationId(0), LocationId(1)).unwrap();
        let conn = g.connection(id).unwrap().clone();

        let mut flipped = conn.clone();
        std::mem::swap(&mut flipped.a, &mut flipped.b);
        assert_eq!(conn, flipped);
        assert!(conn.joins(LocationId(1), LocationId(0)));
        assert_eq!(conn.other_end(LocationId(0)), Some(LocationId(1)));
        assert_eq!(conn.other_end(LocationId(7)), None);
    }

    #[test]
    fn connection_distance_is_euclidean() {
        let mut g = NetworkGraph::new(vec![loc(0.0, 0.0, "A"), loc(3.0, 4.0, "B")]).unwrap();
        let id = g.add_connection(LocationId(0), LocationId(1)).unwrap();
        let conn = g.connection(id).unwrap();
        assert_eq!(conn.distance(), 5.0);
        assert_eq!(conn.times_used(), 0);
    }
}

// ── Graph construction & insertion ────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use rp_core::{ConnectionId, LocationId};

    use super::helpers::{loc, triangle};
    use crate::{NetworkError, NetworkGraph};

    #[test]
    fn empty_graph() {
        let g = NetworkGraph::new(Vec::new()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.connection_count(), 0);
        assert!(g.last_connection().is_none());
    }

    #[test]
    fn duplicate_location_rejected() {
        let result = NetworkGraph::new(vec![
            loc(1.0, 1.0, "Twin"),
            loc(5.0, 5.0, "Other"),
            loc(1.0, 1.0, "Twin"),
        ]);
        match result {
            Err(NetworkError::DuplicateLocation { first, second, .. }) => {
                assert_eq!(first, LocationId(0));
                assert_eq!(second, LocationId(2));
            }
            other => panic!("expected DuplicateLocation, got {:?}", other.err()),
        }
    }

    #[test]
    fn insertion_order_preserved() {
        let (g, [a, b, c]) = triangle();
        let conns = g.connections();
        assert_eq!(conns.len(), 2);
        assert_eq!(conns[0].id, ConnectionId(0));
        assert!(conns[0].joins(a, b));
        assert!(conns[1].joins(b, c));
        assert!(g.last_connection().unwrap().joins(c, b));
    }

    #[test]
    fn self_connection_rejected() {
        let (mut g, [a, _, _]) = triangle();
        assert!(matches!(g.add_connection(a, a), Err(NetworkError::SelfConnection(_))));
        assert_eq!(g.connection_count(), 2);
    }

    #[test]
    fn duplicate_connection_rejected_in_either_direction() {
        let (mut g, [a, b, _]) = triangle();
        assert!(matches!(
            g.add_connection(b, a),
            Err(NetworkError::DuplicateConnection { .. })
        ));
        assert!(matches!(
            g.add_connection(a, b),
            Err(NetworkError::DuplicateConnection { .. })
        ));
        assert_eq!(g.connection_count(), 2);
    }

    #[test]
    fn unknown_location_id_rejected() {
        let (mut g, [a, _, _]) = triangle();
        assert!(matches!(
            g.add_connection(a, LocationId(99)),
            Err(NetworkError::LocationNotFound(LocationId(99)))
        ));
    }

    #[test]
    fn location_lookup_by_value() {
        let (g, [_, b, _]) = triangle();
        assert_eq!(g.location_id(&loc(3.0, 0.0, "B")).unwrap(), b);
        assert!(matches!(
            g.location_id(&loc(3.0, 0.0, "Nowhere")),
            Err(NetworkError::UnknownLocation { .. })
        ));
    }

    #[test]
    fn neighbours_follow_insertion_order() {
        let (g, [a, b, c]) = triangle();
        let n: Vec<_> = g.neighbours(b).map(|(l, _)| l).collect();
        assert_eq!(n, vec![a, c]);
        assert_eq!(g.neighbours(LocationId(42)).count(), 0);
    }
}

// ── Shortest path ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest_path {
    use rp_core::{ConnectionId, LocationId};

    use super::helpers::{ladder, loc, triangle};
    use crate::{AStarRouter, DijkstraRouter, NetworkError, NetworkGraph, Router};

    #[test]
    fn no_connections_means_not_found() {
        let mut g = NetworkGraph::new(vec![loc(0.0, 0.0, "A"), loc(1.0, 1.0, "B")]).unwrap();
        let path = g.shortest_path(&AStarRouter, LocationId(0), LocationId(1)).unwrap();
        assert!(path.is_none());
    }

    #[test]
    fn same_location_is_empty_path() {
        let (mut g, [a, _, _]) = triangle();
        let path = g.shortest_path(&AStarRouter, a, a).unwrap().unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.total_distance, 0.0);
        assert!(g.usage_counts().all(|u| u == 0));
    }

    #[test]
    fn same_location_without_connections_is_empty_path() {
        let mut g = NetworkGraph::new(vec![loc(0.0, 0.0, "A")]).unwrap();
        let path = g.shortest_path(&AStarRouter, LocationId(0), LocationId(0)).unwrap();
        assert_eq!(path.map(|p| p.hop_count()), Some(0));
    }

    #[test]
    fn single_connection_path_counts_usage() {
        let mut g = NetworkGraph::new(vec![loc(0.0, 0.0, "A"), loc(0.0, 7.0, "B")]).unwrap();
        let id = g.add_connection(LocationId(0), LocationId(1)).unwrap();
        let path = g.shortest_path(&AStarRouter, LocationId(0), LocationId(1)).unwrap().unwrap();
        assert_eq!(path.connections, vec![id]);
        assert_eq!(g.connection(id).unwrap().times_used(), 1);
    }

    #[test]
    fn triangle_goes_around_missing_edge() {
        let (mut g, [a, _, c]) = triangle();
        let path = g.shortest_path(&AStarRouter, a, c).unwrap().unwrap();
        assert_eq!(path.connections, vec![ConnectionId(0), ConnectionId(1)]);
        assert_eq!(path.hop_distances, vec![3.0, 4.0]);
        assert_eq!(path.total_distance, 7.0);
    }

    #[test]
    fn reverse_direction_walks_back() {
        let (mut g, [a, _, c]) = triangle();
        let path = g.shortest_path(&AStarRouter, c, a).unwrap().unwrap();
        assert_eq!(path.connections, vec![ConnectionId(1), ConnectionId(0)]);
    }

    #[test]
    fn partitioned_graph_not_found() {
        let mut g = NetworkGraph::new(vec![
            loc(0.0, 0.0, "A"),
            loc(1.0, 0.0, "B"),
            loc(50.0, 0.0, "C"),
            loc(51.0, 0.0, "D"),
        ])
        .unwrap();
        g.add_connection(LocationId(0), LocationId(1)).unwrap();
        g.add_connection(LocationId(2), LocationId(3)).unwrap();
        assert!(g.shortest_path(&AStarRouter, LocationId(0), LocationId(3)).unwrap().is_none());
        assert!(g.usage_counts().all(|u| u == 0));
    }

    #[test]
    fn unknown_endpoint_is_lookup_error() {
        let (mut g, [a, _, _]) = triangle();
        assert!(matches!(
            g.shortest_path(&AStarRouter, a, LocationId(9)),
            Err(NetworkError::LocationNotFound(_))
        ));
    }

    #[test]
    fn usage_is_monotonic_and_accumulates() {
        let (mut g, [n0, _, _, n3, _, n5]) = ladder();
        let mut previous: Vec<u32> = g.usage_counts().collect();
        for (from, to) in [(n0, n5), (n5, n0), (n3, n5), (n0, n3), (n0, n5)] {
            g.shortest_path(&AStarRouter, from, to).unwrap().unwrap();
            let now: Vec<u32> = g.usage_counts().collect();
            assert!(now.iter().zip(&previous).all(|(n, p)| n >= p));
            previous = now;
        }
        assert!(previous.iter().sum::<u32>() > 0);
    }

    #[test]
    fn equal_cost_tie_is_reproducible() {
        // Both routes from n0 to n5 are 30 units long.
        let (mut g1, [n0, _, _, _, _, n5]) = ladder();
        let (mut g2, _) = ladder();
        let p1 = g1.shortest_path(&AStarRouter, n0, n5).unwrap().unwrap();
        let p2 = g2.shortest_path(&AStarRouter, n0, n5).unwrap().unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.hop_count(), 3);
        assert!((p1.total_distance - 30.0).abs() < 1e-9);
    }

    #[test]
    fn astar_matches_dijkstra_cost() {
        let (g, ids) = ladder();
        for &from in &ids {
            for &to in &ids {
                let a = AStarRouter.route(&g, from, to).unwrap();
                let d = DijkstraRouter.route(&g, from, to).unwrap();
                assert!(
                    (a.total_distance - d.total_distance).abs() < 1e-9,
                    "{from} -> {to}: astar {} vs dijkstra {}",
                    a.total_distance,
                    d.total_distance
                );
            }
        }
    }

    #[test]
    fn prefers_shorter_multi_hop_over_long_direct() {
        // Once A-C is built, 5 beats 3 + 4.
        let (mut g, [a, _, c]) = triangle();
        let direct = g.add_connection(a, c).unwrap();
        let path = g.shortest_path(&AStarRouter, a, c).unwrap().unwrap();
        assert_eq!(path.connections, vec![direct]);
        assert_eq!(path.total_distance, 5.0);
    }
}

// ── Spatial index ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod spatial {
    use rp_core::{LocationId, Point};

    use super::helpers::loc;
    use crate::LocationIndex;

    #[test]
    fn nearest_and_ordering() {
        let locs = vec![
            loc(0.0, 0.0, "origin"),
            loc(100.0, 0.0, "far"),
            loc(10.0, 0.0, "near"),
        ];
        let idx = LocationIndex::new(&locs);
        assert_eq!(idx.nearest_iter(Point::new(1.0, 1.0)).next(), Some(LocationId(0)));
        let order: Vec<_> = idx.nearest_iter(Point::new(0.0, 0.0)).collect();
        assert_eq!(order, vec![LocationId(0), LocationId(2), LocationId(1)]);
    }

    #[test]
    fn empty_index() {
        let idx = LocationIndex::new(&[]);
        assert!(idx.nearest_iter(Point::new(0.0, 0.0)).next().is_none());
    }
}
