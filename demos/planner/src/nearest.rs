//! Nearest-unconnected-neighbour proposer.
//!
//! For every location in list order, connect it to the closest other
//! location it has not already been connected to by this proposer.  Among
//! equally close candidates the one earliest in the list wins.  The result
//! is local and usually leaves the network in a handful of islands, which
//! makes it a useful baseline.

use std::collections::HashSet;

use rp_core::LocationId;
use rp_network::{Location, LocationIndex};
use rp_sim::ConnectionProposer;

#[derive(Debug, Default)]
pub struct NearestNeighbourProposer;

impl ConnectionProposer for NearestNeighbourProposer {
    fn propose(&mut self, locations: &[Location], connect: &mut dyn FnMut(LocationId, LocationId)) {
        let index = LocationIndex::new(locations);
        let mut made: HashSet<(LocationId, LocationId)> = HashSet::new();

        for (i, loc) in locations.iter().enumerate() {
            let Ok(me) = LocationId::try_from(i) else {
                break;
            };
            // Closest first; stop at the first candidate farther than the best.
            let mut best: Option<(f64, LocationId)> = None;
            for other in index.nearest_iter(loc.point) {
                if other == me || made.contains(&key(me, other)) {
                    continue;
                }
                let Some(candidate) = locations.get(other.index()) else {
                    continue;
                };
                let d2 = squared_distance(loc, candidate);
                match best {
                    None => best = Some((d2, other)),
                    Some((best_d2, best_id)) if d2 == best_d2 => {
                        if other < best_id {
                            best = Some((d2, other));
                        }
                    }
                    Some(_) => break,
                }
            }

            if let Some((_, other)) = best {
                connect(me, other);
                made.insert(key(me, other));
            }
        }
    }
}

/// Exact for the integer coordinates levels use, so ties compare equal.
fn squared_distance(a: &Location, b: &Location) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

fn key(a: LocationId, b: LocationId) -> (LocationId, LocationId) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use rp_core::{ColorTag, LocationId};
    use rp_network::Location;
    use rp_sim::{ConnectionProposer, ProposalBuffer};

    use super::NearestNeighbourProposer;

    fn loc(x: f64, y: f64, name: &str) -> Location {
        Location::new(x, y, name, ColorTag::Green)
    }

    #[test]
    fn pairs_with_closest_unconnected() {
        // Two tight pairs far apart.
        let locations = vec![loc(0.0, 0.0, "a"), loc(1.0, 0.0, "b"), loc(100.0, 0.0, "c"), loc(102.0, 0.0, "d")];
        let mut seen = Vec::new();
        NearestNeighbourProposer.propose(&locations, &mut |a, b| seen.push((a, b)));

        let id = LocationId;
        assert_eq!(
            seen,
            vec![
                (id(0), id(1)),
                // b's nearest is a, already connected; next nearest is c.
                (id(1), id(2)),
                (id(2), id(3)),
                // d's nearest is c, already connected; then b.
                (id(3), id(1)),
            ]
        );
    }

    #[test]
    fn ties_go_to_earliest_location() {
        // Four stops at distance 5 from the hub, hub listed first.
        let locations = vec![
            loc(100.0, 100.0, "hub"),
            loc(103.0, 104.0, "ne"),
            loc(95.0, 100.0, "w"),
            loc(100.0, 105.0, "s"),
            loc(104.0, 97.0, "se"),
        ];
        let mut seen = Vec::new();
        NearestNeighbourProposer.propose(&locations, &mut |a, b| seen.push((a, b)));
        assert_eq!(seen[0], (LocationId(0), LocationId(1)));

        // Same board, candidates listed in a different order.
        let reordered = vec![
            loc(100.0, 100.0, "hub"),
            loc(104.0, 97.0, "se"),
            loc(100.0, 105.0, "s"),
            loc(95.0, 100.0, "w"),
            loc(103.0, 104.0, "ne"),
        ];
        let mut seen = Vec::new();
        NearestNeighbourProposer.propose(&reordered, &mut |a, b| seen.push((a, b)));
        assert_eq!(seen[0], (LocationId(0), LocationId(1)));
    }

    #[test]
    fn single_location_proposes_nothing() {
        let mut buf = ProposalBuffer::new();
        buf.collect_from(&mut NearestNeighbourProposer, &[loc(5.0, 5.0, "solo")]);
        assert!(buf.is_empty());
    }
}
