//! Demand pairs and their evaluation results.

use std::hash::{Hash, Hasher};

use rp_core::LocationId;
use rp_network::Path;

/// An unordered pair of distinct locations to travel between.
///
/// Equality and hashing ignore direction; `from`/`to` only fix which end the
/// search starts at.
#[derive(Copy, Clone, Debug)]
pub struct Itinerary {
    pub from: LocationId,
    pub to:   LocationId,
}

impl Itinerary {
    pub fn new(from: LocationId, to: LocationId) -> Self {
        Self { from, to }
    }

    fn key(&self) -> (LocationId, LocationId) {
        if self.from <= self.to { (self.from, self.to) } else { (self.to, self.from) }
    }
}

impl PartialEq for Itinerary {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Itinerary {}

impl Hash for Itinerary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Every unordered pair over `location_count` locations, once each.
///
/// Generated row-major as `(i, j)` with `i < j`.
pub fn all_itineraries(location_count: usize) -> Vec<Itinerary> {
    let n = location_count as u32;
    (0..n)
        .flat_map(|i| (i + 1..n).map(move |j| Itinerary::new(LocationId(i), LocationId(j))))
        .collect()
}

/// The precomputed itinerary set, consumed from the back.
#[derive(Debug, Clone)]
pub struct ItineraryQueue {
    pending: Vec<Itinerary>,
    total:   usize,
}

impl ItineraryQueue {
    pub fn new(location_count: usize) -> Self {
        let pending = all_itineraries(location_count);
        let total = pending.len();
        Self { pending, total }
    }

    /// Take the next itinerary to evaluate (the last one generated).
    pub fn pop(&mut self) -> Option<Itinerary> {
        self.pending.pop()
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// What one itinerary evaluation produced.
#[derive(Debug, Clone)]
pub struct ItineraryReport {
    pub itinerary:        Itinerary,
    /// `None` if the two locations are not connected.
    pub path:             Option<Path>,
    /// Minutes added to the running total; 0 when unreachable.
    pub travel_time_mins: f64,
}

impl ItineraryReport {
    pub fn reachable(&self) -> bool {
        self.path.is_some()
    }
}
