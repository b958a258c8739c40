//! Plain data row types written by output backends.

/// One inserted connection, in build order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionRow {
    pub tick:          u64,
    pub connection_id: u32,
    pub from:          u32,
    pub to:            u32,
    pub distance:      f64,
    /// Total network cost after this connection was paid for.
    pub cumulative_cost: f64,
}

/// One evaluated itinerary.  Unreachable pairs have `reachable == false`
/// and zero hops, distance and travel time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItineraryRow {
    pub tick:             u64,
    pub from:             u32,
    pub to:               u32,
    pub reachable:        bool,
    pub hops:             u32,
    pub distance:         f64,
    pub travel_time_mins: f64,
}

/// Final network statistics, written once when the run ends.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub final_tick:               u64,
    pub cost:                     f64,
    pub num_travels:              u64,
    pub total_travel_time_mins:   f64,
    pub average_travel_time_mins: f64,
    pub traffic_congestion:       f64,
    pub fully_connected:          bool,
}
