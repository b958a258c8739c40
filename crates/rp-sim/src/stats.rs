//! Running network statistics.

/// Aggregates the driver folds in as it builds and evaluates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NetworkStats {
    /// Sum of `distance × railway_unit_cost + connection_cost` over built
    /// connections.
    pub cost: f64,
    /// Itineraries for which a path was found.
    pub num_travels: u64,
    /// Sum of travel minutes over those itineraries.
    pub total_travel_time_mins: f64,
    /// Population variance of every connection's `times_used`.
    pub traffic_congestion: f64,
}

impl NetworkStats {
    /// Mean minutes per successful itinerary; 0 before the first one.
    pub fn average_travel_time_mins(&self) -> f64 {
        if self.num_travels == 0 {
            0.0
        } else {
            self.total_travel_time_mins / self.num_travels as f64
        }
    }
}

/// Population variance of `values`.  Fewer than two samples give 0.
pub fn population_variance<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().collect();
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}
