//! Unit constants and pacing configuration.
//!
//! Typically loaded from a TOML tuning file by `rp-level` and passed to the
//! simulation builder.  Every field has a default so a tuning file only has
//! to name what it changes.

use crate::{RpError, RpResult};

// ── UnitCosts ─────────────────────────────────────────────────────────────────

/// Numeric constants the driver folds into its statistics.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitCosts {
    /// Build cost per distance unit of railway.
    pub railway_unit_cost: f64,
    /// Fixed build cost added for every inserted connection (one stop).
    pub connection_cost: f64,
    /// Minutes needed to travel one distance unit.
    pub railway_unit_travel_time: f64,
    /// Minutes spent per hop changing trains.
    pub change_train_time: f64,
}

impl Default for UnitCosts {
    fn default() -> Self {
        Self {
            railway_unit_cost:        0.01,
            connection_cost:          0.1,
            railway_unit_travel_time: 0.02,
            change_train_time:        2.0,
        }
    }
}

impl UnitCosts {
    /// Cost of building one connection of length `distance`.
    #[inline]
    pub fn build_cost(&self, distance: f64) -> f64 {
        distance * self.railway_unit_cost + self.connection_cost
    }

    /// Minutes needed to ride a path whose hops have the given lengths.
    pub fn travel_time(&self, hop_distances: &[f64]) -> f64 {
        let riding: f64 = hop_distances.iter().map(|d| d * self.railway_unit_travel_time).sum();
        hop_distances.len() as f64 * self.change_train_time + riding
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Tick pacing for animated runs.
///
/// Pacing only decides *when* work happens.  An unpaced run
/// (`Sim::run_to_completion`) ignores it and reaches the same final state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// The idle phase ends on the first tick where the timer exceeds this.
    pub start_delay_ticks: u64,
    /// One connection is built every N ticks while building.
    pub build_interval_ticks: u64,
    /// One itinerary is evaluated every N ticks while evaluating.
    pub evaluate_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_delay_ticks:       100,
            build_interval_ticks:    20,
            evaluate_interval_ticks: 25,
        }
    }
}

impl SimConfig {
    /// Config that does one unit of work per tick with no start delay.
    pub fn unpaced() -> Self {
        Self {
            start_delay_ticks:       0,
            build_interval_ticks:    1,
            evaluate_interval_ticks: 1,
        }
    }

    /// Reject intervals that would make a phase never fire.
    pub fn validate(&self) -> RpResult<()> {
        if self.build_interval_ticks == 0 {
            return Err(RpError::Config("build_interval_ticks must be > 0".into()));
        }
        if self.evaluate_interval_ticks == 0 {
            return Err(RpError::Config("evaluate_interval_ticks must be > 0".into()));
        }
        Ok(())
    }
}
