//! Simulation observer trait for progress reporting and data collection.

use rp_core::Tick;
use rp_network::Connection;

use crate::{ItineraryReport, NetworkStats, Phase};

/// Callbacks invoked by the driver as it works.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only views; they
/// cannot change engine state.
pub trait SimObserver {
    /// Called at the very start of each paced tick.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called whenever the driver moves to the next phase.
    fn on_phase_change(&mut self, _tick: Tick, _from: Phase, _to: Phase) {}

    /// Called after a connection has been inserted and its cost counted.
    fn on_connection_built(&mut self, _tick: Tick, _connection: &Connection, _stats: &NetworkStats) {}

    /// Called after each itinerary, reachable or not.
    fn on_itinerary_evaluated(&mut self, _tick: Tick, _report: &ItineraryReport, _stats: &NetworkStats) {}

    /// Called once, when the driver reaches `Done`.
    fn on_sim_end(&mut self, _tick: Tick, _stats: &NetworkStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
