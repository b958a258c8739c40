//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use rp_core::Tick;
use rp_network::Connection;
use rp_sim::{ItineraryReport, NetworkStats, SimObserver};

use crate::row::{ConnectionRow, ItineraryRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes built connections, evaluated itineraries
/// and the final summary to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    /// Set once any unreachable itinerary is seen.
    disconnected: bool,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            disconnected: false,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_connection_built(&mut self, tick: Tick, connection: &Connection, stats: &NetworkStats) {
        let row = ConnectionRow {
            tick:            tick.0,
            connection_id:   connection.id.0,
            from:            connection.a.0,
            to:              connection.b.0,
            distance:        connection.distance(),
            cumulative_cost: stats.cost,
        };
        let result = self.writer.write_connection(&row);
        self.store_err(result);
    }

    fn on_itinerary_evaluated(&mut self, tick: Tick, report: &ItineraryReport, _stats: &NetworkStats) {
        let (hops, distance) = match &report.path {
            Some(path) => (path.hop_count() as u32, path.total_distance),
            None => {
                self.disconnected = true;
                (0, 0.0)
            }
        };
        let row = ItineraryRow {
            tick: tick.0,
            from: report.itinerary.from.0,
            to: report.itinerary.to.0,
            reachable: report.reachable(),
            hops,
            distance,
            travel_time_mins: report.travel_time_mins,
        };
        let result = self.writer.write_itinerary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &NetworkStats) {
        let row = SummaryRow {
            final_tick:               final_tick.0,
            cost:                     stats.cost,
            num_travels:              stats.num_travels,
            total_travel_time_mins:   stats.total_travel_time_mins,
            average_travel_time_mins: stats.average_travel_time_mins(),
            traffic_congestion:       stats.traffic_congestion,
            fully_connected:          !self.disconnected,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
