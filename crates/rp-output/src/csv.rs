//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `connections.csv`
//! - `itineraries.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ConnectionRow, ItineraryRow, OutputResult, SummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    connections: Writer<File>,
    itineraries: Writer<File>,
    summary:     Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open the three CSV files in it
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut connections = Writer::from_path(dir.join("connections.csv"))?;
        connections.write_record(["tick", "connection_id", "from", "to", "distance", "cumulative_cost"])?;

        let mut itineraries = Writer::from_path(dir.join("itineraries.csv"))?;
        itineraries.write_record(["tick", "from", "to", "reachable", "hops", "distance", "travel_time_mins"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record([
            "final_tick",
            "cost",
            "num_travels",
            "total_travel_time_mins",
            "average_travel_time_mins",
            "traffic_congestion",
            "fully_connected",
        ])?;

        tracing::debug!(dir = %dir.display(), "csv output opened");

        Ok(Self {
            connections,
            itineraries,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_connection(&mut self, row: &ConnectionRow) -> OutputResult<()> {
        self.connections.write_record(&[
            row.tick.to_string(),
            row.connection_id.to_string(),
            row.from.to_string(),
            row.to.to_string(),
            row.distance.to_string(),
            row.cumulative_cost.to_string(),
        ])?;
        Ok(())
    }

    fn write_itinerary(&mut self, row: &ItineraryRow) -> OutputResult<()> {
        self.itineraries.write_record(&[
            row.tick.to_string(),
            row.from.to_string(),
            row.to.to_string(),
            (row.reachable as u8).to_string(),
            row.hops.to_string(),
            row.distance.to_string(),
            row.travel_time_mins.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.final_tick.to_string(),
            row.cost.to_string(),
            row.num_travels.to_string(),
            row.total_travel_time_mins.to_string(),
            row.average_travel_time_mins.to_string(),
            row.traffic_congestion.to_string(),
            (row.fully_connected as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.connections.flush()?;
        self.itineraries.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
