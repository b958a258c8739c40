//! The `OutputWriter` trait implemented by backend writers.

use crate::{ConnectionRow, ItineraryRow, OutputResult, SummaryRow};

/// Sink for the rows produced by [`SimOutputObserver`][crate::SimOutputObserver].
pub trait OutputWriter {
    fn write_connection(&mut self, row: &ConnectionRow) -> OutputResult<()>;

    fn write_itinerary(&mut self, row: &ItineraryRow) -> OutputResult<()>;

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
