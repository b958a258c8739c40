//! `rp-output` — writes simulation events to disk.
//!
//! | Backend | Files created                                           |
//! |---------|---------------------------------------------------------|
//! | CSV     | `connections.csv`, `itineraries.csv`, `summary.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rp_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_to_completion(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ConnectionRow, ItineraryRow, SummaryRow};
pub use writer::OutputWriter;
