//! `rp-sim` — build-out and evaluation driver for the railway planner.
//!
//! # Phases
//!
//! ```text
//! Idle        wait until the timer passes config.start_delay_ticks
//! Building    every build_interval_ticks: pop a proposed edge,
//!             NetworkGraph::add_connection, cost += build_cost(distance)
//! Evaluating  every evaluate_interval_ticks: pop an itinerary,
//!             NetworkGraph::shortest_path, then
//!               found     → num_travels += 1, travel time += …,
//!                           congestion = variance(times_used)
//!               not found → sticky warning, skip
//! Done        frozen
//! ```
//!
//! Pacing is presentation only.  `Sim::run` honours it for animated hosts;
//! `Sim::run_to_completion` drains everything at once.  Both end in the same
//! statistics.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rp_network::AStarRouter;
//! use rp_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(locations, AStarRouter)
//!     .proposer(&mut my_proposer)
//!     .build()?;
//! sim.run_to_completion(&mut NoopObserver)?;
//! println!("cost = {}", sim.stats().cost);
//! ```

pub mod builder;
pub mod error;
pub mod itinerary;
pub mod observer;
pub mod phase;
pub mod proposer;
pub mod sim;
pub mod stats;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use itinerary::{Itinerary, ItineraryQueue, ItineraryReport, all_itineraries};
pub use observer::{NoopObserver, SimObserver};
pub use phase::Phase;
pub use proposer::{ConnectionProposer, ProposalBuffer, ScriptedProposer};
pub use sim::{DISCONNECTED_WARNING, Sim, SimSnapshot};
pub use stats::{NetworkStats, population_variance};
