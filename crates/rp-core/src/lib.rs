//! `rp-core` — foundational types for the railway planner.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no
//! `rp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `LocationId`, `ConnectionId`                           |
//! | [`geo`]    | `Point`, Euclidean distance                            |
//! | [`color`]  | `ColorTag` and its display palette                     |
//! | [`time`]   | `Tick`                                                 |
//! | [`config`] | `UnitCosts`, `SimConfig` (pacing)                      |
//! | [`rng`]    | `SimRng`                                               |
//! | [`error`]  | `RpError`, `RpResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::ColorTag;
pub use config::{SimConfig, UnitCosts};
pub use error::{RpError, RpResult};
pub use geo::Point;
pub use ids::{ConnectionId, LocationId};
pub use rng::SimRng;
pub use time::Tick;
