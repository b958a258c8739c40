//! `rp-network` — railway network graph and routing.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`location`]   | `Location` (point + name + color tag)                   |
//! | [`connection`] | `Connection` (undirected edge with a usage counter)     |
//! | [`network`]    | `NetworkGraph` — locations, connections, adjacency      |
//! | [`router`]     | `Router` trait, `Path`, `AStarRouter`, `DijkstraRouter` |
//! | [`spatial`]    | `LocationIndex` (R-tree nearest-location queries)       |
//! | [`error`]      | `NetworkError`, `NetworkResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod connection;
pub mod error;
pub mod location;
pub mod network;
pub mod router;
pub mod spatial;

#[cfg(test)]
mod tests;

pub use connection::Connection;
pub use error::{NetworkError, NetworkResult};
pub use location::Location;
pub use network::NetworkGraph;
pub use router::{AStarRouter, DijkstraRouter, Path, Router};
pub use spatial::LocationIndex;
