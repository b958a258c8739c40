//! Network error type.

use thiserror::Error;

use rp_core::{LocationId, Point};

/// Errors produced by `rp-network`.
///
/// "No path between two locations" is deliberately absent: an unreachable
/// pair is a normal search result (`Ok(None)`), not an error.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("location {0} not found in network")]
    LocationNotFound(LocationId),

    #[error("no location named {name:?} at {point} in network")]
    UnknownLocation { name: String, point: Point },

    #[error("cannot connect {0} to itself")]
    SelfConnection(LocationId),

    #[error("{a} and {b} are already connected")]
    DuplicateConnection { a: LocationId, b: LocationId },

    #[error("location {name:?} at {point} is listed twice ({first} and {second})")]
    DuplicateLocation {
        name:   String,
        point:  Point,
        first:  LocationId,
        second: LocationId,
    },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
