//! Host tick counter.
//!
//! The engine never reads a wall clock.  A host render/update loop calls
//! `Sim::tick` once per frame and the engine counts those calls; all pacing
//! (start delay, build cadence, evaluation cadence) is expressed in ticks.

use std::fmt;

/// An absolute tick counter, advanced once per host frame.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
