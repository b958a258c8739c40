//! Driver phases.

use std::fmt;

/// `Idle → Building → Evaluating → Done`, never backwards.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Phase {
    /// Waiting out the start delay.
    #[default]
    Idle,
    /// Inserting proposed connections one at a time.
    Building,
    /// Pathfinding every itinerary one at a time.
    Evaluating,
    /// Terminal; statistics are frozen.
    Done,
}

impl Phase {
    /// The phase that follows this one.  `Done` is its own successor.
    pub fn next(self) -> Phase {
        match self {
            Phase::Idle       => Phase::Building,
            Phase::Building   => Phase::Evaluating,
            Phase::Evaluating => Phase::Done,
            Phase::Done       => Phase::Done,
        }
    }

    pub fn is_done(self) -> bool {
        self == Phase::Done
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Idle       => "idle",
            Phase::Building   => "building",
            Phase::Evaluating => "evaluating",
            Phase::Done       => "done",
        })
    }
}
