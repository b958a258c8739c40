//! Connection proposers and the buffer that filters their output.
//!
//! A [`ConnectionProposer`] decides which railways to build.  It sees the
//! location list and reports edges through a `connect` callback, as often and
//! as redundantly as it likes.  The [`ProposalBuffer`] sitting behind that
//! callback drops self-pairs and undirected duplicates, keeps first-seen
//! order, and becomes the driver's build queue.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use rp_core::LocationId;
use rp_network::Location;

/// Pluggable connection-choice policy.
///
/// # Example
///
/// ```rust,ignore
/// struct Chain;
///
/// impl ConnectionProposer for Chain {
///     fn propose(&mut self, locations: &[Location], connect: &mut dyn FnMut(LocationId, LocationId)) {
///         for i in 1..locations.len() as u32 {
///             connect(LocationId(i - 1), LocationId(i));
///         }
///     }
/// }
/// ```
pub trait ConnectionProposer {
    /// Report proposed undirected edges over `locations`.
    ///
    /// Ids are positions in `locations`.
    fn propose(&mut self, locations: &[Location], connect: &mut dyn FnMut(LocationId, LocationId));
}

/// A proposer that replays a fixed edge list, e.g. a saved build order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProposer {
    edges: Vec<(LocationId, LocationId)>,
}

impl ScriptedProposer {
    pub fn new(edges: Vec<(LocationId, LocationId)>) -> Self {
        Self { edges }
    }
}

impl ConnectionProposer for ScriptedProposer {
    fn propose(&mut self, _locations: &[Location], connect: &mut dyn FnMut(LocationId, LocationId)) {
        for &(a, b) in &self.edges {
            connect(a, b);
        }
    }
}

// ── ProposalBuffer ────────────────────────────────────────────────────────────

/// De-duplicating queue of proposed edges, in first-seen order.
#[derive(Debug, Default)]
pub struct ProposalBuffer {
    queue:    VecDeque<(LocationId, LocationId)>,
    seen:     FxHashSet<(LocationId, LocationId)>,
    rejected: usize,
}

impl ProposalBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `proposer` over `locations` and buffer what it reports.
    pub fn collect_from<P>(&mut self, proposer: &mut P, locations: &[Location])
    where
        P: ConnectionProposer + ?Sized,
    {
        let before = self.queue.len();
        proposer.propose(locations, &mut |a: LocationId, b: LocationId| {
            self.connect(a, b);
        });
        tracing::debug!(
            accepted = self.queue.len() - before,
            rejected = self.rejected,
            "proposals collected"
        );
    }

    /// Offer one edge.  Returns `false` if it was a self-pair or already
    /// buffered in either direction.
    pub fn connect(&mut self, a: LocationId, b: LocationId) -> bool {
        if a == b {
            self.rejected += 1;
            return false;
        }
        let key = if a <= b { (a, b) } else { (b, a) };
        if !self.seen.insert(key) {
            self.rejected += 1;
            return false;
        }
        self.queue.push_back((a, b));
        true
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of offers dropped as self-pairs or duplicates.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn iter(&self) -> impl Iterator<Item = &(LocationId, LocationId)> {
        self.queue.iter()
    }

    pub fn into_queue(self) -> VecDeque<(LocationId, LocationId)> {
        self.queue
    }
}
