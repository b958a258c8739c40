//! Fluent builder for constructing a [`Sim`].

use rp_core::{LocationId, SimConfig, UnitCosts};
use rp_network::{Location, NetworkGraph, Router};

use crate::{ConnectionProposer, ItineraryQueue, ProposalBuffer, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - the location list, in load order (ids are positions in this list)
/// - `R: Router` — the path search (e.g. [`rp_network::AStarRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.config(c)`      | `SimConfig::default()` pacing    |
/// | `.costs(c)`       | `UnitCosts::default()`           |
/// | `.proposer(p)`    | no proposals                     |
/// | `.proposals(v)`   | no proposals                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(level.to_locations(80.0), AStarRouter)
///     .costs(tuning.costs)
///     .proposer(&mut NearestNeighbour::default())
///     .build()?;
/// sim.run_to_completion(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: Router> {
    locations: Vec<Location>,
    router:    R,
    config:    SimConfig,
    costs:     UnitCosts,
    proposals: ProposalBuffer,
}

impl<R: Router> SimBuilder<R> {
    pub fn new(locations: Vec<Location>, router: R) -> Self {
        Self {
            locations,
            router,
            config:    SimConfig::default(),
            costs:     UnitCosts::default(),
            proposals: ProposalBuffer::new(),
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn costs(mut self, costs: UnitCosts) -> Self {
        self.costs = costs;
        self
    }

    /// Run `proposer` over the locations now and queue what it reports.
    ///
    /// May be called more than once; later proposers append to the queue and
    /// are de-duplicated against everything already queued.
    pub fn proposer<P>(mut self, proposer: &mut P) -> Self
    where
        P: ConnectionProposer + ?Sized,
    {
        self.proposals.collect_from(proposer, &self.locations);
        self
    }

    /// Queue explicit edges, subject to the same filtering as a proposer.
    pub fn proposals<I>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = (LocationId, LocationId)>,
    {
        for (a, b) in edges {
            self.proposals.connect(a, b);
        }
        self
    }

    /// Validate inputs, build the graph and the itinerary set, and return a
    /// `Sim` in the `Idle` phase.
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let location_count = self.locations.len();
        let graph = NetworkGraph::new(self.locations)?;
        let itineraries = ItineraryQueue::new(location_count);

        tracing::info!(
            locations = location_count,
            proposals = self.proposals.len(),
            rejected = self.proposals.rejected(),
            itineraries = itineraries.total(),
            "simulation built"
        );

        Ok(Sim::new(
            self.config,
            self.costs,
            self.router,
            graph,
            self.proposals.into_queue(),
            itineraries,
        ))
    }
}
