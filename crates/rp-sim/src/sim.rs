//! The `Sim` struct and its tick loop.

use std::collections::VecDeque;

use rp_core::{ConnectionId, LocationId, SimConfig, Tick, UnitCosts};
use rp_network::{Connection, Location, NetworkGraph, Router};

use crate::stats::population_variance;
use crate::{ItineraryQueue, ItineraryReport, NetworkStats, Phase, SimObserver, SimResult};

/// Sticky warning shown once any itinerary turns out to be unreachable.
pub const DISCONNECTED_WARNING: &str = "Some locations aren't connected";

// ── SimSnapshot ───────────────────────────────────────────────────────────────

/// Read-only view of everything a renderer draws in one frame.
#[derive(Debug, Clone, Copy)]
pub struct SimSnapshot<'a> {
    pub tick:                  Tick,
    pub phase:                 Phase,
    pub locations:             &'a [Location],
    /// Built connections in build order, with their usage counters.
    pub connections:           &'a [Connection],
    pub stats:                 NetworkStats,
    pub warning:               Option<&'a str>,
    /// Connections of the most recently evaluated path.
    pub highlighted:           &'a [ConnectionId],
    pub pending_connections:   usize,
    pub remaining_itineraries: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The build-out and evaluation driver.
///
/// `Sim<R>` owns the network graph, the build queue, the itinerary set and
/// the running statistics, and moves through the phases
/// `Idle → Building → Evaluating → Done`:
///
/// 1. **Idle**: count ticks until the start delay has passed.
/// 2. **Building**: every `build_interval_ticks` ticks, pop the next proposed
///    edge, insert it, and add its build cost.  The first tick that finds the
///    queue empty moves on.
/// 3. **Evaluating**: every `evaluate_interval_ticks` ticks, pop the next
///    itinerary, find its shortest path, and fold it into the statistics.
///    An unreachable pair raises the sticky warning and is skipped, never
///    retried.  The first such tick with nothing left moves on.
/// 4. **Done**: nothing changes any more.
///
/// [`tick`](Self::tick) applies that pacing; [`step`](Self::step) does the
/// next unit of work immediately.  Both reach identical final statistics.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// Tick pacing.
    pub config: SimConfig,

    /// Unit constants folded into the statistics.
    pub costs: UnitCosts,

    /// Shortest-path search used during evaluation.
    pub router: R,

    graph:       NetworkGraph,
    stats:       NetworkStats,
    phase:       Phase,
    clock:       Tick,
    /// Ticks spent in the current phase.
    timer:       u64,
    pending:     VecDeque<(LocationId, LocationId)>,
    itineraries: ItineraryQueue,
    warning:     Option<String>,
    highlight:   Vec<ConnectionId>,
}

impl<R: Router> Sim<R> {
    pub(crate) fn new(
        config:      SimConfig,
        costs:       UnitCosts,
        router:      R,
        graph:       NetworkGraph,
        pending:     VecDeque<(LocationId, LocationId)>,
        itineraries: ItineraryQueue,
    ) -> Self {
        Self {
            config,
            costs,
            router,
            graph,
            stats: NetworkStats::default(),
            phase: Phase::Idle,
            clock: Tick::ZERO,
            timer: 0,
            pending,
            itineraries,
            warning: None,
            highlight: Vec::new(),
        }
    }

    // ── Read-only accessors ───────────────────────────────────────────────

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    pub fn stats(&self) -> &NetworkStats {
        &self.stats
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of ticks (paced or unpaced steps) processed so far.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn highlighted(&self) -> &[ConnectionId] {
        &self.highlight
    }

    pub fn pending_connections(&self) -> usize {
        self.pending.len()
    }

    pub fn itineraries(&self) -> &ItineraryQueue {
        &self.itineraries
    }

    pub fn snapshot(&self) -> SimSnapshot<'_> {
        SimSnapshot {
            tick:                  self.clock,
            phase:                 self.phase,
            locations:             self.graph.locations(),
            connections:           self.graph.connections(),
            stats:                 self.stats,
            warning:               self.warning(),
            highlighted:           &self.highlight,
            pending_connections:   self.pending.len(),
            remaining_itineraries: self.itineraries.remaining(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Advance one paced tick.
    ///
    /// A lookup failure (an edge or itinerary naming a location that is not
    /// in the graph) aborts only this tick: the offending item has already
    /// been consumed and the next tick carries on.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Phase> {
        let now = self.clock;
        observer.on_tick_start(now);
        let result = self.paced_work(now, observer);
        self.clock = now.next();
        result.map(|()| self.phase)
    }

    /// Run exactly `n` paced ticks (or fewer if a tick fails).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Phase> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(self.phase)
    }

    /// Run paced ticks until `Done`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while !self.phase.is_done() {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// Do the next unit of work immediately, ignoring pacing.
    ///
    /// Idle moves straight to Building; Building inserts one edge or moves
    /// on; Evaluating evaluates one itinerary or moves on.  Each unit of work
    /// takes one tick of the clock, so observers see increasing ticks.  Once
    /// `Done`, the clock stops.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Phase> {
        if self.phase.is_done() {
            return Ok(self.phase);
        }
        let now = self.clock;
        observer.on_tick_start(now);
        let result = self.unpaced_work(now, observer);
        self.clock = now.next();
        result.map(|()| self.phase)
    }

    /// Drain the build queue and the itinerary set synchronously.
    pub fn run_to_completion<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while !self.phase.is_done() {
            self.step(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn paced_work<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        match self.phase {
            Phase::Idle => {
                self.timer += 1;
                if self.timer > self.config.start_delay_ticks {
                    self.advance_phase(now, observer);
                }
            }
            Phase::Building => {
                self.timer += 1;
                if self.pending.is_empty() {
                    self.advance_phase(now, observer);
                } else if self.timer % self.config.build_interval_ticks == 0 {
                    self.build_one(now, observer)?;
                }
            }
            Phase::Evaluating => {
                self.timer += 1;
                if self.timer % self.config.evaluate_interval_ticks == 0 {
                    self.highlight.clear();
                    if self.itineraries.is_empty() {
                        self.advance_phase(now, observer);
                    } else {
                        self.evaluate_one(now, observer)?;
                    }
                }
            }
            Phase::Done => {}
        }
        Ok(())
    }

    fn unpaced_work<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        match self.phase {
            Phase::Idle => self.advance_phase(now, observer),
            Phase::Building => {
                if self.pending.is_empty() {
                    self.advance_phase(now, observer);
                } else {
                    self.build_one(now, observer)?;
                }
            }
            Phase::Evaluating => {
                self.highlight.clear();
                if self.itineraries.is_empty() {
                    self.advance_phase(now, observer);
                } else {
                    self.evaluate_one(now, observer)?;
                }
            }
            Phase::Done => {}
        }
        Ok(())
    }

    fn advance_phase<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        let from = self.phase;
        let to = from.next();
        if from == to {
            return;
        }
        self.phase = to;
        self.timer = 0;

        tracing::info!(tick = %now, %from, %to, "phase change");
        observer.on_phase_change(now, from, to);

        if to.is_done() {
            tracing::info!(
                cost = self.stats.cost,
                travels = self.stats.num_travels,
                avg_travel_mins = self.stats.average_travel_time_mins(),
                congestion = self.stats.traffic_congestion,
                "simulation done"
            );
            observer.on_sim_end(now, &self.stats);
        }
    }

    /// Insert the next queued edge and add its build cost.
    fn build_one<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        let Some((a, b)) = self.pending.pop_front() else {
            return Ok(());
        };
        let id = self.graph.add_connection(a, b)?;
        let Some(conn) = self.graph.connection(id) else {
            return Ok(());
        };

        self.stats.cost += self.costs.build_cost(conn.distance());
        tracing::debug!(tick = %now, %id, distance = conn.distance(), cost = self.stats.cost, "connection built");
        observer.on_connection_built(now, conn, &self.stats);
        Ok(())
    }

    /// Pathfind the next itinerary and fold the result into the statistics.
    fn evaluate_one<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        let Some(itinerary) = self.itineraries.pop() else {
            return Ok(());
        };
        let path = self.graph.shortest_path(&self.router, itinerary.from, itinerary.to)?;

        let report = match path {
            None => {
                if self.warning.is_none() {
                    tracing::warn!(
                        tick = %now,
                        from = %itinerary.from,
                        to = %itinerary.to,
                        "network is not fully connected"
                    );
                }
                self.warning = Some(DISCONNECTED_WARNING.to_owned());
                ItineraryReport { itinerary, path: None, travel_time_mins: 0.0 }
            }
            Some(path) => {
                let minutes = self.costs.travel_time(&path.hop_distances);
                self.stats.num_travels += 1;
                self.stats.total_travel_time_mins += minutes;
                self.stats.traffic_congestion =
                    population_variance(self.graph.usage_counts().map(f64::from));
                self.highlight.clone_from(&path.connections);

                tracing::debug!(
                    tick = %now,
                    from = %itinerary.from,
                    to = %itinerary.to,
                    hops = path.hop_count(),
                    minutes,
                    "itinerary evaluated"
                );
                ItineraryReport { itinerary, path: Some(path), travel_time_mins: minutes }
            }
        };

        observer.on_itinerary_evaluated(now, &report, &self.stats);
        Ok(())
    }
}
