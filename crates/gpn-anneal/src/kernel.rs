use std::collections::BTreeMap;

use gpn_core::{GpnError, RngHandle};
use gpn_graph::{canonical_hash, geodesic_path_count, BipartiteGraph};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::AnnealConfig;
use crate::determinism;
use crate::energy::{EnergyOracle, GeodesicEnergy};
use crate::moves::{CrossEdgeMoves, MoveGenerator, MoveKind};

/// Observation of a single search iteration, delivered to the event sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationEvent {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Temperature at which the proposal was evaluated.
    pub temperature: f64,
    /// Mutation kind, or `None` for a no-op round.
    pub kind: Option<MoveKind>,
    /// Proposal attempts consumed by the move generator.
    pub attempts: usize,
    /// Whether the candidate was accepted.
    pub accepted: bool,
    /// Energy of the proposed candidate.
    pub candidate_energy: f64,
    /// Energy of the current state after the acceptance decision.
    pub current_energy: f64,
    /// Best energy seen so far, after this iteration.
    pub best_energy: f64,
}

/// Caller-supplied observability hook for the search loop.
///
/// There is no process-wide logger anywhere in the engine; the sink is the
/// only channel through which iterations are observable.
pub trait EventSink {
    /// Records one iteration observation.
    fn record(&mut self, event: &IterationEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &IterationEvent) {}
}

/// Search state owned exclusively by the annealing loop.
struct SearchState {
    current: BipartiteGraph,
    current_energy: f64,
    best: BipartiteGraph,
    best_energy: f64,
    temperature: f64,
}

/// Summary returned to callers after a run completes.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Best graph observed during the search.
    pub best: BipartiteGraph,
    /// Energy of the best graph.
    pub best_energy: f64,
    /// Canonical structural hash of the best graph.
    pub best_hash: String,
    /// Number of iterations executed.
    pub iterations: usize,
    /// Temperature when the run terminated.
    pub final_temperature: f64,
    /// Acceptance rates per move kind.
    pub acceptance_rates: BTreeMap<String, f64>,
    /// Proposal counts per move kind.
    pub proposed: BTreeMap<String, usize>,
    /// Iterations on which the move generator exhausted its attempt budget.
    pub no_move_rounds: usize,
}

/// Temperature-scheduled Metropolis search over connected bipartite graphs.
///
/// The engine holds its collaborators behind narrow traits: the energy
/// oracle scores candidates and the move generator proposes neighbors.
/// A run owns its entire search state; independent runs share nothing and
/// may execute concurrently.
#[derive(Debug, Clone)]
pub struct Annealer<E, M> {
    config: AnnealConfig,
    energy: E,
    moves: M,
}

impl<E: EnergyOracle, M: MoveGenerator> Annealer<E, M> {
    /// Creates an engine after validating the configuration domains.
    pub fn new(config: AnnealConfig, energy: E, moves: M) -> Result<Self, GpnError> {
        config.validate()?;
        Ok(Self {
            config,
            energy,
            moves,
        })
    }

    /// Returns the configuration governing this engine.
    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Runs the search without observing iterations.
    pub fn run(&self, seed: u64, initial: &BipartiteGraph) -> Result<RunSummary, GpnError> {
        self.run_with_sink(seed, initial, &mut NullSink)
    }

    /// Runs the search, reporting every iteration to the provided sink.
    ///
    /// A malformed initial graph fails fast before any iteration executes.
    /// The loop terminates once the iteration cap is reached or the
    /// temperature falls below the configured floor; move-generator
    /// exhaustion is absorbed as a non-improving iteration.
    pub fn run_with_sink(
        &self,
        seed: u64,
        initial: &BipartiteGraph,
        sink: &mut dyn EventSink,
    ) -> Result<RunSummary, GpnError> {
        initial.validate()?;

        let current = initial.clone();
        let current_energy = self.energy.evaluate(&current);
        let mut state = SearchState {
            best: current.clone(),
            best_energy: current_energy,
            current,
            current_energy,
            temperature: self.config.initial_temperature,
        };

        let mut proposed = BTreeMap::<MoveKind, usize>::new();
        let mut accepted = BTreeMap::<MoveKind, usize>::new();
        let mut no_move_rounds = 0usize;
        let mut iterations = 0usize;

        for iteration in 0..self.config.max_iterations {
            if state.temperature < self.config.temperature_floor {
                break;
            }
            let mut rng = RngHandle::from_seed(determinism::iteration_seed(seed, iteration));
            let proposal = self.moves.propose(&state.current, &mut rng)?;

            let event = match proposal.kind {
                None => {
                    no_move_rounds += 1;
                    IterationEvent {
                        iteration,
                        temperature: state.temperature,
                        kind: None,
                        attempts: proposal.attempts,
                        accepted: false,
                        candidate_energy: state.current_energy,
                        current_energy: state.current_energy,
                        best_energy: state.best_energy,
                    }
                }
                Some(kind) => {
                    *proposed.entry(kind).or_insert(0) += 1;
                    let candidate_energy = self.energy.evaluate(&proposal.candidate);
                    let delta = candidate_energy - state.current_energy;
                    let accept = if delta <= 0.0 {
                        true
                    } else {
                        let acceptance = (-delta / state.temperature.max(1e-9)).exp();
                        let draw = rng.next_u64() as f64 / u64::MAX as f64;
                        draw < acceptance
                    };
                    if accept {
                        *accepted.entry(kind).or_insert(0) += 1;
                        state.current = proposal.candidate;
                        state.current_energy = candidate_energy;
                        if state.current_energy < state.best_energy {
                            state.best = state.current.clone();
                            state.best_energy = state.current_energy;
                        }
                    }
                    IterationEvent {
                        iteration,
                        temperature: state.temperature,
                        kind: Some(kind),
                        attempts: proposal.attempts,
                        accepted: accept,
                        candidate_energy,
                        current_energy: state.current_energy,
                        best_energy: state.best_energy,
                    }
                }
            };
            sink.record(&event);

            state.temperature *= self.config.cooling_rate;
            iterations = iteration + 1;
        }

        Ok(RunSummary {
            best_hash: canonical_hash(&state.best),
            best: state.best,
            best_energy: state.best_energy,
            iterations,
            final_temperature: state.temperature,
            acceptance_rates: aggregate_acceptance(&proposed, &accepted),
            proposed: proposed
                .iter()
                .map(|(kind, count)| (kind.as_str().to_string(), *count))
                .collect(),
            no_move_rounds,
        })
    }
}

/// Runs the full annealing search with the geodesic energy oracle and
/// cross-edge moves, returning the best graph observed and its exact
/// geodesic path number.
///
/// The returned count is never lower than that of the initial graph: the
/// search starts from `initial` as its incumbent best.
pub fn optimize(
    initial: &BipartiteGraph,
    config: &AnnealConfig,
    seed: u64,
) -> Result<(BipartiteGraph, u64), GpnError> {
    let annealer = Annealer::new(
        config.clone(),
        GeodesicEnergy::new(config.count_trivial),
        CrossEdgeMoves::new(config.max_move_attempts),
    )?;
    let summary = annealer.run(seed, initial)?;
    let best_gpn = geodesic_path_count(&summary.best, config.count_trivial);
    Ok((summary.best, best_gpn))
}

fn aggregate_acceptance(
    proposed: &BTreeMap<MoveKind, usize>,
    accepted: &BTreeMap<MoveKind, usize>,
) -> BTreeMap<String, f64> {
    proposed
        .iter()
        .map(|(kind, count)| {
            let wins = accepted.get(kind).copied().unwrap_or(0);
            let rate = if *count == 0 {
                0.0
            } else {
                wins as f64 / *count as f64
            };
            (kind.as_str().to_string(), rate)
        })
        .collect()
}
