#![deny(missing_docs)]
//! Deterministic simulated-annealing engine maximizing the geodesic path
//! number over connected bipartite simple graphs.
//!
//! The kernel owns a single search state per run and couples to its
//! collaborators through narrow traits: an [`EnergyOracle`]
//! scores candidates, a [`MoveGenerator`] proposes invariant-preserving
//! neighbors, and an [`EventSink`] observes iterations. Independent runs
//! share nothing and may execute concurrently.

/// YAML-loadable configuration schema, defaults, and domain validation.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Energy oracle trait and the geodesic energy implementation.
pub mod energy;
/// Metropolis kernel, search events, and run summaries.
pub mod kernel;
/// Iteration metrics collection and CSV export.
pub mod metrics;
/// Cross-edge move proposals.
pub mod moves;

pub use config::AnnealConfig;
pub use energy::{EnergyOracle, GeodesicEnergy};
pub use kernel::{optimize, Annealer, EventSink, IterationEvent, NullSink, RunSummary};
pub use metrics::{MetricsRecorder, SearchCoverage};
pub use moves::{CrossEdgeMoves, MoveGenerator, MoveKind, MoveProposal};
