use std::fs::File;
use std::io::Write;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::kernel::{EventSink, IterationEvent};

/// Aggregate view over the iterations recorded during a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCoverage {
    /// Number of iteration samples recorded.
    pub samples: usize,
    /// Total proposals issued (no-op rounds excluded).
    pub proposed_total: usize,
    /// Total proposals accepted.
    pub accepted_total: usize,
    /// Iterations on which no valid move was found.
    pub no_move_rounds: usize,
    /// Mean of the sampled current energies.
    pub mean_energy: f64,
    /// Variance of the sampled current energies.
    pub energy_variance: f64,
}

/// Event sink collecting per-iteration samples and aggregate statistics.
///
/// Move kinds are keyed in first-seen order, so the acceptance table of a
/// deterministic run is itself deterministic.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    samples: Vec<IterationEvent>,
    kind_stats: IndexMap<&'static str, (usize, usize)>,
    no_move_rounds: usize,
}

impl MetricsRecorder {
    /// Creates a new recorder instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an immutable view over the recorded samples.
    pub fn samples(&self) -> &[IterationEvent] {
        &self.samples
    }

    /// Returns the number of no-op rounds observed.
    pub fn no_move_rounds(&self) -> usize {
        self.no_move_rounds
    }

    /// Computes per-kind acceptance rates in first-seen order.
    pub fn acceptance_rates(&self) -> IndexMap<&'static str, f64> {
        self.kind_stats
            .iter()
            .map(|(kind, (proposed, accepted))| {
                let rate = if *proposed == 0 {
                    0.0
                } else {
                    *accepted as f64 / *proposed as f64
                };
                (*kind, rate)
            })
            .collect()
    }

    /// Computes aggregate coverage statistics from the recorded samples.
    pub fn coverage(&self) -> SearchCoverage {
        let proposed_total = self.kind_stats.values().map(|(p, _)| *p).sum();
        let accepted_total = self.kind_stats.values().map(|(_, a)| *a).sum();
        let energies: Vec<f64> = self
            .samples
            .iter()
            .map(|sample| sample.current_energy)
            .collect();
        let mean_energy = if energies.is_empty() {
            0.0
        } else {
            energies.iter().sum::<f64>() / energies.len() as f64
        };
        let energy_variance = if energies.len() > 1 {
            let mean_sq = energies.iter().map(|&e| e * e).sum::<f64>() / energies.len() as f64;
            (mean_sq - mean_energy * mean_energy).max(0.0)
        } else {
            0.0
        };
        SearchCoverage {
            samples: self.samples.len(),
            proposed_total,
            accepted_total,
            no_move_rounds: self.no_move_rounds,
            mean_energy,
            energy_variance,
        }
    }

    /// Writes the recorded samples to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        writeln!(
            file,
            "iteration,temperature,move,attempts,accepted,candidate_energy,current_energy,best_energy"
        )?;
        for sample in &self.samples {
            writeln!(
                file,
                "{},{:.6},{},{},{},{:.6},{:.6},{:.6}",
                sample.iteration,
                sample.temperature,
                sample.kind.map_or("none", |kind| kind.as_str()),
                sample.attempts,
                sample.accepted,
                sample.candidate_energy,
                sample.current_energy,
                sample.best_energy
            )?;
        }
        Ok(())
    }
}

impl EventSink for MetricsRecorder {
    fn record(&mut self, event: &IterationEvent) {
        match event.kind {
            None => self.no_move_rounds += 1,
            Some(kind) => {
                let entry = self.kind_stats.entry(kind.as_str()).or_insert((0, 0));
                entry.0 += 1;
                if event.accepted {
                    entry.1 += 1;
                }
            }
        }
        self.samples.push(event.clone());
    }
}
