use gpn_graph::{geodesic_path_count, BipartiteGraph};

/// Scores candidate graphs for the Metropolis kernel.
///
/// Lower is better; the kernel minimizes energy. Implementations must be
/// pure: the same graph always yields the same energy, with no shared state,
/// so distinct runs can evaluate concurrently.
pub trait EnergyOracle {
    /// Returns the energy of the provided graph.
    fn evaluate(&self, graph: &BipartiteGraph) -> f64;
}

/// Energy defined as the negated geodesic path number, so that minimizing
/// energy maximizes the number of shortest paths.
#[derive(Debug, Clone, Copy)]
pub struct GeodesicEnergy {
    count_trivial: bool,
}

impl GeodesicEnergy {
    /// Creates an oracle with the given trivial-path flavor.
    pub fn new(count_trivial: bool) -> Self {
        Self { count_trivial }
    }
}

impl EnergyOracle for GeodesicEnergy {
    fn evaluate(&self, graph: &BipartiteGraph) -> f64 {
        -(geodesic_path_count(graph, self.count_trivial) as f64)
    }
}
