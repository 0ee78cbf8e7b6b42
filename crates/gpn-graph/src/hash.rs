use sha2::{Digest, Sha256};

use crate::bipartite::BipartiteGraph;

/// Computes the canonical structural hash for the provided graph.
///
/// The hash covers the partition sizes and the sorted edge list, so two
/// graphs with identical structure always hash identically regardless of the
/// mutation history that produced them. Isomorphism is not quotiented out;
/// node identity is part of the structure.
pub fn canonical_hash(graph: &BipartiteGraph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.num_u() as u64).to_le_bytes());
    hasher.update((graph.num_v() as u64).to_le_bytes());

    let edges = graph.edges();
    hasher.update((edges.len() as u64).to_le_bytes());
    for (a, b) in edges {
        hasher.update(a.as_raw().to_le_bytes());
        hasher.update(b.as_raw().to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}
