use serde::{Deserialize, Serialize};

/// One row of a survey table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyRecord {
    /// Family the graph belongs to (`bipartite`, `star`, ...).
    pub family: String,
    /// Display name of the graph within its family.
    pub name: String,
    /// Number of nodes.
    pub num_nodes: usize,
    /// Number of edges.
    pub num_edges: usize,
    /// Geodesic path number of the graph.
    pub gpn: u64,
}
