use gpn_core::{errors::ErrorInfo, GpnError, NodeId};
use serde::{Deserialize, Serialize};

use crate::bipartite::BipartiteGraph;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &BipartiteGraph) -> Result<Vec<u8>, GpnError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| GpnError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<BipartiteGraph, GpnError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| GpnError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &BipartiteGraph) -> Result<String, GpnError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| GpnError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<BipartiteGraph, GpnError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| GpnError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    num_u: usize,
    num_v: usize,
    edges: Vec<(u64, u64)>,
}

impl SerializableGraph {
    fn from_graph(graph: &BipartiteGraph) -> Self {
        Self {
            num_u: graph.num_u(),
            num_v: graph.num_v(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(a, b)| (a.as_raw(), b.as_raw()))
                .collect(),
        }
    }

    fn into_graph(self) -> Result<BipartiteGraph, GpnError> {
        let mut graph = BipartiteGraph::new(self.num_u, self.num_v)?;
        for (a, b) in self.edges {
            graph.add_edge(NodeId::from_raw(a), NodeId::from_raw(b))?;
        }
        // Untrusted payloads must satisfy the same invariants as built graphs.
        graph.validate()?;
        Ok(graph)
    }
}
