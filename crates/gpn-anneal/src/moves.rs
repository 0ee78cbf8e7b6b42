use gpn_core::{GpnError, NodeId, RngHandle};
use gpn_graph::BipartiteGraph;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Kind of structural mutation proposed by the move generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Insert an absent cross edge.
    AddEdge,
    /// Delete a present edge, keeping the graph above tree size.
    RemoveEdge,
    /// Replace a present edge with an absent cross pair in one step.
    SwapEdge,
}

impl MoveKind {
    /// Returns the stable display name of the move kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::AddEdge => "add-edge",
            MoveKind::RemoveEdge => "remove-edge",
            MoveKind::SwapEdge => "swap-edge",
        }
    }
}

/// Result of a move proposal.
///
/// `kind: None` is the no-op signal: the attempt budget was exhausted without
/// finding a valid mutation, and `candidate` is an unchanged copy of the
/// input. Callers treat this as "no move available this round", never as an
/// error.
#[derive(Debug, Clone)]
pub struct MoveProposal {
    /// Candidate graph produced by the move (never aliases the input).
    pub candidate: BipartiteGraph,
    /// Mutation that produced the candidate, or `None` for a no-op.
    pub kind: Option<MoveKind>,
    /// Number of attempts consumed, including the successful one.
    pub attempts: usize,
    /// Human readable description of the move.
    pub description: String,
}

/// Proposes a structurally valid neighbor of a bipartite graph.
///
/// Implementations must return graphs satisfying the full invariant set
/// (simple, bipartite, connected, edge count within bounds) or an exact
/// no-op; determinism comes entirely from the caller's RNG handle.
pub trait MoveGenerator {
    /// Proposes a neighbor of the provided graph.
    fn propose(
        &self,
        graph: &BipartiteGraph,
        rng: &mut RngHandle,
    ) -> Result<MoveProposal, GpnError>;
}

/// Uniform add/remove/swap proposals over the cross edges of a fixed
/// bipartition.
#[derive(Debug, Clone, Copy)]
pub struct CrossEdgeMoves {
    max_attempts: usize,
}

impl CrossEdgeMoves {
    /// Creates a generator with the given per-proposal attempt budget.
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Returns the per-proposal attempt budget.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl MoveGenerator for CrossEdgeMoves {
    fn propose(
        &self,
        graph: &BipartiteGraph,
        rng: &mut RngHandle,
    ) -> Result<MoveProposal, GpnError> {
        for attempt in 1..=self.max_attempts {
            let kind = match rng.next_u64() % 3 {
                0 => MoveKind::AddEdge,
                1 => MoveKind::RemoveEdge,
                _ => MoveKind::SwapEdge,
            };
            let outcome = match kind {
                MoveKind::AddEdge => try_add(graph, rng)?,
                MoveKind::RemoveEdge => try_remove(graph, rng)?,
                MoveKind::SwapEdge => try_swap(graph, rng)?,
            };
            if let Some((candidate, description)) = outcome {
                // A failed validation wastes the attempt, like any other
                // rejected draw.
                if candidate.validate().is_ok() {
                    return Ok(MoveProposal {
                        candidate,
                        kind: Some(kind),
                        attempts: attempt,
                        description,
                    });
                }
            }
        }
        Ok(MoveProposal {
            candidate: graph.clone(),
            kind: None,
            attempts: self.max_attempts,
            description: "no-op".to_string(),
        })
    }
}

/// Adding a cross edge cannot disconnect the graph or break bipartiteness;
/// the only wasted draws are pairs that are already present.
fn try_add(
    graph: &BipartiteGraph,
    rng: &mut RngHandle,
) -> Result<Option<(BipartiteGraph, String)>, GpnError> {
    let u_nodes: Vec<NodeId> = graph.u_nodes().collect();
    let v_nodes: Vec<NodeId> = graph.v_nodes().collect();
    let u = u_nodes[(rng.next_u64() as usize) % u_nodes.len()];
    let v = v_nodes[(rng.next_u64() as usize) % v_nodes.len()];
    if graph.has_edge(u, v) {
        return Ok(None);
    }
    let mut candidate = graph.clone();
    candidate.add_edge(u, v)?;
    let description = format!("add:{}-{}", graph.node_label(u)?, graph.node_label(v)?);
    Ok(Some((candidate, description)))
}

/// Removal must keep the edge count at or above tree size and the graph
/// connected; draws violating either are rejected.
fn try_remove(
    graph: &BipartiteGraph,
    rng: &mut RngHandle,
) -> Result<Option<(BipartiteGraph, String)>, GpnError> {
    if graph.edge_count() <= graph.min_edges() {
        return Ok(None);
    }
    let edges = graph.edges();
    let (a, b) = edges[(rng.next_u64() as usize) % edges.len()];
    let mut candidate = graph.clone();
    candidate.remove_edge(a, b)?;
    if !candidate.is_connected() {
        return Ok(None);
    }
    let description = format!("remove:{}-{}", graph.node_label(a)?, graph.node_label(b)?);
    Ok(Some((candidate, description)))
}

/// Swaps keep the edge count fixed and both endpoints within their parts, so
/// only connectivity needs re-checking.
fn try_swap(
    graph: &BipartiteGraph,
    rng: &mut RngHandle,
) -> Result<Option<(BipartiteGraph, String)>, GpnError> {
    let absent = graph.absent_cross_pairs();
    if absent.is_empty() {
        return Ok(None);
    }
    let edges = graph.edges();
    let (rem_a, rem_b) = edges[(rng.next_u64() as usize) % edges.len()];
    let (add_a, add_b) = absent[(rng.next_u64() as usize) % absent.len()];
    let mut candidate = graph.clone();
    candidate.remove_edge(rem_a, rem_b)?;
    candidate.add_edge(add_a, add_b)?;
    if !candidate.is_connected() {
        return Ok(None);
    }
    let description = format!(
        "swap:{}-{}>{}-{}",
        graph.node_label(rem_a)?,
        graph.node_label(rem_b)?,
        graph.node_label(add_a)?,
        graph.node_label(add_b)?
    );
    Ok(Some((candidate, description)))
}
