use std::collections::{BTreeSet, VecDeque};

use gpn_core::{errors::ErrorInfo, GpnError, NodeId, Part};

use crate::ids::{make_node, node_index};

/// Simple undirected bipartite graph with a fixed node bipartition.
///
/// Node identifiers are dense: `0..num_u` form part `U` and
/// `num_u..num_u + num_v` form part `V`. Adjacency is stored as ordered sets
/// so that every iteration order is deterministic, independent of insertion
/// history. The type is a value: proposals clone it, mutate the clone, and
/// never alias the graph they were derived from.
///
/// Simplicity and bipartiteness are enforced at every mutation; connectivity
/// and the edge-count bounds are checked by [`BipartiteGraph::validate`],
/// which every search entry point calls on its initial graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BipartiteGraph {
    num_u: usize,
    num_v: usize,
    adjacency: Vec<BTreeSet<NodeId>>,
    edge_count: usize,
}

impl BipartiteGraph {
    /// Creates an edgeless graph over the given partition sizes.
    pub fn new(num_u: usize, num_v: usize) -> Result<Self, GpnError> {
        if num_u == 0 || num_v == 0 {
            return Err(GpnError::Graph(
                ErrorInfo::new("empty-part", "both partition classes must be non-empty")
                    .with_context("num_u", num_u.to_string())
                    .with_context("num_v", num_v.to_string()),
            ));
        }
        Ok(Self {
            num_u,
            num_v,
            adjacency: vec![BTreeSet::new(); num_u + num_v],
            edge_count: 0,
        })
    }

    /// Returns the size of partition class `U`.
    pub fn num_u(&self) -> usize {
        self.num_u
    }

    /// Returns the size of partition class `V`.
    pub fn num_v(&self) -> usize {
        self.num_v
    }

    /// Returns the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.num_u + self.num_v
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Minimum edge count for a connected graph over this bipartition.
    pub fn min_edges(&self) -> usize {
        self.node_count() - 1
    }

    /// Maximum edge count (complete bipartite) over this bipartition.
    pub fn max_edges(&self) -> usize {
        self.num_u * self.num_v
    }

    /// Returns the partition class of the provided node.
    pub fn part_of(&self, node: NodeId) -> Result<Part, GpnError> {
        let index = node_index(node);
        if index >= self.node_count() {
            return Err(self.unknown_node(node));
        }
        Ok(if index < self.num_u { Part::U } else { Part::V })
    }

    /// Iterates over all node identifiers in global order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.node_count()).map(make_node)
    }

    /// Iterates over the nodes of partition class `U`.
    pub fn u_nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (0..self.num_u).map(make_node)
    }

    /// Iterates over the nodes of partition class `V`.
    pub fn v_nodes(&self) -> impl ExactSizeIterator<Item = NodeId> {
        (self.num_u..self.node_count()).map(make_node)
    }

    /// Returns the degree of the provided node.
    pub fn degree(&self, node: NodeId) -> Result<usize, GpnError> {
        let index = node_index(node);
        if index >= self.node_count() {
            return Err(self.unknown_node(node));
        }
        Ok(self.adjacency[index].len())
    }

    /// Returns the degree multiset of each partition class, in node order.
    pub fn degree_sequence(&self) -> (Vec<usize>, Vec<usize>) {
        let u_degrees = (0..self.num_u).map(|i| self.adjacency[i].len()).collect();
        let v_degrees = (self.num_u..self.node_count())
            .map(|i| self.adjacency[i].len())
            .collect();
        (u_degrees, v_degrees)
    }

    /// Returns whether the edge `{a, b}` is present.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        let index = node_index(a);
        index < self.node_count() && self.adjacency[index].contains(&b)
    }

    /// Iterates over the neighbors of the provided node in ascending order.
    pub fn neighbors(&self, node: NodeId) -> Result<impl Iterator<Item = NodeId> + '_, GpnError> {
        let index = node_index(node);
        if index >= self.node_count() {
            return Err(self.unknown_node(node));
        }
        Ok(self.adjacency[index].iter().copied())
    }

    /// Adds the edge `{a, b}`.
    ///
    /// Rejects out-of-range endpoints, self-loops, same-part endpoints, and
    /// duplicate edges, so the graph stays simple and bipartite under every
    /// sequence of mutations.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GpnError> {
        if a == b {
            return Err(GpnError::Graph(
                ErrorInfo::new("self-loop", "self-loops are not permitted")
                    .with_context("node", a.as_raw().to_string()),
            ));
        }
        let part_a = self.part_of(a)?;
        let part_b = self.part_of(b)?;
        if part_a == part_b {
            return Err(GpnError::Graph(
                ErrorInfo::new("same-part", "edge endpoints must lie in opposite parts")
                    .with_context("a", a.as_raw().to_string())
                    .with_context("b", b.as_raw().to_string()),
            ));
        }
        if self.has_edge(a, b) {
            return Err(GpnError::Graph(
                ErrorInfo::new("duplicate-edge", "edge is already present")
                    .with_context("a", a.as_raw().to_string())
                    .with_context("b", b.as_raw().to_string()),
            ));
        }
        self.adjacency[node_index(a)].insert(b);
        self.adjacency[node_index(b)].insert(a);
        self.edge_count += 1;
        Ok(())
    }

    /// Removes the edge `{a, b}`.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GpnError> {
        self.part_of(a)?;
        self.part_of(b)?;
        if !self.has_edge(a, b) {
            return Err(GpnError::Graph(
                ErrorInfo::new("missing-edge", "edge is not present")
                    .with_context("a", a.as_raw().to_string())
                    .with_context("b", b.as_raw().to_string()),
            ));
        }
        self.adjacency[node_index(a)].remove(&b);
        self.adjacency[node_index(b)].remove(&a);
        self.edge_count -= 1;
        Ok(())
    }

    /// Returns all edges as `(u_node, v_node)` pairs in lexicographic order.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for u_index in 0..self.num_u {
            for &v_node in &self.adjacency[u_index] {
                edges.push((make_node(u_index), v_node));
            }
        }
        edges
    }

    /// Returns all absent cross pairs as `(u_node, v_node)` pairs in
    /// lexicographic order.
    pub fn absent_cross_pairs(&self) -> Vec<(NodeId, NodeId)> {
        let mut pairs = Vec::new();
        for u_index in 0..self.num_u {
            for v_index in self.num_u..self.node_count() {
                let v_node = make_node(v_index);
                if !self.adjacency[u_index].contains(&v_node) {
                    pairs.push((make_node(u_index), v_node));
                }
            }
        }
        pairs
    }

    /// Returns the display label of the provided node (`u1..`, `v1..`).
    pub fn node_label(&self, node: NodeId) -> Result<String, GpnError> {
        let index = node_index(node);
        Ok(match self.part_of(node)? {
            Part::U => format!("u{}", index + 1),
            Part::V => format!("v{}", index - self.num_u + 1),
        })
    }

    /// Returns the family label of the graph, `G(|U|, |V|, edges)`.
    pub fn label(&self) -> String {
        format!("G({}, {}, {})", self.num_u, self.num_v, self.edge_count)
    }

    /// Returns whether every node is reachable from every other.
    pub fn is_connected(&self) -> bool {
        let n = self.node_count();
        let mut visited = vec![false; n];
        let mut queue = VecDeque::with_capacity(n);
        visited[0] = true;
        queue.push_back(0usize);
        let mut seen = 1usize;
        while let Some(cur) = queue.pop_front() {
            for &nb in &self.adjacency[cur] {
                let nb_index = node_index(nb);
                if !visited[nb_index] {
                    visited[nb_index] = true;
                    seen += 1;
                    queue.push_back(nb_index);
                }
            }
        }
        seen == n
    }

    /// Checks the full invariant set: connectivity and the edge-count bounds
    /// `[|U| + |V| - 1, |U| * |V|]`. Simplicity and bipartiteness cannot be
    /// violated through the mutation API and need no re-check here.
    pub fn validate(&self) -> Result<(), GpnError> {
        if self.edge_count < self.min_edges() {
            return Err(GpnError::Graph(
                ErrorInfo::new("too-few-edges", "edge count is below the spanning tree size")
                    .with_context("edges", self.edge_count.to_string())
                    .with_context("min", self.min_edges().to_string())
                    .with_hint("a connected bipartite graph needs at least |U|+|V|-1 edges"),
            ));
        }
        if self.edge_count > self.max_edges() {
            return Err(GpnError::Graph(
                ErrorInfo::new("too-many-edges", "edge count exceeds the complete bipartite size")
                    .with_context("edges", self.edge_count.to_string())
                    .with_context("max", self.max_edges().to_string()),
            ));
        }
        if !self.is_connected() {
            return Err(GpnError::Graph(
                ErrorInfo::new("not-connected", "graph is not connected")
                    .with_context("label", self.label()),
            ));
        }
        Ok(())
    }

    pub(crate) fn adjacency(&self) -> &[BTreeSet<NodeId>] {
        &self.adjacency
    }

    fn unknown_node(&self, node: NodeId) -> GpnError {
        GpnError::Graph(
            ErrorInfo::new("unknown-node", "node identifier is out of range")
                .with_context("node", node.as_raw().to_string())
                .with_context("node_count", self.node_count().to_string()),
        )
    }
}
