use gpn_core::{errors::ErrorInfo, GpnError, RngHandle};
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::bipartite::BipartiteGraph;
use crate::ids::make_node;

/// Builds the deterministic seeded family member `G(num_u, num_v, num_edges)`.
///
/// Spanning edges are laid down round-robin (`u_i` to `v_{i mod |V|}`, then
/// `v_j` to `u_{j mod |U|}`), and the remaining budget is filled with the
/// lexicographically smallest absent cross pairs. The same arguments always
/// produce the same graph. A seed whose spanning phase leaves the graph
/// disconnected at the requested edge count is rejected, mirroring how the
/// family sweep skips infeasible members.
pub fn seeded_connected(
    num_u: usize,
    num_v: usize,
    num_edges: usize,
) -> Result<BipartiteGraph, GpnError> {
    let mut graph = BipartiteGraph::new(num_u, num_v)?;
    check_edge_budget(&graph, num_edges)?;

    for i in 0..num_u {
        let v_node = make_node(num_u + (i % num_v));
        let u_node = make_node(i);
        if !graph.has_edge(u_node, v_node) {
            graph.add_edge(u_node, v_node)?;
        }
    }
    for j in 0..num_v {
        let u_node = make_node(j % num_u);
        let v_node = make_node(num_u + j);
        if !graph.has_edge(u_node, v_node) {
            graph.add_edge(u_node, v_node)?;
        }
    }

    for (u_node, v_node) in graph.absent_cross_pairs() {
        if graph.edge_count() >= num_edges {
            break;
        }
        graph.add_edge(u_node, v_node)?;
    }

    graph.validate()?;
    Ok(graph)
}

/// Builds the spanning-tree-sized seeded family member.
pub fn spanning_tree(num_u: usize, num_v: usize) -> Result<BipartiteGraph, GpnError> {
    let min_edges = num_u + num_v - 1;
    seeded_connected(num_u, num_v, min_edges)
}

/// Builds the complete bipartite graph `K_{num_u, num_v}`.
pub fn complete_bipartite(num_u: usize, num_v: usize) -> Result<BipartiteGraph, GpnError> {
    let mut graph = BipartiteGraph::new(num_u, num_v)?;
    for u_node in graph.u_nodes().collect::<Vec<_>>() {
        for v_node in graph.v_nodes().collect::<Vec<_>>() {
            graph.add_edge(u_node, v_node)?;
        }
    }
    Ok(graph)
}

/// Builds the star graph with a single center and the given number of leaves.
pub fn star(leaves: usize) -> Result<BipartiteGraph, GpnError> {
    complete_bipartite(1, leaves)
}

/// Builds a random connected member of `G(num_u, num_v, num_edges)`.
///
/// A random spanning tree is grown by attaching each node to an already
/// placed node of the opposite part, then the remaining budget is filled with
/// uniformly drawn absent cross pairs. Used for annealing restarts and
/// property tests; determinism comes entirely from the caller's RNG handle.
pub fn randomized_connected(
    num_u: usize,
    num_v: usize,
    num_edges: usize,
    rng: &mut RngHandle,
) -> Result<BipartiteGraph, GpnError> {
    let mut graph = BipartiteGraph::new(num_u, num_v)?;
    check_edge_budget(&graph, num_edges)?;

    let first_u = (rng.next_u64() as usize) % num_u;
    let first_v = num_u + (rng.next_u64() as usize) % num_v;
    graph.add_edge(make_node(first_u), make_node(first_v))?;

    let mut placed_u = vec![first_u];
    let mut placed_v = vec![first_v];
    let mut remaining: Vec<usize> = (0..num_u + num_v)
        .filter(|&index| index != first_u && index != first_v)
        .collect();
    remaining.shuffle(rng);

    for index in remaining {
        let partner = if index < num_u {
            placed_v[(rng.next_u64() as usize) % placed_v.len()]
        } else {
            placed_u[(rng.next_u64() as usize) % placed_u.len()]
        };
        graph.add_edge(make_node(index), make_node(partner))?;
        if index < num_u {
            placed_u.push(index);
        } else {
            placed_v.push(index);
        }
    }

    let mut candidates = graph.absent_cross_pairs();
    candidates.shuffle(rng);
    for (u_node, v_node) in candidates {
        if graph.edge_count() >= num_edges {
            break;
        }
        graph.add_edge(u_node, v_node)?;
    }

    graph.validate()?;
    Ok(graph)
}

fn check_edge_budget(graph: &BipartiteGraph, num_edges: usize) -> Result<(), GpnError> {
    if num_edges < graph.min_edges() || num_edges > graph.max_edges() {
        return Err(GpnError::Graph(
            ErrorInfo::new("edge-budget", "edge count is outside the feasible range")
                .with_context("num_u", graph.num_u().to_string())
                .with_context("num_v", graph.num_v().to_string())
                .with_context("num_edges", num_edges.to_string())
                .with_hint(format!(
                    "feasible edge counts lie in [{}, {}]",
                    graph.min_edges(),
                    graph.max_edges()
                )),
        ));
    }
    Ok(())
}
