use gpn_anneal::determinism::run_seed;
use gpn_anneal::{optimize, AnnealConfig};
use gpn_core::GpnError;
use gpn_graph::{
    complete_bipartite, geodesic_path_count, seeded_connected, spanning_tree, star, BipartiteGraph,
};

use crate::records::FamilyRecord;

/// Scores every seeded bipartite family member with at most `max_nodes`
/// nodes.
///
/// The sweep walks `1 <= |U| <= |V|`, `|U| + |V| <= max_nodes`, and every
/// feasible edge count. Shapes whose seeded construction fails are skipped
/// rather than failing the whole sweep.
pub fn bipartite_family(max_nodes: usize, count_trivial: bool) -> Vec<FamilyRecord> {
    let mut records = Vec::new();
    for num_u in 1..max_nodes {
        for num_v in num_u..=max_nodes.saturating_sub(num_u) {
            let min_edges = num_u + num_v - 1;
            let max_edges = num_u * num_v;
            for num_edges in min_edges..=max_edges {
                let Ok(graph) = seeded_connected(num_u, num_v, num_edges) else {
                    continue;
                };
                records.push(score("bipartite", graph.label(), &graph, count_trivial));
            }
        }
    }
    records
}

/// Scores the star graphs with up to `max_leaves` leaves.
pub fn star_family(max_leaves: usize, count_trivial: bool) -> Vec<FamilyRecord> {
    let mut records = Vec::new();
    for leaves in 1..=max_leaves {
        let Ok(graph) = star(leaves) else {
            continue;
        };
        records.push(score(
            "star",
            format!("star_{leaves}"),
            &graph,
            count_trivial,
        ));
    }
    records
}

/// Scores the complete bipartite graphs with at most `max_nodes` nodes.
pub fn complete_family(max_nodes: usize, count_trivial: bool) -> Vec<FamilyRecord> {
    let mut records = Vec::new();
    for num_u in 1..max_nodes {
        for num_v in num_u..=max_nodes.saturating_sub(num_u) {
            let Ok(graph) = complete_bipartite(num_u, num_v) else {
                continue;
            };
            records.push(score(
                "complete-bipartite",
                format!("K({num_u}, {num_v})"),
                &graph,
                count_trivial,
            ));
        }
    }
    records
}

/// Anneals from a spanning-tree seed of every bipartition shape with at most
/// `max_nodes` nodes and records the best graph each run found.
///
/// Every shape gets an independent substream seed, so the whole sweep is
/// reproducible from `seed` alone and individual runs stay independent.
pub fn anneal_family(
    max_nodes: usize,
    config: &AnnealConfig,
    seed: u64,
) -> Result<Vec<FamilyRecord>, GpnError> {
    let mut records = Vec::new();
    let mut run_index = 0usize;
    for num_u in 1..max_nodes {
        for num_v in num_u..=max_nodes.saturating_sub(num_u) {
            let Ok(initial) = spanning_tree(num_u, num_v) else {
                continue;
            };
            let (best, best_gpn) = optimize(&initial, config, run_seed(seed, run_index))?;
            run_index += 1;
            records.push(FamilyRecord {
                family: "annealed".to_string(),
                name: best.label(),
                num_nodes: best.node_count(),
                num_edges: best.edge_count(),
                gpn: best_gpn,
            });
        }
    }
    Ok(records)
}

fn score(
    family: &str,
    name: String,
    graph: &BipartiteGraph,
    count_trivial: bool,
) -> FamilyRecord {
    FamilyRecord {
        family: family.to_string(),
        name,
        num_nodes: graph.node_count(),
        num_edges: graph.edge_count(),
        gpn: geodesic_path_count(graph, count_trivial),
    }
}
