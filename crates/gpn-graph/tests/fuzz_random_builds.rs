use gpn_core::RngHandle;
use gpn_graph::{
    canonical_hash, geodesic_path_count, graph_from_bytes, graph_from_json, graph_to_bytes,
    graph_to_json, randomized_connected, BipartiteGraph,
};
use proptest::prelude::*;

fn build(seed: u64, num_u: usize, num_v: usize, slack: usize) -> BipartiteGraph {
    let min_edges = num_u + num_v - 1;
    let max_edges = num_u * num_v;
    let num_edges = min_edges + slack % (max_edges - min_edges + 1);
    let mut rng = RngHandle::from_seed(seed);
    randomized_connected(num_u, num_v, num_edges, &mut rng).unwrap()
}

proptest! {
    #[test]
    fn randomized_builds_respect_invariants(
        seed in any::<u64>(),
        num_u in 1usize..5,
        num_v in 1usize..5,
        slack in 0usize..32,
    ) {
        let graph = build(seed, num_u, num_v, slack);
        prop_assert!(graph.validate().is_ok());

        let bytes = graph_to_bytes(&graph).unwrap();
        let restored = graph_from_bytes(&bytes).unwrap();
        prop_assert_eq!(canonical_hash(&graph), canonical_hash(&restored));

        let json = graph_to_json(&graph).unwrap();
        let restored = graph_from_json(&json).unwrap();
        prop_assert_eq!(&graph, &restored);
    }

    #[test]
    fn adding_an_edge_never_decreases_the_count(
        seed in any::<u64>(),
        num_u in 1usize..5,
        num_v in 1usize..5,
        slack in 0usize..32,
    ) {
        let graph = build(seed, num_u, num_v, slack);
        let before = geodesic_path_count(&graph, false);
        for (u_node, v_node) in graph.absent_cross_pairs() {
            let mut denser = graph.clone();
            denser.add_edge(u_node, v_node).unwrap();
            prop_assert!(geodesic_path_count(&denser, false) >= before);
        }
    }
}
