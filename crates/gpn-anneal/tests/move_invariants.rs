use gpn_anneal::{CrossEdgeMoves, MoveGenerator, MoveKind};
use gpn_core::RngHandle;
use gpn_graph::randomized_connected;
use proptest::prelude::*;

proptest! {
    #[test]
    fn proposals_respect_invariants(
        seed in any::<u64>(),
        num_u in 1usize..5,
        num_v in 1usize..5,
        slack in 0usize..32,
    ) {
        let min_edges = num_u + num_v - 1;
        let max_edges = num_u * num_v;
        let num_edges = min_edges + slack % (max_edges - min_edges + 1);
        let mut rng = RngHandle::from_seed(seed);
        let graph = randomized_connected(num_u, num_v, num_edges, &mut rng).unwrap();

        let moves = CrossEdgeMoves::new(40);
        for _ in 0..8 {
            let proposal = moves.propose(&graph, &mut rng).unwrap();
            prop_assert!(proposal.attempts <= moves.max_attempts());
            prop_assert!(proposal.candidate.validate().is_ok());
            match proposal.kind {
                None => prop_assert_eq!(&proposal.candidate, &graph),
                Some(MoveKind::AddEdge) => {
                    prop_assert_eq!(proposal.candidate.edge_count(), graph.edge_count() + 1);
                }
                Some(MoveKind::RemoveEdge) => {
                    prop_assert!(graph.edge_count() > graph.min_edges());
                    prop_assert_eq!(proposal.candidate.edge_count(), graph.edge_count() - 1);
                }
                Some(MoveKind::SwapEdge) => {
                    prop_assert_eq!(proposal.candidate.edge_count(), graph.edge_count());
                    prop_assert_ne!(&proposal.candidate, &graph);
                }
            }
        }
    }

    #[test]
    fn tree_sized_graphs_never_lose_edges(
        seed in any::<u64>(),
        num_u in 1usize..5,
        num_v in 1usize..5,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let graph =
            randomized_connected(num_u, num_v, num_u + num_v - 1, &mut rng).unwrap();

        let moves = CrossEdgeMoves::new(40);
        for _ in 0..8 {
            let proposal = moves.propose(&graph, &mut rng).unwrap();
            prop_assert!(proposal.kind != Some(MoveKind::RemoveEdge));
            prop_assert!(proposal.candidate.edge_count() >= graph.min_edges());
        }
    }
}
