use gpn_anneal::{
    optimize, Annealer, AnnealConfig, CrossEdgeMoves, GeodesicEnergy, MetricsRecorder,
};
use gpn_core::NodeId;
use gpn_graph::{geodesic_path_count, spanning_tree, BipartiteGraph};

fn small_config() -> AnnealConfig {
    AnnealConfig {
        max_iterations: 300,
        initial_temperature: 100.0,
        cooling_rate: 0.99,
        temperature_floor: 1e-3,
        max_move_attempts: 30,
        count_trivial: true,
    }
}

#[test]
fn best_is_never_worse_than_the_initial_graph() {
    let config = small_config();
    for (num_u, num_v) in [(2, 2), (2, 4), (3, 3)] {
        let initial = spanning_tree(num_u, num_v).unwrap();
        let initial_gpn = geodesic_path_count(&initial, config.count_trivial);

        let (best, best_gpn) = optimize(&initial, &config, 11).unwrap();

        best.validate().unwrap();
        assert!(best_gpn >= initial_gpn, "{}", best.label());
        assert_eq!(best_gpn, geodesic_path_count(&best, config.count_trivial));
    }
}

#[test]
fn invalid_configuration_fails_before_any_iteration() {
    let mut config = small_config();
    config.cooling_rate = 1.2;
    let initial = spanning_tree(2, 2).unwrap();
    let err = optimize(&initial, &config, 1).unwrap_err();
    assert_eq!(err.info().code, "cooling-rate");
}

#[test]
fn disconnected_initial_graph_is_rejected() {
    // Five edges meet the tree-size bound for G(3, 3), but u3 is isolated.
    let mut graph = BipartiteGraph::new(3, 3).unwrap();
    for (a, b) in [(0u64, 3u64), (0, 4), (0, 5), (1, 3), (1, 4)] {
        graph
            .add_edge(NodeId::from_raw(a), NodeId::from_raw(b))
            .unwrap();
    }
    let err = optimize(&graph, &small_config(), 1).unwrap_err();
    assert_eq!(err.info().code, "not-connected");
}

#[test]
fn sparse_initial_graph_is_rejected() {
    let mut graph = BipartiteGraph::new(2, 2).unwrap();
    graph
        .add_edge(NodeId::from_raw(0), NodeId::from_raw(2))
        .unwrap();
    graph
        .add_edge(NodeId::from_raw(1), NodeId::from_raw(3))
        .unwrap();
    let err = optimize(&graph, &small_config(), 1).unwrap_err();
    assert_eq!(err.info().code, "too-few-edges");
}

#[test]
fn recorder_sees_every_iteration() {
    let config = small_config();
    let initial = spanning_tree(3, 3).unwrap();
    let annealer = Annealer::new(
        config.clone(),
        GeodesicEnergy::new(config.count_trivial),
        CrossEdgeMoves::new(config.max_move_attempts),
    )
    .unwrap();

    let mut recorder = MetricsRecorder::new();
    let summary = annealer.run_with_sink(5, &initial, &mut recorder).unwrap();
    assert!(summary.iterations <= annealer.config().max_iterations);

    let coverage = recorder.coverage();
    assert_eq!(coverage.samples, summary.iterations);
    assert_eq!(coverage.no_move_rounds, summary.no_move_rounds);
    assert!(coverage.accepted_total <= coverage.proposed_total);
    for (_, rate) in recorder.acceptance_rates() {
        assert!((0.0..=1.0).contains(&rate));
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iterations.csv");
    recorder.write_csv(&path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "iteration,temperature,move,attempts,accepted,candidate_energy,current_energy,best_energy"
    );
    assert_eq!(lines.count(), summary.iterations);
}

#[test]
fn temperature_floor_stops_the_run_early() {
    let mut config = small_config();
    config.max_iterations = 10_000;
    config.initial_temperature = 10.0;
    config.cooling_rate = 0.5;
    config.temperature_floor = 1.0;
    let initial = spanning_tree(2, 3).unwrap();
    let annealer = Annealer::new(
        config.clone(),
        GeodesicEnergy::new(config.count_trivial),
        CrossEdgeMoves::new(config.max_move_attempts),
    )
    .unwrap();

    let summary = annealer.run(3, &initial).unwrap();

    // 10.0 * 0.5^4 falls below the floor, so exactly four iterations run.
    assert_eq!(summary.iterations, 4);
    assert!(summary.final_temperature < config.temperature_floor);
}
