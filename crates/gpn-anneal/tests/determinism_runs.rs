use gpn_anneal::{
    optimize, Annealer, AnnealConfig, CrossEdgeMoves, GeodesicEnergy, MetricsRecorder,
};
use gpn_graph::spanning_tree;

fn small_config() -> AnnealConfig {
    AnnealConfig {
        max_iterations: 200,
        initial_temperature: 50.0,
        cooling_rate: 0.98,
        temperature_floor: 1e-3,
        max_move_attempts: 20,
        count_trivial: true,
    }
}

#[test]
fn repeated_runs_with_same_seed_match() {
    let config = small_config();
    let initial = spanning_tree(3, 3).unwrap();
    let annealer = Annealer::new(
        config.clone(),
        GeodesicEnergy::new(config.count_trivial),
        CrossEdgeMoves::new(config.max_move_attempts),
    )
    .unwrap();

    let summary_a = annealer.run(2024, &initial).unwrap();
    let summary_b = annealer.run(2024, &initial).unwrap();

    assert_eq!(summary_a, summary_b);
}

#[test]
fn event_streams_are_reproducible() {
    let config = small_config();
    let initial = spanning_tree(2, 4).unwrap();
    let annealer = Annealer::new(
        config.clone(),
        GeodesicEnergy::new(config.count_trivial),
        CrossEdgeMoves::new(config.max_move_attempts),
    )
    .unwrap();

    let mut recorder_a = MetricsRecorder::new();
    let mut recorder_b = MetricsRecorder::new();
    let summary_a = annealer.run_with_sink(7, &initial, &mut recorder_a).unwrap();
    let summary_b = annealer.run_with_sink(7, &initial, &mut recorder_b).unwrap();

    assert_eq!(summary_a, summary_b);
    assert_eq!(recorder_a.samples(), recorder_b.samples());
    assert_eq!(recorder_a.samples().len(), summary_a.iterations);
}

#[test]
fn optimize_is_reproducible() {
    let config = small_config();
    let initial = spanning_tree(3, 4).unwrap();

    let (best_a, gpn_a) = optimize(&initial, &config, 99).unwrap();
    let (best_b, gpn_b) = optimize(&initial, &config, 99).unwrap();

    assert_eq!(best_a, best_b);
    assert_eq!(gpn_a, gpn_b);
}
