use gpn_anneal::AnnealConfig;
use gpn_graph::{geodesic_path_count, spanning_tree};
use gpn_survey::{anneal_family, bipartite_family, complete_family, star_family, write_csv};

#[test]
fn bipartite_family_contains_known_members() {
    let records = bipartite_family(6, true);
    assert!(!records.is_empty());

    let k22 = records.iter().find(|r| r.name == "G(2, 2, 4)").unwrap();
    assert_eq!(k22.num_nodes, 4);
    assert_eq!(k22.num_edges, 4);
    assert_eq!(k22.gpn, 12);

    for record in &records {
        assert_eq!(record.family, "bipartite");
        assert!(record.gpn >= record.num_nodes as u64);
    }
}

#[test]
fn star_family_matches_closed_form() {
    for record in star_family(5, false) {
        // n leaf-center pairs plus one length-2 path per leaf pair.
        let leaves = (record.num_nodes - 1) as u64;
        assert_eq!(record.gpn, leaves + leaves * (leaves.saturating_sub(1)) / 2);
    }
}

#[test]
fn complete_family_matches_closed_form() {
    for record in complete_family(6, false) {
        let found = record.name.strip_prefix("K(").and_then(|rest| {
            rest.strip_suffix(')')?
                .split_once(", ")
                .map(|(m, n)| (m.parse::<u64>().unwrap(), n.parse::<u64>().unwrap()))
        });
        let (m, n) = found.unwrap();
        let expected = m * n + (m * (m - 1) / 2) * n + (n * (n - 1) / 2) * m;
        assert_eq!(record.gpn, expected, "{}", record.name);
    }
}

#[test]
fn annealed_family_never_regresses() {
    let config = AnnealConfig {
        max_iterations: 150,
        initial_temperature: 50.0,
        cooling_rate: 0.98,
        temperature_floor: 1e-3,
        max_move_attempts: 20,
        count_trivial: true,
    };
    let records = anneal_family(5, &config, 7).unwrap();
    assert!(!records.is_empty());

    let mut shapes = Vec::new();
    for num_u in 1..5usize {
        for num_v in num_u..=5usize.saturating_sub(num_u) {
            if spanning_tree(num_u, num_v).is_ok() {
                shapes.push((num_u, num_v));
            }
        }
    }
    assert_eq!(shapes.len(), records.len());
    for ((num_u, num_v), record) in shapes.into_iter().zip(&records) {
        let seed_graph = spanning_tree(num_u, num_v).unwrap();
        assert!(record.gpn >= geodesic_path_count(&seed_graph, true));
        assert_eq!(record.num_nodes, num_u + num_v);
    }
}

#[test]
fn csv_export_quotes_graph_names() {
    let records = bipartite_family(4, true);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gpn_class_data.csv");
    write_csv(&records, &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "family,name,num_nodes,num_edges,gpn");
    assert_eq!(lines.count(), records.len());
    assert!(contents.contains("\"G(1, 1, 1)\""));
}
