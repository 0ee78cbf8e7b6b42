#![deny(missing_docs)]
//! Connected bipartite simple graphs with deterministic storage, family
//! generators, and the exact geodesic path counter used as the search
//! objective by the annealing crate.

mod bipartite;
mod generators;
mod geodesic;
mod hash;
mod ids;
mod serialization;

pub use bipartite::BipartiteGraph;
pub use generators::{
    complete_bipartite, randomized_connected, seeded_connected, spanning_tree, star,
};
pub use geodesic::geodesic_path_count;
pub use hash::canonical_hash;
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
