#![deny(missing_docs)]
//! Family sweeps and tabular export for geodesic path number surveys.
//!
//! This crate is the consumer side of the engine: it walks graph families,
//! scores each member (directly or through the annealing optimizer), and
//! persists the resulting `(family, name, nodes, edges, gpn)` rows as CSV.
//! Nothing here feeds back into the search itself.

mod export;
mod records;
mod sweep;

pub use export::write_csv;
pub use records::FamilyRecord;
pub use sweep::{anneal_family, bipartite_family, complete_family, star_family};
