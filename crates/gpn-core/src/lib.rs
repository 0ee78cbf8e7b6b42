#![deny(missing_docs)]
//! Core vocabulary for the gpn search engine: node identifiers, bipartition
//! tags, structured errors, and the deterministic RNG contract shared by the
//! graph and annealing crates.

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, GpnError};
pub use rng::{derive_substream_seed, RngHandle};

/// Identifier for a node within a bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Bipartition side a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Part {
    /// First partition class.
    U,
    /// Second partition class.
    V,
}
