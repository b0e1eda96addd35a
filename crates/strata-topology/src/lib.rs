//! Board topologies for Strata containers.
//!
//! The [`Topology`] trait answers the one spatial question the site-state
//! store asks: which sites of a kind are adjacent to a given site. The
//! playable-region maintenance of growing boards is built on it.
//!
//! # Backends
//!
//! - [`Square4`]: rectangular board with cells, vertices and edges
//! - [`Line1D`]: cell-only line (hands, tracks)
//! - [`AdjacencyGraph`]: explicit cell adjacency for arbitrary boards
//!
//! # Symmetries
//!
//! [`Square4::symmetries`] produces the dihedral [`Symmetry`] remaps used to
//! compute canonical hashes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod graph;
pub mod line1d;
pub mod square4;
pub mod symmetry;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::TopologyError;
pub use graph::AdjacencyGraph;
pub use line1d::Line1D;
pub use square4::Square4;
pub use symmetry::Symmetry;
pub use topology::{Neighbours, Topology};
