//! Container site-state storage for Strata.
//!
//! A [`ContainerState`] holds the piles on every site of one container:
//! cells always, and vertices and edges for the primary board. Each
//! mutation reports the [`HashDelta`](strata_core::HashDelta) it applied,
//! and keeps the empty region (and, on growing boards, the playable region)
//! in step with occupancy.
//!
//! [`StateStore`] gathers the containers of one game with the running
//! hash. [`CanonicalRemap`] drives symmetry-aware hashing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canonical;
pub mod cell;
pub mod config;
pub mod container;
pub mod error;
pub mod graph;
pub mod region;
mod sites;
pub mod store;
pub mod update;

pub use canonical::CanonicalRemap;
pub use cell::CellContainerState;
pub use config::ContainerConfig;
pub use container::ContainerState;
pub use error::ConfigError;
pub use graph::GraphContainerState;
pub use region::{Region, RegionIter};
pub use store::StateStore;
pub use update::SiteUpdate;
