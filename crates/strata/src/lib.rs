//! Strata: a stacking site-state store for board games.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strata sub-crates. For most users, adding `strata` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use strata::prelude::*;
//! use strata::topology::Square4;
//!
//! // A 3×3 board whose piles hold up to two items.
//! let board = Arc::new(Square4::new(3, 3, EdgeBehavior::Absorb).unwrap());
//! let config = ContainerConfig::new(ContainerId::PRIMARY, board).max_height(2);
//! let keys = config.generate_keys(&mut KeyGenerator::new(42));
//!
//! let mut store = StateStore::new();
//! store.insert_container(ContainerState::new(config, keys).unwrap()).unwrap();
//!
//! store.add(ContainerId::PRIMARY, 4, &ItemUpdate::new(3, 1), SiteType::Cell).unwrap();
//! let after_push = store.hash();
//! store.insert(ContainerId::PRIMARY, 4, 0, &ItemUpdate::new(5, 2), SiteType::Cell).unwrap();
//! let removed = store.remove(ContainerId::PRIMARY, 4, 0, SiteType::Cell).unwrap();
//!
//! assert_eq!(removed.what, 5);
//! assert_eq!(store.hash(), after_push);
//! assert!(store.verify_hash());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | IDs, item records, hash deltas, errors |
//! | [`zobrist`] | `strata-zobrist` | Key generation and key tables |
//! | [`stack`] | `strata-stack` | Bounded and unbounded piles |
//! | [`topology`] | `strata-topology` | Board adjacency and symmetries |
//! | [`state`] | `strata-state` | Container states and the game store |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, and errors (`strata-core`).
///
/// Contains [`types::ItemRecord`], [`types::ItemUpdate`],
/// [`types::HashDelta`] and the error enums.
pub use strata_core as types;

/// Key generation and key tables (`strata-zobrist`).
pub use strata_zobrist as zobrist;

/// Bounded and unbounded piles (`strata-stack`).
///
/// The [`stack::Pile`] trait is the shared interface of
/// [`stack::BoundedStack`] and [`stack::UnboundedStack`].
pub use strata_stack as stack;

/// Board adjacency and symmetries (`strata-topology`).
///
/// Provides the [`topology::Topology`] trait and backends:
/// [`topology::Square4`], [`topology::Line1D`] and
/// [`topology::AdjacencyGraph`].
pub use strata_topology as topology;

/// Container states and the game store (`strata-state`).
pub use strata_state as state;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{
        ContainerId, Field, HashDelta, HiddenField, ItemRecord, ItemUpdate, PlayerId, SiteType,
    };

    // Errors
    pub use strata_core::{StackError, StoreError};
    pub use strata_state::ConfigError;
    pub use strata_topology::TopologyError;

    // Keys
    pub use strata_zobrist::{FieldDomains, KeyGenerator};

    // Piles
    pub use strata_stack::Pile;

    // Topology
    pub use strata_topology::{EdgeBehavior, Symmetry, Topology};

    // State
    pub use strata_state::{
        CanonicalRemap, ContainerConfig, ContainerState, Region, SiteUpdate, StateStore,
    };
}
