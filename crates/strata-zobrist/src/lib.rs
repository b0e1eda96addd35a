//! Zobrist key tables for Strata site-state hashing.
//!
//! Key tables are generated once per game by a seeded [`KeyGenerator`] and
//! then shared read-only, via `Arc`, by every clone of every state of that
//! game. Nothing in this crate is mutated after generation.
//!
//! # Layout
//!
//! ```text
//! ContainerKeys (one per bounded container)
//! ├── cell:   Arc<KeyTables>
//! ├── vertex: Option<Arc<KeyTables>>   (primary container only)
//! └── edge:   Option<Arc<KeyTables>>   (primary container only)
//!
//! KeyTables (one per site kind)
//! ├── fields[what|who|state|rotation|value]: ZobristTable[site][level][value]
//! ├── size:   ZobristTable[site][0][height]
//! └── hidden: Option<[player][layer] -> ZobristTable[site][level][0..2]>
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generator;
pub mod keys;
pub mod table;

pub use generator::KeyGenerator;
pub use keys::{ContainerKeys, FieldDomains, KeyShape, KeyTables, SharedKeyTables};
pub use table::{TableShape, ZobristTable};
