//! Core types for the Strata site-state store.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the key tables, the stack records, and the
//! container states: site and container identifiers, item records and
//! their fields, hash deltas, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod hash;
pub mod id;
pub mod record;

pub use error::{StackError, StoreError};
pub use hash::HashDelta;
pub use id::{ContainerId, PlayerId, SiteType};
pub use record::{Field, HiddenField, ItemRecord, ItemUpdate};
