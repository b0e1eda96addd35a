//! Stack records for Strata: one pile of items at one site.
//!
//! Two implementations share the [`Pile`] interface:
//!
//! - [`BoundedStack`]: fixed height ceiling, pre-allocated levels, and an
//!   exact Zobrist hash contribution. Every mutator returns the
//!   [`HashDelta`](strata_core::HashDelta) it applied.
//! - [`UnboundedStack`]: growable storage for card-pile-like containers.
//!   It takes no part in hashing; every delta is zero.
//!
//! [`Stack`] is the tagged strategy selected per container at construction
//! time, and [`StackStrategy`] materializes it for a site.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounded;
pub mod hidden;
pub mod pile;
pub mod stack;
pub mod unbounded;

pub use bounded::BoundedStack;
pub use hidden::HiddenMask;
pub use pile::Pile;
pub use stack::{Stack, StackStrategy};
pub use unbounded::UnboundedStack;
