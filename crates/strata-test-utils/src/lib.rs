//! Test fixtures and brute-force oracles for Strata development.
//!
//! [`fixtures`] builds seeded key tables so tests and benches share
//! reproducible hashes. [`oracle`] recomputes derived state from scratch
//! for comparison against incrementally maintained regions.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod oracle;
