//! Seeded key-table fixtures.

use strata_zobrist::{FieldDomains, KeyGenerator, KeyShape, KeyTables, SharedKeyTables};

/// Seed used by every fixture, so hashes are stable across test runs.
pub const FIXTURE_SEED: u64 = 0x5742_4154_4121;

/// Shape with a uniform value domain.
pub fn shape(
    sites: usize,
    max_height: usize,
    domain: u32,
    hidden_slots: Option<usize>,
) -> KeyShape {
    KeyShape {
        sites,
        max_height,
        domains: FieldDomains::uniform(domain),
        hidden_slots,
    }
}

/// Key tables without hidden information.
pub fn bounded_keys(sites: usize, max_height: usize, domain: u32) -> SharedKeyTables {
    KeyTables::generate(
        &mut KeyGenerator::new(FIXTURE_SEED),
        shape(sites, max_height, domain, None),
    )
    .into_shared()
}

/// Key tables with `slots` hidden-information player slots.
pub fn hidden_keys(sites: usize, max_height: usize, domain: u32, slots: usize) -> SharedKeyTables {
    KeyTables::generate(
        &mut KeyGenerator::new(FIXTURE_SEED),
        shape(sites, max_height, domain, Some(slots)),
    )
    .into_shared()
}
