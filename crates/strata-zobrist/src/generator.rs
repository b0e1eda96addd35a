//! Deterministic generator of unique 64-bit keys.

use indexmap::IndexSet;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::table::{TableShape, ZobristTable};

/// Issues pseudo-random keys for [`ZobristTable`]s.
///
/// Seeded ChaCha8, so identical seeds produce identical tables. Every key
/// issued by one generator is non-zero and distinct from every other key it
/// has issued; a colliding draw is discarded and redrawn.
///
/// # Examples
///
/// ```
/// use strata_zobrist::KeyGenerator;
///
/// let mut a = KeyGenerator::new(7);
/// let mut b = KeyGenerator::new(7);
/// assert_eq!(a.table(4, 2, 3), b.table(4, 2, 3));
/// ```
#[derive(Debug)]
pub struct KeyGenerator {
    rng: ChaCha8Rng,
    issued: IndexSet<u64>,
}

impl KeyGenerator {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            issued: IndexSet::new(),
        }
    }

    /// Draw one fresh key.
    pub fn next_key(&mut self) -> u64 {
        loop {
            let key = self.rng.next_u64();
            if key != 0 && self.issued.insert(key) {
                return key;
            }
        }
    }

    /// Generate a `sites × levels × domain` table of fresh keys.
    pub fn table(&mut self, sites: usize, levels: usize, domain: u32) -> ZobristTable {
        let shape = TableShape {
            sites,
            levels,
            domain,
        };
        let len = shape.len();
        self.issued.reserve(len);
        let keys: Vec<u64> = (0..len).map(|_| self.next_key()).collect();
        ZobristTable::from_keys(shape, keys)
    }

    /// Number of keys issued so far.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_seed_same_keys() {
        let mut a = KeyGenerator::new(42);
        let mut b = KeyGenerator::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_key(), b.next_key());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = KeyGenerator::new(1);
        let mut b = KeyGenerator::new(2);
        assert_ne!(a.table(3, 3, 3), b.table(3, 3, 3));
    }

    #[test]
    fn keys_are_unique_and_nonzero_across_tables() {
        let mut gen = KeyGenerator::new(9);
        let t1 = gen.table(10, 4, 6);
        let t2 = gen.table(10, 4, 6);
        let mut seen = IndexSet::new();
        for key in t1.keys().iter().chain(t2.keys()) {
            assert_ne!(*key, 0);
            assert!(seen.insert(*key), "duplicate key {key:#x}");
        }
        assert_eq!(gen.issued(), 2 * 10 * 4 * 6);
    }

    #[test]
    fn empty_table_issues_nothing() {
        let mut gen = KeyGenerator::new(0);
        let t = gen.table(0, 4, 6);
        assert!(t.keys().is_empty());
        assert_eq!(gen.issued(), 0);
    }

    proptest! {
        #[test]
        fn table_lookups_cover_every_key(
            seed in any::<u64>(),
            sites in 0usize..6,
            levels in 0usize..4,
            domain in 0u32..5,
        ) {
            let mut gen = KeyGenerator::new(seed);
            let t = gen.table(sites, levels, domain);
            let mut seen = IndexSet::new();
            for site in 0..sites {
                for level in 0..levels {
                    for value in 0..domain {
                        let key = t.key(site, level, value);
                        prop_assert!(key.is_some_and(|k| k != 0));
                        seen.insert(key);
                    }
                }
            }
            prop_assert_eq!(seen.len(), t.keys().len());
            prop_assert_eq!(gen.issued(), t.keys().len());
        }
    }
}
