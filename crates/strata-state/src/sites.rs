//! Lazily materialized piles for every site of one kind.

use strata_core::{HashDelta, ItemRecord, SiteType, StackError, StoreError};
use strata_stack::{Pile, Stack, StackStrategy};

use crate::canonical::CanonicalRemap;
use crate::region::Region;

/// The piles of one site kind, plus the empty region over them.
///
/// A pile is created on the first mutation of its site and kept for the
/// life of the container; clearing resets it instead of dropping it. A
/// site with no pile reads as empty.
#[derive(Clone, Debug)]
pub(crate) struct SiteStacks {
    kind: SiteType,
    strategy: StackStrategy,
    stacks: Vec<Option<Stack>>,
    empty: Region,
}

impl SiteStacks {
    pub(crate) fn new(kind: SiteType, count: usize, strategy: StackStrategy) -> Self {
        Self {
            kind,
            strategy,
            stacks: vec![None; count],
            empty: Region::full(count),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.stacks.len()
    }

    pub(crate) fn empty_region(&self) -> &Region {
        &self.empty
    }

    pub(crate) fn stack(&self, site: usize) -> Option<&Stack> {
        self.stacks.get(site)?.as_ref()
    }

    pub(crate) fn record(&self, site: usize, level: usize) -> ItemRecord {
        self.stack(site)
            .map_or(ItemRecord::EMPTY, |stack| stack.record(level))
    }

    pub(crate) fn top_record(&self, site: usize) -> ItemRecord {
        self.stack(site)
            .map_or(ItemRecord::EMPTY, |stack| stack.top_record())
    }

    pub(crate) fn size(&self, site: usize) -> usize {
        self.stack(site).map_or(0, |stack| stack.size())
    }

    pub(crate) fn is_occupied(&self, site: usize) -> bool {
        site < self.len() && !self.empty.contains(site)
    }

    pub(crate) fn check_site(&self, site: usize) -> Result<(), StoreError> {
        if site >= self.len() {
            return Err(StoreError::SiteOutOfRange {
                kind: self.kind,
                site,
                count: self.len(),
            });
        }
        Ok(())
    }

    /// Run `op` on the pile at `site`, creating it if needed, and keep the
    /// empty region in step. A failed op leaves no new pile behind. Returns the op's result and whether occupancy
    /// flipped.
    pub(crate) fn apply<T>(
        &mut self,
        site: usize,
        op: impl FnOnce(&mut Stack) -> Result<T, StackError>,
    ) -> Result<(T, bool), StoreError> {
        self.check_site(site)?;
        let kind = self.kind;
        // A new pile is only kept once the op has succeeded.
        let mut fresh = None;
        let stack = match &mut self.stacks[site] {
            Some(stack) => stack,
            None => fresh.insert(self.strategy.materialize(site)),
        };
        let out = op(stack).map_err(|reason| StoreError::Stack { kind, site, reason })?;
        let occupied = !stack.is_empty();
        if fresh.is_some() {
            self.stacks[site] = fresh;
        }
        let flipped = self.empty.set(site, !occupied);
        if flipped {
            tracing::trace!(%kind, site, occupied, "occupancy changed");
        }
        Ok((out, flipped))
    }

    /// XOR of every pile's own contribution.
    pub(crate) fn full_hash(&self) -> u64 {
        self.piles().fold(0, |h, (_, stack)| h ^ stack.own_hash())
    }

    /// XOR of every pile's contribution at its remapped site.
    pub(crate) fn canonical_hash(&self, remap: &CanonicalRemap, who_only: bool) -> u64 {
        let Some(keys) = self.strategy.keys() else {
            return 0;
        };
        self.piles().fold(0, |h, (site, stack)| {
            h ^ stack.remap_hash(keys, remap.site(self.kind, site), remap.players(), who_only)
        })
    }

    /// Clear every pile and mark every site empty.
    pub(crate) fn reset(&mut self) -> HashDelta {
        let mut delta = HashDelta::NONE;
        for stack in self.stacks.iter_mut().flatten() {
            delta ^= stack.clear();
        }
        self.empty.fill();
        delta
    }

    fn piles(&self) -> impl Iterator<Item = (usize, &Stack)> + '_ {
        self.stacks
            .iter()
            .enumerate()
            .filter_map(|(site, stack)| stack.as_ref().map(|s| (site, s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::ItemUpdate;
    use strata_test_utils::fixtures;

    fn cells() -> SiteStacks {
        SiteStacks::new(
            SiteType::Cell,
            4,
            StackStrategy::Bounded {
                keys: fixtures::bounded_keys(4, 2, 8),
            },
        )
    }

    #[test]
    fn piles_are_created_on_first_write() {
        let mut sites = cells();
        assert!(sites.stack(1).is_none());
        assert_eq!(sites.record(1, 0), ItemRecord::EMPTY);
        let (_, flipped) = sites.apply(1, |s| s.push(&ItemUpdate::new(3, 1))).unwrap();
        assert!(flipped);
        assert!(sites.is_occupied(1));
        assert!(!sites.empty_region().contains(1));
        assert_eq!(sites.top_record(1).what, 3);
        assert_eq!(sites.size(1), 1);
    }

    #[test]
    fn failed_op_leaves_regions_alone() {
        let mut sites = cells();
        let err = sites.apply(2, |s| s.remove_at(0)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Stack {
                kind: SiteType::Cell,
                site: 2,
                reason: StackError::LevelOutOfRange { .. }
            }
        ));
        assert!(sites.empty_region().contains(2));
        assert!(sites.stack(2).is_none());
        assert_eq!(
            sites.apply(9, |s| s.push(&ItemUpdate::new(1, 1))).unwrap_err(),
            StoreError::SiteOutOfRange {
                kind: SiteType::Cell,
                site: 9,
                count: 4
            }
        );
    }

    #[test]
    fn reset_hashes_everything_out() {
        let mut sites = cells();
        let mut hash = 0;
        for site in 0..4 {
            let (delta, _) = sites.apply(site, |s| s.push(&ItemUpdate::new(2, 1))).unwrap();
            delta.apply(&mut hash);
        }
        assert_eq!(hash, sites.full_hash());
        sites.reset().apply(&mut hash);
        assert_eq!(hash, 0);
        assert_eq!(sites.empty_region().len(), 4);
    }
}
