//! Cell-only container state.

use std::iter;
use std::sync::Arc;

use smallvec::SmallVec;
use strata_core::{ContainerId, HashDelta, SiteType, StackError, StoreError};
use strata_stack::Stack;
use strata_topology::Topology;
use strata_zobrist::ContainerKeys;

use crate::canonical::CanonicalRemap;
use crate::config::ContainerConfig;
use crate::error::ConfigError;
use crate::region::Region;
use crate::sites::SiteStacks;

/// The piles on every cell of one container, with the empty region and,
/// for growing boards, the playable region.
///
/// A cell is playable when it is empty and at least one neighbour is
/// occupied. After any occupancy change at a cell, that cell and its
/// neighbours are re-derived; nothing else can change.
#[derive(Clone, Debug)]
pub struct CellContainerState {
    config: ContainerConfig,
    cells: SiteStacks,
    playable: Option<Region>,
}

impl CellContainerState {
    pub(crate) fn new(
        config: ContainerConfig,
        keys: Option<&ContainerKeys>,
    ) -> Result<Self, ConfigError> {
        let count = config.site_count(SiteType::Cell);
        let strategy = config.stack_strategy(SiteType::Cell, keys)?;
        let playable = config.growing.then(|| Region::empty(count));
        Ok(Self {
            cells: SiteStacks::new(SiteType::Cell, count, strategy),
            playable,
            config,
        })
    }

    /// The configuration this state was built from.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Container index.
    pub fn id(&self) -> ContainerId {
        self.config.id
    }

    /// Cell adjacency.
    pub fn topology(&self) -> &Arc<dyn Topology> {
        &self.config.topology
    }

    /// Cells with no item.
    pub fn empty_region(&self) -> &Region {
        self.cells.empty_region()
    }

    /// Empty cells next to an occupied cell, for growing boards.
    pub fn playable_region(&self) -> Option<&Region> {
        self.playable.as_ref()
    }

    /// Returns `true` if `site` is in the playable region.
    pub fn is_playable(&self, site: usize) -> bool {
        self.playable.as_ref().is_some_and(|p| p.contains(site))
    }

    pub(crate) fn cells(&self) -> &SiteStacks {
        &self.cells
    }

    pub(crate) fn apply<T>(
        &mut self,
        site: usize,
        op: impl FnOnce(&mut Stack) -> Result<T, StackError>,
    ) -> Result<T, StoreError> {
        let (out, flipped) = self.cells.apply(site, op)?;
        if flipped {
            self.refresh_playable(site);
        }
        Ok(out)
    }

    fn refresh_playable(&mut self, site: usize) {
        let Some(playable) = &mut self.playable else {
            return;
        };
        let topology = &self.config.topology;
        let around: SmallVec<[usize; 9]> = iter::once(site)
            .chain(topology.neighbours(SiteType::Cell, site))
            .collect();
        for s in around {
            let now = !self.cells.is_occupied(s)
                && topology
                    .neighbours(SiteType::Cell, s)
                    .iter()
                    .any(|&nb| self.cells.is_occupied(nb));
            if playable.set(s, now) {
                tracing::trace!(site = s, playable = now, "playable changed");
            }
        }
    }

    pub(crate) fn full_hash(&self) -> u64 {
        self.cells.full_hash()
    }

    pub(crate) fn canonical_hash(&self, remap: &CanonicalRemap, who_only: bool) -> u64 {
        self.cells.canonical_hash(remap, who_only)
    }

    pub(crate) fn reset(&mut self) -> HashDelta {
        if let Some(playable) = &mut self.playable {
            playable.clear();
        }
        self.cells.reset()
    }
}
