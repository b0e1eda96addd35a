//! Primary-container state with vertex and edge piles.

use strata_core::{HashDelta, SiteType, StackError, StoreError};
use strata_stack::Stack;
use strata_zobrist::ContainerKeys;

use crate::canonical::CanonicalRemap;
use crate::cell::CellContainerState;
use crate::config::ContainerConfig;
use crate::error::ConfigError;
use crate::sites::SiteStacks;

/// A [`CellContainerState`] plus piles on the vertices and edges of the
/// board.
///
/// Only the primary container carries vertex and edge storage. The
/// playable region stays cell-only.
#[derive(Clone, Debug)]
pub struct GraphContainerState {
    cell: CellContainerState,
    vertices: SiteStacks,
    edges: SiteStacks,
}

impl GraphContainerState {
    pub(crate) fn new(
        config: ContainerConfig,
        keys: Option<&ContainerKeys>,
    ) -> Result<Self, ConfigError> {
        let vertices = SiteStacks::new(
            SiteType::Vertex,
            config.site_count(SiteType::Vertex),
            config.stack_strategy(SiteType::Vertex, keys)?,
        );
        let edges = SiteStacks::new(
            SiteType::Edge,
            config.site_count(SiteType::Edge),
            config.stack_strategy(SiteType::Edge, keys)?,
        );
        Ok(Self {
            cell: CellContainerState::new(config, keys)?,
            vertices,
            edges,
        })
    }

    /// The cell part of the state.
    pub fn cell_state(&self) -> &CellContainerState {
        &self.cell
    }

    pub(crate) fn sites(&self, kind: SiteType) -> &SiteStacks {
        match kind {
            SiteType::Cell => self.cell.cells(),
            SiteType::Vertex => &self.vertices,
            SiteType::Edge => &self.edges,
        }
    }

    /// Run `op` on a vertex or edge pile, or on a cell pile through the
    /// cell state so the playable region stays current.
    pub(crate) fn apply<T>(
        &mut self,
        kind: SiteType,
        site: usize,
        op: impl FnOnce(&mut Stack) -> Result<T, StackError>,
    ) -> Result<T, StoreError> {
        let sites = match kind {
            SiteType::Cell => return self.cell.apply(site, op),
            SiteType::Vertex => &mut self.vertices,
            SiteType::Edge => &mut self.edges,
        };
        sites.apply(site, op).map(|(out, _)| out)
    }

    pub(crate) fn full_hash(&self) -> u64 {
        self.cell.full_hash() ^ self.vertices.full_hash() ^ self.edges.full_hash()
    }

    pub(crate) fn canonical_hash(&self, remap: &CanonicalRemap, who_only: bool) -> u64 {
        self.cell.canonical_hash(remap, who_only)
            ^ self.vertices.canonical_hash(remap, who_only)
            ^ self.edges.canonical_hash(remap, who_only)
    }

    pub(crate) fn reset(&mut self) -> HashDelta {
        self.cell.reset() ^ self.vertices.reset() ^ self.edges.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use strata_core::{ContainerId, ItemUpdate};
    use strata_stack::Pile;
    use strata_topology::{EdgeBehavior, Square4};
    use strata_zobrist::KeyGenerator;

    fn state() -> GraphContainerState {
        let board = Arc::new(Square4::new(2, 2, EdgeBehavior::Absorb).unwrap());
        let config = ContainerConfig::new(ContainerId::PRIMARY, board).growing(true);
        let keys = config.generate_keys(&mut KeyGenerator::new(11));
        GraphContainerState::new(config, keys.as_ref()).unwrap()
    }

    #[test]
    fn kinds_are_stored_separately() {
        let mut s = state();
        let mut hash = 0;
        for kind in SiteType::ALL {
            s.apply(kind, 0, |p| p.push(&ItemUpdate::new(1, 1)))
                .unwrap()
                .apply(&mut hash);
        }
        assert_eq!(s.sites(SiteType::Vertex).len(), 9);
        assert_eq!(s.sites(SiteType::Edge).len(), 12);
        for kind in SiteType::ALL {
            assert!(s.sites(kind).is_occupied(0));
            assert!(!s.sites(kind).is_occupied(1));
        }
        assert_eq!(hash, s.full_hash());
        s.reset().apply(&mut hash);
        assert_eq!(hash, 0);
    }

    #[test]
    fn vertex_writes_leave_playable_alone() {
        let mut s = state();
        s.apply(SiteType::Vertex, 4, |p| p.push(&ItemUpdate::new(1, 1)))
            .unwrap();
        assert!(s.cell_state().playable_region().unwrap().is_empty());
        s.apply(SiteType::Cell, 0, |p| p.push(&ItemUpdate::new(1, 1)))
            .unwrap();
        assert_eq!(s.cell_state().playable_region().unwrap().len(), 2);
    }

    #[test]
    fn same_item_hashes_differently_per_kind() {
        let mut s = state();
        let cell = s
            .apply(SiteType::Cell, 0, |p| p.push(&ItemUpdate::new(1, 1)))
            .unwrap();
        let edge = s
            .apply(SiteType::Edge, 0, |p| p.push(&ItemUpdate::new(1, 1)))
            .unwrap();
        assert_ne!(cell, edge);
    }
}
