//! All containers of one game plus the running hash.

use indexmap::IndexMap;
use strata_core::{
    ContainerId, Field, HashDelta, HiddenField, ItemRecord, ItemUpdate, SiteType, StoreError,
};

use crate::canonical::CanonicalRemap;
use crate::container::ContainerState;
use crate::error::ConfigError;
use crate::update::SiteUpdate;

/// The site state of a whole game.
///
/// Owns every container and the running hash, folding in the delta of each
/// mutation. Mutators mirror [`ContainerState`], addressed by container.
/// Cloning copies the piles and shares key tables and topologies.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use strata_core::{ContainerId, ItemUpdate, SiteType};
/// use strata_state::{ContainerConfig, ContainerState, StateStore};
/// use strata_topology::{EdgeBehavior, Square4};
/// use strata_zobrist::KeyGenerator;
///
/// let board = Arc::new(Square4::new(3, 3, EdgeBehavior::Absorb).unwrap());
/// let config = ContainerConfig::new(ContainerId::PRIMARY, board);
/// let keys = config.generate_keys(&mut KeyGenerator::new(1));
///
/// let mut store = StateStore::new();
/// store.insert_container(ContainerState::new(config, keys).unwrap()).unwrap();
/// store.add(ContainerId::PRIMARY, 0, &ItemUpdate::new(1, 1), SiteType::Cell).unwrap();
/// assert_ne!(store.hash(), 0);
/// assert!(store.verify_hash());
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateStore {
    containers: IndexMap<ContainerId, ContainerState>,
    hash: u64,
}

impl StateStore {
    /// A store with no containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container. Its existing contents are folded into the
    /// running hash.
    pub fn insert_container(&mut self, state: ContainerState) -> Result<(), ConfigError> {
        let id = state.id();
        if self.containers.contains_key(&id) {
            return Err(ConfigError::DuplicateContainer { container: id });
        }
        self.hash ^= state.full_hash();
        self.containers.insert(id, state);
        Ok(())
    }

    /// The running hash.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// A container, by id.
    pub fn container(&self, id: ContainerId) -> Option<&ContainerState> {
        self.containers.get(&id)
    }

    /// Every container, in registration order.
    pub fn containers(&self) -> impl Iterator<Item = &ContainerState> {
        self.containers.values()
    }

    /// Number of registered containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns `true` if no container is registered.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    fn with<T>(
        &mut self,
        id: ContainerId,
        op: impl FnOnce(&mut ContainerState) -> Result<(T, HashDelta), StoreError>,
    ) -> Result<T, StoreError> {
        let state = self
            .containers
            .get_mut(&id)
            .ok_or(StoreError::UnknownContainer { container: id })?;
        let (out, delta) = op(state)?;
        delta.apply(&mut self.hash);
        Ok(out)
    }

    /// See [`ContainerState::set_site`].
    pub fn set_site(
        &mut self,
        id: ContainerId,
        site: usize,
        update: SiteUpdate,
        kind: SiteType,
    ) -> Result<(), StoreError> {
        self.with(id, |c| Ok(((), c.set_site(site, update, kind)?)))
    }

    /// See [`ContainerState::add`].
    pub fn add(
        &mut self,
        id: ContainerId,
        site: usize,
        item: &ItemUpdate,
        kind: SiteType,
    ) -> Result<(), StoreError> {
        self.with(id, |c| Ok(((), c.add(site, item, kind)?)))
    }

    /// See [`ContainerState::insert`].
    pub fn insert(
        &mut self,
        id: ContainerId,
        site: usize,
        level: usize,
        item: &ItemUpdate,
        kind: SiteType,
    ) -> Result<(), StoreError> {
        self.with(id, |c| Ok(((), c.insert(site, level, item, kind)?)))
    }

    /// See [`ContainerState::remove`].
    pub fn remove(
        &mut self,
        id: ContainerId,
        site: usize,
        level: usize,
        kind: SiteType,
    ) -> Result<ItemRecord, StoreError> {
        self.with(id, |c| c.remove(site, level, kind))
    }

    /// See [`ContainerState::remove_top`].
    pub fn remove_top(
        &mut self,
        id: ContainerId,
        site: usize,
        kind: SiteType,
    ) -> Result<ItemRecord, StoreError> {
        self.with(id, |c| c.remove_top(site, kind))
    }

    /// See [`ContainerState::update_at`].
    pub fn update_at(
        &mut self,
        id: ContainerId,
        site: usize,
        level: usize,
        item: &ItemUpdate,
        kind: SiteType,
    ) -> Result<(), StoreError> {
        self.with(id, |c| Ok(((), c.update_at(site, level, item, kind)?)))
    }

    /// See [`ContainerState::remove_stack`].
    pub fn remove_stack(
        &mut self,
        id: ContainerId,
        site: usize,
        kind: SiteType,
    ) -> Result<(), StoreError> {
        self.with(id, |c| Ok(((), c.remove_stack(site, kind)?)))
    }

    /// See [`ContainerState::set_value_at`].
    pub fn set_value_at(
        &mut self,
        id: ContainerId,
        site: usize,
        level: usize,
        field: Field,
        value: u32,
        kind: SiteType,
    ) -> Result<(), StoreError> {
        self.with(id, |c| {
            Ok(((), c.set_value_at(site, level, field, value, kind)?))
        })
    }

    /// See [`ContainerState::set_hidden`].
    #[allow(clippy::too_many_arguments)]
    pub fn set_hidden(
        &mut self,
        id: ContainerId,
        player: usize,
        site: usize,
        level: usize,
        layer: HiddenField,
        on: bool,
        kind: SiteType,
    ) -> Result<(), StoreError> {
        self.with(id, |c| {
            Ok(((), c.set_hidden(player, site, level, layer, on, kind)?))
        })
    }

    /// Clear every container.
    pub fn reset(&mut self) {
        for state in self.containers.values_mut() {
            state.reset().apply(&mut self.hash);
        }
    }

    /// The hash recomputed from every pile.
    pub fn recompute_hash(&self) -> u64 {
        self.containers().fold(0, |h, c| h ^ c.full_hash())
    }

    /// Returns `true` if the running hash matches a full recomputation.
    pub fn verify_hash(&self) -> bool {
        let recomputed = self.recompute_hash();
        if recomputed != self.hash {
            tracing::warn!(
                running = %HashDelta(self.hash),
                recomputed = %HashDelta(recomputed),
                "running hash out of step"
            );
        }
        recomputed == self.hash
    }

    /// Canonical hash of the primary container, or `0` without one.
    pub fn canonical_hash(&self, remap: &CanonicalRemap, who_only: bool) -> u64 {
        self.container(ContainerId::PRIMARY)
            .map_or(0, |c| c.canonical_hash(remap, who_only))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContainerConfig;
    use std::sync::Arc;
    use strata_topology::{EdgeBehavior, Line1D, Square4};
    use strata_zobrist::KeyGenerator;

    fn store() -> StateStore {
        let mut gen = KeyGenerator::new(21);
        let board = Arc::new(Square4::new(3, 3, EdgeBehavior::Absorb).unwrap());
        let hand = Arc::new(Line1D::new(5, EdgeBehavior::Absorb).unwrap());
        let mut store = StateStore::new();
        for config in [
            ContainerConfig::new(ContainerId::PRIMARY, board).max_height(2),
            ContainerConfig::new(ContainerId(1), hand),
        ] {
            let keys = config.generate_keys(&mut gen);
            store
                .insert_container(ContainerState::new(config, keys).unwrap())
                .unwrap();
        }
        store
    }

    #[test]
    fn running_hash_tracks_every_container() {
        let mut s = store();
        s.add(ContainerId::PRIMARY, 4, &ItemUpdate::new(1, 1), SiteType::Cell)
            .unwrap();
        s.add(ContainerId(1), 2, &ItemUpdate::new(3, 2), SiteType::Cell)
            .unwrap();
        s.set_value_at(ContainerId(1), 2, 0, Field::State, 1, SiteType::Cell)
            .unwrap();
        s.insert(ContainerId::PRIMARY, 4, 0, &ItemUpdate::new(2, 2), SiteType::Edge)
            .unwrap();
        assert_ne!(s.hash(), 0);
        assert!(s.verify_hash());

        let removed = s
            .remove(ContainerId::PRIMARY, 4, 0, SiteType::Edge)
            .unwrap();
        assert_eq!(removed.what, 2);
        s.remove_stack(ContainerId(1), 2, SiteType::Cell).unwrap();
        s.set_site(ContainerId::PRIMARY, 4, SiteUpdate::sweep(), SiteType::Cell)
            .unwrap();
        assert_eq!(s.hash(), 0);
        assert!(s.verify_hash());
    }

    #[test]
    fn update_at_and_remove_top_keep_hash_in_step() {
        let mut s = store();
        s.add(ContainerId::PRIMARY, 2, &ItemUpdate::new(1, 1), SiteType::Cell)
            .unwrap();
        s.add(ContainerId::PRIMARY, 2, &ItemUpdate::new(2, 2), SiteType::Cell)
            .unwrap();
        let two_items = s.hash();

        let update = ItemUpdate {
            who: Some(2),
            state: Some(1),
            ..ItemUpdate::default()
        };
        s.update_at(ContainerId::PRIMARY, 2, 0, &update, SiteType::Cell)
            .unwrap();
        assert_ne!(s.hash(), two_items);
        assert!(s.verify_hash());
        let primary = s.container(ContainerId::PRIMARY).unwrap();
        assert_eq!(primary.who_at(2, 0, SiteType::Cell), 2);
        assert_eq!(primary.state_at(2, 0, SiteType::Cell), 1);

        let top = s
            .remove_top(ContainerId::PRIMARY, 2, SiteType::Cell)
            .unwrap();
        assert_eq!(top.what, 2);
        assert!(s.verify_hash());
        let bottom = s
            .remove_top(ContainerId::PRIMARY, 2, SiteType::Cell)
            .unwrap();
        assert_eq!(bottom.what, 1);
        assert_eq!(s.hash(), 0);
        assert!(s.verify_hash());

        let before = s.hash();
        assert!(s
            .remove_top(ContainerId::PRIMARY, 2, SiteType::Cell)
            .is_err());
        assert!(s
            .update_at(ContainerId(9), 0, 0, &update, SiteType::Cell)
            .is_err());
        assert_eq!(s.hash(), before);
    }

    #[test]
    fn unknown_and_duplicate_containers() {
        let mut s = store();
        assert_eq!(
            s.add(ContainerId(7), 0, &ItemUpdate::new(1, 1), SiteType::Cell),
            Err(StoreError::UnknownContainer {
                container: ContainerId(7)
            })
        );
        let dup = s.container(ContainerId(1)).unwrap().clone();
        assert_eq!(
            s.insert_container(dup),
            Err(ConfigError::DuplicateContainer {
                container: ContainerId(1)
            })
        );
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn failed_mutation_leaves_hash() {
        let mut s = store();
        s.add(ContainerId::PRIMARY, 0, &ItemUpdate::new(1, 1), SiteType::Cell)
            .unwrap();
        let before = s.hash();
        assert!(s
            .insert(ContainerId::PRIMARY, 0, 3, &ItemUpdate::new(1, 1), SiteType::Cell)
            .is_err());
        assert_eq!(s.hash(), before);
    }

    #[test]
    fn reset_and_canonical() {
        let mut s = store();
        s.add(ContainerId::PRIMARY, 1, &ItemUpdate::new(1, 1), SiteType::Cell)
            .unwrap();
        assert_eq!(
            s.canonical_hash(&CanonicalRemap::identity(), false),
            s.container(ContainerId::PRIMARY).unwrap().full_hash()
        );
        s.reset();
        assert_eq!(s.hash(), 0);
        assert_eq!(StateStore::new().canonical_hash(&CanonicalRemap::identity(), false), 0);
    }
}
