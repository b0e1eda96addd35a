//! The per-container query and mutator surface.

use std::sync::Arc;

use strata_core::{
    ContainerId, Field, HashDelta, HiddenField, ItemRecord, ItemUpdate, SiteType, StackError,
    StoreError,
};
use strata_stack::{Pile, Stack};
use strata_topology::Topology;
use strata_zobrist::ContainerKeys;

use crate::canonical::CanonicalRemap;
use crate::cell::CellContainerState;
use crate::config::ContainerConfig;
use crate::error::ConfigError;
use crate::graph::GraphContainerState;
use crate::region::Region;
use crate::sites::SiteStacks;
use crate::update::SiteUpdate;

/// The site state of one container.
///
/// Every request names a site kind. Requests resolve to cell storage when
/// the kind is [`SiteType::Cell`] or the container has no vertex and edge
/// storage, which is every container except the primary one.
///
/// Mutators return the [`HashDelta`] they applied; the caller owns the
/// running hash. A mutator that returns `Err` has changed nothing. Reads
/// are total: sites and levels that were never written read as
/// [`ItemRecord::EMPTY`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use strata_core::{ContainerId, ItemUpdate, SiteType};
/// use strata_state::{ContainerConfig, ContainerState};
/// use strata_topology::{EdgeBehavior, Square4};
/// use strata_zobrist::KeyGenerator;
///
/// let board = Arc::new(Square4::new(3, 3, EdgeBehavior::Absorb).unwrap());
/// let config = ContainerConfig::new(ContainerId::PRIMARY, board).max_height(2);
/// let keys = config.generate_keys(&mut KeyGenerator::new(7));
/// let mut state = ContainerState::new(config, keys).unwrap();
///
/// let mut hash = 0u64;
/// state.add(4, &ItemUpdate::new(3, 1), SiteType::Cell).unwrap().apply(&mut hash);
/// assert_eq!(state.what(4, SiteType::Cell), 3);
/// assert!(!state.empty_region(SiteType::Cell).contains(4));
/// assert_eq!(hash, state.full_hash());
/// ```
#[derive(Clone, Debug)]
pub enum ContainerState {
    /// Cell storage only.
    Cell(CellContainerState),
    /// Cell, vertex and edge storage.
    Graph(GraphContainerState),
}

impl ContainerState {
    /// Build the state for `config`.
    ///
    /// `keys` must come from [`ContainerConfig::generate_keys`] for a
    /// bounded container and may be `None` for an unbounded one. The graph
    /// variant is chosen for the primary container when its topology has
    /// vertices or edges.
    pub fn new(config: ContainerConfig, keys: Option<ContainerKeys>) -> Result<Self, ConfigError> {
        config.validate()?;
        let (id, bounded, growing) = (config.id, config.max_height.is_some(), config.growing);
        let state = if config.has_graph_sites() {
            Self::Graph(GraphContainerState::new(config, keys.as_ref())?)
        } else {
            Self::Cell(CellContainerState::new(config, keys.as_ref())?)
        };
        tracing::debug!(
            container = %id,
            graph = state.has_graph_sites(),
            cells = state.site_count(SiteType::Cell),
            bounded,
            growing,
            "container state created"
        );
        Ok(state)
    }

    fn cell_state(&self) -> &CellContainerState {
        match self {
            Self::Cell(c) => c,
            Self::Graph(g) => g.cell_state(),
        }
    }

    /// The configuration this state was built from.
    pub fn config(&self) -> &ContainerConfig {
        self.cell_state().config()
    }

    /// Container index.
    pub fn id(&self) -> ContainerId {
        self.cell_state().id()
    }

    /// Site adjacency.
    pub fn topology(&self) -> &Arc<dyn Topology> {
        self.cell_state().topology()
    }

    /// Returns `true` if the container stores vertex and edge piles.
    pub fn has_graph_sites(&self) -> bool {
        matches!(self, Self::Graph(_))
    }

    /// Returns `true` if piles are bounded and hashed.
    pub fn is_bounded(&self) -> bool {
        self.config().max_height.is_some()
    }

    /// Returns `true` if hidden-information flags are tracked.
    pub fn uses_hidden_info(&self) -> bool {
        self.config().hidden_players.is_some()
    }

    /// The kind a request for `kind` is served from.
    pub fn resolve_kind(&self, kind: SiteType) -> SiteType {
        match self {
            Self::Graph(_) => kind,
            Self::Cell(_) => SiteType::Cell,
        }
    }

    /// Number of sites of the resolved kind.
    pub fn site_count(&self, kind: SiteType) -> usize {
        self.sites(kind).len()
    }

    fn sites(&self, kind: SiteType) -> &SiteStacks {
        match self {
            Self::Cell(c) => c.cells(),
            Self::Graph(g) => g.sites(kind),
        }
    }

    fn mutate<T>(
        &mut self,
        site: usize,
        kind: SiteType,
        op: impl FnOnce(&mut Stack) -> Result<T, StackError>,
    ) -> Result<T, StoreError> {
        match self {
            Self::Cell(c) => c.apply(site, op),
            Self::Graph(g) => g.apply(kind, site, op),
        }
    }

    // ── Mutators ────────────────────────────────────────────────

    /// Partial update of the top item at a site.
    ///
    /// A count of `Some(0)` clears the pile. On an empty pile a positive
    /// `what` places a new item and anything else is ignored; otherwise the
    /// supplied fields overwrite the top item.
    pub fn set_site(
        &mut self,
        site: usize,
        update: SiteUpdate,
        kind: SiteType,
    ) -> Result<HashDelta, StoreError> {
        let SiteUpdate { item, .. } = update;
        let clears = update.clears();
        self.mutate(site, kind, move |stack| {
            if clears {
                return Ok(stack.clear());
            }
            match stack.top() {
                Some(top) => stack.update_at(top, &item),
                None if item.what.is_some_and(|w| w > 0) => stack.push(&item),
                None => Ok(HashDelta::NONE),
            }
        })
    }

    /// Place an item on top of a pile.
    pub fn add(
        &mut self,
        site: usize,
        item: &ItemUpdate,
        kind: SiteType,
    ) -> Result<HashDelta, StoreError> {
        self.mutate(site, kind, |stack| stack.push(item))
    }

    /// Insert an item at `level`, lifting the items above it.
    pub fn insert(
        &mut self,
        site: usize,
        level: usize,
        item: &ItemUpdate,
        kind: SiteType,
    ) -> Result<HashDelta, StoreError> {
        self.mutate(site, kind, |stack| stack.insert_at(level, item))
    }

    /// Remove the item at `level`, lowering the items above it.
    pub fn remove(
        &mut self,
        site: usize,
        level: usize,
        kind: SiteType,
    ) -> Result<(ItemRecord, HashDelta), StoreError> {
        self.mutate(site, kind, |stack| stack.remove_at(level))
    }

    /// Remove the top item.
    pub fn remove_top(
        &mut self,
        site: usize,
        kind: SiteType,
    ) -> Result<(ItemRecord, HashDelta), StoreError> {
        self.mutate(site, kind, |stack| {
            let level = stack.top().ok_or(StackError::LevelOutOfRange { level: 0, size: 0 })?;
            stack.remove_at(level)
        })
    }

    /// Sweep the whole pile off a site.
    pub fn remove_stack(&mut self, site: usize, kind: SiteType) -> Result<HashDelta, StoreError> {
        self.mutate(site, kind, |stack| Ok(stack.clear()))
    }

    /// Write one field of the item at `level`.
    pub fn set_value_at(
        &mut self,
        site: usize,
        level: usize,
        field: Field,
        value: u32,
        kind: SiteType,
    ) -> Result<HashDelta, StoreError> {
        self.mutate(site, kind, |stack| stack.set_field(level, field, Some(value)))
    }

    /// Overwrite the supplied fields of the item at `level`.
    pub fn update_at(
        &mut self,
        site: usize,
        level: usize,
        item: &ItemUpdate,
        kind: SiteType,
    ) -> Result<HashDelta, StoreError> {
        self.mutate(site, kind, |stack| stack.update_at(level, item))
    }

    /// Set or clear a hidden-information flag. A no-op without hidden
    /// information.
    pub fn set_hidden(
        &mut self,
        player: usize,
        site: usize,
        level: usize,
        layer: HiddenField,
        on: bool,
        kind: SiteType,
    ) -> Result<HashDelta, StoreError> {
        if !self.uses_hidden_info() {
            return Ok(HashDelta::NONE);
        }
        self.mutate(site, kind, |stack| stack.set_hidden(player, level, layer, on))
    }

    /// Clear every pile of every kind.
    pub fn reset(&mut self) -> HashDelta {
        let delta = match self {
            Self::Cell(c) => c.reset(),
            Self::Graph(g) => g.reset(),
        };
        tracing::debug!(container = %self.id(), "container reset");
        delta
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The pile at a site, if one was ever written.
    pub fn stack(&self, site: usize, kind: SiteType) -> Option<&Stack> {
        self.sites(kind).stack(site)
    }

    /// The item at `level`.
    pub fn record_at(&self, site: usize, level: usize, kind: SiteType) -> ItemRecord {
        self.sites(kind).record(site, level)
    }

    /// The top item.
    pub fn record(&self, site: usize, kind: SiteType) -> ItemRecord {
        self.sites(kind).top_record(site)
    }

    /// Item id on top.
    pub fn what(&self, site: usize, kind: SiteType) -> u32 {
        self.record(site, kind).what
    }

    /// Owner of the top item.
    pub fn who(&self, site: usize, kind: SiteType) -> u32 {
        self.record(site, kind).who
    }

    /// Sub-state of the top item.
    pub fn state(&self, site: usize, kind: SiteType) -> u32 {
        self.record(site, kind).state
    }

    /// Orientation of the top item.
    pub fn rotation(&self, site: usize, kind: SiteType) -> u32 {
        self.record(site, kind).rotation
    }

    /// Numeric tag of the top item.
    pub fn value(&self, site: usize, kind: SiteType) -> u32 {
        self.record(site, kind).value
    }

    /// Item id at `level`.
    pub fn what_at(&self, site: usize, level: usize, kind: SiteType) -> u32 {
        self.record_at(site, level, kind).what
    }

    /// Owner at `level`.
    pub fn who_at(&self, site: usize, level: usize, kind: SiteType) -> u32 {
        self.record_at(site, level, kind).who
    }

    /// Sub-state at `level`.
    pub fn state_at(&self, site: usize, level: usize, kind: SiteType) -> u32 {
        self.record_at(site, level, kind).state
    }

    /// Orientation at `level`.
    pub fn rotation_at(&self, site: usize, level: usize, kind: SiteType) -> u32 {
        self.record_at(site, level, kind).rotation
    }

    /// Numeric tag at `level`.
    pub fn value_at(&self, site: usize, level: usize, kind: SiteType) -> u32 {
        self.record_at(site, level, kind).value
    }

    /// Number of items in the pile.
    pub fn size_stack(&self, site: usize, kind: SiteType) -> usize {
        self.sites(kind).size(site)
    }

    /// Number of items at a site. A pile's count is its size.
    pub fn count(&self, site: usize, kind: SiteType) -> usize {
        self.size_stack(site, kind)
    }

    /// Returns `true` if no item is on top of the pile.
    pub fn is_empty(&self, site: usize, kind: SiteType) -> bool {
        !self.is_occupied(site, kind)
    }

    /// Returns `true` if an item is on top of the pile.
    pub fn is_occupied(&self, site: usize, kind: SiteType) -> bool {
        self.sites(kind).is_occupied(site)
    }

    /// Sites of the resolved kind with no item.
    pub fn empty_region(&self, kind: SiteType) -> &Region {
        self.sites(kind).empty_region()
    }

    /// Empty cells next to an occupied cell, for growing boards.
    pub fn playable_region(&self) -> Option<&Region> {
        self.cell_state().playable_region()
    }

    /// Returns `true` if `site` is a playable cell.
    pub fn is_playable(&self, site: usize) -> bool {
        self.cell_state().is_playable(site)
    }

    /// Whether `player` cannot see `layer` of the item at `level`.
    pub fn is_hidden(
        &self,
        player: usize,
        site: usize,
        level: usize,
        layer: HiddenField,
        kind: SiteType,
    ) -> bool {
        self.stack(site, kind)
            .is_some_and(|stack| stack.is_hidden(player, level, layer))
    }

    // ── Hashing ─────────────────────────────────────────────────

    /// XOR of every pile's contribution, recomputed from scratch.
    ///
    /// Equals the running hash built from every delta this state returned.
    pub fn full_hash(&self) -> u64 {
        match self {
            Self::Cell(c) => c.full_hash(),
            Self::Graph(g) => g.full_hash(),
        }
    }

    /// Hash of the position moved by `remap`.
    ///
    /// Each pile is hashed as if it sat at its image site, with owners
    /// mapped through the player remap; `who_only` hashes owners alone.
    /// The identity remap reproduces [`Self::full_hash`]. Containers other
    /// than the primary one, and unbounded piles, contribute `0`.
    pub fn canonical_hash(&self, remap: &CanonicalRemap, who_only: bool) -> u64 {
        if !self.id().is_primary() {
            return 0;
        }
        match self {
            Self::Cell(c) => c.canonical_hash(remap, who_only),
            Self::Graph(g) => g.canonical_hash(remap, who_only),
        }
    }

    /// Smallest canonical hash over a set of symmetries.
    pub fn min_canonical_hash(&self, remaps: &[CanonicalRemap], who_only: bool) -> u64 {
        remaps
            .iter()
            .map(|r| self.canonical_hash(r, who_only))
            .min()
            .unwrap_or_else(|| self.canonical_hash(&CanonicalRemap::identity(), who_only))
    }
}
