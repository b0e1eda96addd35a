//! Container configuration parameters.

use std::sync::Arc;

use strata_core::{ContainerId, Field, SiteType};
use strata_stack::StackStrategy;
use strata_topology::Topology;
use strata_zobrist::{ContainerKeys, FieldDomains, KeyGenerator, KeyShape};

use crate::error::ConfigError;

/// Configuration for one container.
///
/// Decides the stack strategy (bounded with keys, or unbounded), whether
/// hidden information is tracked, and whether a playable region is
/// maintained. Validated at construction; immutable afterwards.
#[derive(Clone, Debug)]
pub struct ContainerConfig {
    /// Container index. Only [`ContainerId::PRIMARY`] stores vertex and edge
    /// piles.
    pub id: ContainerId,

    /// Site adjacency, shared by every clone of the container.
    pub topology: Arc<dyn Topology>,

    /// Pile height ceiling, or `None` for unbounded piles that take no part
    /// in hashing.
    ///
    /// Default: `Some(1)`. Must be in `1..=MAX_BOUNDED_HEIGHT`.
    pub max_height: Option<usize>,

    /// Keyed value range per field.
    ///
    /// Default: [`Self::DEFAULT_DOMAIN`] for every field.
    pub domains: FieldDomains,

    /// Number of players when the game hides information, `None` otherwise.
    /// Players are indexed `0..=players`, slot `0` being the neutral player.
    pub hidden_players: Option<usize>,

    /// Maintain the playable region (growing or boardless games).
    pub growing: bool,
}

impl ContainerConfig {
    /// Default pile height: one item per site.
    pub const DEFAULT_MAX_HEIGHT: usize = 1;

    /// Largest accepted bounded height. Mid-pile inserts and removes cost
    /// O(height).
    pub const MAX_BOUNDED_HEIGHT: usize = 256;

    /// Default keyed value range per field.
    pub const DEFAULT_DOMAIN: u32 = 32;

    /// Create a config for `topology` with default values for everything
    /// else.
    pub fn new(id: ContainerId, topology: Arc<dyn Topology>) -> Self {
        Self {
            id,
            topology,
            max_height: Some(Self::DEFAULT_MAX_HEIGHT),
            domains: FieldDomains::uniform(Self::DEFAULT_DOMAIN),
            hidden_players: None,
            growing: false,
        }
    }

    /// Set a bounded height ceiling.
    pub fn max_height(mut self, height: usize) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Use unbounded piles.
    pub fn unbounded(mut self) -> Self {
        self.max_height = None;
        self
    }

    /// Set the keyed value ranges.
    pub fn domains(mut self, domains: FieldDomains) -> Self {
        self.domains = domains;
        self
    }

    /// Track hidden information for `players` players.
    pub fn hidden_players(mut self, players: usize) -> Self {
        self.hidden_players = Some(players);
        self
    }

    /// Maintain the playable region.
    pub fn growing(mut self, growing: bool) -> Self {
        self.growing = growing;
        self
    }

    /// Hidden-information player slots (`players + 1`).
    pub fn hidden_slots(&self) -> Option<usize> {
        self.hidden_players.map(|p| p + 1)
    }

    /// Returns `true` if the container stores vertex and edge piles.
    pub fn has_graph_sites(&self) -> bool {
        self.id.is_primary() && self.topology.has_graph_sites()
    }

    /// Number of sites of `kind` this container stores. Zero for vertices
    /// and edges outside the primary container.
    pub fn site_count(&self, kind: SiteType) -> usize {
        match kind {
            SiteType::Cell => self.topology.site_count(SiteType::Cell),
            _ if self.has_graph_sites() => self.topology.site_count(kind),
            _ => 0,
        }
    }

    /// Key shape for `kind`, or `None` if unbounded or the kind has no
    /// storage.
    pub fn key_shape(&self, kind: SiteType) -> Option<KeyShape> {
        let max_height = self.max_height?;
        let sites = self.site_count(kind);
        if sites == 0 {
            return None;
        }
        Some(KeyShape {
            sites,
            max_height,
            domains: self.domains,
            hidden_slots: self.hidden_slots(),
        })
    }

    /// Generate the key tables this container needs, or `None` if unbounded.
    pub fn generate_keys(&self, gen: &mut KeyGenerator) -> Option<ContainerKeys> {
        let cell = self.key_shape(SiteType::Cell)?;
        Some(ContainerKeys::generate(
            gen,
            cell,
            self.key_shape(SiteType::Vertex),
            self.key_shape(SiteType::Edge),
        ))
    }

    /// Check the parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topology.site_count(SiteType::Cell) == 0 {
            return Err(ConfigError::EmptyTopology);
        }
        if let Some(height) = self.max_height {
            if height == 0 {
                return Err(ConfigError::ZeroHeight);
            }
            if height > Self::MAX_BOUNDED_HEIGHT {
                return Err(ConfigError::HeightTooLarge {
                    height,
                    max: Self::MAX_BOUNDED_HEIGHT,
                });
            }
            if let Some(field) = Field::ALL.into_iter().find(|&f| self.domains.get(f) == 0) {
                return Err(ConfigError::EmptyDomain { field });
            }
        }
        Ok(())
    }

    /// Pile strategy for `kind`, taking the tables from `keys` when bounded.
    pub(crate) fn stack_strategy(
        &self,
        kind: SiteType,
        keys: Option<&ContainerKeys>,
    ) -> Result<StackStrategy, ConfigError> {
        let Some(expected) = self.key_shape(kind) else {
            return Ok(StackStrategy::Unbounded {
                hidden_slots: self.hidden_slots(),
            });
        };
        let tables = keys
            .and_then(|k| k.for_kind(kind))
            .ok_or(ConfigError::MissingKeys { kind })?;
        if *tables.shape() != expected {
            return Err(ConfigError::KeyShapeMismatch { kind });
        }
        Ok(StackStrategy::Bounded {
            keys: tables.clone(),
        })
    }
}
