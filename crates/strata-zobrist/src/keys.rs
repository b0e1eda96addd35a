//! Per-site-kind key sets and their shapes.

use std::sync::Arc;

use strata_core::{Field, HiddenField, SiteType, StackError};

use crate::generator::KeyGenerator;
use crate::table::ZobristTable;

/// Number of distinct values per field that receive keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDomains {
    /// Item ids `0..what`.
    pub what: u32,
    /// Owner ids `0..who`.
    pub who: u32,
    /// Sub-states `0..state`.
    pub state: u32,
    /// Orientations `0..rotation`.
    pub rotation: u32,
    /// Numeric tags `0..value`.
    pub value: u32,
}

impl FieldDomains {
    /// The same domain for every field.
    pub fn uniform(domain: u32) -> Self {
        Self {
            what: domain,
            who: domain,
            state: domain,
            rotation: domain,
            value: domain,
        }
    }

    /// Domain of one field.
    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::What => self.what,
            Field::Who => self.who,
            Field::State => self.state,
            Field::Rotation => self.rotation,
            Field::Value => self.value,
        }
    }
}

/// Everything needed to generate the key tables of one site kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyShape {
    /// Number of sites of this kind.
    pub sites: usize,
    /// Pile height ceiling.
    pub max_height: usize,
    /// Value domains per field.
    pub domains: FieldDomains,
    /// Hidden-information player slots (`players + 1`), if the game hides
    /// information.
    pub hidden_slots: Option<usize>,
}

/// Shared handle to one site kind's key tables.
pub type SharedKeyTables = Arc<KeyTables>;

/// The key tables for every site of one kind.
///
/// A field value of `0`, a pile size of `0` and an unset hidden flag all
/// contribute nothing to a hash, so an empty pile hashes to `0` and the
/// empty board hashes to `0`.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyTables {
    shape: KeyShape,
    fields: [ZobristTable; Field::COUNT],
    size: ZobristTable,
    hidden: Option<Vec<[ZobristTable; HiddenField::COUNT]>>,
}

impl KeyTables {
    /// Generate every table for `shape`.
    pub fn generate(gen: &mut KeyGenerator, shape: KeyShape) -> Self {
        let KeyShape {
            sites, max_height, ..
        } = shape;
        let fields = Field::ALL.map(|f| gen.table(sites, max_height, shape.domains.get(f)));
        let size = gen.table(sites, 1, max_height as u32 + 1);
        let hidden = shape.hidden_slots.map(|slots| {
            (0..slots)
                .map(|_| HiddenField::ALL.map(|_| gen.table(sites, max_height, 2)))
                .collect::<Vec<_>>()
        });
        let tables = Self {
            shape,
            fields,
            size,
            hidden,
        };
        tracing::debug!(
            sites,
            max_height,
            hidden_slots = ?shape.hidden_slots,
            bytes = tables.memory_bytes(),
            "generated key tables"
        );
        tables
    }

    /// Wrap in an `Arc` for sharing across state clones.
    pub fn into_shared(self) -> SharedKeyTables {
        Arc::new(self)
    }

    /// The shape these tables were generated for.
    pub fn shape(&self) -> &KeyShape {
        &self.shape
    }

    /// Number of sites covered.
    pub fn sites(&self) -> usize {
        self.shape.sites
    }

    /// Pile height ceiling.
    pub fn max_height(&self) -> usize {
        self.shape.max_height
    }

    /// Value domain of `field`.
    pub fn domain(&self, field: Field) -> u32 {
        self.fields[field.index()].domain()
    }

    /// Hidden-information player slots, or `None` without hidden information.
    pub fn hidden_slots(&self) -> Option<usize> {
        self.hidden.as_ref().map(Vec::len)
    }

    /// Reject values that have no key.
    pub fn check_value(&self, field: Field, value: u32) -> Result<(), StackError> {
        let domain = self.domain(field);
        if value >= domain {
            return Err(StackError::ValueOutOfDomain {
                field,
                value,
                domain,
            });
        }
        Ok(())
    }

    /// Key contributed by `field == value` at `(site, level)`.
    #[inline]
    pub fn field_key(&self, field: Field, site: usize, level: usize, value: u32) -> u64 {
        if value == 0 {
            return 0;
        }
        self.fields[field.index()]
            .key(site, level, value)
            .unwrap_or(0)
    }

    /// Key contributed by a pile of `size` items at `site`.
    #[inline]
    pub fn size_key(&self, site: usize, size: usize) -> u64 {
        if size == 0 {
            return 0;
        }
        self.size.key(site, 0, size as u32).unwrap_or(0)
    }

    /// Key contributed by a set hidden flag.
    #[inline]
    pub fn hidden_key(&self, player: usize, layer: HiddenField, site: usize, level: usize) -> u64 {
        self.hidden
            .as_ref()
            .and_then(|players| players.get(player))
            .and_then(|layers| layers[layer.index()].key(site, level, 1))
            .unwrap_or(0)
    }

    /// Memory held by all tables, in bytes.
    pub fn memory_bytes(&self) -> usize {
        let fields: usize = self.fields.iter().map(ZobristTable::memory_bytes).sum();
        let hidden: usize = self
            .hidden
            .iter()
            .flatten()
            .flat_map(|layers| layers.iter())
            .map(ZobristTable::memory_bytes)
            .sum();
        fields + self.size.memory_bytes() + hidden
    }
}

/// The key tables of one bounded container, per site kind.
#[derive(Clone, Debug)]
pub struct ContainerKeys {
    cell: SharedKeyTables,
    vertex: Option<SharedKeyTables>,
    edge: Option<SharedKeyTables>,
}

impl ContainerKeys {
    /// Generate tables for cells, and optionally for vertices and edges.
    pub fn generate(
        gen: &mut KeyGenerator,
        cell: KeyShape,
        vertex: Option<KeyShape>,
        edge: Option<KeyShape>,
    ) -> Self {
        Self {
            cell: KeyTables::generate(gen, cell).into_shared(),
            vertex: vertex.map(|s| KeyTables::generate(gen, s).into_shared()),
            edge: edge.map(|s| KeyTables::generate(gen, s).into_shared()),
        }
    }

    /// Tables for one site kind, if generated.
    pub fn for_kind(&self, kind: SiteType) -> Option<&SharedKeyTables> {
        match kind {
            SiteType::Cell => Some(&self.cell),
            SiteType::Vertex => self.vertex.as_ref(),
            SiteType::Edge => self.edge.as_ref(),
        }
    }

    /// Cell tables.
    pub fn cell(&self) -> &SharedKeyTables {
        &self.cell
    }
}
