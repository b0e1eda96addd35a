//! Dense three-dimensional key tables.

/// Dimensions of a [`ZobristTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableShape {
    /// Number of sites.
    pub sites: usize,
    /// Number of pile levels.
    pub levels: usize,
    /// Number of keyed values per (site, level): `0..domain`.
    pub domain: u32,
}

impl TableShape {
    /// Total number of keys.
    pub fn len(&self) -> usize {
        self.sites * self.levels * self.domain as usize
    }

    /// Returns `true` if the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A `[site][level][value]` table of 64-bit keys, stored flat.
///
/// Lookups outside the table's shape return `None` rather than panicking;
/// callers validate values against [`domain`](ZobristTable::domain) before
/// mutating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZobristTable {
    shape: TableShape,
    keys: Box<[u64]>,
}

impl ZobristTable {
    pub(crate) fn from_keys(shape: TableShape, keys: Vec<u64>) -> Self {
        debug_assert_eq!(keys.len(), shape.len());
        Self {
            shape,
            keys: keys.into_boxed_slice(),
        }
    }

    /// Table dimensions.
    pub fn shape(&self) -> TableShape {
        self.shape
    }

    /// Number of keyed values per (site, level).
    pub fn domain(&self) -> u32 {
        self.shape.domain
    }

    /// Look up the key for `(site, level, value)`.
    #[inline]
    pub fn key(&self, site: usize, level: usize, value: u32) -> Option<u64> {
        let s = self.shape;
        if site >= s.sites || level >= s.levels || value >= s.domain {
            return None;
        }
        let idx = (site * s.levels + level) * s.domain as usize + value as usize;
        Some(self.keys[idx])
    }

    /// All keys in `[site][level][value]` order.
    pub fn keys(&self) -> &[u64] {
        &self.keys
    }

    /// Memory held by the keys, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.keys.len() * std::mem::size_of::<u64>()
    }
}
