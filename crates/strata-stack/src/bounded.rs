//! Height-limited pile with an exact Zobrist hash contribution.

use strata_core::{Field, HashDelta, HiddenField, ItemRecord, ItemUpdate, StackError};
use strata_zobrist::{KeyTables, SharedKeyTables};

use crate::hidden::HiddenMask;
use crate::pile::Pile;

/// A pile of at most `max_height` items at one site.
///
/// Levels are pre-allocated; levels at or above `size` are always the
/// absent record. The hash contribution is never cached: each mutator XORs
/// out the keys it invalidates, XORs in the keys it creates, and returns
/// the difference.
///
/// Keys are level-specific, so inserting or removing mid-pile re-keys every
/// shifted item. That costs O(size − level) and is why the ceiling is kept
/// small.
///
/// Cloning copies the levels and shares the key tables.
///
/// # Examples
///
/// ```
/// use strata_core::ItemUpdate;
/// use strata_stack::{BoundedStack, Pile};
/// use strata_zobrist::{FieldDomains, KeyGenerator, KeyShape, KeyTables};
///
/// let keys = KeyTables::generate(
///     &mut KeyGenerator::new(1),
///     KeyShape { sites: 1, max_height: 2, domains: FieldDomains::uniform(8), hidden_slots: None },
/// )
/// .into_shared();
/// let mut pile = BoundedStack::new(keys, 0);
/// let mut hash = 0u64;
/// pile.push(&ItemUpdate::new(3, 1)).unwrap().apply(&mut hash);
/// assert_eq!(hash, pile.own_hash());
/// let (removed, delta) = pile.remove_at(0).unwrap();
/// delta.apply(&mut hash);
/// assert_eq!(removed.what, 3);
/// assert_eq!(hash, 0);
/// ```
#[derive(Clone, Debug)]
pub struct BoundedStack {
    keys: SharedKeyTables,
    site: usize,
    size: usize,
    levels: Box<[ItemRecord]>,
    hidden: Option<HiddenMask>,
}

impl BoundedStack {
    /// An empty pile at `site`, keyed by `keys`.
    pub fn new(keys: SharedKeyTables, site: usize) -> Self {
        let height = keys.max_height();
        let hidden = keys
            .hidden_slots()
            .map(|slots| HiddenMask::with_capacity(slots, height));
        Self {
            levels: vec![ItemRecord::EMPTY; height].into_boxed_slice(),
            keys,
            site,
            size: 0,
            hidden,
        }
    }

    /// Height ceiling.
    pub fn max_height(&self) -> usize {
        self.levels.len()
    }

    /// Site this pile is keyed at.
    pub fn site(&self) -> usize {
        self.site
    }

    /// The shared key tables.
    pub fn keys(&self) -> &SharedKeyTables {
        &self.keys
    }

    /// Returns `true` when no more items fit.
    pub fn is_full(&self) -> bool {
        self.size == self.levels.len()
    }

    fn check_update(&self, item: &ItemUpdate) -> Result<(), StackError> {
        for (field, value) in item.fields() {
            self.keys.check_value(field, value)?;
        }
        Ok(())
    }

    fn check_level(&self, level: usize, limit: usize) -> Result<(), StackError> {
        if level >= limit {
            return Err(StackError::LevelOutOfRange {
                level,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Contribution of the item and hidden flags at `level`.
    fn level_hash(&self, level: usize) -> u64 {
        let r = self.levels[level];
        let mut h = 0;
        for field in Field::ALL {
            h ^= self.keys.field_key(field, self.site, level, r.get(field));
        }
        if let Some(mask) = &self.hidden {
            for player in 0..mask.slots() {
                let byte = mask.byte(player, level);
                for layer in HiddenField::ALL {
                    if byte & layer.bit() != 0 {
                        h ^= self.keys.hidden_key(player, layer, self.site, level);
                    }
                }
            }
        }
        h
    }

    fn write_field(&mut self, level: usize, field: Field, value: u32) -> HashDelta {
        let old = self.levels[level].get(field);
        if old == value {
            return HashDelta::NONE;
        }
        self.levels[level].set(field, value);
        HashDelta(
            self.keys.field_key(field, self.site, level, old)
                ^ self.keys.field_key(field, self.site, level, value),
        )
    }

    fn resize(&mut self, size: usize) -> HashDelta {
        let delta = self.keys.size_key(self.site, self.size) ^ self.keys.size_key(self.site, size);
        self.size = size;
        HashDelta(delta)
    }

    fn write_item(&mut self, level: usize, item: &ItemUpdate) -> HashDelta {
        let mut delta = HashDelta::NONE;
        for (field, value) in item.fields() {
            delta ^= self.write_field(level, field, value);
        }
        delta
    }

    fn hash_range(&self, levels: std::ops::Range<usize>) -> u64 {
        levels.map(|l| self.level_hash(l)).fold(0, |acc, h| acc ^ h)
    }
}

impl Pile for BoundedStack {
    fn size(&self) -> usize {
        self.size
    }

    fn record(&self, level: usize) -> ItemRecord {
        if level < self.size {
            self.levels[level]
        } else {
            ItemRecord::EMPTY
        }
    }

    fn push(&mut self, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                max_height: self.max_height(),
            });
        }
        self.check_update(item)?;
        let level = self.size;
        if let Some(mask) = &mut self.hidden {
            mask.insert_level(level);
        }
        let mut delta = self.resize(level + 1);
        delta ^= self.write_item(level, item);
        Ok(delta)
    }

    fn insert_at(&mut self, level: usize, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        self.check_level(level, self.size + 1)?;
        if self.is_full() {
            return Err(StackError::Overflow {
                max_height: self.max_height(),
            });
        }
        self.check_update(item)?;
        let size = self.size;

        let mut delta = HashDelta(self.hash_range(level..size));
        self.levels.copy_within(level..size, level + 1);
        self.levels[level] = ItemRecord::EMPTY;
        if let Some(mask) = &mut self.hidden {
            mask.insert_level(level);
        }
        delta ^= self.hash_range(level + 1..size + 1);

        delta ^= self.resize(size + 1);
        delta ^= self.write_item(level, item);
        Ok(delta)
    }

    fn remove_at(&mut self, level: usize) -> Result<(ItemRecord, HashDelta), StackError> {
        self.check_level(level, self.size)?;
        let size = self.size;
        let removed = self.levels[level];

        let mut delta = HashDelta(self.hash_range(level..size));
        self.levels.copy_within(level + 1..size, level);
        self.levels[size - 1] = ItemRecord::EMPTY;
        if let Some(mask) = &mut self.hidden {
            mask.remove_level(level);
        }
        delta ^= self.resize(size - 1);
        delta ^= self.hash_range(level..size - 1);
        Ok((removed, delta))
    }

    fn set_field(
        &mut self,
        level: usize,
        field: Field,
        value: Option<u32>,
    ) -> Result<HashDelta, StackError> {
        let Some(value) = value else {
            return Ok(HashDelta::NONE);
        };
        self.check_level(level, self.size)?;
        self.keys.check_value(field, value)?;
        Ok(self.write_field(level, field, value))
    }

    fn update_at(&mut self, level: usize, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        self.check_level(level, self.size)?;
        self.check_update(item)?;
        Ok(self.write_item(level, item))
    }

    fn clear(&mut self) -> HashDelta {
        let delta = HashDelta(self.own_hash());
        self.levels[..self.size].fill(ItemRecord::EMPTY);
        if let Some(mask) = &mut self.hidden {
            mask.clear();
        }
        self.size = 0;
        delta
    }

    fn uses_hidden_info(&self) -> bool {
        self.hidden.is_some()
    }

    fn is_hidden(&self, player: usize, level: usize, layer: HiddenField) -> bool {
        self.hidden
            .as_ref()
            .is_some_and(|mask| mask.get(player, level, layer))
    }

    fn set_hidden(
        &mut self,
        player: usize,
        level: usize,
        layer: HiddenField,
        on: bool,
    ) -> Result<HashDelta, StackError> {
        let size = self.size;
        let Some(mask) = &mut self.hidden else {
            return Ok(HashDelta::NONE);
        };
        mask.check_player(player)?;
        if level >= size {
            return Err(StackError::LevelOutOfRange { level, size });
        }
        if !mask.set(player, level, layer, on) {
            return Ok(HashDelta::NONE);
        }
        Ok(HashDelta(
            self.keys.hidden_key(player, layer, self.site, level),
        ))
    }

    fn remap_hash(&self, keys: &KeyTables, site: usize, players: &[u32], who_only: bool) -> u64 {
        let map = |p: u32| players.get(p as usize).copied().unwrap_or(p);
        let mut h = 0;
        for level in 0..self.size {
            let r = self.levels[level];
            if who_only {
                h ^= keys.field_key(Field::Who, site, level, map(r.who));
                continue;
            }
            for field in Field::ALL {
                let value = match field {
                    Field::Who => map(r.who),
                    _ => r.get(field),
                };
                h ^= keys.field_key(field, site, level, value);
            }
        }
        if who_only {
            return h;
        }
        h ^= keys.size_key(site, self.size);
        if let Some(mask) = &self.hidden {
            for (player, level, layer) in mask.iter_set() {
                let player = map(player as u32) as usize;
                h ^= keys.hidden_key(player, layer, site, level);
            }
        }
        h
    }

    fn own_hash(&self) -> u64 {
        self.hash_range(0..self.size) ^ self.keys.size_key(self.site, self.size)
    }
}
