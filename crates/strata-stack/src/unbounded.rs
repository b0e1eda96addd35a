//! Growable pile for containers with no height ceiling.

use strata_core::{Field, HashDelta, HiddenField, ItemRecord, ItemUpdate, StackError};
use strata_zobrist::KeyTables;

use crate::hidden::HiddenMask;
use crate::pile::Pile;

/// A pile with no height ceiling, for card-deck-like containers.
///
/// Precomputing (site × level × value) keys is only tractable for a bounded
/// height, so this pile does not take part in hashing: every mutator
/// returns [`HashDelta::NONE`] and [`remap_hash`](Pile::remap_hash) is `0`.
/// Field values are not range-checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnboundedStack {
    records: Vec<ItemRecord>,
    hidden: Option<HiddenMask>,
}

impl UnboundedStack {
    /// An empty pile. `hidden_slots` enables hidden-information flags for
    /// that many player slots.
    pub fn new(hidden_slots: Option<usize>) -> Self {
        Self {
            records: Vec::new(),
            hidden: hidden_slots.map(|slots| HiddenMask::with_capacity(slots, 0)),
        }
    }

    fn check_level(&self, level: usize, limit: usize) -> Result<(), StackError> {
        if level >= limit {
            return Err(StackError::LevelOutOfRange {
                level,
                size: self.records.len(),
            });
        }
        Ok(())
    }
}

impl Pile for UnboundedStack {
    fn size(&self) -> usize {
        self.records.len()
    }

    fn record(&self, level: usize) -> ItemRecord {
        self.records.get(level).copied().unwrap_or_default()
    }

    fn push(&mut self, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        let level = self.records.len();
        self.insert_at(level, item)
    }

    fn insert_at(&mut self, level: usize, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        self.check_level(level, self.records.len() + 1)?;
        self.records.insert(level, item.apply_to(ItemRecord::EMPTY));
        if let Some(mask) = &mut self.hidden {
            mask.insert_level(level);
        }
        Ok(HashDelta::NONE)
    }

    fn remove_at(&mut self, level: usize) -> Result<(ItemRecord, HashDelta), StackError> {
        self.check_level(level, self.records.len())?;
        let removed = self.records.remove(level);
        if let Some(mask) = &mut self.hidden {
            mask.remove_level(level);
        }
        Ok((removed, HashDelta::NONE))
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
        self.check_level(level, self.records.len())?;
        self.records[level].set(field, value);
        Ok(HashDelta::NONE)
    }

    fn clear(&mut self) -> HashDelta {
        self.records.clear();
        if let Some(mask) = &mut self.hidden {
            mask.clear();
        }
        HashDelta::NONE
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
        let size = self.records.len();
        let Some(mask) = &mut self.hidden else {
            return Ok(HashDelta::NONE);
        };
        mask.check_player(player)?;
        if level >= size {
            return Err(StackError::LevelOutOfRange { level, size });
        }
        mask.set(player, level, layer, on);
        Ok(HashDelta::NONE)
    }

    fn remap_hash(&self, _: &KeyTables, _: usize, _: &[u32], _: bool) -> u64 {
        0
    }

    fn own_hash(&self) -> u64 {
        0
    }
}
