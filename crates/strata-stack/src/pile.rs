//! The interface shared by bounded and unbounded stack records.

use strata_core::{Field, HashDelta, HiddenField, ItemRecord, ItemUpdate, StackError};
use strata_zobrist::KeyTables;

/// One site's ordered pile of items, level 0 at the bottom.
///
/// Reads are total: levels at or above [`size`](Pile::size) read as the
/// absent record. Mutators validate their arguments first and return `Err`
/// without changing anything when a precondition fails.
pub trait Pile {
    /// Number of items in the pile.
    fn size(&self) -> usize;

    /// The record at `level`, or the absent record above the top.
    fn record(&self, level: usize) -> ItemRecord;

    /// Append an item on top. Unset fields are zero.
    fn push(&mut self, item: &ItemUpdate) -> Result<HashDelta, StackError>;

    /// Insert an item at `level` (`level <= size`), shifting the items at
    /// `level..size` up by one.
    fn insert_at(&mut self, level: usize, item: &ItemUpdate) -> Result<HashDelta, StackError>;

    /// Remove the item at `level`, shifting the items above it down by one.
    /// Returns the removed record.
    fn remove_at(&mut self, level: usize) -> Result<(ItemRecord, HashDelta), StackError>;

    /// Overwrite one field of the item at `level` (`level < size`).
    /// `None` leaves the field unchanged.
    fn set_field(
        &mut self,
        level: usize,
        field: Field,
        value: Option<u32>,
    ) -> Result<HashDelta, StackError>;

    /// Remove every item.
    fn clear(&mut self) -> HashDelta;

    /// Returns `true` if this pile tracks hidden information.
    fn uses_hidden_info(&self) -> bool;

    /// Whether `layer` of the item at `level` is hidden from `player`.
    /// Always `false` without hidden information.
    fn is_hidden(&self, player: usize, level: usize, layer: HiddenField) -> bool;

    /// Hide or reveal `layer` of the item at `level` for `player`.
    /// A no-op without hidden information.
    fn set_hidden(
        &mut self,
        player: usize,
        level: usize,
        layer: HiddenField,
        on: bool,
    ) -> Result<HashDelta, StackError>;

    /// This pile's hash contribution as if it sat at `site` of `keys`, with
    /// owners (and hidden-flag players) mapped through `players`.
    ///
    /// An empty `players` slice is the identity; ids beyond its length map
    /// to themselves. With `who_only`, only the owner keys contribute.
    fn remap_hash(&self, keys: &KeyTables, site: usize, players: &[u32], who_only: bool) -> u64;

    /// This pile's hash contribution at its own site.
    fn own_hash(&self) -> u64;

    /// Overwrite every supplied field of the item at `level`.
    fn update_at(&mut self, level: usize, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        if level >= self.size() {
            return Err(StackError::LevelOutOfRange {
                level,
                size: self.size(),
            });
        }
        let mut delta = HashDelta::NONE;
        for (field, value) in item.fields() {
            delta ^= self.set_field(level, field, Some(value))?;
        }
        Ok(delta)
    }

    /// Returns `true` if the pile holds no item.
    ///
    /// An item with `what == 0` on top counts as empty.
    fn is_empty(&self) -> bool {
        self.top().is_none_or(|level| self.record(level).is_absent())
    }

    /// Level of the top item, if any.
    fn top(&self) -> Option<usize> {
        self.size().checked_sub(1)
    }

    /// One field at `level`.
    fn get(&self, level: usize, field: Field) -> u32 {
        self.record(level).get(field)
    }

    /// Item id at `level`.
    fn what_at(&self, level: usize) -> u32 {
        self.record(level).what
    }

    /// Owner at `level`.
    fn who_at(&self, level: usize) -> u32 {
        self.record(level).who
    }

    /// Sub-state at `level`.
    fn state_at(&self, level: usize) -> u32 {
        self.record(level).state
    }

    /// Orientation at `level`.
    fn rotation_at(&self, level: usize) -> u32 {
        self.record(level).rotation
    }

    /// Numeric tag at `level`.
    fn value_at(&self, level: usize) -> u32 {
        self.record(level).value
    }

    /// The top record, or the absent record when empty.
    fn top_record(&self) -> ItemRecord {
        self.top().map_or(ItemRecord::EMPTY, |level| self.record(level))
    }

    /// Item id on top.
    fn what(&self) -> u32 {
        self.top_record().what
    }

    /// Owner on top.
    fn who(&self) -> u32 {
        self.top_record().who
    }

    /// Sub-state on top.
    fn state(&self) -> u32 {
        self.top_record().state
    }

    /// Orientation on top.
    fn rotation(&self) -> u32 {
        self.top_record().rotation
    }

    /// Numeric tag on top.
    fn value(&self) -> u32 {
        self.top_record().value
    }

    /// All records, bottom to top.
    fn records(&self) -> Vec<ItemRecord> {
        (0..self.size()).map(|level| self.record(level)).collect()
    }
}
