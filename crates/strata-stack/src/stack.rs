//! Tagged stack strategy selected per container.

use strata_core::{Field, HashDelta, HiddenField, ItemRecord, ItemUpdate, StackError};
use strata_zobrist::{KeyTables, SharedKeyTables};

use crate::bounded::BoundedStack;
use crate::pile::Pile;
use crate::unbounded::UnboundedStack;

/// A pile of either variant.
///
/// Containers hold `Stack` values so that per-field accessors stay
/// monomorphic inside each arm.
#[derive(Clone, Debug)]
pub enum Stack {
    /// Height-limited, hashed.
    Bounded(BoundedStack),
    /// Growable, unhashed.
    Unbounded(UnboundedStack),
}

macro_rules! dispatch {
    ($self:ident, $s:ident => $body:expr) => {
        match $self {
            Stack::Bounded($s) => $body,
            Stack::Unbounded($s) => $body,
        }
    };
}

impl Stack {
    /// Returns `true` for the bounded variant.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Self::Bounded(_))
    }
}

impl Pile for Stack {
    fn size(&self) -> usize {
        dispatch!(self, s => s.size())
    }

    fn record(&self, level: usize) -> ItemRecord {
        dispatch!(self, s => s.record(level))
    }

    fn push(&mut self, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        dispatch!(self, s => s.push(item))
    }

    fn insert_at(&mut self, level: usize, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        dispatch!(self, s => s.insert_at(level, item))
    }

    fn remove_at(&mut self, level: usize) -> Result<(ItemRecord, HashDelta), StackError> {
        dispatch!(self, s => s.remove_at(level))
    }

    fn set_field(
        &mut self,
        level: usize,
        field: Field,
        value: Option<u32>,
    ) -> Result<HashDelta, StackError> {
        dispatch!(self, s => s.set_field(level, field, value))
    }

    fn update_at(&mut self, level: usize, item: &ItemUpdate) -> Result<HashDelta, StackError> {
        dispatch!(self, s => s.update_at(level, item))
    }

    fn clear(&mut self) -> HashDelta {
        dispatch!(self, s => s.clear())
    }

    fn uses_hidden_info(&self) -> bool {
        dispatch!(self, s => s.uses_hidden_info())
    }

    fn is_hidden(&self, player: usize, level: usize, layer: HiddenField) -> bool {
        dispatch!(self, s => s.is_hidden(player, level, layer))
    }

    fn set_hidden(
        &mut self,
        player: usize,
        level: usize,
        layer: HiddenField,
        on: bool,
    ) -> Result<HashDelta, StackError> {
        dispatch!(self, s => s.set_hidden(player, level, layer, on))
    }

    fn remap_hash(&self, keys: &KeyTables, site: usize, players: &[u32], who_only: bool) -> u64 {
        dispatch!(self, s => s.remap_hash(keys, site, players, who_only))
    }

    fn own_hash(&self) -> u64 {
        dispatch!(self, s => s.own_hash())
    }
}

/// How a container materializes the pile of a site on first write.
#[derive(Clone, Debug)]
pub enum StackStrategy {
    /// Bounded piles keyed by shared tables; height comes from the tables.
    Bounded {
        /// Tables for every site of the kind.
        keys: SharedKeyTables,
    },
    /// Unbounded piles.
    Unbounded {
        /// Hidden-information player slots, if any.
        hidden_slots: Option<usize>,
    },
}

impl StackStrategy {
    /// A fresh empty pile for `site`.
    pub fn materialize(&self, site: usize) -> Stack {
        match self {
            Self::Bounded { keys } => Stack::Bounded(BoundedStack::new(keys.clone(), site)),
            Self::Unbounded { hidden_slots } => {
                Stack::Unbounded(UnboundedStack::new(*hidden_slots))
            }
        }
    }

    /// Shared key tables, for the bounded strategy.
    pub fn keys(&self) -> Option<&SharedKeyTables> {
        match self {
            Self::Bounded { keys } => Some(keys),
            Self::Unbounded { .. } => None,
        }
    }

    /// Height ceiling, for the bounded strategy.
    pub fn max_height(&self) -> Option<usize> {
        self.keys().map(|k| k.max_height())
    }
}
