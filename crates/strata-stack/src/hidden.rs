//! Per-(player, level) hidden-information flags.

use strata_core::{HiddenField, StackError};

/// Hidden flags for one pile, one byte per (level, player slot).
///
/// Each byte holds one bit per [`HiddenField`]. Levels are inserted and
/// removed together with the items they describe, so a flag follows its
/// item when the pile shifts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenMask {
    slots: usize,
    bits: Vec<u8>,
}

impl HiddenMask {
    /// An empty mask for `slots` players, with room for `levels` levels.
    pub fn with_capacity(slots: usize, levels: usize) -> Self {
        Self {
            slots,
            bits: Vec::with_capacity(slots * levels),
        }
    }

    /// Number of player slots.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Number of levels tracked.
    pub fn levels(&self) -> usize {
        if self.slots == 0 {
            0
        } else {
            self.bits.len() / self.slots
        }
    }

    /// Reject a player slot beyond the configured players.
    pub fn check_player(&self, player: usize) -> Result<(), StackError> {
        if player >= self.slots {
            return Err(StackError::PlayerOutOfRange {
                player,
                slots: self.slots,
            });
        }
        Ok(())
    }

    /// All flags of `player` at `level`; zero when out of range.
    #[inline]
    pub fn byte(&self, player: usize, level: usize) -> u8 {
        if player >= self.slots {
            return 0;
        }
        self.bits
            .get(level * self.slots + player)
            .copied()
            .unwrap_or(0)
    }

    /// Read one flag.
    pub fn get(&self, player: usize, level: usize, layer: HiddenField) -> bool {
        self.byte(player, level) & layer.bit() != 0
    }

    /// Write one flag. Returns `true` if it changed.
    ///
    /// The caller has validated `player` and `level`.
    pub fn set(&mut self, player: usize, level: usize, layer: HiddenField, on: bool) -> bool {
        let byte = &mut self.bits[level * self.slots + player];
        let before = *byte;
        if on {
            *byte |= layer.bit();
        } else {
            *byte &= !layer.bit();
        }
        *byte != before
    }

    /// Open a cleared level at `level`, shifting higher levels up.
    pub fn insert_level(&mut self, level: usize) {
        let at = level * self.slots;
        self.bits
            .splice(at..at, std::iter::repeat_n(0, self.slots));
    }

    /// Drop `level`, shifting higher levels down.
    pub fn remove_level(&mut self, level: usize) {
        let at = level * self.slots;
        self.bits.drain(at..at + self.slots);
    }

    /// Drop every level.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Iterate `(player, level, layer)` over every set flag.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize, HiddenField)> + '_ {
        self.bits.iter().enumerate().flat_map(move |(i, &byte)| {
            let (level, player) = (i / self.slots, i % self.slots);
            HiddenField::ALL
                .into_iter()
                .filter(move |layer| byte & layer.bit() != 0)
                .map(move |layer| (player, level, layer))
        })
    }
}
