//! Strongly-typed identifiers for sites, containers, and players.

use std::fmt;

/// The kind of an addressable location inside a container.
///
/// Only the primary container stores real vertex and edge piles; every
/// other container resolves any kind to [`SiteType::Cell`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SiteType {
    /// A board cell (face). The default when no kind is specified.
    #[default]
    Cell,
    /// A vertex of the board graph.
    Vertex,
    /// An edge of the board graph.
    Edge,
}

impl SiteType {
    /// All site kinds, in storage order.
    pub const ALL: [SiteType; 3] = [SiteType::Cell, SiteType::Vertex, SiteType::Edge];

    /// Dense index of this kind (`Cell = 0`, `Vertex = 1`, `Edge = 2`).
    pub fn index(self) -> usize {
        match self {
            Self::Cell => 0,
            Self::Vertex => 1,
            Self::Edge => 2,
        }
    }
}

impl fmt::Display for SiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell => write!(f, "cell"),
            Self::Vertex => write!(f, "vertex"),
            Self::Edge => write!(f, "edge"),
        }
    }
}

/// Identifies a container (board, hand, deck) within a game.
///
/// `ContainerId(0)` is the primary container: the main board, and the only
/// container permitted vertex and edge storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(pub u32);

impl ContainerId {
    /// The primary container (the main board).
    pub const PRIMARY: ContainerId = ContainerId(0);

    /// Returns `true` for the primary container.
    pub fn is_primary(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ContainerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a player. `PlayerId(0)` is the neutral / shared player.
///
/// Hidden-information masks are indexed by player id, so a game with `n`
/// players has `n + 1` mask slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// The neutral player.
    pub const NEUTRAL: PlayerId = PlayerId(0);

    /// Slot index of this player in a per-player table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
