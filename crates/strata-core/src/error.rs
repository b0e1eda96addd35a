//! Error types for the Strata site-state store.
//!
//! Organized by layer: [`StackError`] for a single pile, [`StoreError`] for
//! container-level addressing. Reads never fail; only mutators report
//! errors, and a mutator that returns `Err` has changed nothing.

use std::error::Error;
use std::fmt;

use crate::id::{ContainerId, SiteType};
use crate::record::Field;

/// Errors from a single stack record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// Push or insert on a bounded pile that is already at its ceiling.
    Overflow {
        /// The configured maximum height.
        max_height: usize,
    },
    /// A level outside the valid range for the operation.
    LevelOutOfRange {
        /// The requested level.
        level: usize,
        /// Current pile size.
        size: usize,
    },
    /// A field value with no key in the pile's key table.
    ValueOutOfDomain {
        /// The field being written.
        field: Field,
        /// The rejected value.
        value: u32,
        /// Number of keyed values (`0..domain`).
        domain: u32,
    },
    /// A hidden-information player index beyond the configured players.
    PlayerOutOfRange {
        /// The requested player slot.
        player: usize,
        /// Number of player slots (`players + 1`).
        slots: usize,
    },
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { max_height } => {
                write!(f, "stack overflow: maximum height is {max_height}")
            }
            Self::LevelOutOfRange { level, size } => {
                write!(f, "level {level} out of range for stack of size {size}")
            }
            Self::ValueOutOfDomain {
                field,
                value,
                domain,
            } => {
                write!(f, "{field} value {value} outside key domain [0, {domain})")
            }
            Self::PlayerOutOfRange { player, slots } => {
                write!(f, "player {player} out of range ({slots} player slots)")
            }
        }
    }
}

impl Error for StackError {}

/// Errors from container-level addressing and mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A site index beyond the container's site count for that kind.
    SiteOutOfRange {
        /// The resolved site kind.
        kind: SiteType,
        /// The requested site.
        site: usize,
        /// Number of sites of that kind.
        count: usize,
    },
    /// No container with this id is registered.
    UnknownContainer {
        /// The requested container.
        container: ContainerId,
    },
    /// The pile at the addressed site rejected the operation.
    Stack {
        /// The resolved site kind.
        kind: SiteType,
        /// The site whose pile failed.
        site: usize,
        /// The underlying stack error.
        reason: StackError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SiteOutOfRange { kind, site, count } => {
                write!(f, "{kind} {site} out of range ({count} {kind} sites)")
            }
            Self::UnknownContainer { container } => {
                write!(f, "unknown container: {container}")
            }
            Self::Stack { kind, site, reason } => {
                write!(f, "{kind} {site}: {reason}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Stack { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
