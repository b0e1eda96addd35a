//! Error types for topology construction.

use std::fmt;

/// Errors arising from topology construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// Attempted to construct a topology with zero cells.
    EmptyTopology,
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The rejected value.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
    /// An explicit adjacency list is malformed.
    InvalidAdjacency {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTopology => write!(f, "topology must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::InvalidAdjacency { reason } => write!(f, "invalid adjacency: {reason}"),
        }
    }
}

impl std::error::Error for TopologyError {}
