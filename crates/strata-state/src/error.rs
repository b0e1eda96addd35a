//! Container construction errors.

use std::error::Error;
use std::fmt;

use strata_core::{ContainerId, Field, SiteType};

/// Errors from validating a [`ContainerConfig`](crate::ContainerConfig) or
/// registering a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The topology has no cells.
    EmptyTopology,
    /// A bounded height of zero.
    ZeroHeight,
    /// A bounded height above [`ContainerConfig::MAX_BOUNDED_HEIGHT`](crate::ContainerConfig::MAX_BOUNDED_HEIGHT).
    HeightTooLarge {
        /// The requested height.
        height: usize,
        /// The largest accepted height.
        max: usize,
    },
    /// A field domain of zero, which leaves not even the value `0` keyed.
    EmptyDomain {
        /// The offending field.
        field: Field,
    },
    /// A bounded container was built without key tables.
    MissingKeys {
        /// The site kind with no tables.
        kind: SiteType,
    },
    /// Key tables generated for a different shape.
    KeyShapeMismatch {
        /// The site kind whose tables disagree.
        kind: SiteType,
    },
    /// A container with this id is already registered.
    DuplicateContainer {
        /// The repeated id.
        container: ContainerId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTopology => write!(f, "topology has no cells"),
            Self::ZeroHeight => write!(f, "bounded height must be at least 1"),
            Self::HeightTooLarge { height, max } => {
                write!(f, "bounded height {height} exceeds maximum {max}")
            }
            Self::EmptyDomain { field } => write!(f, "{field} domain must be at least 1"),
            Self::MissingKeys { kind } => write!(f, "no key tables for {kind} sites"),
            Self::KeyShapeMismatch { kind } => {
                write!(f, "{kind} key tables do not match the container shape")
            }
            Self::DuplicateContainer { container } => {
                write!(f, "container {container} is already registered")
            }
        }
    }
}

impl Error for ConfigError {}
