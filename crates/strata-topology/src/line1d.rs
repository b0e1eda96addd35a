//! Cell-only line of sites.

use strata_core::SiteType;

use crate::edge::EdgeBehavior;
use crate::error::TopologyError;
use crate::square4::push_unique;
use crate::topology::{Neighbours, Topology};

/// A one-dimensional line of `len` cells, with no vertices or edges.
///
/// The usual topology of a player's hand or a scoring track. Boundary
/// handling follows [`EdgeBehavior`].
///
/// # Examples
///
/// ```
/// use strata_core::SiteType;
/// use strata_topology::{EdgeBehavior, Line1D, Topology};
///
/// let line = Line1D::new(5, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(line.site_count(SiteType::Cell), 5);
/// assert_eq!(line.site_count(SiteType::Vertex), 0);
/// assert_eq!(line.neighbours(SiteType::Cell, 0).as_slice(), &[1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line1D {
    len: usize,
    edge: EdgeBehavior,
}

impl Line1D {
    /// Create a line of `len` cells.
    ///
    /// Returns `Err(TopologyError::EmptyTopology)` if `len == 0`.
    pub fn new(len: usize, edge: EdgeBehavior) -> Result<Self, TopologyError> {
        if len == 0 {
            return Err(TopologyError::EmptyTopology);
        }
        Ok(Self { len, edge })
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction rejects `len == 0`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Topology for Line1D {
    fn site_count(&self, kind: SiteType) -> usize {
        match kind {
            SiteType::Cell => self.len,
            SiteType::Vertex | SiteType::Edge => 0,
        }
    }

    fn neighbours(&self, kind: SiteType, site: usize) -> Neighbours {
        let mut out = Neighbours::new();
        if kind != SiteType::Cell || site >= self.len {
            return out;
        }
        for step in [-1, 1] {
            if let Some(nb) = self.edge.resolve(site as i64 + step, self.len) {
                push_unique(&mut out, nb, site);
            }
        }
        out
    }

    fn topology_eq(&self, other: &dyn Topology) -> bool {
        other.downcast_ref::<Self>().is_some_and(|o| o == self)
    }
}
