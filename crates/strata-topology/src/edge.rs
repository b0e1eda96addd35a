//! Boundary behavior for lattice backends.

/// How a lattice handles cell neighbours at its boundary.
///
/// Applies to cell adjacency only; vertex and edge sites of a board are
/// always planar.
///
/// # Examples
///
/// ```
/// use strata_core::SiteType;
/// use strata_topology::{EdgeBehavior, Square4, Topology};
///
/// let absorb = Square4::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(SiteType::Cell, 0).len(), 2);
///
/// let wrap = Square4::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(SiteType::Cell, 0).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbours are omitted (fewer neighbours at edges).
    #[default]
    Absorb,
    /// Out-of-bounds neighbours wrap to the opposite side (periodic).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve one axis coordinate. `None` for an absorbed step.
    pub(crate) fn resolve(self, val: i64, len: usize) -> Option<usize> {
        let n = len as i64;
        if (0..n).contains(&val) {
            return Some(val as usize);
        }
        match self {
            Self::Absorb => None,
            Self::Wrap => Some(val.rem_euclid(n) as usize),
        }
    }
}
