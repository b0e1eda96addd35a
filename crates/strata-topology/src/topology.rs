//! The core `Topology` trait and `dyn Topology` downcast support.

use smallvec::SmallVec;
use std::any::Any;
use std::fmt::Debug;
use strata_core::SiteType;

/// Neighbour list of one site. Inline for up to eight neighbours.
pub type Neighbours = SmallVec<[usize; 8]>;

/// Site adjacency of one container.
///
/// Sites of each kind are numbered densely from `0`. A topology with no
/// sites of a kind reports a count of `0` and no neighbours.
///
/// `Sync` is required because containers share their topology through an
/// `Arc` across every clone of a state, and clones move between search
/// threads.
pub trait Topology: Any + Debug + Send + Sync + 'static {
    /// Number of sites of `kind`.
    fn site_count(&self, kind: SiteType) -> usize;

    /// Sites of `kind` adjacent to `site`, in a deterministic order,
    /// without duplicates and without `site` itself.
    ///
    /// Out-of-range sites have no neighbours.
    fn neighbours(&self, kind: SiteType, site: usize) -> Neighbours;

    /// Largest neighbour count over all sites of `kind`.
    fn max_neighbour_degree(&self, kind: SiteType) -> usize {
        (0..self.site_count(kind))
            .map(|s| self.neighbours(kind, s).len())
            .max()
            .unwrap_or(0)
    }

    /// Returns `true` if the topology has vertex or edge sites.
    fn has_graph_sites(&self) -> bool {
        self.site_count(SiteType::Vertex) > 0 || self.site_count(SiteType::Edge) > 0
    }

    /// Returns `true` if `self` and `other` describe the same adjacency:
    /// same concrete type and identical parameters.
    fn topology_eq(&self, other: &dyn Topology) -> bool;
}

impl dyn Topology {
    /// Attempt to downcast a trait object to a concrete topology.
    pub fn downcast_ref<T: Topology>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
