//! Explicit cell adjacency for arbitrary boards.

use strata_core::SiteType;

use crate::error::TopologyError;
use crate::topology::{Neighbours, Topology};

/// Cell-only topology given by adjacency lists.
///
/// Suits boards whose geometry is not a lattice (graph boards, irregular
/// tilings). The lists are validated on construction: in range, no self
/// loops, no duplicates, symmetric.
///
/// # Examples
///
/// ```
/// use strata_core::SiteType;
/// use strata_topology::{AdjacencyGraph, Topology};
///
/// // A triangle with a tail: 0-1, 1-2, 2-0, 2-3.
/// let g = AdjacencyGraph::from_links(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
/// assert_eq!(g.neighbours(SiteType::Cell, 2).len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph {
    adjacency: Vec<Neighbours>,
}

impl AdjacencyGraph {
    /// Build from per-cell neighbour lists.
    pub fn new(adjacency: Vec<Vec<usize>>) -> Result<Self, TopologyError> {
        if adjacency.is_empty() {
            return Err(TopologyError::EmptyTopology);
        }
        let n = adjacency.len();
        for (site, list) in adjacency.iter().enumerate() {
            for (i, &nb) in list.iter().enumerate() {
                let reason = if nb >= n {
                    Some(format!("cell {site} lists out-of-range neighbour {nb}"))
                } else if nb == site {
                    Some(format!("cell {site} lists itself"))
                } else if list[..i].contains(&nb) {
                    Some(format!("cell {site} lists {nb} twice"))
                } else if !adjacency[nb].contains(&site) {
                    Some(format!("{site} -> {nb} has no reverse link"))
                } else {
                    None
                };
                if let Some(reason) = reason {
                    return Err(TopologyError::InvalidAdjacency { reason });
                }
            }
        }
        Ok(Self {
            adjacency: adjacency
                .into_iter()
                .map(|list| list.into_iter().collect())
                .collect(),
        })
    }

    /// Build from undirected links between `cells` cells.
    pub fn from_links(cells: usize, links: &[(usize, usize)]) -> Result<Self, TopologyError> {
        let mut adjacency = vec![Vec::new(); cells];
        for &(a, b) in links {
            if a >= cells || b >= cells {
                return Err(TopologyError::InvalidAdjacency {
                    reason: format!("link {a}-{b} out of range for {cells} cells"),
                });
            }
            if !adjacency[a].contains(&b) {
                adjacency[a].push(b);
            }
            if !adjacency[b].contains(&a) {
                adjacency[b].push(a);
            }
        }
        Self::new(adjacency)
    }
}

impl Topology for AdjacencyGraph {
    fn site_count(&self, kind: SiteType) -> usize {
        match kind {
            SiteType::Cell => self.adjacency.len(),
            SiteType::Vertex | SiteType::Edge => 0,
        }
    }

    fn neighbours(&self, kind: SiteType, site: usize) -> Neighbours {
        match kind {
            SiteType::Cell => self.adjacency.get(site).cloned().unwrap_or_default(),
            SiteType::Vertex | SiteType::Edge => Neighbours::new(),
        }
    }

    fn topology_eq(&self, other: &dyn Topology) -> bool {
        other.downcast_ref::<Self>().is_some_and(|o| o == self)
    }
}
