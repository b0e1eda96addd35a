//! Site and player remaps for canonical hashing.

use strata_core::SiteType;
use strata_topology::Symmetry;

/// Where each site and player goes under a symmetry.
///
/// An empty table is the identity. Entries beyond a table's length map to
/// themselves, so a player remap only needs to cover the players it moves.
///
/// # Examples
///
/// ```
/// use strata_core::SiteType;
/// use strata_state::CanonicalRemap;
///
/// let swap = CanonicalRemap::identity().with_players(vec![0, 2, 1]);
/// assert_eq!(swap.site(SiteType::Cell, 7), 7);
/// assert_eq!(swap.players(), &[0, 2, 1]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalRemap {
    /// Target of each cell.
    pub cells: Vec<usize>,
    /// Target of each vertex.
    pub vertices: Vec<usize>,
    /// Target of each edge.
    pub edges: Vec<usize>,
    /// Target of each player id.
    pub players: Vec<u32>,
}

impl CanonicalRemap {
    /// The remap that moves nothing.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Replace the player remap.
    pub fn with_players(mut self, players: Vec<u32>) -> Self {
        self.players = players;
        self
    }

    /// Target of `site` of `kind`.
    pub fn site(&self, kind: SiteType, site: usize) -> usize {
        let table = match kind {
            SiteType::Cell => &self.cells,
            SiteType::Vertex => &self.vertices,
            SiteType::Edge => &self.edges,
        };
        table.get(site).copied().unwrap_or(site)
    }

    /// Player remap table.
    pub fn players(&self) -> &[u32] {
        &self.players
    }
}

impl From<&Symmetry> for CanonicalRemap {
    fn from(sym: &Symmetry) -> Self {
        Self {
            cells: sym.cells.clone(),
            vertices: sym.vertices.clone(),
            edges: sym.edges.clone(),
            players: Vec::new(),
        }
    }
}
