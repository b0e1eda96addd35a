//! Rectangular board with cells, vertices, and edges.

use strata_core::SiteType;

use crate::edge::EdgeBehavior;
use crate::error::TopologyError;
use crate::symmetry::{self, Symmetry};
use crate::topology::{Neighbours, Topology};

/// A `rows × cols` board of square cells, with its grid graph.
///
/// Site numbering is row-major for every kind:
///
/// - cell `(r, c)` is `r * cols + c`
/// - vertex `(r, c)` is `r * (cols + 1) + c`, for `r <= rows`, `c <= cols`
/// - horizontal edges come first: edge `(r, c)` from vertex `(r, c)` to
///   `(r, c + 1)` is `r * cols + c`, for `r <= rows`
/// - vertical edges follow: edge `(r, c)` from vertex `(r, c)` to
///   `(r + 1, c)` is `(rows + 1) * cols + r * (cols + 1) + c`
///
/// Cells are 4-connected under the board's [`EdgeBehavior`]. Vertices are
/// adjacent along grid lines, and edges are adjacent when they share an
/// endpoint.
///
/// # Examples
///
/// ```
/// use strata_core::SiteType;
/// use strata_topology::{EdgeBehavior, Square4, Topology};
///
/// let board = Square4::new(3, 3, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(board.site_count(SiteType::Cell), 9);
/// assert_eq!(board.site_count(SiteType::Vertex), 16);
/// assert_eq!(board.site_count(SiteType::Edge), 24);
/// assert_eq!(board.neighbours(SiteType::Cell, 4).len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square4 {
    rows: usize,
    cols: usize,
    edge: EdgeBehavior,
}

impl Square4 {
    /// Maximum rows or columns.
    pub const MAX_DIM: usize = 1 << 15;

    /// Create a `rows × cols` board.
    ///
    /// Returns `Err(TopologyError::EmptyTopology)` if either dimension is 0,
    /// or `Err(TopologyError::DimensionTooLarge)` beyond [`Self::MAX_DIM`].
    pub fn new(rows: usize, cols: usize, edge: EdgeBehavior) -> Result<Self, TopologyError> {
        if rows == 0 || cols == 0 {
            return Err(TopologyError::EmptyTopology);
        }
        for (name, value) in [("rows", rows), ("cols", cols)] {
            if value > Self::MAX_DIM {
                return Err(TopologyError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(Self { rows, cols, edge })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell boundary behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Index of cell `(r, c)`.
    pub fn cell(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// Index of vertex `(r, c)`.
    pub fn vertex(&self, r: usize, c: usize) -> usize {
        r * (self.cols + 1) + c
    }

    /// Index of the horizontal edge leaving vertex `(r, c)` eastward.
    pub fn horizontal_edge(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// Index of the vertical edge leaving vertex `(r, c)` southward.
    pub fn vertical_edge(&self, r: usize, c: usize) -> usize {
        self.horizontal_edge_count() + r * (self.cols + 1) + c
    }

    fn horizontal_edge_count(&self) -> usize {
        (self.rows + 1) * self.cols
    }

    /// The two vertices joined by `edge`, or `None` if out of range.
    pub fn edge_endpoints(&self, edge: usize) -> Option<(usize, usize)> {
        let h = self.horizontal_edge_count();
        if edge < h {
            let (r, c) = (edge / self.cols, edge % self.cols);
            Some((self.vertex(r, c), self.vertex(r, c + 1)))
        } else if edge < self.site_count(SiteType::Edge) {
            let e = edge - h;
            let (r, c) = (e / (self.cols + 1), e % (self.cols + 1));
            Some((self.vertex(r, c), self.vertex(r + 1, c)))
        } else {
            None
        }
    }

    /// Edges incident to vertex `(r, c)`.
    fn incident_edges(&self, r: usize, c: usize) -> Neighbours {
        let mut out = Neighbours::new();
        if c > 0 {
            out.push(self.horizontal_edge(r, c - 1));
        }
        if c < self.cols {
            out.push(self.horizontal_edge(r, c));
        }
        if r > 0 {
            out.push(self.vertical_edge(r - 1, c));
        }
        if r < self.rows {
            out.push(self.vertical_edge(r, c));
        }
        out
    }

    fn cell_neighbours(&self, site: usize) -> Neighbours {
        let (r, c) = ((site / self.cols) as i64, (site % self.cols) as i64);
        let mut out = Neighbours::new();
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let nr = self.edge.resolve(r + dr, self.rows);
            let nc = self.edge.resolve(c + dc, self.cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                push_unique(&mut out, self.cell(nr, nc), site);
            }
        }
        out
    }

    fn vertex_neighbours(&self, site: usize) -> Neighbours {
        let w = self.cols + 1;
        let (r, c) = (site / w, site % w);
        let mut out = Neighbours::new();
        if r > 0 {
            out.push(self.vertex(r - 1, c));
        }
        if r < self.rows {
            out.push(self.vertex(r + 1, c));
        }
        if c > 0 {
            out.push(self.vertex(r, c - 1));
        }
        if c < self.cols {
            out.push(self.vertex(r, c + 1));
        }
        out
    }

    fn edge_neighbours(&self, site: usize) -> Neighbours {
        let Some((a, b)) = self.edge_endpoints(site) else {
            return Neighbours::new();
        };
        let w = self.cols + 1;
        let mut out = Neighbours::new();
        for v in [a, b] {
            for e in self.incident_edges(v / w, v % w) {
                push_unique(&mut out, e, site);
            }
        }
        out
    }

    /// Dihedral symmetries of the board, identity first.
    ///
    /// Square boards have eight (four rotations, four reflections);
    /// rectangular boards have four.
    pub fn symmetries(&self) -> Vec<Symmetry> {
        symmetry::dihedral(self)
    }
}

pub(crate) fn push_unique(out: &mut Neighbours, site: usize, origin: usize) {
    if site != origin && !out.contains(&site) {
        out.push(site);
    }
}

impl Topology for Square4 {
    fn site_count(&self, kind: SiteType) -> usize {
        match kind {
            SiteType::Cell => self.rows * self.cols,
            SiteType::Vertex => (self.rows + 1) * (self.cols + 1),
            SiteType::Edge => self.horizontal_edge_count() + self.rows * (self.cols + 1),
        }
    }

    fn neighbours(&self, kind: SiteType, site: usize) -> Neighbours {
        if site >= self.site_count(kind) {
            return Neighbours::new();
        }
        match kind {
            SiteType::Cell => self.cell_neighbours(site),
            SiteType::Vertex => self.vertex_neighbours(site),
            SiteType::Edge => self.edge_neighbours(site),
        }
    }

    fn topology_eq(&self, other: &dyn Topology) -> bool {
        other.downcast_ref::<Self>().is_some_and(|o| o == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn board(rows: usize, cols: usize) -> Square4 {
        Square4::new(rows, cols, EdgeBehavior::Absorb).unwrap()
    }

    // ── Cell neighbours ─────────────────────────────────────────

    #[test]
    fn cell_neighbours_absorb() {
        let s = board(5, 5);
        let n = s.neighbours(SiteType::Cell, s.cell(2, 2));
        assert_eq!(n.len(), 4);
        for (r, c) in [(1, 2), (3, 2), (2, 1), (2, 3)] {
            assert!(n.contains(&s.cell(r, c)));
        }
        assert_eq!(s.neighbours(SiteType::Cell, s.cell(0, 0)).len(), 2);
        assert_eq!(s.neighbours(SiteType::Cell, s.cell(0, 2)).len(), 3);
    }

    #[test]
    fn cell_neighbours_wrap() {
        let s = Square4::new(5, 5, EdgeBehavior::Wrap).unwrap();
        let n = s.neighbours(SiteType::Cell, s.cell(0, 0));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&s.cell(4, 0)));
        assert!(n.contains(&s.cell(0, 4)));
    }

    #[test]
    fn narrow_wrap_has_no_duplicates_or_self_loops() {
        let s = Square4::new(2, 1, EdgeBehavior::Wrap).unwrap();
        assert_eq!(s.neighbours(SiteType::Cell, 0).as_slice(), &[1]);
        let single = Square4::new(1, 1, EdgeBehavior::Wrap).unwrap();
        assert!(single.neighbours(SiteType::Cell, 0).is_empty());
    }

    // ── Vertices and edges ──────────────────────────────────────

    #[test]
    fn counts() {
        let s = board(2, 3);
        assert_eq!(s.site_count(SiteType::Cell), 6);
        assert_eq!(s.site_count(SiteType::Vertex), 12);
        assert_eq!(s.site_count(SiteType::Edge), 9 + 8);
        assert!(s.has_graph_sites());
    }

    #[test]
    fn vertex_neighbours_follow_grid_lines() {
        let s = board(2, 2);
        assert_eq!(s.neighbours(SiteType::Vertex, s.vertex(1, 1)).len(), 4);
        assert_eq!(s.neighbours(SiteType::Vertex, s.vertex(0, 0)).len(), 2);
        assert_eq!(s.neighbours(SiteType::Vertex, s.vertex(0, 1)).len(), 3);
    }

    #[test]
    fn edge_endpoints_and_neighbours() {
        let s = board(1, 1);
        // Unit square: top, bottom, left, right.
        assert_eq!(s.edge_endpoints(0), Some((0, 1)));
        assert_eq!(s.edge_endpoints(1), Some((2, 3)));
        assert_eq!(s.edge_endpoints(2), Some((0, 2)));
        assert_eq!(s.edge_endpoints(3), Some((1, 3)));
        assert_eq!(s.edge_endpoints(4), None);
        let n = s.neighbours(SiteType::Edge, 0);
        assert_eq!(n.len(), 2);
        assert!(n.contains(&2) && n.contains(&3));
    }

    #[test]
    fn interior_edge_has_six_neighbours() {
        let s = board(3, 3);
        let e = s.horizontal_edge(1, 1);
        assert_eq!(s.neighbours(SiteType::Edge, e).len(), 6);
    }

    #[test]
    fn out_of_range_sites_have_no_neighbours() {
        let s = board(2, 2);
        assert!(s.neighbours(SiteType::Cell, 4).is_empty());
        assert!(s.neighbours(SiteType::Edge, 99).is_empty());
    }

    // ── Constructor ─────────────────────────────────────────────

    #[test]
    fn new_rejects_empty_and_huge() {
        assert_eq!(
            Square4::new(0, 3, EdgeBehavior::Absorb),
            Err(TopologyError::EmptyTopology)
        );
        assert!(matches!(
            Square4::new(3, Square4::MAX_DIM + 1, EdgeBehavior::Absorb),
            Err(TopologyError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn topology_eq_compares_parameters() {
        let a = board(3, 3);
        assert!(a.topology_eq(&board(3, 3)));
        assert!(!a.topology_eq(&board(3, 4)));
        assert!(!a.topology_eq(&Square4::new(3, 3, EdgeBehavior::Wrap).unwrap()));
    }

    #[test]
    fn downcast_ref_square4() {
        let t: Box<dyn Topology> = Box::new(board(2, 2));
        assert!(t.downcast_ref::<Square4>().is_some());
        assert!(t.downcast_ref::<crate::Line1D>().is_none());
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_absorb() {
        compliance::run_full_compliance(&board(4, 5));
    }

    #[test]
    fn compliance_wrap() {
        compliance::run_full_compliance(&Square4::new(4, 4, EdgeBehavior::Wrap).unwrap());
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(rows in 1usize..7, cols in 1usize..7, wrap in any::<bool>()) {
            let edge = if wrap { EdgeBehavior::Wrap } else { EdgeBehavior::Absorb };
            let s = Square4::new(rows, cols, edge).unwrap();
            for kind in SiteType::ALL {
                for site in 0..s.site_count(kind) {
                    for nb in s.neighbours(kind, site) {
                        prop_assert!(s.neighbours(kind, nb).contains(&site));
                    }
                }
            }
        }
    }
}
