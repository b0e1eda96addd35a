//! Site remaps for board symmetries.
//!
//! A [`Symmetry`] maps every site of each kind to its image under a board
//! transformation. Canonical hashing looks up each pile's keys at the image
//! site, so a position and its transformed copy hash alike.

use strata_core::SiteType;

use crate::square4::Square4;
use crate::topology::Topology;

/// Per-kind site permutations for one board transformation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symmetry {
    /// Human-readable name (`"identity"`, `"rot90"`, ...).
    pub name: &'static str,
    /// `cells[s]` is the image of cell `s`.
    pub cells: Vec<usize>,
    /// `vertices[s]` is the image of vertex `s`.
    pub vertices: Vec<usize>,
    /// `edges[s]` is the image of edge `s`.
    pub edges: Vec<usize>,
}

impl Symmetry {
    /// The identity remap of `topology`.
    pub fn identity(topology: &dyn Topology) -> Self {
        let ident = |kind: SiteType| (0..topology.site_count(kind)).collect::<Vec<usize>>();
        Self {
            name: "identity",
            cells: ident(SiteType::Cell),
            vertices: ident(SiteType::Vertex),
            edges: ident(SiteType::Edge),
        }
    }

    /// The permutation for one site kind.
    pub fn remap(&self, kind: SiteType) -> &[usize] {
        match kind {
            SiteType::Cell => &self.cells,
            SiteType::Vertex => &self.vertices,
            SiteType::Edge => &self.edges,
        }
    }
}

/// A transform of doubled board coordinates `(y, x)` with `y <= h`,
/// `x <= w`.
type Transform = fn(usize, usize, usize, usize) -> (usize, usize);

const RECT_TRANSFORMS: [(&str, Transform); 4] = [
    ("identity", |y, x, _, _| (y, x)),
    ("rot180", |y, x, h, w| (h - y, w - x)),
    ("flip_rows", |y, x, h, _| (h - y, x)),
    ("flip_cols", |y, x, _, w| (y, w - x)),
];

const SQUARE_TRANSFORMS: [(&str, Transform); 4] = [
    ("rot90", |y, x, h, _| (x, h - y)),
    ("rot270", |y, x, _, w| (w - x, y)),
    ("transpose", |y, x, _, _| (x, y)),
    ("anti_transpose", |y, x, h, w| (w - x, h - y)),
];

/// Doubled coordinates place cell centres at odd/odd, vertices at
/// even/even, horizontal edges at even/odd and vertical edges at odd/even.
fn classify(board: &Square4, y: usize, x: usize) -> (SiteType, usize) {
    match (y % 2, x % 2) {
        (1, 1) => (SiteType::Cell, board.cell(y / 2, x / 2)),
        (0, 0) => (SiteType::Vertex, board.vertex(y / 2, x / 2)),
        (0, _) => (SiteType::Edge, board.horizontal_edge(y / 2, x / 2)),
        _ => (SiteType::Edge, board.vertical_edge(y / 2, x / 2)),
    }
}

pub(crate) fn dihedral(board: &Square4) -> Vec<Symmetry> {
    let (h, w) = (2 * board.rows(), 2 * board.cols());
    let mut transforms = RECT_TRANSFORMS.to_vec();
    if h == w {
        transforms.extend(SQUARE_TRANSFORMS);
    }
    transforms
        .into_iter()
        .map(|(name, f)| {
            let mut sym = Symmetry {
                name,
                ..Symmetry::identity(board)
            };
            for y in 0..=h {
                for x in 0..=w {
                    let (kind, from) = classify(board, y, x);
                    let (ty, tx) = f(y, x, h, w);
                    let (to_kind, to) = classify(board, ty, tx);
                    debug_assert!(kind == to_kind || kind == SiteType::Edge);
                    match kind {
                        SiteType::Cell => sym.cells[from] = to,
                        SiteType::Vertex => sym.vertices[from] = to,
                        SiteType::Edge => sym.edges[from] = to,
                    }
                }
            }
            sym
        })
        .collect()
}
