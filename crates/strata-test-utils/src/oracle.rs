//! Brute-force recomputation of derived regions.
//!
//! Deliberately naive: every site is examined independently, with no
//! incremental state, so the result can be diffed against the maintained
//! region of a container.

use strata_core::SiteType;
use strata_topology::Topology;

/// Sites of `kind` that are not occupied, ascending.
pub fn empty_sites(
    topology: &dyn Topology,
    kind: SiteType,
    occupied: impl Fn(usize) -> bool,
) -> Vec<usize> {
    (0..topology.site_count(kind))
        .filter(|&s| !occupied(s))
        .collect()
}

/// Cells that are empty and adjacent to at least one occupied cell,
/// ascending.
pub fn playable_cells(topology: &dyn Topology, occupied: impl Fn(usize) -> bool) -> Vec<usize> {
    (0..topology.site_count(SiteType::Cell))
        .filter(|&s| {
            !occupied(s)
                && topology
                    .neighbours(SiteType::Cell, s)
                    .iter()
                    .any(|&nb| occupied(nb))
        })
        .collect()
}
