//! Topology trait compliance test helpers.
//!
//! These functions verify that a Topology implementation satisfies the
//! invariants required by the trait contract. Reused across all backend
//! test modules.

use indexmap::IndexSet;
use strata_core::SiteType;

use crate::symmetry::Symmetry;
use crate::topology::Topology;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(t: &dyn Topology) {
    for kind in SiteType::ALL {
        for site in 0..t.site_count(kind) {
            for nb in t.neighbours(kind, site) {
                assert!(
                    t.neighbours(kind, nb).contains(&site),
                    "{kind} neighbour symmetry violated: {nb} in N({site}) but not vice versa"
                );
            }
        }
    }
}

/// Assert that every neighbour is in range, distinct, and not the site itself.
pub fn assert_neighbours_well_formed(t: &dyn Topology) {
    for kind in SiteType::ALL {
        let count = t.site_count(kind);
        for site in 0..count {
            let n = t.neighbours(kind, site);
            let unique: IndexSet<_> = n.iter().collect();
            assert_eq!(unique.len(), n.len(), "{kind} {site} has duplicate neighbours");
            for nb in &n {
                assert!(*nb < count, "{kind} {site} has out-of-range neighbour {nb}");
                assert_ne!(*nb, site, "{kind} {site} is its own neighbour");
            }
        }
    }
}

/// Assert that `max_neighbour_degree` bounds every neighbour list.
pub fn assert_max_degree_is_tight(t: &dyn Topology) {
    for kind in SiteType::ALL {
        let max = t.max_neighbour_degree(kind);
        let observed = (0..t.site_count(kind))
            .map(|s| t.neighbours(kind, s).len())
            .max()
            .unwrap_or(0);
        assert_eq!(max, observed, "{kind} max degree");
    }
}

/// Assert that a symmetry permutes every kind and preserves adjacency.
pub fn assert_symmetry_is_automorphism(t: &dyn Topology, sym: &Symmetry) {
    for kind in SiteType::ALL {
        let remap = sym.remap(kind);
        assert_eq!(remap.len(), t.site_count(kind), "{} {kind} length", sym.name);
        let image: IndexSet<_> = remap.iter().collect();
        assert_eq!(image.len(), remap.len(), "{} is not a {kind} permutation", sym.name);
        for site in 0..remap.len() {
            for nb in t.neighbours(kind, site) {
                assert!(
                    t.neighbours(kind, remap[site]).contains(&remap[nb]),
                    "{} breaks {kind} adjacency {site}-{nb}",
                    sym.name
                );
            }
        }
    }
}

/// Run all compliance checks on a topology.
pub fn run_full_compliance(t: &dyn Topology) {
    assert_neighbours_symmetric(t);
    assert_neighbours_well_formed(t);
    assert_max_degree_is_tight(t);
    assert_symmetry_is_automorphism(t, &Symmetry::identity(t));
}
