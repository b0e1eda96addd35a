//! Randomized mutation sequences checked against brute-force oracles.

use std::sync::Arc;

use proptest::prelude::*;
use strata_core::{ContainerId, Field, ItemUpdate, SiteType};
use strata_state::{ContainerConfig, ContainerState, SiteUpdate};
use strata_test_utils::oracle;
use strata_topology::{AdjacencyGraph, EdgeBehavior, Square4, Topology};
use strata_zobrist::KeyGenerator;

#[derive(Clone, Debug)]
enum Op {
    Add(usize, u32),
    Insert(usize, usize, u32),
    Remove(usize, usize),
    Sweep(usize),
    SetWhat(usize, u32),
}

fn arb_op(sites: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..sites, 1u32..4).prop_map(|(s, w)| Op::Add(s, w)),
        1 => (0..sites, 0usize..4, 1u32..4).prop_map(|(s, l, w)| Op::Insert(s, l, w)),
        2 => (0..sites, 0usize..4).prop_map(|(s, l)| Op::Remove(s, l)),
        1 => (0..sites).prop_map(Op::Sweep),
        1 => (0..sites, 0u32..4).prop_map(|(s, w)| Op::SetWhat(s, w)),
    ]
}

fn run(state: &mut ContainerState, kind: SiteType, op: &Op, hash: &mut u64) {
    let result = match *op {
        Op::Add(s, w) => state.add(s, &ItemUpdate::new(w, 1), kind),
        Op::Insert(s, l, w) => state.insert(s, l, &ItemUpdate::new(w, 2), kind),
        Op::Remove(s, l) => state.remove(s, l, kind).map(|(_, d)| d),
        Op::Sweep(s) => state.set_site(s, SiteUpdate::sweep(), kind),
        Op::SetWhat(s, w) => state.set_value_at(s, 0, Field::What, w, kind),
    };
    // Overflow and out-of-range levels are expected; they must change nothing.
    if let Ok(delta) = result {
        delta.apply(hash);
    }
}

fn check(state: &ContainerState, topology: &dyn Topology, hash: u64) -> Result<(), TestCaseError> {
    prop_assert_eq!(hash, state.full_hash());
    for kind in SiteType::ALL {
        if state.resolve_kind(kind) != kind {
            continue;
        }
        let empty: Vec<usize> = state.empty_region(kind).iter().collect();
        let expected = oracle::empty_sites(topology, kind, |s| state.record(s, kind).what != 0);
        prop_assert_eq!(empty, expected);
        for site in 0..state.site_count(kind) {
            let top = state.record(site, kind);
            prop_assert_eq!(state.is_occupied(site, kind), top.what != 0);
        }
    }
    if let Some(playable) = state.playable_region() {
        let got: Vec<usize> = playable.iter().collect();
        let expected =
            oracle::playable_cells(topology, |s| state.record(s, SiteType::Cell).what != 0);
        prop_assert_eq!(got, expected);
    }
    Ok(())
}

fn growing(topology: Arc<dyn Topology>, height: Option<usize>) -> ContainerState {
    let mut config = ContainerConfig::new(ContainerId::PRIMARY, topology)
        .domains(strata_zobrist::FieldDomains::uniform(4))
        .growing(true);
    config.max_height = height;
    let keys = config.generate_keys(&mut KeyGenerator::new(77));
    ContainerState::new(config, keys).unwrap()
}

proptest! {
    #[test]
    fn square_board_regions_follow_occupancy(
        ops in prop::collection::vec((0usize..3, arb_op(24)), 1..80),
    ) {
        let board = Square4::new(3, 3, EdgeBehavior::Absorb).unwrap();
        let topology: Arc<dyn Topology> = Arc::new(board);
        let mut state = growing(topology.clone(), Some(3));
        let mut hash = 0u64;
        for (k, op) in &ops {
            let kind = SiteType::ALL[*k];
            run(&mut state, kind, op, &mut hash);
            check(&state, topology.as_ref(), hash)?;
        }
    }

    #[test]
    fn wrapped_board_playable_matches_oracle(
        ops in prop::collection::vec(arb_op(16), 1..60),
    ) {
        let board = Square4::new(4, 4, EdgeBehavior::Wrap).unwrap();
        let topology: Arc<dyn Topology> = Arc::new(board);
        let mut state = growing(topology.clone(), Some(2));
        let mut hash = 0u64;
        for op in &ops {
            run(&mut state, SiteType::Cell, op, &mut hash);
            check(&state, topology.as_ref(), hash)?;
        }
    }

    #[test]
    fn unbounded_graph_board_regions(
        ops in prop::collection::vec(arb_op(6), 1..60),
    ) {
        let ring = AdjacencyGraph::from_links(
            6,
            &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3)],
        )
        .unwrap();
        let topology: Arc<dyn Topology> = Arc::new(ring);
        let mut state = growing(topology.clone(), None);
        let mut hash = 0u64;
        for op in &ops {
            run(&mut state, SiteType::Cell, op, &mut hash);
            check(&state, topology.as_ref(), hash)?;
        }
        prop_assert_eq!(hash, 0);
    }
}
