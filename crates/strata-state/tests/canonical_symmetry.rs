//! Canonical hashes under board symmetries.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_core::{ContainerId, ItemUpdate, SiteType};
use strata_state::{CanonicalRemap, ContainerConfig, ContainerState};
use strata_topology::{EdgeBehavior, Square4, Symmetry};
use strata_zobrist::{ContainerKeys, KeyGenerator};

struct Fixture {
    config: ContainerConfig,
    keys: Option<ContainerKeys>,
}

impl Fixture {
    fn new(rows: usize, cols: usize) -> Self {
        let board = Arc::new(Square4::new(rows, cols, EdgeBehavior::Absorb).unwrap());
        let config = ContainerConfig::new(ContainerId::PRIMARY, board).max_height(3);
        let keys = config.generate_keys(&mut KeyGenerator::new(0xface));
        Self { config, keys }
    }

    fn empty(&self) -> ContainerState {
        ContainerState::new(self.config.clone(), self.keys.clone()).unwrap()
    }
}

type Placement = (SiteType, usize, ItemUpdate);

fn random_position(state: &ContainerState, rng: &mut ChaCha8Rng, pieces: usize) -> Vec<Placement> {
    (0..pieces)
        .map(|_| {
            let kind = SiteType::ALL[rng.random_range(0..3)];
            let site = rng.random_range(0..state.site_count(kind));
            let item = ItemUpdate::new(rng.random_range(1..5), rng.random_range(0..3))
                .rotation(rng.random_range(0..4));
            (kind, site, item)
        })
        .collect()
}

fn play(state: &mut ContainerState, placements: &[Placement], sym: Option<&Symmetry>) {
    for &(kind, site, item) in placements {
        let target = sym.map_or(site, |s| s.remap(kind)[site]);
        // Full piles simply stay full in both positions.
        let _ = state.add(target, &item, kind);
    }
}

#[test]
fn rotated_position_hashes_to_canonical_hash() {
    let fixture = Fixture::new(4, 4);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let board = Square4::new(4, 4, EdgeBehavior::Absorb).unwrap();
    let symmetries = board.symmetries();
    assert_eq!(symmetries.len(), 8);

    for _ in 0..20 {
        let mut original = fixture.empty();
        let placements = random_position(&original, &mut rng, 12);
        play(&mut original, &placements, None);
        for sym in &symmetries {
            let mut moved = fixture.empty();
            play(&mut moved, &placements, Some(sym));
            let remap = CanonicalRemap::from(sym);
            assert_eq!(
                original.canonical_hash(&remap, false),
                moved.full_hash(),
                "{}",
                sym.name
            );
            assert_eq!(
                original.canonical_hash(&remap, true),
                moved.canonical_hash(&CanonicalRemap::identity(), true),
                "{} who-only",
                sym.name
            );
        }
    }
}

#[test]
fn symmetric_positions_share_min_canonical_hash() {
    let fixture = Fixture::new(3, 5);
    let board = Square4::new(3, 5, EdgeBehavior::Absorb).unwrap();
    let remaps: Vec<CanonicalRemap> = board.symmetries().iter().map(CanonicalRemap::from).collect();
    assert_eq!(remaps.len(), 4);

    let mut left = fixture.empty();
    left.add(board.cell(0, 0), &ItemUpdate::new(1, 1), SiteType::Cell)
        .unwrap();
    let mut right = fixture.empty();
    right
        .add(board.cell(2, 4), &ItemUpdate::new(1, 1), SiteType::Cell)
        .unwrap();
    assert_ne!(left.full_hash(), right.full_hash());
    assert_eq!(
        left.min_canonical_hash(&remaps, false),
        right.min_canonical_hash(&remaps, false)
    );
}

#[test]
fn player_swap_with_half_turn() {
    let fixture = Fixture::new(3, 3);
    let board = Square4::new(3, 3, EdgeBehavior::Absorb).unwrap();
    let half_turn = &board.symmetries()[1];
    assert_eq!(half_turn.name, "rot180");

    let mut original = fixture.empty();
    original
        .add(board.cell(0, 1), &ItemUpdate::new(2, 1), SiteType::Cell)
        .unwrap();
    let mut swapped = fixture.empty();
    swapped
        .add(half_turn.cells[board.cell(0, 1)], &ItemUpdate::new(2, 2), SiteType::Cell)
        .unwrap();

    let remap = CanonicalRemap::from(half_turn).with_players(vec![0, 2, 1]);
    assert_eq!(original.canonical_hash(&remap, false), swapped.full_hash());
}
