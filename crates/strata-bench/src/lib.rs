//! Benchmark profiles and utilities for the Strata site-state store.
//!
//! - [`go_profile`]: 19x19 primary board, single-height piles, growing
//! - [`tower_profile`]: 8x8 primary board with tall bounded piles
//! - [`random_placements`]: deterministic placement script via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strata_core::{ContainerId, ItemUpdate};
use strata_state::{ContainerConfig, ContainerState};
use strata_topology::{EdgeBehavior, Square4};
use strata_zobrist::KeyGenerator;

/// Seed for key tables in every profile.
pub const KEY_SEED: u64 = 0xbe9c;

/// Build an empty primary container from `config`.
pub fn build(config: ContainerConfig) -> ContainerState {
    let keys = config.generate_keys(&mut KeyGenerator::new(KEY_SEED));
    match ContainerState::new(config, keys) {
        Ok(state) => state,
        Err(e) => panic!("benchmark profile rejected: {e}"),
    }
}

/// 19x19 board, one item per site, playable region maintained.
pub fn go_profile() -> ContainerState {
    let board = Arc::new(Square4::new(19, 19, EdgeBehavior::Absorb).unwrap());
    build(
        ContainerConfig::new(ContainerId::PRIMARY, board)
            .max_height(1)
            .growing(true),
    )
}

/// 8x8 board with piles up to `height` items.
pub fn tower_profile(height: usize) -> ContainerState {
    let board = Arc::new(Square4::new(8, 8, EdgeBehavior::Absorb).unwrap());
    build(ContainerConfig::new(ContainerId::PRIMARY, board).max_height(height))
}

/// `n` distinct cells out of `cell_count`, each with an owner in `1..=2`.
pub fn random_placements(cell_count: usize, n: usize, seed: u64) -> Vec<(usize, ItemUpdate)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells: Vec<usize> = (0..cell_count).collect();
    let n = n.min(cell_count);
    for i in 0..n {
        let j = rng.random_range(i..cell_count);
        cells.swap(i, j);
    }
    cells
        .into_iter()
        .take(n)
        .map(|cell| (cell, ItemUpdate::new(1, rng.random_range(1..=2))))
        .collect()
}
