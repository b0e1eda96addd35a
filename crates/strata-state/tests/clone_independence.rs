use std::sync::Arc;

use strata_core::{ContainerId, HiddenField, ItemUpdate, SiteType};
use strata_state::{ContainerConfig, ContainerState, StateStore};
use strata_topology::{EdgeBehavior, Square4};
use strata_zobrist::KeyGenerator;

fn store() -> StateStore {
    let board = Arc::new(Square4::new(3, 3, EdgeBehavior::Absorb).unwrap());
    let config = ContainerConfig::new(ContainerId::PRIMARY, board)
        .max_height(2)
        .hidden_players(2)
        .growing(true);
    let keys = config.generate_keys(&mut KeyGenerator::new(5));
    let mut store = StateStore::new();
    store
        .insert_container(ContainerState::new(config, keys).unwrap())
        .unwrap();
    store
}

fn primary(s: &StateStore) -> &ContainerState {
    s.container(ContainerId::PRIMARY).unwrap()
}

#[test]
fn mutating_a_clone_leaves_the_original() {
    let mut original = store();
    original
        .add(ContainerId::PRIMARY, 4, &ItemUpdate::new(1, 1), SiteType::Cell)
        .unwrap();
    let snapshot_hash = original.hash();
    let snapshot_playable = primary(&original).playable_region().cloned();

    let mut clone = original.clone();
    clone
        .add(ContainerId::PRIMARY, 4, &ItemUpdate::new(2, 2), SiteType::Cell)
        .unwrap();
    clone
        .add(ContainerId::PRIMARY, 0, &ItemUpdate::new(1, 2), SiteType::Cell)
        .unwrap();
    clone
        .set_hidden(ContainerId::PRIMARY, 1, 4, 0, HiddenField::Who, true, SiteType::Cell)
        .unwrap();

    assert_eq!(original.hash(), snapshot_hash);
    assert_eq!(primary(&original).size_stack(4, SiteType::Cell), 1);
    assert!(primary(&original).is_empty(0, SiteType::Cell));
    assert!(!primary(&original).is_hidden(1, 4, 0, HiddenField::Who, SiteType::Cell));
    assert_eq!(primary(&original).playable_region().cloned(), snapshot_playable);
    assert!(original.verify_hash());

    assert_ne!(clone.hash(), snapshot_hash);
    assert!(clone.verify_hash());
}

#[test]
fn mutating_the_original_leaves_a_clone() {
    let mut original = store();
    original
        .add(ContainerId::PRIMARY, 2, &ItemUpdate::new(3, 1), SiteType::Edge)
        .unwrap();
    let clone = original.clone();
    original
        .remove_stack(ContainerId::PRIMARY, 2, SiteType::Edge)
        .unwrap();
    assert_eq!(primary(&clone).what(2, SiteType::Edge), 3);
    assert_eq!(original.hash(), 0);
    assert_ne!(clone.hash(), 0);
}

#[test]
fn clones_share_topology() {
    let original = store();
    let clone = original.clone();
    assert!(Arc::ptr_eq(primary(&original).topology(), primary(&clone).topology()));
}
