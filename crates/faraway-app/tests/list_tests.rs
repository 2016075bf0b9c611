// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use faraway_app::{
    AddItemForm, AppCommand, AppEvent, AppState, ItemId, PackingList, PackingStats, SortOrder,
};
use faraway_testkit::{TripFaker, descriptions, item_ids, list_with_packed};
use std::collections::BTreeSet;

#[test]
fn seed_session_walkthrough() {
    let list = PackingList::seeded();

    let list = list.add("Sunscreen", 1);
    assert_eq!(list.len(), 3);
    assert_eq!(list.items()[2].id, ItemId::new(3));

    let list = list.toggle(ItemId::new(1));
    assert!(list.get(ItemId::new(1)).is_some_and(|item| item.packed));
    assert_eq!(
        list.stats(),
        PackingStats {
            total: 3,
            packed: 1,
            all_packed: false,
        }
    );

    let list = list.remove(ItemId::new(2));
    assert_eq!(list.len(), 2);

    let list = list.clear();
    assert_eq!(list.len(), 0);
}

#[test]
fn app_state_walkthrough_matches_list_operations() {
    let mut state = AppState::default();

    state.dispatch(AppCommand::OpenAddForm);
    let rejected = state.dispatch(AppCommand::SubmitAdd(AddItemForm::default()));
    assert!(matches!(rejected.first(), Some(AppEvent::AddRejected(_))));
    assert_eq!(state.list.len(), 2);

    state.dispatch(AppCommand::SubmitAdd(AddItemForm::new("Sunscreen", 1)));
    state.dispatch(AppCommand::Toggle(ItemId::new(1)));
    assert_eq!(state.list.stats().packed, 1);

    state.dispatch(AppCommand::Remove(ItemId::new(2)));
    assert_eq!(
        item_ids(&state.list),
        vec![ItemId::new(1), ItemId::new(3)]
    );

    state.dispatch(AppCommand::Clear);
    assert!(state.list.is_empty());
}

#[test]
fn ids_stay_unique_across_removals_and_additions() {
    let mut faker = TripFaker::new(11);
    let mut list = faker.packing_list(8);
    for round in 0..20_u64 {
        let victim = ItemId::new(1 + round % 8);
        list = list.remove(victim).add(faker.description(), faker.quantity());
        let ids = item_ids(&list);
        let unique = ids.iter().collect::<BTreeSet<_>>();
        assert_eq!(unique.len(), ids.len(), "round {round}");
    }
}

#[test]
fn toggle_is_its_own_inverse_for_generated_lists() {
    for seed in 1..10 {
        let list = TripFaker::new(seed).packing_list(12);
        for id in (1..=14).map(ItemId::new) {
            assert_eq!(list.toggle(id).toggle(id), list, "seed {seed} id {id}");
        }
    }
}

#[test]
fn remove_changes_length_only_for_present_ids() {
    let list = TripFaker::new(5).packing_list(6);
    for id in (1..=8).map(ItemId::new) {
        let expected = if list.get(id).is_some() {
            list.len() - 1
        } else {
            list.len()
        };
        assert_eq!(list.remove(id).len(), expected, "id {id}");
    }
}

#[test]
fn description_sort_is_idempotent() {
    for seed in 1..10 {
        let once = TripFaker::new(seed)
            .packing_list(15)
            .reorder(SortOrder::Description);
        assert_eq!(once.reorder(SortOrder::Description), once, "seed {seed}");
    }
}

#[test]
fn packed_sort_groups_and_preserves_relative_order() {
    let list = TripFaker::new(21).packing_list(25);
    let sorted = list.reorder(SortOrder::Packed);

    let boundary = sorted
        .items()
        .iter()
        .position(|item| item.packed)
        .unwrap_or(sorted.len());
    assert!(sorted.items()[..boundary].iter().all(|item| !item.packed));
    assert!(sorted.items()[boundary..].iter().all(|item| item.packed));

    for packed in [false, true] {
        let before = list
            .items()
            .iter()
            .filter(|item| item.packed == packed)
            .map(|item| item.id)
            .collect::<Vec<_>>();
        let after = sorted
            .items()
            .iter()
            .filter(|item| item.packed == packed)
            .map(|item| item.id)
            .collect::<Vec<_>>();
        assert_eq!(before, after);
    }
}

#[test]
fn input_sort_undoes_other_sorts() {
    let list = TripFaker::new(8).packing_list(10);
    for order in [SortOrder::Description, SortOrder::Packed] {
        assert_eq!(list.reorder(order).reorder(SortOrder::Input), list);
    }
}

#[test]
fn stats_match_packed_flags() {
    let list = list_with_packed(&[true, false, true]);
    assert_eq!(
        list.stats(),
        PackingStats {
            total: 3,
            packed: 2,
            all_packed: false,
        }
    );
    assert_eq!(descriptions(&list.clear()), Vec::<String>::new());
    assert_eq!(list.clear().stats(), PackingStats::default());
}
