use roster::{Change, Journal, RecordStore};

use crate::support::{mount, type_name};

#[test]
fn journals_accepted_changes_only() {
    let mut list = mount();
    let seeded = list.store().journal().version();

    type_name(&mut list, "Hans", "Emil");
    assert_eq!(list.create(), Ok(false));
    assert_eq!(list.store().journal().version(), seeded);

    type_name(&mut list, "John", "Doe");
    assert_eq!(list.create(), Ok(true));
    list.select("Doe, John");
    assert!(list.delete());

    let names: Vec<_> = list
        .store()
        .journal()
        .new_changes()
        .iter()
        .map(|record| record.change_name.as_str())
        .collect();
    assert_eq!(names, vec!["RecordCreated", "RecordDeleted"]);
}

#[test]
fn replay_rebuilds_the_list() {
    let mut list = mount();
    type_name(&mut list, "John", "Doe");
    list.create().unwrap();
    list.select("Mustermann, Max");
    type_name(&mut list, "Juan", "Perez");
    list.update().unwrap();

    let replayed = RecordStore::replay(list.store().journal()).unwrap();
    assert_eq!(replayed.records(), list.store().records());
}

#[test]
fn journal_survives_json() {
    let mut list = mount();
    type_name(&mut list, "John", "Doe");
    list.create().unwrap();

    let json = serde_json::to_string(list.store().journal()).unwrap();
    let journal: Journal = serde_json::from_str(&json).unwrap();
    let replayed = RecordStore::replay(&journal).unwrap();
    assert_eq!(replayed.displays(), list.store().displays());

    let last = journal.changes().last().unwrap().change().unwrap();
    assert!(matches!(last, Change::Created { ref first, .. } if first == "John"));
}
