use serde_json::json;

use crate::support::{mount, type_name};

#[test]
fn updates_a_name_in_place() {
    let mut list = mount();
    assert!(list.select("Mustermann, Max"));
    type_name(&mut list, "Juan", "Perez");
    assert_eq!(list.update(), Ok(true));

    assert_eq!(
        list.items(),
        vec!["Emil, Hans", "Perez, Juan", "Teach, Roman"]
    );
}

#[test]
fn selecting_fills_the_fields() {
    let mut list = mount();
    assert!(list.select("Teach, Roman"));
    assert_eq!(list.draft().first_str(), Some("Roman"));
    assert_eq!(list.draft().last_str(), Some("Teach"));
}

#[test]
fn keeps_fields_and_selection_after_update() {
    let mut list = mount();
    list.select("Mustermann, Max");
    type_name(&mut list, "Juan", "Perez");
    assert_eq!(list.update(), Ok(true));

    let view = list.render();
    assert_eq!(view.first, json!("Juan"));
    assert_eq!(view.last, json!("Perez"));
    assert_eq!(view.selected.as_deref(), Some("Perez, Juan"));
}

#[test]
fn no_selection_is_a_no_op() {
    let mut list = mount();
    type_name(&mut list, "Juan", "Perez");
    assert_eq!(list.update(), Ok(false));
    assert_eq!(list.store().len(), 3);
    assert!(!list.render().contains("Perez, Juan"));
}

#[test]
fn rejects_blank_names() {
    let mut list = mount();
    list.select("Mustermann, Max");
    type_name(&mut list, "Juan", "  ");
    assert_eq!(list.update(), Ok(false));
    assert!(list.render().contains("Mustermann, Max"));
}

#[test]
fn rejects_names_held_by_another_record() {
    let mut list = mount();
    list.select("Teach, Roman");
    type_name(&mut list, "Hans", "Emil");
    assert_eq!(list.update(), Ok(false));

    let view = list.render();
    assert_eq!(view.count_of("Emil, Hans"), 1);
    assert!(view.contains("Teach, Roman"));
}

#[test]
fn unknown_selection_leaves_previous_one() {
    let mut list = mount();
    list.select("Emil, Hans");
    assert!(!list.select("Nobody, Here"));
    assert_eq!(list.selected().map(|r| r.display()).as_deref(), Some("Emil, Hans"));
}
