use serde_json::json;

use crate::support::mount;

#[test]
fn deletes_a_name() {
    let mut list = mount();
    assert_eq!(list.items().len(), 3);

    assert!(list.select("Emil, Hans"));
    assert!(list.delete());

    let items = list.items();
    assert_eq!(items, vec!["Mustermann, Max", "Teach, Roman"]);
}

#[test]
fn deleted_name_leaves_filtered_view() {
    let mut list = mount();
    list.set_filter("Emil");
    list.select("Emil, Hans");
    assert!(list.delete());
    assert!(list.items().is_empty());
}

#[test]
fn clears_selection_and_fields() {
    let mut list = mount();
    list.select("Teach, Roman");
    assert!(list.delete());

    let view = list.render();
    assert_eq!(view.selected, None);
    assert_eq!(view.first, json!(""));
    assert_eq!(view.last, json!(""));
}

#[test]
fn no_selection_is_a_no_op() {
    let mut list = mount();
    assert!(!list.delete());
    assert_eq!(list.store().len(), 3);
}

#[test]
fn second_delete_does_nothing() {
    let mut list = mount();
    list.select("Emil, Hans");
    assert!(list.delete());
    assert!(!list.delete());
    assert_eq!(list.store().len(), 2);
}
