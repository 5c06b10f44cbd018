use crate::support::mount;

#[test]
fn filters_names() {
    let mut list = mount();
    list.set_filter("Emil");
    assert_eq!(list.items(), vec!["Emil, Hans"]);
}

#[test]
fn shows_nothing_if_nothing_found() {
    let mut list = mount();
    list.set_filter("Alberto");
    assert!(list.items().is_empty());
}

#[test]
fn blank_filter_shows_everything_in_order() {
    let mut list = mount();
    let all = list.items();

    list.set_filter("   ");
    assert_eq!(list.items(), all);
    list.set_filter("");
    assert_eq!(list.items(), all);
}

#[test]
fn filter_does_not_touch_store() {
    let mut list = mount();
    list.set_filter("Teach");
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.store().len(), 3);
}

#[test]
fn filter_sees_new_records() {
    let mut list = mount();
    list.set_filter("Doe");
    assert!(list.items().is_empty());

    list.set_first("John");
    list.set_last("Doe");
    assert_eq!(list.create(), Ok(true));
    assert_eq!(list.items(), vec!["Doe, John"]);
}
