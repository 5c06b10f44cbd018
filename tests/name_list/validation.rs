use roster::{has_valid_input, Field, RosterError};
use serde_json::{json, Value};

use crate::support::mount;

#[test]
fn validates_all_input() {
    let mut list = mount();
    assert_eq!(list.has_valid_input(), Ok(false));

    list.set_first("");
    list.set_last("Doe");
    assert_eq!(list.has_valid_input(), Ok(false));

    list.set_first("John");
    list.set_last("");
    assert_eq!(list.has_valid_input(), Ok(false));

    list.set_first(" ");
    list.set_last("        ");
    assert_eq!(list.has_valid_input(), Ok(false));

    list.set_first("John");
    list.set_last("Doe ");
    assert_eq!(list.has_valid_input(), Ok(true));
}

#[test]
fn errors_when_first_or_last_are_not_strings() {
    let mut list = mount();

    list.set_first(Value::Null);
    assert!(list.has_valid_input().is_err());

    list.set_first(1);
    assert!(list.has_valid_input().is_err());

    list.set_first("John");
    list.set_last(json!({}));
    match list.has_valid_input() {
        Err(RosterError::InputType(err)) => assert_eq!(err.field, Field::Last),
        other => panic!("expected an input type error, got {:?}", other),
    }
}

#[test]
fn predicate_is_independent_of_any_list() {
    assert_eq!(has_valid_input(&json!("John"), &json!("Doe ")), Ok(true));
    assert_eq!(has_valid_input(&json!(" "), &json!("        ")), Ok(false));
    assert!(has_valid_input(&Value::Null, &json!("Doe")).is_err());
    assert!(has_valid_input(&json!(1), &json!("Doe")).is_err());
    assert!(has_valid_input(&json!("John"), &json!({})).is_err());
}

#[test]
fn type_error_from_create_leaves_list_alone() {
    let mut list = mount();
    list.set_first("John");
    list.set_last(json!(["Doe"]));

    assert!(list.create().is_err());
    assert_eq!(list.store().len(), 3);
    assert_eq!(list.draft().last(), &json!(["Doe"]));
}
