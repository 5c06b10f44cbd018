use serde_json::Value;

use super::{Field, InputTypeError};

/// True when `value` is empty once leading and trailing whitespace is dropped.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Both name parts are non-blank.
///
/// Digits, symbols and inner whitespace are all accepted.
pub fn is_valid_name(first: &str, last: &str) -> bool {
    !is_blank(first) && !is_blank(last)
}

/// Validate raw field values for a create or update.
///
/// Returns `Err` if either value is not a string. The first field is checked
/// before the last one.
pub fn has_valid_input(first: &Value, last: &Value) -> Result<bool, InputTypeError> {
    let first = expect_str(Field::First, first)?;
    let last = expect_str(Field::Last, last)?;
    Ok(is_valid_name(first, last))
}

fn expect_str(field: Field, value: &Value) -> Result<&str, InputTypeError> {
    value
        .as_str()
        .ok_or_else(|| InputTypeError::for_value(field, value))
}
