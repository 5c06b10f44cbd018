use std::fmt;

use serde_json::Value;

/// Which draft field a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    First,
    Last,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::First => "first",
            Field::Last => "last",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name field held something other than a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputTypeError {
    pub field: Field,
    pub kind: &'static str,
}

impl InputTypeError {
    pub(crate) fn for_value(field: Field, value: &Value) -> Self {
        InputTypeError {
            field,
            kind: json_kind(value),
        }
    }
}

impl fmt::Display for InputTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} name to be a string, got {}",
            self.field, self.kind
        )
    }
}

impl std::error::Error for InputTypeError {}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
