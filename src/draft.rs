use serde_json::Value;

use crate::record::{split_display, Record};
use crate::validation::{has_valid_input, InputTypeError};

/// The first/last name fields as bound to the form.
///
/// Values are kept raw, so a binding that writes a non-string is only caught
/// when the draft is validated.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftInput {
    first: Value,
    last: Value,
}

impl Default for DraftInput {
    fn default() -> Self {
        DraftInput {
            first: Value::String(String::new()),
            last: Value::String(String::new()),
        }
    }
}

impl DraftInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_first(&mut self, value: impl Into<Value>) {
        self.first = value.into();
    }

    pub fn set_last(&mut self, value: impl Into<Value>) {
        self.last = value.into();
    }

    pub fn first(&self) -> &Value {
        &self.first
    }

    pub fn last(&self) -> &Value {
        &self.last
    }

    pub fn first_str(&self) -> Option<&str> {
        self.first.as_str()
    }

    pub fn last_str(&self) -> Option<&str> {
        self.last.as_str()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Load the fields from a record's display string.
    pub fn fill_from(&mut self, record: &Record) {
        let display = record.display();
        let (last, first) = split_display(&display);
        self.first = Value::from(first);
        self.last = Value::from(last);
    }

    /// Validate both fields, returning them when they are usable.
    pub(crate) fn validated(&self) -> Result<Option<(&str, &str)>, InputTypeError> {
        if !has_valid_input(&self.first, &self.last)? {
            return Ok(None);
        }
        match (self.first.as_str(), self.last.as_str()) {
            (Some(first), Some(last)) => Ok(Some((first, last))),
            _ => Ok(None),
        }
    }
}
