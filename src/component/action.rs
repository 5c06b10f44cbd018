use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user input on the list, as delivered by the rendering surface.
///
/// Serialized form: `{"action": "set_first", "value": "John"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    SetFilter(String),
    SetFirst(Value),
    SetLast(Value),
    Select(String),
    Create,
    Update,
    Delete,
}

impl Action {
    /// Whether the action targets the store rather than a field.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Action::Create | Action::Update | Action::Delete)
    }
}
