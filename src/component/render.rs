use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the rendering surface shows after an input has been handled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedView {
    pub filter: String,
    pub first: Value,
    pub last: Value,
    pub selected: Option<String>,
    pub items: Vec<String>,
}

impl RenderedView {
    pub fn contains(&self, display: &str) -> bool {
        self.items.iter().any(|item| item == display)
    }

    pub fn count_of(&self, display: &str) -> usize {
        self.items.iter().filter(|item| *item == display).count()
    }
}
