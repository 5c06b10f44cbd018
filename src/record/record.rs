use std::fmt;

use serde::{Deserialize, Serialize};

use super::format_display;

/// Store-generated identifier of a record.
///
/// Ids are handed out in increasing order and never reused by the store that
/// issued them, so two records never share one even while a rename makes their
/// display strings collide transiently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl RecordId {
    pub fn value(self) -> u64 {
        self.0
    }

    /// The id after this one, or `None` once ids are exhausted.
    pub(crate) fn checked_next(self) -> Option<RecordId> {
        self.0.checked_add(1).map(RecordId)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record-{}", self.0)
    }
}

/// One "Last, First" entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    first: String,
    last: String,
}

impl Record {
    pub fn new(id: RecordId, first: impl Into<String>, last: impl Into<String>) -> Self {
        Record {
            id,
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// The `"{last}, {first}"` string shown in the list.
    pub fn display(&self) -> String {
        format_display(&self.first, &self.last)
    }

    pub(crate) fn rename(&mut self, first: impl Into<String>, last: impl Into<String>) {
        self.first = first.into();
        self.last = last.into();
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
