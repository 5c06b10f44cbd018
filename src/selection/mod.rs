use crate::record::{Record, RecordId};
use crate::store::RecordStore;

/// The record targeted by update and delete.
///
/// Only holds the id. If the record goes away the selection resolves to
/// nothing rather than being cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    id: Option<RecordId>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    pub fn select(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    /// Select the record showing exactly `display`. Leaves the selection alone
    /// and returns `None` when no record matches.
    pub fn select_display<'a>(
        &mut self,
        store: &'a RecordStore,
        display: &str,
    ) -> Option<&'a Record> {
        let record = store.find_by_display(display)?;
        self.id = Some(record.id());
        Some(record)
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }

    /// The selected record, if it still exists.
    pub fn resolve<'a>(&self, store: &'a RecordStore) -> Option<&'a Record> {
        self.id.and_then(|id| store.get(id))
    }
}
