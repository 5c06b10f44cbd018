use serde_json::Value;
use tracing::{debug, warn};

use super::{Action, ChangeListeners, RenderedView};
use crate::config::RosterConfig;
use crate::draft::DraftInput;
use crate::error::RosterError;
use crate::filter::{filtered, FilterView};
use crate::record::{Record, RecordId};
use crate::selection::Selection;
use crate::store::RecordStore;

/// A mounted name list.
///
/// Successful create clears the draft. Update keeps the draft and the selection,
/// which follows the renamed record. Delete clears both, since the fields were
/// showing the record that is gone. Rejected mutations leave everything as it was.
#[derive(Debug)]
pub struct NameListComponent {
    store: RecordStore,
    draft: DraftInput,
    filter: String,
    selection: Selection,
    listeners: ChangeListeners,
}

impl NameListComponent {
    /// Mount with the default seed names.
    pub fn mount() -> Self {
        Self::mount_with(&RosterConfig::default())
    }

    pub fn mount_with(config: &RosterConfig) -> Self {
        NameListComponent {
            store: RecordStore::with_seed(&config.seed),
            draft: DraftInput::new(),
            filter: String::new(),
            selection: Selection::new(),
            listeners: ChangeListeners::new(),
        }
    }

    /// Register a callback run after every accepted change.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(&RenderedView) + 'static,
    {
        self.listeners.on(listener);
    }

    /// Handle one input to completion.
    ///
    /// Field edits always report `true`; store mutations report whether they
    /// were accepted.
    pub fn dispatch(&mut self, action: Action) -> Result<bool, RosterError> {
        match action {
            Action::SetFilter(text) => {
                self.set_filter(text);
                Ok(true)
            }
            Action::SetFirst(value) => {
                self.set_first(value);
                Ok(true)
            }
            Action::SetLast(value) => {
                self.set_last(value);
                Ok(true)
            }
            Action::Select(display) => Ok(self.select(&display)),
            Action::Create => self.create(),
            Action::Update => self.update(),
            Action::Delete => Ok(self.delete()),
        }
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.changed();
    }

    pub fn set_first(&mut self, value: impl Into<Value>) {
        self.draft.set_first(value);
        self.changed();
    }

    pub fn set_last(&mut self, value: impl Into<Value>) {
        self.draft.set_last(value);
        self.changed();
    }

    /// Pick the record showing `display` and load it into the draft fields.
    pub fn select(&mut self, wanted: &str) -> bool {
        match self.selection.select_display(&self.store, wanted) {
            Some(record) => {
                self.draft.fill_from(record);
                self.changed();
                true
            }
            None => {
                debug!(display = wanted, "no record to select");
                false
            }
        }
    }

    /// Validate the draft fields against their raw values.
    pub fn has_valid_input(&self) -> Result<bool, RosterError> {
        Ok(self.draft.validated()?.is_some())
    }

    pub fn create(&mut self) -> Result<bool, RosterError> {
        let Some((first, last)) = self.draft.validated()? else {
            return Ok(false);
        };
        if self.store.create(first, last).is_none() {
            return Ok(false);
        }

        self.draft.clear();
        self.changed();
        Ok(true)
    }

    pub fn update(&mut self) -> Result<bool, RosterError> {
        let Some((first, last)) = self.draft.validated()? else {
            return Ok(false);
        };
        let Some(id) = self.live_selection() else {
            return Ok(false);
        };
        if !self.store.update(id, first, last) {
            return Ok(false);
        }

        self.changed();
        Ok(true)
    }

    pub fn delete(&mut self) -> bool {
        let Some(id) = self.live_selection() else {
            return false;
        };
        if !self.store.delete(id) {
            return false;
        }

        self.selection.clear();
        self.draft.clear();
        self.changed();
        true
    }

    /// Display strings currently shown, after filtering.
    pub fn items(&self) -> Vec<String> {
        self.filtered().displays()
    }

    pub fn filtered(&self) -> FilterView<'_> {
        filtered(self.store.records(), &self.filter)
    }

    pub fn render(&self) -> RenderedView {
        RenderedView {
            filter: self.filter.clone(),
            first: self.draft.first().clone(),
            last: self.draft.last().clone(),
            selected: self.selected().map(Record::display),
            items: self.items(),
        }
    }

    pub fn selected(&self) -> Option<&Record> {
        self.selection.resolve(&self.store)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn draft(&self) -> &DraftInput {
        &self.draft
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    fn live_selection(&self) -> Option<RecordId> {
        let Some(id) = self.selection.id() else {
            debug!(reason = "no selection", "mutation rejected");
            return None;
        };
        if self.store.get(id).is_none() {
            warn!(id = %id, "selected record no longer exists");
            return None;
        }
        Some(id)
    }

    fn changed(&self) {
        if self.listeners.is_empty() {
            return;
        }
        self.listeners.emit(&self.render());
    }
}
