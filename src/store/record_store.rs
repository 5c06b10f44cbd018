use tracing::{debug, warn};

use crate::config::{default_seed, SeedName};
use crate::error::RosterError;
use crate::journal::{Change, Journal};
use crate::record::{format_display, Record, RecordId};
use crate::validation::is_valid_name;

/// Ordered, duplicate-free list of records.
///
/// Display strings are unique (case-sensitive exact match) at all times.
/// Every accepted mutation is appended to the store's [`Journal`].
#[derive(Clone, Debug)]
pub struct RecordStore {
    records: Vec<Record>,
    next_id: RecordId,
    journal: Journal,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// An empty store.
    pub fn new() -> Self {
        RecordStore {
            records: Vec::new(),
            next_id: RecordId(1),
            journal: Journal::new(),
        }
    }

    /// A store holding the three default names.
    pub fn seeded() -> Self {
        Self::with_seed(&default_seed())
    }

    /// A store holding `seed`, in order.
    ///
    /// Seeds that are blank or repeat an earlier seed are skipped. The seeding
    /// changes are journaled and marked committed.
    pub fn with_seed(seed: &[SeedName]) -> Self {
        let mut store = Self::new();
        for name in seed {
            if store.create(&name.first, &name.last).is_none() {
                warn!(
                    display = %format_display(&name.first, &name.last),
                    "skipping seed name"
                );
            }
        }
        store.journal.mark_committed();
        store
    }

    /// Rebuild a store from a journal.
    ///
    /// The rebuilt store has the same ids, order and names as the one that
    /// wrote the journal. Replaying does not journal anything new.
    pub fn replay(journal: &Journal) -> Result<Self, RosterError> {
        let mut store = Self::new();
        store.journal.load_from_history(journal.changes().to_vec());

        let records = &mut store.records;
        let next_id = &mut store.next_id;
        store
            .journal
            .rehydrate(|record| apply_change(records, next_id, record.change()?))?;

        Ok(store)
    }

    /// Append `"{last}, {first}"` unless it is blank or already present.
    pub fn create(&mut self, first: &str, last: &str) -> Option<RecordId> {
        if !is_valid_name(first, last) {
            debug!(reason = "blank", "create rejected");
            return None;
        }

        let candidate = format_display(first, last);
        if self.contains_display(&candidate) {
            debug!(reason = "duplicate", display = %candidate, "create rejected");
            return None;
        }

        let id = self.next_id;
        let Some(next_id) = id.checked_next() else {
            warn!(id = %id, "record ids exhausted");
            return None;
        };
        self.next_id = next_id;
        self.records.push(Record::new(id, first, last));
        self.journal.digest(&Change::Created {
            id: id.value(),
            first: first.to_string(),
            last: last.to_string(),
        });

        debug!(id = %id, display = %candidate, "record created");
        Some(id)
    }

    /// Rename the record `id` in place.
    ///
    /// Rejected when `id` is unknown, the new name is blank, or another record
    /// already shows the same display string.
    pub fn update(&mut self, id: RecordId, first: &str, last: &str) -> bool {
        let Some(position) = self.position(id) else {
            debug!(id = %id, reason = "unknown record", "update rejected");
            return false;
        };

        if !is_valid_name(first, last) {
            debug!(id = %id, reason = "blank", "update rejected");
            return false;
        }

        let candidate = format_display(first, last);
        let taken = self
            .records
            .iter()
            .any(|record| record.id() != id && record.display() == candidate);
        if taken {
            debug!(id = %id, reason = "duplicate", display = %candidate, "update rejected");
            return false;
        }

        self.records[position].rename(first, last);
        self.journal.digest(&Change::Updated {
            id: id.value(),
            first: first.to_string(),
            last: last.to_string(),
        });

        debug!(id = %id, display = %candidate, "record updated");
        true
    }

    /// Remove the record `id`.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let Some(position) = self.position(id) else {
            debug!(id = %id, reason = "unknown record", "delete rejected");
            return false;
        };

        let removed = self.records.remove(position);
        self.journal.digest(&Change::Deleted { id: id.value() });

        let shown = removed.display();
        debug!(id = %id, display = %shown, "record deleted");
        true
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn find_by_display(&self, display: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.display() == display)
    }

    pub fn contains_display(&self, display: &str) -> bool {
        self.find_by_display(display).is_some()
    }

    /// Display strings of every record, in store order.
    pub fn displays(&self) -> Vec<String> {
        self.records.iter().map(Record::display).collect()
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Mark every journaled change as seen.
    pub fn mark_committed(&mut self) {
        self.journal.mark_committed();
    }
}

fn apply_change(
    records: &mut Vec<Record>,
    next_id: &mut RecordId,
    change: Change,
) -> Result<(), RosterError> {
    match change {
        Change::Created { id, first, last } => {
            if records.iter().any(|record| record.id().value() == id) {
                return Err(RosterError::Replay(format!("record {} created twice", id)));
            }
            check_replayed_name(records, id, &first, &last)?;
            let id = RecordId(id);
            if id >= *next_id {
                *next_id = id
                    .checked_next()
                    .ok_or_else(|| RosterError::Replay("record id overflow".into()))?;
            }
            records.push(Record::new(id, first, last));
        }
        Change::Updated { id, first, last } => {
            check_replayed_name(records, id, &first, &last)?;
            let record = records
                .iter_mut()
                .find(|record| record.id().value() == id)
                .ok_or_else(|| RosterError::Replay(format!("update of unknown record {}", id)))?;
            record.rename(first, last);
        }
        Change::Deleted { id } => {
            let position = records
                .iter()
                .position(|record| record.id().value() == id)
                .ok_or_else(|| RosterError::Replay(format!("delete of unknown record {}", id)))?;
            records.remove(position);
        }
    }
    Ok(())
}

/// A replayed name must be non-blank and not shown by any record other than `id`.
fn check_replayed_name(
    records: &[Record],
    id: u64,
    first: &str,
    last: &str,
) -> Result<(), RosterError> {
    if !is_valid_name(first, last) {
        return Err(RosterError::Replay(format!("record {} has a blank name", id)));
    }
    let candidate = format_display(first, last);
    let taken = records
        .iter()
        .any(|record| record.id().value() != id && record.display() == candidate);
    if taken {
        return Err(RosterError::Replay(format!(
            "record {} duplicates \"{}\"",
            id, candidate
        )));
    }
    Ok(())
}
