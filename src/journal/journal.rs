use serde::{Deserialize, Serialize};

use super::{Change, ChangeRecord};

/// Ordered log of accepted changes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Journal {
    changes: Vec<ChangeRecord>,
    #[serde(skip, default)]
    replaying: bool,
    #[serde(skip, default)]
    committed_version: u64,
}

struct ReplayGuard<'a> {
    replaying: &'a mut bool,
}

impl<'a> ReplayGuard<'a> {
    fn new(replaying: &'a mut bool) -> Self {
        *replaying = true;
        ReplayGuard { replaying }
    }
}

impl Drop for ReplayGuard<'_> {
    fn drop(&mut self) {
        *self.replaying = false;
    }
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    /// Append a change. Ignored while replaying.
    pub fn digest(&mut self, change: &Change) {
        if self.replaying {
            return;
        }
        let sequence = self.changes.len() as u64 + 1;
        self.changes.push(ChangeRecord::from_change(change, sequence));
    }

    pub fn changes(&self) -> &[ChangeRecord] {
        &self.changes
    }

    pub fn version(&self) -> u64 {
        self.changes.len() as u64
    }

    pub fn committed_version(&self) -> u64 {
        self.committed_version
    }

    /// Changes appended since the last [`Journal::mark_committed`].
    pub fn new_changes(&self) -> &[ChangeRecord] {
        &self.changes[self.committed_version as usize..]
    }

    pub fn mark_committed(&mut self) {
        self.committed_version = self.version();
    }

    pub fn load_from_history(&mut self, history: Vec<ChangeRecord>) {
        self.changes = history;
        self.committed_version = self.version();
    }

    pub fn rehydrate<F, E>(&mut self, mut apply: F) -> Result<(), E>
    where
        F: FnMut(&ChangeRecord) -> Result<(), E>,
    {
        let _guard = ReplayGuard::new(&mut self.replaying);

        for change in &self.changes {
            apply(change)?;
        }

        Ok(())
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }
}
