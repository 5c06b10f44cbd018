use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A single accepted mutation of the record store.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode, Serialize, Deserialize)]
pub enum Change {
    Created { id: u64, first: String, last: String },
    Updated { id: u64, first: String, last: String },
    Deleted { id: u64 },
}

impl Change {
    pub fn name(&self) -> &'static str {
        match self {
            Change::Created { .. } => "RecordCreated",
            Change::Updated { .. } => "RecordUpdated",
            Change::Deleted { .. } => "RecordDeleted",
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Change::Created { id, .. } | Change::Updated { id, .. } | Change::Deleted { id } => {
                *id
            }
        }
    }
}
