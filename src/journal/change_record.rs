use std::time::SystemTime;

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Change;
use crate::error::RosterError;

/// A journaled change: name, bitcode payload, position and time.
///
/// In JSON the payload is a base64 string.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChangeRecord {
    pub change_name: String,
    #[serde(serialize_with = "to_base64", deserialize_with = "from_base64")]
    pub payload: Vec<u8>,
    pub sequence: u64,
    pub timestamp: SystemTime,
}

impl ChangeRecord {
    /// Encode a change into a record at the given sequence.
    pub fn from_change(change: &Change, sequence: u64) -> Self {
        ChangeRecord {
            change_name: change.name().to_string(),
            payload: bitcode::encode(change),
            sequence,
            timestamp: SystemTime::now(),
        }
    }

    pub fn change(&self) -> Result<Change, RosterError> {
        bitcode::decode(&self.payload).map_err(|e| {
            RosterError::Payload(format!("change {}: {}", self.sequence, e))
        })
    }
}

fn to_base64<S: Serializer>(payload: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(payload))
}

fn from_base64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(deserializer)?;
    STANDARD.decode(encoded).map_err(serde::de::Error::custom)
}
