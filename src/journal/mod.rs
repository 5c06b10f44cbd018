//! Change journal: an append-only record of every accepted store mutation.
//!
//! The journal lives and dies with its store. It exists so a store can be
//! rebuilt by replay and so callers can see what changed since they last looked.

mod change;
mod change_record;
mod journal;

pub use change::Change;
pub use change_record::ChangeRecord;
pub use journal::Journal;
