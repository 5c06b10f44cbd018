//! A "surname, firstname" list component.
//!
//! [`NameListComponent`] owns a seeded [`RecordStore`], the draft first/last
//! fields, a filter text and a [`Selection`]. Create, update and delete are
//! gated by [`has_valid_input`]; the visible list is a lazy [`FilterView`] over
//! the store.
//!
//! ```
//! use roster::{NameListComponent, RosterError};
//!
//! # fn main() -> Result<(), RosterError> {
//! let mut list = NameListComponent::mount();
//! list.set_first("John");
//! list.set_last("Doe");
//! assert!(list.create()?);
//! list.set_filter("Doe");
//! assert_eq!(list.items(), vec!["Doe, John"]);
//! # Ok(())
//! # }
//! ```

mod component;
mod config;
mod draft;
mod error;
mod filter;
mod journal;
mod record;
mod selection;
mod store;
mod validation;

pub use component::{Action, ChangeListeners, NameListComponent, RenderedView};
pub use config::{default_seed, ConfigError, RosterConfig, SeedName};
pub use draft::DraftInput;
pub use error::RosterError;
pub use filter::{filtered, matches, FilterView};
pub use journal::{Change, ChangeRecord, Journal};
pub use record::{format_display, split_display, Record, RecordId, DISPLAY_SEPARATOR};
pub use selection::Selection;
pub use store::RecordStore;
pub use validation::{has_valid_input, is_blank, is_valid_name, Field, InputTypeError};
