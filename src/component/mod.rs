//! The name list as mounted on a rendering surface.
//!
//! One [`NameListComponent`] owns the store, the draft fields, the filter text
//! and the selection for as long as it is mounted. Every input is handled to
//! completion and change listeners see the new [`RenderedView`] before the
//! call returns.

mod action;
mod listeners;
mod name_list;
mod render;

pub use action::Action;
pub use listeners::ChangeListeners;
pub use name_list::NameListComponent;
pub use render::RenderedView;
