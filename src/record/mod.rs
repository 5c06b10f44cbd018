mod display;
mod record;

pub use display::{format_display, split_display, DISPLAY_SEPARATOR};
pub use record::{Record, RecordId};
