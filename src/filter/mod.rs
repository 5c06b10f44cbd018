mod view;

pub use view::{filtered, matches, FilterView};
