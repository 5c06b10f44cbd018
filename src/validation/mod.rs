//! Input validation for the first/last name fields.
//!
//! Field values arrive as `serde_json::Value`, the same shape a form binding
//! hands over. Anything that is not a JSON string is a contract violation and is
//! reported as [`InputTypeError`] rather than a `false`.

mod error;
mod validator;

pub use error::{Field, InputTypeError};
pub use validator::{has_valid_input, is_blank, is_valid_name};
