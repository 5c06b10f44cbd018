use std::fmt;

use crate::config::ConfigError;
use crate::validation::InputTypeError;

/// Errors surfaced by the roster.
///
/// Rejected mutations (blank names, duplicates, no selection) are not errors;
/// they come back as `false` or `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    InputType(InputTypeError),
    Payload(String),
    Replay(String),
    Config(ConfigError),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::InputType(err) => write!(f, "invalid input: {}", err),
            RosterError::Payload(message) => write!(f, "payload error: {}", message),
            RosterError::Replay(message) => write!(f, "replay error: {}", message),
            RosterError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::InputType(err) => Some(err),
            RosterError::Config(err) => Some(err),
            RosterError::Payload(_) | RosterError::Replay(_) => None,
        }
    }
}

impl From<InputTypeError> for RosterError {
    fn from(err: InputTypeError) -> Self {
        RosterError::InputType(err)
    }
}

impl From<ConfigError> for RosterError {
    fn from(err: ConfigError) -> Self {
        RosterError::Config(err)
    }
}
