use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at offset {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedStructure { .. } => "UnterminatedStructure",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedStructure { open, close } => ErrorTip::Suggestion(format!(
                "`{}` is never closed, expected a matching `{}`",
                open, close
            )),
            ErrorImpl::InvalidIdentifier { character: Some(character) } => {
                ErrorTip::Suggestion(format!("Variable cannot start with `{}`", character))
            }
            ErrorImpl::InvalidIdentifier { character: None } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("{open:?} is not closed, expected {close:?}")]
    UnterminatedStructure { open: char, close: char },
    #[error("variable cannot start with {character:?}")]
    InvalidIdentifier { character: Option<char> },
}
