use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
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

    pub fn get_position(&self) -> Position {
        self.position
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::InvalidDirective => "InvalidDirective",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidToken { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot appear here, did you miss a semicolon?",
                token
            )),
            ErrorImpl::InvalidDirective => ErrorTip::Suggestion(String::from(
                "a directive must be followed by a declaration",
            )),
            ErrorImpl::InvalidEscape { .. } => ErrorTip::Suggestion(String::from(
                "supported escapes are \\\\, \\r, \\n, \\t and \\\"",
            )),
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("invalid token: '{token}'")]
    InvalidToken { token: String },
    #[error("invalid directive")]
    InvalidDirective,
    #[error("invalid escape sequence: '\\{escape}'")]
    InvalidEscape { escape: char },
}
