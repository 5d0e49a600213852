use std::fmt;

use thiserror::Error;

/// The reason a wildcard expression was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// A `?` is immediately followed by a `*`.
    QuestionMarkBeforeAsterisk,
    /// A character other than a word character, whitespace, `*` or `?` is present.
    IllegalCharacters,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuestionMarkBeforeAsterisk => "questionmark before asterisk",
            Self::IllegalCharacters => "illegal characters",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned when a wildcard expression fails validation.
///
/// Carries the offending expression exactly as it was supplied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid wildcard expression {text:?}: {reason}")]
pub struct ValidationError {
    text: String,
    reason: Reason,
}

impl ValidationError {
    pub fn new(text: impl Into<String>, reason: Reason) -> Self {
        Self {
            text: text.into(),
            reason,
        }
    }

    /// The rejected expression.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// Consumes the error and returns the rejected expression.
    pub fn into_text(self) -> String {
        self.text
    }
}
